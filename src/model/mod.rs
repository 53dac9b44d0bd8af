use std::fmt;
use std::str::FromStr;
use log::debug;

pub const FREE_GREETING: &str =
    "Hello! I'm PAPI, your AI assistant. Upgrade your tier to unlock more features.";
pub const FREE_FALLBACK: &str =
    "PAPI Free: I can only handle simple greetings. Upgrade to Standard or Pro for more.";
pub const STANDARD_SCHEDULE: &str =
    "PAPI Standard: Here is your plan. Monday: research. Wednesday: build. Friday: review.";
pub const STANDARD_FALLBACK: &str =
    "PAPI Standard: Ask me to plan something and I'll draft a schedule for you.";
pub const INVALID_TIER: &str = "Error: Invalid tier selected.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Free,
    Standard,
    Pro,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Free, Tier::Standard, Tier::Pro];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTier(pub String);

impl fmt::Display for UnknownTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tier: {}", self.0)
    }
}

impl std::error::Error for UnknownTier {}

impl FromStr for Tier {
    type Err = UnknownTier;

    // Labels are matched exactly; "Free" is not "free".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(Tier::Free),
            "standard" => Ok(Tier::Standard),
            "pro" => Ok(Tier::Pro),
            other => Err(UnknownTier(other.to_string())),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tier::Free => "free",
            Tier::Standard => "standard",
            Tier::Pro => "pro",
        };
        f.write_str(label)
    }
}

// Canned-response engine. Holds no state, so one instance is shared by every worker.
#[derive(Debug, Clone, Copy, Default)]
pub struct Papi;

impl Papi {
    pub fn new() -> Self {
        Self
    }

    /// Picks the canned reply for `message` under the given tier label.
    ///
    /// Keyword checks run against a lowercased copy of the message; the Pro
    /// reply embeds the message exactly as received. Unknown tiers produce
    /// [`INVALID_TIER`] rather than an error.
    pub fn generate_response(&self, message: &str, tier: &str) -> String {
        let normalized = message.to_lowercase();

        match tier.parse::<Tier>() {
            Ok(Tier::Free) => {
                if normalized.contains("hello") {
                    FREE_GREETING.to_string()
                } else {
                    FREE_FALLBACK.to_string()
                }
            }
            Ok(Tier::Standard) => {
                if normalized.contains("plan") {
                    STANDARD_SCHEDULE.to_string()
                } else {
                    STANDARD_FALLBACK.to_string()
                }
            }
            Ok(Tier::Pro) => format!(
                "PAPI Pro: Deep analysis complete for your request: \"{}\". Full strategic breakdown is ready.",
                message
            ),
            Err(e) => {
                debug!("Dispatch fell through: {}", e);
                INVALID_TIER.to_string()
            }
        }
    }
}
