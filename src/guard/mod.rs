use actix_web::http::header::{HeaderMap, USER_AGENT};
use log::{info, warn};

// Request screening ahead of the chat endpoint. Only checks that the client identified itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct AegisGuard;

impl AegisGuard {
    pub fn new() -> Self {
        Self
    }

    /// Returns `false` when the request carries no usable `User-Agent`.
    /// An empty header value counts as missing.
    pub fn check_request(&self, origin: &str, headers: &HeaderMap) -> bool {
        let has_agent = headers
            .get(USER_AGENT)
            .map(|value| !value.is_empty())
            .unwrap_or(false);

        if !has_agent {
            warn!("AegisGuard blocked request from {}: missing User-Agent", origin);
            return false;
        }

        info!("AegisGuard allowed request from {}", origin);
        true
    }
}
