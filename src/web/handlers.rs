use actix_web::{web, HttpRequest, HttpResponse, Responder};
use tera::Context;
use log::{info, debug, error};

use crate::model::Tier;
use crate::web::models::{ChatRequest, ChatResponse, ErrorResponse};
use crate::AppState;

pub const BLOCKED_MESSAGE: &str = "Access denied by AegisGuard: request blocked.";
pub const EMPTY_PROMPT: &str = "Please enter a message.";
pub const HEALTH_TEXT: &str = "System Operational";

// Index page handler
pub async fn index(data: web::Data<AppState>) -> impl Responder {
    let mut context = Context::new();
    let tiers: Vec<String> = Tier::ALL.iter().map(ToString::to_string).collect();
    context.insert("tiers", &tiers);

    match data.tera.render("index.html", &context) {
        Ok(html) => HttpResponse::Ok().content_type("text/html").body(html),
        Err(e) => {
            error!("Template error: {}", e);
            HttpResponse::InternalServerError().body("Template error")
        }
    }
}

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(HEALTH_TEXT)
}

// Chat API endpoint. The guard runs before the body is parsed.
pub async fn chat(
    data: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> impl Responder {
    let origin = req
        .connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string();

    if !data.guard.check_request(&origin, req.headers()) {
        return HttpResponse::Forbidden().json(ChatResponse {
            response: BLOCKED_MESSAGE.to_string(),
        });
    }

    let chat_req = if body.iter().all(u8::is_ascii_whitespace) {
        ChatRequest::default()
    } else {
        match serde_json::from_slice::<ChatRequest>(&body) {
            Ok(parsed) => parsed,
            Err(e) => {
                error!("Rejected chat body from {}: {}", origin, e);
                return HttpResponse::BadRequest().json(ErrorResponse {
                    error: format!("Invalid JSON body: {}", e),
                });
            }
        }
    };

    if chat_req.message.is_empty() {
        return HttpResponse::Ok().json(ChatResponse {
            response: EMPTY_PROMPT.to_string(),
        });
    }

    info!("Chat request from {} on tier '{}'", origin, chat_req.tier);
    debug!("Message: {}", chat_req.message);

    let response = data.papi.generate_response(&chat_req.message, &chat_req.tier);

    // Unknown tiers still answer 200; the error lives in the body.
    HttpResponse::Ok().json(ChatResponse { response })
}
