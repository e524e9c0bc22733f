use actix_web::{HttpResponse, Responder};
use portfolio_core::Mode;
use serde_json::{json, Map, Value};

pub const API_VERSION: &str = "0.4.0";

pub fn descriptor() -> Value {
    let modes: Map<String, Value> = Mode::catalogue()
        .into_iter()
        .map(|(name, description)| (name.to_string(), Value::from(description)))
        .collect();

    json!({
        "message": "Gemini Portfolio Q&A API with Multi-Mode Responses",
        "version": API_VERSION,
        "features": ["conversation_memory", "response_modes", "logging", "analytics"],
        "response_modes": modes,
        "endpoints": {
            "ask": "/ask",
            "stats": "/stats",
            "new_session": "/session/new",
            "get_history": "/session/{session_id}",
        }
    })
}

pub async fn handler() -> impl Responder {
    HttpResponse::Ok().json(descriptor())
}
