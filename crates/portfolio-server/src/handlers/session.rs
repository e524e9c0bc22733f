use actix_web::{web, HttpResponse, Responder};
use portfolio_core::Message;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct NewSessionResponse {
    pub session_id: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub session_id: String,
    pub message_count: usize,
    pub history: Vec<Message>,
}

pub async fn create(state: web::Data<AppState>) -> impl Responder {
    let session_id = state.sessions.create().await;
    log::info!("[{}] New conversation session created", session_id);

    HttpResponse::Ok().json(NewSessionResponse {
        session_id,
        message: "New conversation session created".to_string(),
    })
}

pub async fn history(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let session_id = path.into_inner();

    match state.sessions.get(&session_id).await {
        Some(session) => HttpResponse::Ok().json(HistoryResponse {
            message_count: session.message_count(),
            history: session.messages,
            session_id,
        }),
        None => HttpResponse::Ok().json(serde_json::json!({
            "error": "Session not found"
        })),
    }
}
