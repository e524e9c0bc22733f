use actix_web::{web, HttpResponse, Responder};
use portfolio_metrics::InteractionStats;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub interactions: InteractionStats,
    pub active_conversations: usize,
}

pub async fn handler(state: web::Data<AppState>) -> impl Responder {
    let interactions = state.interaction_log.stats().await;
    let active_conversations = state.sessions.len().await;

    HttpResponse::Ok().json(StatsResponse {
        interactions,
        active_conversations,
    })
}
