use actix_web::{web, HttpResponse, Responder};

use crate::orchestrator::AskRequest;
use crate::state::AppState;

/// Always answers 200; failures are reported through the `error` field.
pub async fn handler(state: web::Data<AppState>, req: web::Json<AskRequest>) -> impl Responder {
    let outcome = state.orchestrator.ask(req.into_inner()).await;
    HttpResponse::Ok().json(outcome)
}
