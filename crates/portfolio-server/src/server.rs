use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use std::io;

use crate::handlers;
use crate::state::{AppState, ServerConfig};

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::root::handler))
        .route("/stats", web::get().to(handlers::stats::handler))
        .route("/session/new", web::post().to(handlers::session::create))
        .route(
            "/session/{session_id}",
            web::get().to(handlers::session::history),
        )
        .route("/ask", web::post().to(handlers::ask::handler));
}

pub async fn run_server_with_config(config: ServerConfig) -> io::Result<()> {
    log::info!(
        "Initializing server with model: {}, base URL: {}",
        config.model,
        config.base_url
    );
    let state = web::Data::new(AppState::new_with_config(&config).await?);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Cors::permissive())
            .configure(app_config)
    })
    .bind(format!("0.0.0.0:{}", config.port))?
    .run()
    .await
}
