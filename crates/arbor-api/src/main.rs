use std::env;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let addr = env::var("ARBOR_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let state = AppState::new();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        // Protocols: public catalog data
        .route("/protocols", get(routes::protocols::list_protocols))
        .route(
            "/protocols/{id}",
            get(routes::protocols::get_protocol_detail),
        )
        // Sessions
        .route("/sessions", post(routes::sessions::create_session))
        .route(
            "/sessions/{id}/responses",
            post(routes::sessions::record_response),
        )
        .route("/sessions/{id}/summary", get(routes::sessions::get_summary))
        .route(
            "/sessions/{id}/advance",
            post(routes::sessions::advance_domain),
        )
        .route(
            "/sessions/{id}/finalize",
            post(routes::sessions::finalize_session),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
