use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Router, middleware};
use shared::llm::UpstreamBridge;
use shared::store::Store;
use tower_http::cors::CorsLayer;

mod chat;
mod errors;
mod generate;
mod health;
mod improvement;
mod observability;
mod payload;
mod sessions;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    /// `None` when no provider key is configured.
    pub upstream: Option<Arc<dyn UpstreamBridge>>,
    pub independent_mode: bool,
}

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/status", get(health::system_status))
        .route("/api/chat", post(chat::chat))
        .route("/api/generate", post(generate::generate_component))
        .route("/api/improve", post(improvement::run_improvement))
        .route("/api/benchmark", get(improvement::benchmark_report))
        .route(
            "/api/sessions",
            get(sessions::list_sessions).post(sessions::create_session),
        )
        .route("/api/sessions/{session_id}", get(sessions::get_session))
        .fallback(errors::route_not_found)
        .layer(middleware::from_fn(
            observability::request_observability_middleware,
        ))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
