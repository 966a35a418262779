use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{Duration, Utc};
use shared::models::HealthResponse;

use super::AppState;
use super::errors::store_error_response;

pub(super) async fn health(State(state): State<AppState>) -> Response {
    let status = match state.store.status() {
        Ok(status) => status,
        Err(err) => return store_error_response(err),
    };

    let now = Utc::now();
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: now,
            version: status.version,
            uptime: format_uptime(now - status.started_at),
            requests: status.requests_processed,
        }),
    )
        .into_response()
}

pub(super) async fn system_status(State(state): State<AppState>) -> Response {
    match state.store.status() {
        Ok(status) => (StatusCode::OK, Json(status)).into_response(),
        Err(err) => store_error_response(err),
    }
}

/// `H:MM:SS`; hours are not wrapped at 24.
fn format_uptime(uptime: Duration) -> String {
    let total_seconds = uptime.num_seconds().max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours}:{minutes:02}:{seconds:02}")
}
