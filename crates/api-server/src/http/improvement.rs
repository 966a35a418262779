use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use shared::models::ImproveResponse;
use shared::responders::{benchmark, improvement};
use tracing::info;

use super::AppState;
use super::errors::store_error_response;

pub(super) async fn run_improvement(State(state): State<AppState>) -> Response {
    let now = Utc::now();
    let run = improvement::run_empirical_improvement(now);
    if let Err(err) = state.store.mark_improvement_run(now) {
        return store_error_response(err);
    }
    info!(process = %run.process, stages = run.stages.len(), "improvement run recorded");

    (
        StatusCode::OK,
        Json(ImproveResponse {
            success: true,
            result: run,
            timestamp: now,
        }),
    )
        .into_response()
}

pub(super) async fn benchmark_report() -> Response {
    (StatusCode::OK, Json(benchmark::benchmark_report())).into_response()
}
