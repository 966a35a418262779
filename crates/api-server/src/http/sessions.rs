use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use shared::SERVICE_VERSION;
use shared::models::{CreateSessionResponse, ListSessionsResponse, SessionDetailResponse};
use tracing::info;

use super::AppState;
use super::errors::{not_found_response, store_error_response};
use super::observability::tag_session;

pub(super) async fn list_sessions(State(state): State<AppState>) -> Response {
    let sessions = match state.store.session_ids() {
        Ok(sessions) => sessions,
        Err(err) => return store_error_response(err),
    };

    (
        StatusCode::OK,
        Json(ListSessionsResponse {
            total_sessions: sessions.len(),
            sessions,
            current_version: SERVICE_VERSION.to_string(),
        }),
    )
        .into_response()
}

pub(super) async fn create_session(State(state): State<AppState>) -> Response {
    let session = match state.store.create_session(Utc::now()) {
        Ok(session) => session,
        Err(err) => return store_error_response(err),
    };
    info!(session_id = %session.session_id, "chat session created");

    let tag = session.session_id.clone();
    let response = (
        StatusCode::OK,
        Json(CreateSessionResponse {
            session_id: session.session_id,
            created: session.created_at,
            status: "active".to_string(),
        }),
    )
        .into_response();
    tag_session(response, &tag)
}

pub(super) async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session = match state.store.session(&session_id) {
        Ok(Some(session)) => session,
        Ok(None) => return not_found_response("Session not found"),
        Err(err) => return store_error_response(err),
    };

    let session_id = session.session_id.clone();
    let messages = session.into_entries();
    let response = (
        StatusCode::OK,
        Json(SessionDetailResponse {
            session_id: session_id.clone(),
            message_count: messages.len(),
            messages,
        }),
    )
        .into_response();
    tag_session(response, &session_id)
}
