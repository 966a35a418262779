use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde_json::Value;
use shared::models::{ChatRequest, ChatResponse};
use shared::responders::{Tool, chat};
use shared::store::{DEFAULT_SESSION_ID, NewChatEntry};
use tracing::{debug, warn};

use super::AppState;
use super::errors::{invalid_input_response, store_error_response};
use super::observability::{RequestContext, tag_session};
use super::payload::decode_object;

const DEFAULT_TOOL: &str = "chat";

pub(super) async fn chat(
    State(state): State<AppState>,
    Extension(request_context): Extension<RequestContext>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let request: ChatRequest = match decode_object(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };
    let Some(message) = request.message else {
        return invalid_input_response("Message is required");
    };

    if let Err(err) = state.store.record_request() {
        return store_error_response(err);
    }

    let mode = request
        .context
        .and_then(|context| context.tool)
        .map(|tool| tool.trim().to_ascii_lowercase())
        .filter(|tool| !tool.is_empty())
        .unwrap_or_else(|| DEFAULT_TOOL.to_string());
    let session_id = request
        .session_id
        .map(|session_id| session_id.trim().to_string())
        .filter(|session_id| !session_id.is_empty())
        .unwrap_or_else(|| DEFAULT_SESSION_ID.to_string());

    let tool = Tool::from_name(&mode);
    let response = generate_response(&state, tool, &message, &request_context).await;

    let now = Utc::now();
    let entry = NewChatEntry {
        input: message,
        output: response.clone(),
        mode: mode.clone(),
    };
    if let Err(err) = state.store.append_entry(&session_id, entry, now) {
        return store_error_response(err);
    }

    debug!(
        request_id = %request_context.request_id,
        session_id = %session_id,
        tool = tool.as_str(),
        "chat exchange recorded"
    );

    let tag = session_id.clone();
    let reply = (
        StatusCode::OK,
        Json(ChatResponse {
            response,
            mode,
            session_id,
            timestamp: now,
            request_id: request_context.request_id,
            independent_mode: state.independent_mode,
        }),
    )
        .into_response();
    tag_session(reply, &tag)
}

/// Only the plain chat tool goes upstream, and only outside independent mode.
async fn generate_response(
    state: &AppState,
    tool: Tool,
    message: &str,
    request_context: &RequestContext,
) -> String {
    let upstream = match (&state.upstream, tool) {
        (Some(upstream), Tool::Chat) if !state.independent_mode => upstream,
        _ => return tool.respond(message),
    };

    match upstream.complete(message).await {
        Ok(text) => text,
        Err(err) => {
            warn!(
                request_id = %request_context.request_id,
                provider = upstream.provider_name(),
                error = %err,
                "upstream unavailable; answering with local fallback"
            );
            chat::fallback_response(message)
        }
    }
}
