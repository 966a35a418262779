use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde_json::Value;
use shared::models::{GenerateComponentRequest, GenerateComponentResponse};
use shared::responders::components::Component;

use super::errors::{bad_request_response, invalid_input_response};
use super::payload::decode_object;

pub(super) async fn generate_component(
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let request: GenerateComponentRequest = match decode_object(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    // `specifications` is accepted but does not influence the documents.
    let Some(name) = request
        .component
        .map(|component| component.trim().to_string())
        .filter(|component| !component.is_empty())
    else {
        return invalid_input_response("Component type required");
    };
    let Some(component) = Component::from_name(&name) else {
        return bad_request_response("unknown_component", "Unknown component type");
    };

    (
        StatusCode::OK,
        Json(GenerateComponentResponse {
            success: true,
            component: name,
            result: component.document(),
            timestamp: Utc::now(),
        }),
    )
        .into_response()
}
