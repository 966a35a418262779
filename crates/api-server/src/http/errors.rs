use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shared::models::{ErrorBody, ErrorResponse};
use shared::store::StoreError;
use tracing::error;

fn error_response(status: StatusCode, code: &str, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: message.to_string(),
            },
        }),
    )
        .into_response()
}

pub(super) fn bad_request_response(code: &str, message: &str) -> Response {
    error_response(StatusCode::BAD_REQUEST, code, message)
}

pub(super) fn invalid_input_response(message: &str) -> Response {
    bad_request_response("invalid_input", message)
}

/// Malformed bodies, wrong content types and non-object JSON all surface as
/// `invalid_input`.
pub(super) fn json_rejection_response(rejection: JsonRejection) -> Response {
    invalid_input_response(&rejection.body_text())
}

pub(super) fn not_found_response(message: &str) -> Response {
    error_response(StatusCode::NOT_FOUND, "not_found", message)
}

pub(super) async fn route_not_found() -> Response {
    not_found_response("Route not found")
}

pub(super) fn store_error_response(err: StoreError) -> Response {
    error!("session store operation failed: {err}");
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal_error",
        &err.to_string(),
    )
}
