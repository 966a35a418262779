use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::response::Response;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::errors::{invalid_input_response, json_rejection_response};

/// Decodes a request body that must be a JSON object; arrays and scalars are
/// `invalid_input` even when they would fit the target struct positionally.
pub(super) fn decode_object<T: DeserializeOwned>(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<T, Response> {
    let Json(value) = payload.map_err(json_rejection_response)?;
    if !value.is_object() {
        return Err(invalid_input_response(
            "Request body must be a JSON object",
        ));
    }

    serde_json::from_value(value).map_err(|err| invalid_input_response(&err.to_string()))
}
