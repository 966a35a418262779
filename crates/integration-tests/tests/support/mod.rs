#![allow(dead_code)]

pub mod mock_upstream;

use std::sync::Arc;

use api_server::http::{AppState, build_router};
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use chrono::Utc;
use serde_json::{Value, json};
use shared::llm::UpstreamBridge;
use shared::store::{Store, StoreSettings};
use tower::ServiceExt;

pub const HISTORY_LIMIT: usize = 100;

pub struct TestApp {
    pub router: axum::Router,
    pub store: Store,
}

pub fn test_app() -> TestApp {
    build_test_app(None, true)
}

pub fn test_app_with_upstream(upstream: Arc<dyn UpstreamBridge>) -> TestApp {
    build_test_app(Some(upstream), false)
}

pub fn build_test_app(
    upstream: Option<Arc<dyn UpstreamBridge>>,
    independent_mode: bool,
) -> TestApp {
    let store = Store::new(
        StoreSettings {
            history_limit: HISTORY_LIMIT,
            independent_mode,
        },
        Utc::now(),
    );
    let router = build_router(AppState {
        store: store.clone(),
        upstream,
        independent_mode,
    });

    TestApp { router, store }
}

#[derive(Debug)]
pub struct JsonResponse {
    pub status: StatusCode,
    pub request_id: Option<String>,
    pub body: Value,
}

pub async fn send_json(app: &axum::Router, request: Request<Body>) -> JsonResponse {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request should succeed");
    let status = response.status();
    let request_id = response
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string);
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body should read");
    let body = serde_json::from_slice::<Value>(&body).unwrap_or_else(|_| json!({}));

    JsonResponse {
        status,
        request_id,
        body,
    }
}

pub fn request(method: Method, path: &str, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header(header::ACCEPT, "application/json");

    let request_body = body
        .map(|value| {
            serde_json::to_vec(&value).expect("json body should serialize for integration request")
        })
        .unwrap_or_default();
    if !request_body.is_empty() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }

    builder
        .body(Body::from(request_body))
        .expect("integration request should build")
}

pub async fn post_chat(app: &axum::Router, body: Value) -> JsonResponse {
    send_json(app, request(Method::POST, "/api/chat", Some(body))).await
}

pub async fn get_json(app: &axum::Router, path: &str) -> JsonResponse {
    send_json(app, request(Method::GET, path, None)).await
}

pub fn error_code(body: &Value) -> Option<&str> {
    body.get("error")?.get("code")?.as_str()
}
