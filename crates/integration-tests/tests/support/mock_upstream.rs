use std::collections::VecDeque;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::{Mutex, oneshot};

#[derive(Debug, Clone)]
pub struct MockReply {
    pub status: StatusCode,
    pub body: Value,
}

impl MockReply {
    pub fn completion(content: &str) -> Self {
        Self {
            status: StatusCode::OK,
            body: json!({
                "choices": [
                    { "message": { "role": "assistant", "content": content } }
                ]
            }),
        }
    }

    pub fn error(status: StatusCode, code: &str) -> Self {
        Self {
            status,
            body: json!({ "error": { "code": code } }),
        }
    }
}

#[derive(Debug, Clone)]
struct MockState {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    seen_messages: Arc<Mutex<Vec<String>>>,
}

/// Chat-completions endpoint on a local port, answering from a reply queue.
pub struct MockUpstream {
    pub url: String,
    state: MockState,
    shutdown_tx: oneshot::Sender<()>,
    server_task: tokio::task::JoinHandle<()>,
}

impl MockUpstream {
    pub async fn start(replies: Vec<MockReply>) -> Self {
        let state = MockState {
            replies: Arc::new(Mutex::new(VecDeque::from(replies))),
            seen_messages: Arc::new(Mutex::new(Vec::new())),
        };
        let app = Router::new()
            .route("/chat/completions", post(chat_completions_handler))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("listener should bind");
        let local_addr = listener
            .local_addr()
            .expect("listener address should resolve");
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let server_task = tokio::spawn(async move {
            let server = axum::serve(listener, app).with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            });

            server.await.expect("mock upstream should run");
        });

        Self {
            url: format!("http://{local_addr}/chat/completions"),
            state,
            shutdown_tx,
            server_task,
        }
    }

    pub async fn seen_messages(&self) -> Vec<String> {
        self.state.seen_messages.lock().await.clone()
    }

    pub async fn stop(self) {
        self.shutdown_tx
            .send(())
            .expect("shutdown signal should send");
        self.server_task.await.expect("server task should join");
    }
}

async fn chat_completions_handler(
    State(state): State<MockState>,
    Json(payload): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if let Some(content) = payload
        .get("messages")
        .and_then(Value::as_array)
        .and_then(|messages| messages.last())
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
    {
        state.seen_messages.lock().await.push(content.to_string());
    }

    let reply = state
        .replies
        .lock()
        .await
        .pop_front()
        .unwrap_or_else(|| MockReply::error(StatusCode::INTERNAL_SERVER_ERROR, "exhausted"));

    (reply.status, Json(reply.body))
}
