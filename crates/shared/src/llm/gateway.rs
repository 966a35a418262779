use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

pub type UpstreamFuture<'a> =
    Pin<Box<dyn Future<Output = Result<String, UpstreamError>> + Send + 'a>>;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("no upstream provider is configured")]
    NotConfigured,
    #[error("upstream provider request timed out")]
    Timeout,
    #[error("upstream provider returned status={status} code={code}")]
    Status { status: u16, code: String },
    #[error("upstream provider request failed: {0}")]
    Transport(String),
    #[error("upstream provider returned an invalid payload: {0}")]
    InvalidPayload(String),
    #[error("failed to build upstream http client: {0}")]
    HttpClient(String),
}

/// A remote chat-completion provider. One call is one attempt; callers decide
/// what to do on failure.
pub trait UpstreamBridge: Send + Sync {
    fn complete<'a>(&'a self, message: &'a str) -> UpstreamFuture<'a>;

    fn provider_name(&self) -> &'static str;
}

pub(crate) fn map_transport_error(err: reqwest::Error) -> UpstreamError {
    if err.is_timeout() {
        UpstreamError::Timeout
    } else {
        UpstreamError::Transport("request_unavailable".to_string())
    }
}

/// Pulls `error.code` (or `error.type`) out of a provider error body.
pub(crate) fn parse_provider_error_code(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ProviderErrorEnvelope {
        error: Option<ProviderErrorDetails>,
    }

    #[derive(serde::Deserialize)]
    struct ProviderErrorDetails {
        code: Option<serde_json::Value>,
        #[serde(rename = "type")]
        kind: Option<String>,
    }

    let Some(details) = serde_json::from_str::<ProviderErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error)
    else {
        return "unknown".to_string();
    };

    match details.code {
        Some(serde_json::Value::String(code)) => code,
        Some(serde_json::Value::Number(code)) => code.to_string(),
        _ => details.kind.unwrap_or_else(|| "unknown".to_string()),
    }
}
