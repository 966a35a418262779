use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use super::gateway::{
    UpstreamBridge, UpstreamError, UpstreamFuture, map_transport_error, parse_provider_error_code,
};
use super::prompts::{MAX_TOKENS, SYSTEM_PROMPT, TEMPERATURE};
use crate::config::ProviderSettings;

const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Clone)]
pub struct AnthropicGateway {
    client: reqwest::Client,
    settings: ProviderSettings,
}

impl AnthropicGateway {
    pub fn new(settings: ProviderSettings, timeout_ms: u64) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|err| UpstreamError::HttpClient(err.to_string()))?;

        Ok(Self { client, settings })
    }

    async fn send_once(&self, message: &str) -> Result<String, UpstreamError> {
        let request_body = json!({
            "model": self.settings.model,
            "system": SYSTEM_PROMPT,
            "messages": [
                { "role": "user", "content": message }
            ],
            "max_tokens": MAX_TOKENS,
            "temperature": TEMPERATURE
        });

        let response = self
            .client
            .post(&self.settings.url)
            .header("x-api-key", &self.settings.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request_body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(|_| {
            UpstreamError::InvalidPayload("response_body_read_failed".to_string())
        })?;

        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                code: parse_provider_error_code(&body),
            });
        }

        let parsed: MessagesResponse = serde_json::from_str(&body)
            .map_err(|_| UpstreamError::InvalidPayload("response_json_parse_failed".to_string()))?;

        parsed
            .content
            .into_iter()
            .find_map(|block| match block.kind.as_str() {
                "text" => block.text.filter(|text| !text.trim().is_empty()),
                _ => None,
            })
            .ok_or_else(|| UpstreamError::InvalidPayload("missing_text_block".to_string()))
    }
}

impl UpstreamBridge for AnthropicGateway {
    fn complete<'a>(&'a self, message: &'a str) -> UpstreamFuture<'a> {
        Box::pin(self.send_once(message))
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    text: Option<String>,
}
