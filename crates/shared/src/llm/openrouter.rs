use std::time::Duration;

use serde::Deserialize;
use serde_json::{Value, json};

use super::gateway::{
    UpstreamBridge, UpstreamError, UpstreamFuture, map_transport_error, parse_provider_error_code,
};
use super::prompts::{MAX_TOKENS, OPENROUTER_REFERER, OPENROUTER_TITLE, SYSTEM_PROMPT, TEMPERATURE};
use crate::config::ProviderSettings;

/// OpenAI-compatible `chat/completions` client. Serves both OpenRouter and
/// OpenAI; only OpenRouter gets the attribution headers.
#[derive(Clone)]
pub struct ChatCompletionsGateway {
    client: reqwest::Client,
    settings: ProviderSettings,
    provider: &'static str,
    attribution: bool,
}

impl ChatCompletionsGateway {
    pub fn openrouter(settings: ProviderSettings, timeout_ms: u64) -> Result<Self, UpstreamError> {
        Self::new("openrouter", settings, timeout_ms, true)
    }

    pub fn openai(settings: ProviderSettings, timeout_ms: u64) -> Result<Self, UpstreamError> {
        Self::new("openai", settings, timeout_ms, false)
    }

    fn new(
        provider: &'static str,
        settings: ProviderSettings,
        timeout_ms: u64,
        attribution: bool,
    ) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|err| UpstreamError::HttpClient(err.to_string()))?;

        Ok(Self {
            client,
            settings,
            provider,
            attribution,
        })
    }

    async fn send_once(&self, message: &str) -> Result<String, UpstreamError> {
        let request_body = json!({
            "model": self.settings.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": message }
            ],
            "max_tokens": MAX_TOKENS,
            "temperature": TEMPERATURE
        });

        let mut request = self
            .client
            .post(&self.settings.url)
            .bearer_auth(&self.settings.api_key)
            .json(&request_body);
        if self.attribution {
            request = request
                .header("HTTP-Referer", OPENROUTER_REFERER)
                .header("X-Title", OPENROUTER_TITLE);
        }

        let response = request.send().await.map_err(map_transport_error)?;
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

        let parsed: ChatCompletionsResponse = serde_json::from_str(&body)
            .map_err(|_| UpstreamError::InvalidPayload("response_json_parse_failed".to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| UpstreamError::InvalidPayload("missing_choice".to_string()))?
            .message
            .content;

        match content {
            Value::String(text) if !text.trim().is_empty() => Ok(text),
            Value::String(_) => Err(UpstreamError::InvalidPayload("empty_content".to_string())),
            _ => Err(UpstreamError::InvalidPayload(
                "unsupported_content_shape".to_string(),
            )),
        }
    }
}

impl UpstreamBridge for ChatCompletionsGateway {
    fn complete<'a>(&'a self, message: &'a str) -> UpstreamFuture<'a> {
        Box::pin(self.send_once(message))
    }

    fn provider_name(&self) -> &'static str {
        self.provider
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionsResponse {
    choices: Vec<ChatCompletionsChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionsChoice {
    message: ChatCompletionsMessage,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionsMessage {
    #[serde(default)]
    content: Value,
}
