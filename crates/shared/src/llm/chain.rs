use std::sync::Arc;

use tracing::debug;

use super::anthropic::AnthropicGateway;
use super::gateway::{UpstreamBridge, UpstreamError, UpstreamFuture};
use super::openrouter::ChatCompletionsGateway;
use crate::config::UpstreamConfig;

/// Configured providers in priority order. Each gets one attempt; the first
/// success wins and the last error is returned when all fail.
#[derive(Clone, Default)]
pub struct ProviderChain {
    providers: Vec<Arc<dyn UpstreamBridge>>,
}

impl ProviderChain {
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let mut providers: Vec<Arc<dyn UpstreamBridge>> = Vec::new();
        if let Some(settings) = config.openrouter.clone() {
            providers.push(Arc::new(ChatCompletionsGateway::openrouter(
                settings,
                config.timeout_ms,
            )?));
        }
        if let Some(settings) = config.openai.clone() {
            providers.push(Arc::new(ChatCompletionsGateway::openai(
                settings,
                config.timeout_ms,
            )?));
        }
        if let Some(settings) = config.anthropic.clone() {
            providers.push(Arc::new(AnthropicGateway::new(settings, config.timeout_ms)?));
        }

        Ok(Self { providers })
    }

    pub fn with_providers(providers: Vec<Arc<dyn UpstreamBridge>>) -> Self {
        Self { providers }
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers
            .iter()
            .map(|provider| provider.provider_name())
            .collect()
    }
}

impl UpstreamBridge for ProviderChain {
    fn complete<'a>(&'a self, message: &'a str) -> UpstreamFuture<'a> {
        Box::pin(async move {
            let mut last_error = UpstreamError::NotConfigured;
            for provider in &self.providers {
                match provider.complete(message).await {
                    Ok(text) => return Ok(text),
                    Err(err) => {
                        debug!(
                            provider = provider.provider_name(),
                            error = %err,
                            "upstream provider attempt failed"
                        );
                        last_error = err;
                    }
                }
            }
            Err(last_error)
        })
    }

    fn provider_name(&self) -> &'static str {
        "chain"
    }
}
