pub mod anthropic;
pub mod chain;
pub mod gateway;
pub mod openrouter;
pub mod prompts;

pub use anthropic::AnthropicGateway;
pub use chain::ProviderChain;
pub use gateway::{UpstreamBridge, UpstreamError, UpstreamFuture};
pub use openrouter::ChatCompletionsGateway;
