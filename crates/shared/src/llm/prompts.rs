pub const SYSTEM_PROMPT: &str = "You are Grok, a helpful AI assistant built by xAI, integrated with the Ruliad-Seed ChatLoop interface. You have access to real-time information and can help with code generation, system improvement, and technical assistance. You are maximally truthful and helpful.";

pub const MAX_TOKENS: u32 = 1000;
pub const TEMPERATURE: f32 = 0.7;

/// Attribution headers OpenRouter uses for its app rankings.
pub const OPENROUTER_REFERER: &str = "https://ruliad-seed.github.io";
pub const OPENROUTER_TITLE: &str = "ChatLoop Interface";
