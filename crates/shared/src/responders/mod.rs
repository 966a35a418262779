//! Canned response generators behind `/api/chat` and the static report
//! endpoints. Every generator is a pure function of its input.

pub mod benchmark;
pub mod chat;
pub mod codegen;
pub mod components;
pub mod improvement;

/// Selects which generator answers a chat request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Chat,
    Generate,
    Improve,
    Benchmark,
}

impl Tool {
    /// Case-insensitive; anything unrecognised routes to [`Tool::Chat`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "generate" => Self::Generate,
            "improve" => Self::Improve,
            "benchmark" => Self::Benchmark,
            _ => Self::Chat,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Generate => "generate",
            Self::Improve => "improve",
            Self::Benchmark => "benchmark",
        }
    }

    pub fn respond(self, message: &str) -> String {
        match self {
            Self::Chat => chat::respond(message),
            Self::Generate => codegen::respond(message),
            Self::Improve => improvement::respond(message),
            Self::Benchmark => benchmark::respond(message),
        }
    }
}
