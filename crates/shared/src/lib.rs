pub mod config;
mod config_env;
pub mod llm;
pub mod models;
pub mod responders;
pub mod store;

/// Version reported by `/health`, `/api/status` and the session listing.
pub const SERVICE_VERSION: &str = "2.0.0";
