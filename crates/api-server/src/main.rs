use std::net::SocketAddr;
use std::sync::Arc;

use api_server::http::{self, AppState};
use chrono::Utc;
use shared::config::{ApiConfig, load_dotenv};
use shared::llm::{ProviderChain, UpstreamBridge};
use shared::store::{Store, StoreSettings};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    let dotenv_result = load_dotenv();

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "api_server=debug,shared=info,tower_http=info".to_string()),
        )
        .init();

    if let Err(err) = dotenv_result {
        warn!("failed to load .env file: {err}");
    }

    let config = match ApiConfig::from_env() {
        Ok(cfg) => cfg,
        Err(err) => {
            error!("failed to read config: {err}");
            std::process::exit(1);
        }
    };

    let provider_chain = match ProviderChain::from_config(&config.upstream) {
        Ok(chain) => chain,
        Err(err) => {
            error!("failed to build upstream providers: {err}");
            std::process::exit(1);
        }
    };
    info!(
        independent_mode = config.independent_mode,
        providers = ?provider_chain.provider_names(),
        "upstream providers configured"
    );
    if !config.independent_mode && provider_chain.is_empty() {
        warn!("independent mode is off but no provider key is set; chat stays local");
    }

    let upstream: Option<Arc<dyn UpstreamBridge>> = if provider_chain.is_empty() {
        None
    } else {
        Some(Arc::new(provider_chain))
    };

    let store = Store::new(
        StoreSettings {
            history_limit: config.session_history_limit,
            independent_mode: config.independent_mode,
        },
        Utc::now(),
    );
    info!(history_limit = store.history_limit(), "session store ready");

    let app = http::build_router(AppState {
        store,
        upstream,
        independent_mode: config.independent_mode,
    });

    let addr: SocketAddr = match config.bind_addr.parse() {
        Ok(addr) => addr,
        Err(err) => {
            error!("invalid bind address {}: {err}", config.bind_addr);
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("failed to bind {addr}: {err}");
            std::process::exit(1);
        }
    };

    info!(
        "api server listening on {}",
        listener.local_addr().unwrap_or(addr)
    );
    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("api server stopped with error: {err}");
        std::process::exit(1);
    }
    info!("api server shut down");
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to install ctrl-c handler: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
