//! # Trade Query Service
//!
//! Main entry point for the trade query service.

use std::sync::Arc;
use tracing::info;

use trade_query::api::rest::handlers::AppState;
use trade_query::api::rest::routes::create_router;
use trade_query::application::queries::TradeQueryEngine;
use trade_query::infrastructure::persistence::in_memory::{InMemoryTradeStore, demo_trades};
use trade_query::infrastructure::persistence::traits::TradeStore;

mod config;

use config::{AppConfig, LogFormat};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    info!("Starting trade query service v{}", env!("CARGO_PKG_VERSION"));

    // Seed the store once; it is read-only for the process lifetime
    let store = Arc::new(InMemoryTradeStore::from_trades(demo_trades()?));
    info!("Seeded trade store with {} records", store.len());

    let engine = TradeQueryEngine::new(store);
    let state = Arc::new(AppState::new(engine));
    let router = create_router(state);

    let addr = config.rest.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("REST API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down trade query service");

    Ok(())
}

/// Initializes the tracing subscriber from the logging configuration.
fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match config.log.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}

/// Completes when the process receives a shutdown signal.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install shutdown handler: {}", e);
    }
}
