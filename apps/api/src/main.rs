mod config;
mod errors;
mod matching;
mod models;
mod profile;
mod repository;
mod routes;
mod state;
mod wallet;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::repository::Repositories;
use crate::routes::build_router;
use crate::state::AppState;
use crate::wallet::lace::{FixedAddressProvider, LaceConnector, LaceProvider};
use crate::wallet::session::WalletSession;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skillboard API v{}", env!("CARGO_PKG_VERSION"));

    // Skills, jobs and profiles
    let repositories = Repositories::from_config(&config)?;

    // Wallet provider (absent unless WALLET_ADDRESS is set)
    let provider: Option<Arc<dyn LaceProvider>> = match config.wallet_address.as_deref() {
        Some(address) => {
            info!("Wallet provider available for {address}");
            Some(Arc::new(FixedAddressProvider::new(address)))
        }
        None => {
            info!("No wallet provider configured");
            None
        }
    };
    let wallet = WalletSession::new(Arc::new(LaceConnector::new(provider)));

    let state = AppState::new(config.clone(), repositories, wallet);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
