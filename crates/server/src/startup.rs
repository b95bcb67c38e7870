use std::net::SocketAddr;

use axum::Router;
use common::utils::logging::init_logging;
use configs::{AppConfig, LogFormat};
use dotenvy::dotenv;
use service::items::InMemoryItemStore;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load config from `config.toml` / `CONFIG_PATH`, env overrides applied.
fn load_config() -> Result<AppConfig, StartupError> {
    AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let raw = cfg.bind_addr();
    raw.parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bad bind address {raw}: {e}")))
}

/// Router with a fresh, empty item store.
pub fn build_app(cfg: &AppConfig) -> Router {
    let state = ServerState::new(InMemoryItemStore::new());
    routes::build_router(state, build_cors(), cfg.docs.enabled)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "cannot listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = load_config()?;
    init_logging(cfg.logging.format == LogFormat::Json);

    let app = build_app(&cfg);

    let addr = bind_addr(&cfg)?;
    info!(%addr, docs = cfg.docs.enabled, "starting foraging log api");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}
