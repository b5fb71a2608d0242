mod config;
mod errors;
mod export;
mod form;
mod models;
mod preview;
mod routes;
mod state;
mod storage;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::export::{default_page_config, FontFamily};
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{FileBackend, PersistenceBridge};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume builder v{}", env!("CARGO_PKG_VERSION"));

    // Local key-value storage for the submitted resume
    let backend = FileBackend::new(config.storage_dir.clone());
    let store = PersistenceBridge::new(Arc::new(backend), config.storage_slot.clone());
    info!(
        "Storage at {} (slot: {})",
        config.storage_dir.display(),
        store.slot()
    );

    let page_config = default_page_config(FontFamily::Helvetica);
    info!(
        "PDF page config: {:?} {}x{}mm",
        page_config.font, page_config.page_width_mm, page_config.page_height_mm
    );

    let state = AppState::new(config.clone(), store, page_config);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
