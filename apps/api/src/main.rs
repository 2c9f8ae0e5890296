mod catalog;
mod config;
mod errors;
mod extraction;
mod ingest;
mod models;
mod routes;
mod search;
mod state;
mod store;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::{bootstrap_defaults, ReferenceCatalog};
use crate::config::Config;
use crate::ingest::build_text_source;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::RecordStore;

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

    info!("Starting Resume Matcher v{}", env!("CARGO_PKG_VERSION"));

    // Reference catalog: bootstrap defaults once, then load (optionally overridden)
    if config.bootstrap_catalog {
        bootstrap_defaults(&config.catalog_dir)?;
    }
    let mut catalog = ReferenceCatalog::load(&config.catalog_dir)?;
    if config.keyword_overrides {
        catalog = catalog.with_keyword_overrides(&config.catalog_dir)?;
        info!(
            "Keyword overrides applied: {} skills, {} degrees",
            catalog.skills().len(),
            catalog.degrees().len()
        );
    }
    if catalog.is_empty() {
        tracing::warn!("Reference catalog is empty; extractors will find nothing");
    }

    // Record store: a malformed file stops startup rather than being overwritten
    let store = RecordStore::open(&config.store_path).with_context(|| {
        format!(
            "Refusing to start: cannot load {}",
            config.store_path.display()
        )
    })?;

    let text_source = build_text_source(config.text_source);
    info!("Text source: {:?}", config.text_source);

    let state = AppState {
        store: Arc::new(RwLock::new(store)),
        catalog: Arc::new(catalog),
        text_source,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
