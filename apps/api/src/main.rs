mod assessment;
mod config;
mod errors;
mod generation;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assessment::candidates::ContentTypeCatalog;
use crate::config::Config;
use crate::generation::registry::TemplateRegistry;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails only on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Magnet API v{}", env!("CARGO_PKG_VERSION"));

    let catalog = match &config.content_types_path {
        Some(path) => {
            let catalog = ContentTypeCatalog::load_from_file(path)?;
            info!("Loaded {} content types from {}", catalog.candidates().len(), path.display());
            catalog
        }
        None => ContentTypeCatalog::default(),
    };

    let registry = match &config.templates_path {
        Some(path) => {
            let registry = TemplateRegistry::load_from_file(path)?;
            info!("Loaded {} templates from {}", registry.templates().len(), path.display());
            registry
        }
        None => TemplateRegistry::default(),
    };

    // Build app state (catalogs are read-only from here on)
    let state = AppState::new(catalog, registry);
    info!(
        "Catalogs ready: {} content types, {} templates, scorer: {}",
        state.catalog.candidates().len(),
        state.registry.templates().len(),
        state.fit_scorer.backend()
    );

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
