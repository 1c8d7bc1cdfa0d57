// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::application::chart_service::ChartService;
use crate::application::dataset::DatasetStore;
use crate::infrastructure::config::load_config;
use crate::infrastructure::csv_loader::load_dataset;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (RUST_LOG controls verbosity)
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_config()?;

    // Load the dataset once; a missing or malformed file aborts startup
    let rows = load_dataset(&config.data.path)
        .with_context(|| format!("failed to load dataset from '{}'", config.data.path))?;
    let store = Arc::new(DatasetStore::new(rows));
    tracing::info!(rows = store.row_count(), "dataset loaded");

    // Create application state
    let state = Arc::new(AppState {
        chart_service: ChartService::new(store.clone()),
        store,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(handlers::index))
        .route("/healthz", get(handlers::health_check))
        .route("/api/years", get(handlers::year_index))
        .route("/api/charts/access", get(handlers::access_charts))
        .route("/api/charts/generation", get(handlers::generation_mix))
        .route("/api/charts/emissions", get(handlers::emissions_map))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("starting energy-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
