//! Assessment service binary.
//!
//! Serves pre-computed assessment data from the configured data directory
//! and keeps posted overrides in memory.

use std::error::Error;
use std::sync::Arc;

use tokio::net::TcpListener;

use mesh_maturity::adapters::http::{build_router, AssessmentAppState};
use mesh_maturity::adapters::storage::{FileAssessmentCatalog, InMemoryOverrideRepository};
use mesh_maturity::config::AppConfig;
use mesh_maturity::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = AppConfig::load()?;
    config.validate()?;

    telemetry::init_tracing(&config.server)?;

    let catalog = FileAssessmentCatalog::load(&config.data.data_dir).await?;
    let state = AssessmentAppState::new(
        Arc::new(catalog),
        Arc::new(InMemoryOverrideRepository::new()),
    );
    let router = build_router(state, &config.server);

    let addr = config.server.listen;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Assessment service listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Assessment service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
