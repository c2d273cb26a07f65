//! vgsd-ui (Sales Dashboard) - Video game sales dashboard service
//!
//! Loads the bundled vgsales.csv once at startup and serves a browser UI for
//! filtering the table by genre with live summary cards, a grouped
//! time-series chart, and a paginated data grid.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use vgsd_common::config::{resolve_dataset_path, resolve_port};
use vgsd_common::Dataset;
use vgsd_ui::{build_router, AppState};

/// Command-line arguments (highest-priority configuration tier)
#[derive(Debug, Parser)]
#[command(name = "vgsd-ui", about = "Video game sales dashboard")]
struct Args {
    /// Path to the vgsales CSV dataset
    #[arg(long)]
    data: Option<String>,

    /// Listen port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification IMMEDIATELY after tracing init
    info!(
        "Starting VGSD Sales Dashboard (vgsd-ui) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    // Resolve configuration: CLI > env > config file > default
    let dataset_path = resolve_dataset_path(args.data.as_deref());
    let port = resolve_port(args.port)?;
    info!("Dataset path: {}", dataset_path.display());

    // Dataset load failure is fatal: the dashboard cannot render without data
    let dataset = match Dataset::load(&dataset_path) {
        Ok(dataset) => {
            info!("✓ Loaded dataset ({} records)", dataset.len());
            Arc::new(dataset)
        }
        Err(e) => {
            error!("Failed to load dataset: {}", e);
            return Err(e.into());
        }
    };

    // Create application state and router
    let state = AppState::new(dataset);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    info!("vgsd-ui listening on http://127.0.0.1:{}", port);
    info!("Health check: http://127.0.0.1:{}/health", port);

    axum::serve(listener, app).await?;

    Ok(())
}
