//! Retail Insights API Server
//!
//! Run with: cargo run --bin insights-api
//!
//! # Configuration
//!
//! Loaded from config.toml (see `insights-cli config-init`) with environment
//! variable overrides:
//! - `INSIGHTS_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `INSIGHTS_API_PORT`: Port to listen on (default: 8090)
//! - `INSIGHTS_DEFAULT_CATEGORY`: Initial selection (default: sales)
//! - `INSIGHTS_OVERVIEW_ENABLED`: Serve the overview page (default: true)
//! - `RUST_LOG`: Log level (default: info)

use retail_insights::api::{serve, AppState};
use retail_insights::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "retail_insights=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting Retail Insights API server v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Load configuration
    let config = Config::load_default();

    tracing::info!(
        "Default category: {}",
        config.dashboard.default_category
    );
    tracing::info!("Overview enabled: {}", config.dashboard.overview_enabled);

    // Create app state
    let state = AppState::with_dashboard(config.api.clone(), config.dashboard.clone());

    // Run server
    tracing::info!("Starting server on {}", config.api.addr());
    serve(state, &config.api).await?;

    tracing::info!("Retail Insights API server stopped");

    Ok(())
}
