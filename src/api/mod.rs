//! Retail Insights REST API
//!
//! HTTP boundary with the Presentation Shell, built with Axum. The shell
//! reports control activations and receives chart descriptions to render.
//!
//! # Endpoints
//!
//! ## Charts
//! - `GET /api/v1/charts` - All five charts
//! - `GET /api/v1/charts/:category` - One chart
//!
//! ## Datasets
//! - `GET /api/v1/datasets/:category` - Raw sample data
//!
//! ## Selection
//! - `GET /api/v1/selection` - Current selection and its chart
//! - `POST /api/v1/activate` - Dispatch a control activation
//!
//! ## Overview
//! - `GET /api/v1/overview` - The Mega Mart three-chart page
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use retail_insights::api::{serve, AppState};
//! use retail_insights::config::ApiConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::default();
//!     let state = AppState::new(config.clone());
//!     serve(state, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Chart routes
        .route("/charts", get(routes::charts::list_charts))
        .route("/charts/:category", get(routes::charts::get_chart))
        // Dataset routes
        .route("/datasets/:category", get(routes::datasets::get_dataset))
        // Selection routes
        .route("/selection", get(routes::selection::get_selection))
        .route("/activate", post(routes::selection::activate))
        // Overview route
        .route("/overview", get(routes::overview::get_overview));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // Configure properly in production
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Retail Insights API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Retail Insights API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
