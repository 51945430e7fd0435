//! # Retail Insights Hub
//!
//! A sample business-analytics dashboard service. Hardcoded metric data
//! (sales, customers, inventory, marketing ROI, supply chain efficiency)
//! is turned into renderable chart descriptions, and a small dispatcher
//! tracks which chart the client most recently selected. A Presentation
//! Shell drives it over a JSON API: it reports control activations and
//! receives [`chart::ChartSpec`] objects to render.
//!
//! ## Modules
//!
//! - [`dataset`]: Sample datasets and the category registry
//! - [`chart`]: Chart specifications and the pure builder
//! - [`dispatch`]: Selection state machine over activation events
//! - [`overview`]: The fixed Mega Mart overview page
//! - [`api`]: REST API server with Axum
//!
//! ## Quick Start
//!
//! ```rust
//! use retail_insights::chart::ChartBuilder;
//! use retail_insights::dataset::{DatasetRegistry, MetricCategory};
//! use retail_insights::dispatch::Dispatcher;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(DatasetRegistry::new());
//! let builder = ChartBuilder::new(Arc::clone(&registry));
//! let mut dispatcher = Dispatcher::new();
//!
//! // Sales is shown before any control is activated
//! assert_eq!(dispatcher.active(), MetricCategory::Sales);
//!
//! // A button press moves the selection and picks the chart
//! let activation = dispatcher.activate("btn-customer");
//! let chart = builder.build(activation.active);
//! assert_eq!(chart.title, "Customer Demographics");
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod dispatch;
pub mod overview;

// Re-export top-level types for convenience
pub use chart::{ChartBuilder, ChartKind, ChartSpec};

pub use dataset::{Column, ColumnValues, DatasetRegistry, MetricCategory, MetricDataset};

pub use dispatch::{Activation, Dispatcher, SelectionState, Transition};

pub use overview::{build_overview, OverviewPage};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, DashboardConfig, LoggingConfig};
