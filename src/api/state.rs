//! Application State
//!
//! Shared state accessible by all API handlers. The selection dispatcher
//! is the only mutable piece; it sits behind an async RwLock so each
//! activation is processed to completion before the next.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::RwLock;

use crate::chart::ChartBuilder;
use crate::config::{ApiConfig, DashboardConfig};
use crate::dataset::DatasetRegistry;
use crate::dispatch::Dispatcher;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Registry of the sample datasets
    pub registry: Arc<DatasetRegistry>,
    /// Chart builder over the registry
    pub builder: Arc<ChartBuilder>,
    /// Selection dispatcher; single writer behind the lock
    pub dispatcher: Arc<RwLock<Dispatcher>>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Dashboard configuration
    pub dashboard: Arc<DashboardConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState with default dashboard settings
    pub fn new(config: ApiConfig) -> Self {
        Self::with_dashboard(config, DashboardConfig::default())
    }

    /// Create a new AppState with explicit dashboard settings
    pub fn with_dashboard(config: ApiConfig, dashboard: DashboardConfig) -> Self {
        let registry = Arc::new(DatasetRegistry::new());
        let builder = Arc::new(ChartBuilder::new(Arc::clone(&registry)));
        let dispatcher = Arc::new(RwLock::new(Dispatcher::with_initial(
            dashboard.default_category,
        )));

        Self {
            registry,
            builder,
            dispatcher,
            config: Arc::new(config),
            dashboard: Arc::new(dashboard),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
