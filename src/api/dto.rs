//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::chart::ChartSpec;
use crate::dataset::MetricCategory;

// ============================================
// CHART DTOs
// ============================================

/// List of all charts
#[derive(Debug, Serialize, Deserialize)]
pub struct ChartListResponse {
    /// Number of charts
    pub total: usize,
    /// Charts in category order
    pub charts: Vec<ChartSpec>,
}

// ============================================
// SELECTION DTOs
// ============================================

/// Activation event from the Presentation Shell
#[derive(Debug, Serialize, Deserialize)]
pub struct ActivateRequest {
    /// Control identifier, e.g. "btn-customer"
    pub control: String,
}

/// Result of dispatching an activation event
#[derive(Debug, Serialize, Deserialize)]
pub struct ActivateResponse {
    /// Active category after the event
    pub active: MetricCategory,
    /// Whether the event changed the selection
    pub changed: bool,
    /// Whether the control id was recognized
    pub recognized: bool,
    /// The chart the shell should now render
    pub chart: ChartSpec,
}

/// Current selection and its chart
#[derive(Debug, Serialize, Deserialize)]
pub struct SelectionResponse {
    /// Currently active category
    pub active: MetricCategory,
    /// The chart for the active category
    pub chart: ChartSpec,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: "healthy"
    pub status: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Crate version
    pub version: String,
}
