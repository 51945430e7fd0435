//! Sample Metric Datasets
//!
//! Immutable, hardcoded business data for the dashboard:
//! - [`MetricCategory`]: the closed set of metric categories
//! - [`MetricDataset`]: a small columnar table of sample values
//! - [`DatasetRegistry`]: total lookup from category to dataset

pub mod registry;
pub mod types;

pub use registry::{fields, DatasetRegistry};
pub use types::{Column, ColumnValues, MetricCategory, MetricDataset, UnknownCategory};
