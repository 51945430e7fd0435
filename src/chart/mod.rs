//! Chart Model
//!
//! Renderable chart descriptions and the pure builder that produces them:
//! - [`ChartKind`] and [`ChartSpec`]: the wire shape handed to the
//!   Presentation Shell
//! - [`ChartBuilder`]: maps a metric category to its chart

pub mod builder;
pub mod spec;

pub use builder::ChartBuilder;
pub use spec::{ChartKind, ChartSpec};
