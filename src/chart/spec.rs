//! Chart specification types
//!
//! A `ChartSpec` describes one renderable chart: geometry kind, title,
//! field selectors, and the dataset to draw from. It carries no behavior;
//! the Presentation Shell turns it into pixels.

use serde::{Deserialize, Serialize};

use crate::dataset::MetricDataset;

/// Chart geometry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Connected series over an ordered axis
    Line,
    /// One bar per label
    Bar,
    /// Proportional slices per label
    Pie,
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartKind::Line => write!(f, "line"),
            ChartKind::Bar => write!(f, "bar"),
            ChartKind::Pie => write!(f, "pie"),
        }
    }
}

/// A description of one renderable chart
///
/// For line and bar charts `label_field`/`value_field` are the x/y axes;
/// for pie charts they select slice labels and slice values. Equality is
/// structural; two builds of the same chart compare equal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSpec {
    /// Geometry kind
    pub kind: ChartKind,
    /// Chart title shown above the plot
    pub title: String,
    /// Name of the column supplying x values or slice labels
    pub label_field: String,
    /// Name of the column supplying y values or slice values
    pub value_field: String,
    /// The dataset the fields select from
    pub source: MetricDataset,
}

impl ChartSpec {
    /// The labels the chart will render, pulled from the source dataset
    pub fn labels(&self) -> &[String] {
        self.source.text(&self.label_field).unwrap_or(&[])
    }

    /// The values the chart will render, pulled from the source dataset
    pub fn values(&self) -> &[f64] {
        self.source.numbers(&self.value_field).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_accessors() {
        let spec = ChartSpec {
            kind: ChartKind::Bar,
            title: "Demo".to_string(),
            label_field: "Label".to_string(),
            value_field: "Value".to_string(),
            source: MetricDataset::new("demo")
                .text_column("Label", vec!["a", "b"])
                .number_column("Value", vec![1.0, 2.0]),
        };

        assert_eq!(spec.labels(), &["a", "b"]);
        assert_eq!(spec.values(), &[1.0, 2.0]);
    }

    #[test]
    fn test_kind_serde() {
        assert_eq!(serde_json::to_string(&ChartKind::Pie).unwrap(), "\"pie\"");
        let kind: ChartKind = serde_json::from_str("\"line\"").unwrap();
        assert_eq!(kind, ChartKind::Line);
    }
}
