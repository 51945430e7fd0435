//! Core data types for the sample datasets
//!
//! This module defines the fundamental types used throughout the dashboard:
//! - `MetricCategory`: which business area a dataset describes
//! - `Column` / `ColumnValues`: one named column of text labels or numbers
//! - `MetricDataset`: an immutable columnar table of sample data

use serde::{Deserialize, Serialize};

/// Business area covered by a dataset and its chart
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum MetricCategory {
    /// Monthly sales totals
    Sales,
    /// Customer demographics by age group
    Customers,
    /// Stock levels per product
    Inventory,
    /// Campaign return on investment
    Marketing,
    /// Delivery efficiency over time
    SupplyChain,
}

impl MetricCategory {
    /// Get all categories for iteration
    pub fn all() -> &'static [MetricCategory] {
        &[
            MetricCategory::Sales,
            MetricCategory::Customers,
            MetricCategory::Inventory,
            MetricCategory::Marketing,
            MetricCategory::SupplyChain,
        ]
    }
}

impl std::fmt::Display for MetricCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricCategory::Sales => write!(f, "sales"),
            MetricCategory::Customers => write!(f, "customers"),
            MetricCategory::Inventory => write!(f, "inventory"),
            MetricCategory::Marketing => write!(f, "marketing"),
            MetricCategory::SupplyChain => write!(f, "supply-chain"),
        }
    }
}

impl std::str::FromStr for MetricCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sales" => Ok(MetricCategory::Sales),
            "customers" => Ok(MetricCategory::Customers),
            "inventory" => Ok(MetricCategory::Inventory),
            "marketing" => Ok(MetricCategory::Marketing),
            "supply-chain" | "supply_chain" => Ok(MetricCategory::SupplyChain),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Error for category strings outside the closed set
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown metric category: {0}. Use sales, customers, inventory, marketing, or supply-chain")]
pub struct UnknownCategory(pub String);

/// Values held by one column: either text labels or numbers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ColumnValues {
    /// Categorical labels (months, product names, age groups)
    Text(Vec<String>),
    /// Measured values
    Number(Vec<f64>),
}

impl ColumnValues {
    /// Number of entries in the column
    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Text(v) => v.len(),
            ColumnValues::Number(v) => v.len(),
        }
    }

    /// True if the column holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One named column of a dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Column {
    /// Field name used by chart field selectors (e.g. "Month", "Stock")
    pub name: String,
    /// The column's values
    pub values: ColumnValues,
}

/// An immutable columnar table of sample business data
///
/// Created once at startup from literal constants; never mutated.
/// Equality is structural, matching how the Presentation Shell
/// compares the charts it is handed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricDataset {
    /// Human-readable dataset name
    pub name: String,
    /// Ordered columns, all of equal length
    pub columns: Vec<Column>,
}

impl MetricDataset {
    /// Create an empty dataset with a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Builder: append a text column
    pub fn text_column(mut self, name: impl Into<String>, values: Vec<&str>) -> Self {
        self.columns.push(Column {
            name: name.into(),
            values: ColumnValues::Text(values.into_iter().map(String::from).collect()),
        });
        self
    }

    /// Builder: append a numeric column
    pub fn number_column(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.columns.push(Column {
            name: name.into(),
            values: ColumnValues::Number(values),
        });
        self
    }

    /// Look up a column by field name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Text values of a column, if it is a text column
    pub fn text(&self, name: &str) -> Option<&[String]> {
        match self.column(name)? {
            Column {
                values: ColumnValues::Text(v),
                ..
            } => Some(v),
            _ => None,
        }
    }

    /// Numeric values of a column, if it is a numeric column
    pub fn numbers(&self, name: &str) -> Option<&[f64]> {
        match self.column(name)? {
            Column {
                values: ColumnValues::Number(v),
                ..
            } => Some(v),
            _ => None,
        }
    }

    /// Number of rows (length of the first column)
    pub fn len(&self) -> usize {
        self.columns.first().map(|c| c.values.len()).unwrap_or(0)
    }

    /// True if the dataset holds no rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip() {
        for category in MetricCategory::all() {
            let parsed: MetricCategory = category.to_string().parse().unwrap();
            assert_eq!(parsed, *category);
        }
    }

    #[test]
    fn test_category_parse_aliases() {
        assert_eq!(
            "supply_chain".parse::<MetricCategory>().unwrap(),
            MetricCategory::SupplyChain
        );
        assert_eq!(
            "SALES".parse::<MetricCategory>().unwrap(),
            MetricCategory::Sales
        );
        assert!("revenue".parse::<MetricCategory>().is_err());
    }

    #[test]
    fn test_dataset_accessors() {
        let ds = MetricDataset::new("demo")
            .text_column("Label", vec!["a", "b", "c"])
            .number_column("Value", vec![1.0, 2.0, 3.0]);

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.text("Label").unwrap(), &["a", "b", "c"]);
        assert_eq!(ds.numbers("Value").unwrap(), &[1.0, 2.0, 3.0]);
        assert!(ds.text("Value").is_none());
        assert!(ds.column("Missing").is_none());
    }

    #[test]
    fn test_dataset_serde_shape() {
        let ds = MetricDataset::new("demo").number_column("Value", vec![1.5]);
        let json = serde_json::to_value(&ds).unwrap();
        assert_eq!(json["columns"][0]["values"][0], 1.5);

        let back: MetricDataset = serde_json::from_value(json).unwrap();
        assert_eq!(back, ds);
    }
}
