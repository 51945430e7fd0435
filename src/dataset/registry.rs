//! Dataset Registry
//!
//! Fixed mapping from metric category to its sample dataset. All data is
//! literal, built once at startup; `get` is a total function over the
//! closed category set with no I/O and no failure mode.

use super::types::{MetricCategory, MetricDataset};

/// Field names used across the sample datasets
pub mod fields {
    pub const MONTH: &str = "Month";
    pub const TOTAL_SALES: &str = "Total Sales";
    pub const AGE_GROUP: &str = "Age Group";
    pub const BUYING_TRENDS: &str = "Buying Trends";
    pub const PRODUCT: &str = "Product";
    pub const STOCK: &str = "Stock";
    pub const CAMPAIGN: &str = "Campaign";
    pub const ROI: &str = "ROI (%)";
    pub const EFFICIENCY: &str = "Efficiency";
}

/// Registry of the five sample datasets
#[derive(Debug, Clone)]
pub struct DatasetRegistry {
    sales: MetricDataset,
    customers: MetricDataset,
    inventory: MetricDataset,
    marketing: MetricDataset,
    supply_chain: MetricDataset,
}

impl DatasetRegistry {
    /// Build the registry from literal sample data
    pub fn new() -> Self {
        Self {
            sales: MetricDataset::new("Sales")
                .text_column(
                    fields::MONTH,
                    vec!["January", "February", "March", "April", "May", "June"],
                )
                .number_column(
                    fields::TOTAL_SALES,
                    vec![50000.0, 52000.0, 55000.0, 60000.0, 58000.0, 62000.0],
                ),
            customers: MetricDataset::new("Customers")
                .text_column(
                    fields::AGE_GROUP,
                    vec!["18-25", "26-35", "36-45", "46-60", "60+"],
                )
                .number_column(fields::BUYING_TRENDS, vec![70.0, 65.0, 60.0, 55.0, 50.0]),
            inventory: MetricDataset::new("Inventory")
                .text_column(fields::PRODUCT, vec!["A", "B", "C", "D", "E"])
                .number_column(fields::STOCK, vec![100.0, 50.0, 75.0, 20.0, 10.0]),
            marketing: MetricDataset::new("Marketing")
                .text_column(
                    fields::CAMPAIGN,
                    vec!["Campaign 1", "Campaign 2", "Campaign 3", "Campaign 4"],
                )
                .number_column(fields::ROI, vec![15.0, 12.0, 18.0, 10.0]),
            supply_chain: MetricDataset::new("Supply Chain")
                .text_column(fields::MONTH, vec!["January", "February", "March"])
                .number_column(fields::EFFICIENCY, vec![95.0, 97.0, 96.0]),
        }
    }

    /// Get the dataset for a category
    ///
    /// Total over the closed category set; returns the same literal data
    /// on every call.
    pub fn get(&self, category: MetricCategory) -> &MetricDataset {
        match category {
            MetricCategory::Sales => &self.sales,
            MetricCategory::Customers => &self.customers,
            MetricCategory::Inventory => &self.inventory,
            MetricCategory::Marketing => &self.marketing,
            MetricCategory::SupplyChain => &self.supply_chain,
        }
    }
}

impl Default for DatasetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_is_total() {
        let registry = DatasetRegistry::new();
        for category in MetricCategory::all() {
            assert!(!registry.get(*category).is_empty());
        }
    }

    #[test]
    fn test_get_is_pure() {
        let registry = DatasetRegistry::new();
        for category in MetricCategory::all() {
            assert_eq!(registry.get(*category), registry.get(*category));
        }
    }

    #[test]
    fn test_customers_values() {
        let registry = DatasetRegistry::new();
        let customers = registry.get(MetricCategory::Customers);

        assert_eq!(
            customers.text(fields::AGE_GROUP).unwrap(),
            &["18-25", "26-35", "36-45", "46-60", "60+"]
        );
        assert_eq!(
            customers.numbers(fields::BUYING_TRENDS).unwrap(),
            &[70.0, 65.0, 60.0, 55.0, 50.0]
        );
    }

    #[test]
    fn test_column_lengths_match() {
        let registry = DatasetRegistry::new();
        for category in MetricCategory::all() {
            let ds = registry.get(*category);
            let rows = ds.len();
            assert!(ds.columns.iter().all(|c| c.values.len() == rows));
        }
    }
}
