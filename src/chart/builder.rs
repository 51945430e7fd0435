//! Chart Builder
//!
//! Pure mapping from metric category to its chart. The geometry, title,
//! and field selectors per category are fixed; the dataset comes from the
//! registry. Total over the closed category set.

use std::sync::Arc;

use crate::dataset::{fields, DatasetRegistry, MetricCategory};

use super::spec::{ChartKind, ChartSpec};

/// Builds the chart for a metric category
#[derive(Debug, Clone)]
pub struct ChartBuilder {
    registry: Arc<DatasetRegistry>,
}

impl ChartBuilder {
    /// Create a builder over a dataset registry
    pub fn new(registry: Arc<DatasetRegistry>) -> Self {
        Self { registry }
    }

    /// Build the chart for a category
    ///
    /// No error conditions: input is restricted to the closed category
    /// set, and every category has a dataset.
    pub fn build(&self, category: MetricCategory) -> ChartSpec {
        let (kind, title, label_field, value_field) = match category {
            MetricCategory::Sales => (
                ChartKind::Line,
                "Sales Performance Over Time",
                fields::MONTH,
                fields::TOTAL_SALES,
            ),
            MetricCategory::Customers => (
                ChartKind::Pie,
                "Customer Demographics",
                fields::AGE_GROUP,
                fields::BUYING_TRENDS,
            ),
            MetricCategory::Inventory => (
                ChartKind::Bar,
                "Current Inventory Levels",
                fields::PRODUCT,
                fields::STOCK,
            ),
            MetricCategory::Marketing => (
                ChartKind::Bar,
                "Marketing ROI",
                fields::CAMPAIGN,
                fields::ROI,
            ),
            MetricCategory::SupplyChain => (
                ChartKind::Line,
                "Supply Chain Efficiency",
                fields::MONTH,
                fields::EFFICIENCY,
            ),
        };

        ChartSpec {
            kind,
            title: title.to_string(),
            label_field: label_field.to_string(),
            value_field: value_field.to_string(),
            source: self.registry.get(category).clone(),
        }
    }

    /// Build all five charts, in category order
    pub fn build_all(&self) -> Vec<ChartSpec> {
        MetricCategory::all()
            .iter()
            .map(|c| self.build(*c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> ChartBuilder {
        ChartBuilder::new(Arc::new(DatasetRegistry::new()))
    }

    #[test]
    fn test_chart_table() {
        let builder = builder();

        let sales = builder.build(MetricCategory::Sales);
        assert_eq!(sales.kind, ChartKind::Line);
        assert_eq!(sales.title, "Sales Performance Over Time");
        assert_eq!(sales.label_field, fields::MONTH);
        assert_eq!(sales.value_field, fields::TOTAL_SALES);

        let customers = builder.build(MetricCategory::Customers);
        assert_eq!(customers.kind, ChartKind::Pie);
        assert_eq!(customers.title, "Customer Demographics");
        assert_eq!(customers.label_field, fields::AGE_GROUP);
        assert_eq!(customers.value_field, fields::BUYING_TRENDS);

        let inventory = builder.build(MetricCategory::Inventory);
        assert_eq!(inventory.kind, ChartKind::Bar);
        assert_eq!(inventory.title, "Current Inventory Levels");
        assert_eq!(inventory.label_field, fields::PRODUCT);
        assert_eq!(inventory.value_field, fields::STOCK);

        let marketing = builder.build(MetricCategory::Marketing);
        assert_eq!(marketing.kind, ChartKind::Bar);
        assert_eq!(marketing.title, "Marketing ROI");
        assert_eq!(marketing.label_field, fields::CAMPAIGN);
        assert_eq!(marketing.value_field, fields::ROI);

        let supply = builder.build(MetricCategory::SupplyChain);
        assert_eq!(supply.kind, ChartKind::Line);
        assert_eq!(supply.title, "Supply Chain Efficiency");
        assert_eq!(supply.values(), &[95.0, 97.0, 96.0]);
    }

    #[test]
    fn test_build_is_deterministic() {
        let builder = builder();
        for category in MetricCategory::all() {
            assert_eq!(builder.build(*category), builder.build(*category));
        }
    }

    #[test]
    fn test_fields_resolve_in_source() {
        let builder = builder();
        for category in MetricCategory::all() {
            let spec = builder.build(*category);
            assert!(!spec.labels().is_empty(), "labels missing for {}", category);
            assert!(!spec.values().is_empty(), "values missing for {}", category);
            assert_eq!(spec.labels().len(), spec.values().len());
        }
    }

    #[test]
    fn test_build_all_order() {
        let charts = builder().build_all();
        assert_eq!(charts.len(), 5);
        assert_eq!(charts[0].title, "Sales Performance Over Time");
        assert_eq!(charts[4].title, "Supply Chain Efficiency");
    }
}
