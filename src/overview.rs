//! Mega Mart Overview Page
//!
//! A second, independent demo dashboard: a fixed page of three charts
//! over one monthly dataset. No selection state; the page is built once
//! and never varies.

use serde::{Deserialize, Serialize};

use crate::chart::{ChartKind, ChartSpec};
use crate::dataset::MetricDataset;

const MONTH: &str = "Month";
const SALES: &str = "Sales";
const CUSTOMERS: &str = "Customers";
const INVENTORY_LEVEL: &str = "Inventory Level";

/// The Mega Mart monthly sample dataset
pub fn mega_mart_dataset() -> MetricDataset {
    MetricDataset::new("Mega Mart")
        .text_column(
            MONTH,
            vec!["January", "February", "March", "April", "May", "June"],
        )
        .number_column(
            SALES,
            vec![20000.0, 24000.0, 22000.0, 28000.0, 30000.0, 32000.0],
        )
        .number_column(CUSTOMERS, vec![200.0, 250.0, 210.0, 270.0, 290.0, 310.0])
        .number_column(INVENTORY_LEVEL, vec![100.0, 80.0, 90.0, 70.0, 60.0, 50.0])
}

/// A fixed page of charts rendered together
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverviewPage {
    /// Page heading
    pub title: String,
    /// Charts in display order
    pub charts: Vec<ChartSpec>,
}

/// Build the Mega Mart overview page
pub fn build_overview() -> OverviewPage {
    let dataset = mega_mart_dataset();

    let chart = |kind, title: &str, value_field: &str| ChartSpec {
        kind,
        title: title.to_string(),
        label_field: MONTH.to_string(),
        value_field: value_field.to_string(),
        source: dataset.clone(),
    };

    OverviewPage {
        title: "Mega Mart Data Analytics Dashboard".to_string(),
        charts: vec![
            chart(ChartKind::Line, "Sales Performance Over Time", SALES),
            chart(ChartKind::Bar, "Customer Demographics", CUSTOMERS),
            chart(ChartKind::Pie, "Inventory Levels", INVENTORY_LEVEL),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_shape() {
        let page = build_overview();

        assert_eq!(page.title, "Mega Mart Data Analytics Dashboard");
        assert_eq!(page.charts.len(), 3);
        assert_eq!(page.charts[0].kind, ChartKind::Line);
        assert_eq!(page.charts[1].kind, ChartKind::Bar);
        assert_eq!(page.charts[2].kind, ChartKind::Pie);
    }

    #[test]
    fn test_overview_fields_resolve() {
        let page = build_overview();
        for chart in &page.charts {
            assert_eq!(chart.labels().len(), 6);
            assert_eq!(chart.values().len(), 6);
        }
    }

    #[test]
    fn test_overview_is_static() {
        assert_eq!(build_overview(), build_overview());
    }
}
