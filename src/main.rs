//! Retail Insights demo walkthrough
//!
//! Builds the registry and charts, then simulates a short activation
//! sequence the way a Presentation Shell would drive the dispatcher.

use std::sync::Arc;

use retail_insights::chart::ChartBuilder;
use retail_insights::dataset::{DatasetRegistry, MetricCategory};
use retail_insights::dispatch::Dispatcher;
use retail_insights::overview::build_overview;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "retail_insights=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Retail Insights Hub v{}", env!("CARGO_PKG_VERSION"));

    let registry = Arc::new(DatasetRegistry::new());
    let builder = ChartBuilder::new(Arc::clone(&registry));

    // Walk the five charts
    for category in MetricCategory::all() {
        let chart = builder.build(*category);
        tracing::info!(
            category = %category,
            kind = %chart.kind,
            title = %chart.title,
            points = chart.values().len(),
            "Built chart"
        );
    }

    // Simulate a client clicking through the dashboard
    let mut dispatcher = Dispatcher::new();
    tracing::info!(active = %dispatcher.active(), "Initial selection");

    for control in [
        "btn-customer",
        "btn-unknown",
        "btn-customer",
        "btn-supply-chain",
    ] {
        let activation = dispatcher.activate(control);
        let chart = builder.build(activation.active);
        tracing::info!(
            control,
            active = %activation.active,
            changed = activation.changed(),
            chart = %chart.title,
            "Dispatched activation"
        );
    }

    // The second demo page
    let page = build_overview();
    tracing::info!(
        title = %page.title,
        charts = page.charts.len(),
        "Built overview page"
    );

    Ok(())
}
