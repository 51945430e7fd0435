//! Benchmarks for chart building and activation dispatch

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use retail_insights::chart::ChartBuilder;
use retail_insights::dataset::{DatasetRegistry, MetricCategory};
use retail_insights::dispatch::Dispatcher;

fn bench_build_chart(c: &mut Criterion) {
    let registry = Arc::new(DatasetRegistry::new());
    let builder = ChartBuilder::new(registry);

    c.bench_function("build_chart_sales", |b| {
        b.iter(|| builder.build(black_box(MetricCategory::Sales)))
    });

    c.bench_function("build_all_charts", |b| b.iter(|| builder.build_all()));
}

fn bench_dispatch(c: &mut Criterion) {
    c.bench_function("activate_cycle", |b| {
        let mut dispatcher = Dispatcher::new();
        b.iter(|| {
            dispatcher.activate(black_box("btn-customer"));
            dispatcher.activate(black_box("btn-unknown"));
            dispatcher.activate(black_box("btn-sales"));
        })
    });
}

criterion_group!(benches, bench_build_chart, bench_dispatch);
criterion_main!(benches);
