//! Retail Insights CLI
//!
//! Command-line interface for inspecting the dashboard:
//! - Show charts and datasets
//! - Simulate control activation sequences
//! - Generate a default config file

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use retail_insights::chart::{ChartBuilder, ChartSpec};
use retail_insights::config::generate_default_config;
use retail_insights::dataset::{ColumnValues, DatasetRegistry, MetricCategory};
use retail_insights::dispatch::{control_id, Dispatcher};
use retail_insights::overview::build_overview;

#[derive(Parser)]
#[command(name = "insights")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Retail Insights Hub - sample business analytics dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the chart for a category
    Chart {
        /// Category: sales, customers, inventory, marketing, supply-chain
        category: String,
    },

    /// Show the raw dataset for a category
    Dataset {
        /// Category: sales, customers, inventory, marketing, supply-chain
        category: String,
    },

    /// List categories and their control ids
    Categories,

    /// Simulate a sequence of control activations
    Simulate {
        /// Control ids in click order, e.g. btn-customer btn-inventory
        controls: Vec<String>,
    },

    /// Show the Mega Mart overview page
    Overview,

    /// Generate default config file
    ConfigInit {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let registry = Arc::new(DatasetRegistry::new());
    let builder = ChartBuilder::new(Arc::clone(&registry));
    let json = cli.format == "json";

    match cli.command {
        Commands::Chart { category } => {
            let category = parse_category(&category)?;
            let chart = builder.build(category);
            if json {
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                print_chart(&chart);
            }
        }

        Commands::Dataset { category } => {
            let category = parse_category(&category)?;
            let dataset = registry.get(category);
            if json {
                println!("{}", serde_json::to_string_pretty(dataset)?);
            } else {
                println!("{}", dataset.name);
                for column in &dataset.columns {
                    match &column.values {
                        ColumnValues::Text(v) => println!("  {}: {:?}", column.name, v),
                        ColumnValues::Number(v) => println!("  {}: {:?}", column.name, v),
                    }
                }
            }
        }

        Commands::Categories => {
            if json {
                let list: Vec<_> = MetricCategory::all()
                    .iter()
                    .map(|c| {
                        serde_json::json!({
                            "category": c,
                            "control": control_id(*c),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&list)?);
            } else {
                for category in MetricCategory::all() {
                    println!("{:<14} {}", category.to_string(), control_id(*category));
                }
            }
        }

        Commands::Simulate { controls } => {
            let mut dispatcher = Dispatcher::new();
            println!("initial: {}", dispatcher.active());
            for control in &controls {
                let activation = dispatcher.activate(control);
                let chart = builder.build(activation.active);
                println!(
                    "{:<18} -> {:<14} changed={:<5} chart=\"{}\"",
                    control,
                    activation.active.to_string(),
                    activation.changed(),
                    chart.title
                );
            }
        }

        Commands::Overview => {
            let page = build_overview();
            if json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                println!("{}", page.title);
                for chart in &page.charts {
                    print_chart(chart);
                }
            }
        }

        Commands::ConfigInit { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn parse_category(s: &str) -> anyhow::Result<MetricCategory> {
    s.parse().map_err(anyhow::Error::new)
}

fn print_chart(chart: &ChartSpec) {
    println!("{} [{}]", chart.title, chart.kind);
    for (label, value) in chart.labels().iter().zip(chart.values()) {
        println!("  {:<12} {}", label, value);
    }
}
