//! Barter Realization - Main Entry Point
//!
//! Runs the valuation, assessment and forecast engines over a JSON snapshot
//! of inventory, brands, channels, media and recent transactions, printing
//! results as JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use barter_realization::config::load_config;
use barter_realization::{
    InMemoryRecords, InventoryStore, PriceSourceAdapter, ProfitForecaster, TransactionAssessor,
    TransactionHistory, ValuationEngine, ValuationResult, ValuationSummary,
};

/// CLI arguments for the application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long, env = "APP_LOG_LEVEL")]
    log_level: Option<String>,

    /// JSON snapshot of inventory, brands, channels, media and transactions
    #[arg(short, long, default_value = "records.json")]
    records: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Value inventory items against reference prices
    Valuate {
        /// Inventory IDs, valued one after another
        #[arg(required = true)]
        ids: Vec<String>,

        /// Value as if resold through this channel
        #[arg(long)]
        channel: Option<String>,
    },
    /// Assess a proposed resale deal
    Assess {
        #[arg(long)]
        inventory: String,
        #[arg(long)]
        media: String,
        #[arg(long)]
        channel: String,
        /// Fixed per-unit sale price
        #[arg(long)]
        price: Option<Decimal>,
    },
    /// Project profit over the coming periods
    Forecast {
        #[arg(long)]
        periods: Option<u32>,
    },
    /// Screen an item against the intake rules
    Intake { id: String },
}

#[derive(Serialize)]
struct BatchOutput {
    results: Vec<ValuationResult>,
    errors: Vec<BatchError>,
    summary: ValuationSummary,
}

#[derive(Serialize)]
struct BatchError {
    inventory_id: String,
    error: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    let config = load_config(Some(&args.config)).context("loading configuration")?;

    // Initialize logging
    let log_level = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.settings.log_level.clone());
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting barter realization engine");
    info!("Configuration file: {}", args.config);

    let records = Arc::new(
        InMemoryRecords::from_json_file(&args.records)
            .with_context(|| format!("reading records from {}", args.records))?,
    );
    info!(items = records.inventory_len(), "Records loaded");

    match args.command {
        Command::Valuate { ids, channel } => {
            let engine = ValuationEngine::new(
                records.clone(),
                records.clone(),
                records.clone(),
                PriceSourceAdapter::with_default_catalogs(&config.pricing),
                config.valuation.clone(),
            );
            let pacing = Duration::from_millis(config.pricing.batch_pacing_ms);

            let mut results = Vec::new();
            let mut errors = Vec::new();
            for (i, id) in ids.iter().enumerate() {
                if i > 0 && !pacing.is_zero() {
                    tokio::time::sleep(pacing).await;
                }
                match engine.valuate_for_channel(id, channel.as_deref()).await {
                    Ok(result) => results.push(result),
                    Err(e) => {
                        warn!(inventory_id = %id, error = %e, "Valuation failed");
                        errors.push(BatchError {
                            inventory_id: id.clone(),
                            error: e.to_string(),
                        });
                    }
                }
            }

            let summary = ValuationSummary::from_results(&results);
            print_json(&BatchOutput {
                results,
                errors,
                summary,
            })?;
        }
        Command::Assess {
            inventory,
            media,
            channel,
            price,
        } => {
            let assessor = TransactionAssessor::new(
                records.clone(),
                records.clone(),
                records.clone(),
                records.clone(),
                config.clone(),
            );
            let assessment = assessor.assess_transaction(&inventory, &media, &channel, price)?;
            print_json(&assessment)?;
        }
        Command::Forecast { periods } => {
            let forecaster = ProfitForecaster::new(config.forecast.clone());
            let periods = periods.unwrap_or(config.forecast.default_periods);
            let history: Arc<dyn TransactionHistory> = records.clone();
            let inventory: Arc<dyn InventoryStore> = records.clone();
            let forecast = forecaster.forecast_profit(&history, &inventory, periods)?;
            print_json(&forecast)?;
        }
        Command::Intake { id } => {
            let assessor = TransactionAssessor::new(
                records.clone(),
                records.clone(),
                records.clone(),
                records.clone(),
                config.clone(),
            );
            let report = assessor.check_intake(&id)?;
            print_json(&report)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
