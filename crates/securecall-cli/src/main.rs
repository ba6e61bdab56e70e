//! `SecureCall` analytics CLI
//!
//! Renders the call-detection dashboard views over a JSON dataset, or over
//! the built-in demo data when no dataset is given.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

mod commands;
mod output;

use clap::{Parser, Subcommand};
use securecall_analytics::Dataset;
use securecall_core::{Config, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Command line interface for `SecureCall` analytics
#[derive(Parser)]
#[command(
    name = "securecall",
    version = env!("CARGO_PKG_VERSION"),
    about = "AI call detection and fraud prevention analytics",
    long_about = "Filters, summarizes and exports AI call detection data: call listings, KPI summaries, trend charts, fraud alerts, the manual review queue and system health."
)]
struct Cli {
    /// Dataset file (JSON); omit to use the built-in demo data
    #[arg(long, value_name = "FILE", global = true)]
    data: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    /// Log format (json, pretty)
    #[arg(long, default_value = "pretty", global = true)]
    log_format: String,

    /// Subcommand
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
enum Commands {
    /// List calls with filtering
    Calls {
        /// Case-insensitive search over call and caller ids
        #[arg(short, long, default_value = "")]
        search: String,

        /// Detected type (all, human, ai, uncertain)
        #[arg(long = "type", value_name = "TYPE", default_value = "all")]
        detected_type: String,

        /// Confidence bucket (all, high, medium, low)
        #[arg(long, value_name = "BUCKET", default_value = "all")]
        confidence: String,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// KPI summary over the loaded calls
    Summary {
        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Volume, distribution, confidence and regional trends
    Trends {
        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Fraud alert feed and repeat offenders
    Alerts {
        /// Minimum flagged AI calls to count as a repeat offender
        #[arg(long, value_name = "N", default_value = "3")]
        min_flagged: u32,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Manual review queue and review candidates
    Reviews {
        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// System health, model performance and queue status
    Health {
        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Export a filtered call listing as CSV
    Export {
        /// Case-insensitive search over call and caller ids
        #[arg(short, long, default_value = "")]
        search: String,

        /// Detected type (all, human, ai, uncertain)
        #[arg(long = "type", value_name = "TYPE", default_value = "all")]
        detected_type: String,

        /// Confidence bucket (all, high, medium, low)
        #[arg(long, value_name = "BUCKET", default_value = "all")]
        confidence: String,

        /// Output file path
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
}

fn init_logging(cli: &Cli) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if cli.log_format == "json" {
        let _ = registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init();
    } else {
        let _ = registry.with(tracing_subscriber::fmt::layer()).try_init();
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn load_dataset(path: Option<&Path>) -> Result<Dataset> {
    match path {
        Some(path) => Dataset::from_json_file(path),
        None => {
            info!("no dataset given, using built-in demo data");
            Ok(Dataset::demo())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli);

    let config = load_config(cli.config.as_deref())?;
    let dataset = load_dataset(cli.data.as_deref())?;

    // The demo dataset carries fixed timestamps, so relative ages anchor to
    // its reference time instead of the wall clock
    let now = if cli.data.is_none() {
        Dataset::demo_reference_time()
    } else {
        chrono::Utc::now()
    };

    match cli.command {
        Commands::Calls {
            search,
            detected_type,
            confidence,
            format,
        } => commands::calls(&dataset, &search, &detected_type, &confidence, &format),
        Commands::Summary { format } => {
            commands::summary(&dataset, &config.detection, &format)
        }
        Commands::Trends { format } => commands::trends(&dataset, &format),
        Commands::Alerts { min_flagged, format } => {
            commands::alerts(&dataset, min_flagged, now, &format)
        }
        Commands::Reviews { format } => {
            commands::reviews(&dataset, &config.detection, now, &format)
        }
        Commands::Health { format } => commands::health(&dataset, &format),
        Commands::Export {
            search,
            detected_type,
            confidence,
            output,
        } => commands::export(&dataset, &search, &detected_type, &confidence, &output),
    }
}
