//! Earn CLI - Payoff Curves and Lend Pool Tables
//!
//! Renders the data behind the earn payoff chart and the lend pool pages.
//!
//! # Commands
//!
//! - `earn curve --variant <tag>` - Sample a payoff curve (json, csv, table)
//! - `earn moneyness --variant <tag> --performance <p>` - Moneyness of a performance value
//! - `earn pools` - Lend pool registry
//! - `earn check` - Show resolved configuration
//!
//! # Configuration
//!
//! Defaults < `earn.toml` < `EARN_*` environment variables < command flags.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

/// Earn payoff and lend pool CLI
#[derive(Parser)]
#[command(name = "earn")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "earn.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample a payoff curve for a product variant
    Curve {
        #[command(flatten)]
        params: commands::curve::CurveParams,

        /// Emit every n-th point
        #[arg(long, default_value = "1")]
        step: usize,

        /// Output format (json, csv, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Classify a performance value and compute its moneyness
    Moneyness {
        /// Product tag (rEARN, rEARN-stETH)
        #[arg(long)]
        variant: Option<String>,

        /// Realized performance as a fraction
        #[arg(short, long, allow_hyphen_values = true)]
        performance: f64,

        /// Hovered performance, overrides the realized value when non-zero
        #[arg(long, allow_hyphen_values = true)]
        hover: Option<f64>,

        /// Lower barrier as a fraction
        #[arg(long, allow_hyphen_values = true)]
        lower: Option<f64>,

        /// Upper barrier as a fraction
        #[arg(long, allow_hyphen_values = true)]
        upper: Option<f64>,
    },

    /// List lend pools with gas limits, assets and fees
    Pools {
        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Show resolved configuration and known product variants
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::build_config(&cli.config)?;

    let default_level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_filter_str()
    };

    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Commands::Curve {
            params,
            step,
            format,
        } => commands::curve::run(&config, &params, step, &format, &mut stdout),
        Commands::Moneyness {
            variant,
            performance,
            hover,
            lower,
            upper,
        } => commands::moneyness::run(
            &config,
            variant.as_deref(),
            performance,
            hover,
            lower,
            upper,
            &mut stdout,
        ),
        Commands::Pools { format } => commands::pools::run(&format, &mut stdout),
        Commands::Check => commands::check::run(&config, &cli.config, &mut stdout),
    }
}
