//! Vitrine CLI - Price resolution and formatting tools.
//!
//! # Usage
//!
//! ```bash
//! # Resolve a product's listing price (JSON output)
//! vitrine resolve product.json
//!
//! # Resolve preferring a currency, printing the display string
//! vitrine resolve product.json --currency cur_eur --format
//!
//! # Format an amount
//! vitrine format 1234.5 --code EUR
//! vitrine format 1234.5 --currency currency.json
//! ```
//!
//! # Commands
//!
//! - `resolve` - Resolve the listing price of a product document
//! - `format` - Format an amount with a currency code or record
//!
//! Logs go to stderr; see [`config`] for the environment variables.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitrine_core::CurrencyId;

mod commands;
mod config;
mod error;

use commands::format::CurrencySource;
use config::{CliConfig, LogFormat};
use error::CliError;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about = "Vitrine pricing tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the listing price of a product
    Resolve {
        /// Product JSON file (`-` for stdin)
        file: String,

        /// Preferred currency id (overrides `VITRINE_PREFERRED_CURRENCY`)
        #[arg(short, long)]
        currency: Option<String>,

        /// Print the display string instead of JSON
        #[arg(short, long)]
        format: bool,
    },
    /// Format an amount for display
    Format {
        /// Amount to format
        #[arg(allow_negative_numbers = true)]
        amount: String,

        /// ISO currency code (e.g. EUR)
        #[arg(long, conflicts_with = "currency")]
        code: Option<String>,

        /// Currency record JSON file (`-` for stdin)
        #[arg(long)]
        currency: Option<String>,
    },
}

fn init_tracing(config: &CliConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let is_json = config.log_format == LogFormat::Json;
    let json_layer = is_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!is_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

#[allow(clippy::print_stderr)]
fn main() {
    let cli = Cli::parse();

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // Tracing is not initialized yet
            eprintln!("{}", CliError::from(e));
            std::process::exit(1);
        }
    };

    init_tracing(&config);

    if let Err(e) = run(cli, &config) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &CliConfig) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Resolve {
            file,
            currency,
            format,
        } => {
            let preferred = currency
                .map(CurrencyId::new)
                .or_else(|| config.preferred_currency.clone());
            commands::resolve::run(&file, preferred.as_ref(), format, &mut out)?;
        }
        Commands::Format {
            amount,
            code,
            currency,
        } => {
            let source = match (code, currency) {
                (Some(code), _) => CurrencySource::Code(code),
                (None, Some(path)) => CurrencySource::File(path),
                (None, None) => CurrencySource::None,
            };
            commands::format::run(&amount, &source, &mut out)?;
        }
    }
    Ok(())
}
