//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `VITRINE_LOG` - tracing filter directive (default: `warn`)
//! - `VITRINE_LOG_FORMAT` - `pretty` or `json` (default: `pretty`)
//! - `VITRINE_PREFERRED_CURRENCY` - currency id preferred by `resolve` when
//!   `--currency` is not given

use thiserror::Error;
use vitrine_core::CurrencyId;

const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable text.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Tracing filter directive
    pub log_filter: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Default preferred currency id for price resolution
    pub preferred_currency: Option<CurrencyId>,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let log_filter = get("VITRINE_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());

        let log_format = match get("VITRINE_LOG_FORMAT").as_deref().map(str::trim) {
            None => LogFormat::default(),
            Some(v) if v.eq_ignore_ascii_case("pretty") => LogFormat::Pretty,
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidEnvVar(
                    "VITRINE_LOG_FORMAT".to_owned(),
                    format!("expected `pretty` or `json`, got `{other}`"),
                ));
            }
        };

        let preferred_currency =
            get("VITRINE_PREFERRED_CURRENCY").map(|v| CurrencyId::new(v.trim()));

        Ok(Self {
            log_filter,
            log_format,
            preferred_currency,
        })
    }
}
