//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Bookkeeping defaults.
    #[serde(default)]
    pub bookkeeping: BookkeepingConfig,
    /// Net-worth projection defaults.
    #[serde(default)]
    pub projection: ProjectionConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_filter() -> String {
    "kassa=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

/// Bookkeeping configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BookkeepingConfig {
    /// Functional currency of the books.
    #[serde(default = "default_currency")]
    pub currency: Currency,
}

fn default_currency() -> Currency {
    Currency::Sek
}

impl Default for BookkeepingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

/// Projection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectionConfig {
    /// Value used at year zero when the caller supplies no baseline.
    #[serde(default)]
    pub default_baseline: Decimal,
    /// Distance in years between sampled chart points.
    #[serde(default = "default_sample_step")]
    pub sample_step_years: Decimal,
}

fn default_sample_step() -> Decimal {
    Decimal::ONE
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            default_baseline: Decimal::ZERO,
            sample_step_years: default_sample_step(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("KASSA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
