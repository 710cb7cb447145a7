//! Environment-driven configuration.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

pub const PLAYS_ENV: &str = "PLAYBILL_PLAYS";
pub const INVOICES_ENV: &str = "PLAYBILL_INVOICES";
pub const FORMAT_ENV: &str = "PLAYBILL_FORMAT";
pub const INVOICE_ENV: &str = "PLAYBILL_INVOICE";

const DEFAULT_PLAYS_PATH: &str = "data/plays.json";
const DEFAULT_INVOICES_PATH: &str = "data/invoices.json";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported output format {0:?} (expected text, html or json)")]
    InvalidFormat(String),

    #[error("invalid invoice index {0:?} (expected a non-negative integer)")]
    InvalidInvoiceIndex(String),

    #[error("invoice index {index} out of range ({count} invoices loaded)")]
    InvoiceIndexOutOfRange { index: usize, count: usize },
}

/// How statements are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    /// The computed statement model itself, serialized.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub plays_path: PathBuf,
    pub invoices_path: PathBuf,
    pub format: OutputFormat,
    /// Render only this invoice (zero-based); `None` renders all of them.
    pub invoice_index: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            plays_path: PathBuf::from(DEFAULT_PLAYS_PATH),
            invoices_path: PathBuf::from(DEFAULT_INVOICES_PATH),
            format: OutputFormat::default(),
            invoice_index: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the environment in
    /// production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        match lookup(PLAYS_ENV) {
            Some(path) => config.plays_path = PathBuf::from(path),
            None => tracing::warn!("{PLAYS_ENV} not set; using {DEFAULT_PLAYS_PATH}"),
        }
        match lookup(INVOICES_ENV) {
            Some(path) => config.invoices_path = PathBuf::from(path),
            None => tracing::warn!("{INVOICES_ENV} not set; using {DEFAULT_INVOICES_PATH}"),
        }
        if let Some(format) = lookup(FORMAT_ENV) {
            config.format = format.parse()?;
        }
        if let Some(index) = lookup(INVOICE_ENV) {
            let parsed = index
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidInvoiceIndex(index.clone()))?;
            config.invoice_index = Some(parsed);
        }

        Ok(config)
    }
}
