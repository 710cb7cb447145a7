//! `playbill` presentation layer.
//!
//! Loads the play catalog and invoices from JSON, builds one statement per
//! invoice and renders them in the configured format. All pricing lives in the
//! domain crates; this crate only wires IO and configuration around them.

pub mod config;
pub mod load;
pub mod output;

pub use config::{Config, ConfigError, OutputFormat};
pub use output::{render_statements, run};
