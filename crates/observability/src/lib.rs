//! Tracing/logging setup shared by binaries.
//!
//! Library crates only emit `tracing` events; installing a subscriber is the
//! binary's job.

pub use crate::tracing::LogFormat;

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(LogFormat::from_env());
}

/// Tracing configuration (filters, layers).
pub mod tracing;
