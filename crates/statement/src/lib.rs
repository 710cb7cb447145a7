//! Statement building.
//!
//! Turns a raw [`Invoice`] into a fully computed [`StatementData`]: every
//! performance enriched with its play, price and volume credits, plus totals.
//! Implemented as deterministic domain logic (no IO, no rendering).

pub mod builder;
pub mod invoice;
pub mod statement;

pub use builder::{StatementBuilder, create_statement_data};
pub use invoice::{Invoice, Performance};
pub use statement::{EnrichedPerformance, StatementData};
