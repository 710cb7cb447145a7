//! Pricing policy.
//!
//! Computes the price (in minor currency units) and volume credits of a single
//! performance from its play's genre and audience size. Each genre contributes a
//! [`PerformanceCalculator`]; [`PricingPolicy`] dispatches by genre tag.
//!
//! Pure, deterministic logic: no IO, no shared mutable state.

pub mod calculator;
pub mod genres;
pub mod policy;

pub use calculator::{PerformanceCalculator, Quote, base_volume_credits};
pub use genres::{ComedyCalculator, TragedyCalculator};
pub use policy::PricingPolicy;
