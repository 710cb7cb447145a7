//! `playbill-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog, pricing
//! and statement crates (no IO, no rendering).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::PlayId;
pub use value_object::{Audience, Money, ValueObject};
