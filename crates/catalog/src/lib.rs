//! Play catalog.
//!
//! Read-only reference data: which plays exist, what they are called and which
//! genre drives their pricing. Loaded wholesale by the caller and shared by
//! reference with the statement builder.

pub mod catalog;
pub mod play;

pub use catalog::PlayCatalog;
pub use play::{Genre, Play};
