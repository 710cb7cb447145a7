//! Built-in genre calculators.

pub mod comedy;
pub mod tragedy;

pub use comedy::ComedyCalculator;
pub use tragedy::TragedyCalculator;
