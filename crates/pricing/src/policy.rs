//! Genre-keyed dispatch to pricing calculators.

use std::collections::HashMap;

use playbill_catalog::Genre;
use playbill_core::{Audience, DomainError, DomainResult, Money};

use crate::calculator::{PerformanceCalculator, Quote};
use crate::genres::{ComedyCalculator, TragedyCalculator};

/// Registry of pricing rules, one calculator per genre tag.
///
/// Adding a genre means registering another [`PerformanceCalculator`]; existing
/// calculators are never touched. A genre without a calculator is an
/// `UnknownGenre` error, never a silent default.
pub struct PricingPolicy {
    calculators: HashMap<String, Box<dyn PerformanceCalculator>>,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl core::fmt::Debug for PricingPolicy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut genres: Vec<&str> = self.genres().collect();
        genres.sort_unstable();
        f.debug_struct("PricingPolicy")
            .field("genres", &genres)
            .finish()
    }
}

impl PricingPolicy {
    /// A policy with no genres registered.
    pub fn empty() -> Self {
        Self {
            calculators: HashMap::new(),
        }
    }

    /// The company's current rules: comedy and tragedy.
    pub fn standard() -> Self {
        Self::empty()
            .with_calculator(ComedyCalculator)
            .with_calculator(TragedyCalculator)
    }

    pub fn with_calculator(mut self, calculator: impl PerformanceCalculator + 'static) -> Self {
        self.register(Box::new(calculator));
        self
    }

    /// Register a calculator under its genre tag, replacing any previous one.
    pub fn register(&mut self, calculator: Box<dyn PerformanceCalculator>) {
        let genre = calculator.genre().to_string();
        if self.calculators.insert(genre.clone(), calculator).is_some() {
            tracing::debug!(genre = %genre, "replaced pricing calculator");
        }
    }

    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.calculators.keys().map(String::as_str)
    }

    pub fn calculator_for(&self, genre: &Genre) -> DomainResult<&dyn PerformanceCalculator> {
        self.calculators
            .get(genre.as_str())
            .map(|c| c.as_ref())
            .ok_or_else(|| DomainError::unknown_genre(genre.as_str()))
    }

    pub fn amount(&self, genre: &Genre, audience: Audience) -> DomainResult<Money> {
        Ok(self.calculator_for(genre)?.amount(audience))
    }

    pub fn volume_credits(&self, genre: &Genre, audience: Audience) -> DomainResult<u64> {
        Ok(self.calculator_for(genre)?.volume_credits(audience))
    }

    pub fn quote(&self, genre: &Genre, audience: Audience) -> DomainResult<Quote> {
        Ok(self.calculator_for(genre)?.quote(audience))
    }
}
