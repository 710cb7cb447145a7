use playbill_catalog::Genre;
use playbill_core::{Audience, Money};

use crate::calculator::PerformanceCalculator;

const BASE_AMOUNT: u64 = 40_000;
const SEAT_THRESHOLD: u32 = 30;
const PER_EXTRA_SEAT: u64 = 1_000;

/// Tragedy: flat fee, plus a surcharge per seat beyond 30. No credit bonus.
#[derive(Debug, Default, Clone, Copy)]
pub struct TragedyCalculator;

impl PerformanceCalculator for TragedyCalculator {
    fn genre(&self) -> &str {
        Genre::TRAGEDY
    }

    fn amount(&self, audience: Audience) -> Money {
        let extra_seats = u64::from(audience.excess_over(SEAT_THRESHOLD));
        Money::from_minor(BASE_AMOUNT + PER_EXTRA_SEAT * extra_seats)
    }
}
