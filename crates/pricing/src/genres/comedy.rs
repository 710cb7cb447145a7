use playbill_catalog::Genre;
use playbill_core::{Audience, Money};

use crate::calculator::{PerformanceCalculator, base_volume_credits};

const BASE_AMOUNT: u64 = 30_000;
const SEAT_THRESHOLD: u32 = 20;
const LARGE_HOUSE_FEE: u64 = 10_000;
const PER_EXTRA_SEAT: u64 = 500;
const PER_SEAT: u64 = 300;
/// One bonus credit per this many attendees.
const BONUS_CREDIT_DIVISOR: u32 = 5;

/// Comedy: base fee, a large-house fee plus per-seat surcharge beyond 20
/// seats, and a per-seat charge on every attendee. Earns bonus credits.
#[derive(Debug, Default, Clone, Copy)]
pub struct ComedyCalculator;

impl PerformanceCalculator for ComedyCalculator {
    fn genre(&self) -> &str {
        Genre::COMEDY
    }

    fn amount(&self, audience: Audience) -> Money {
        let seats = u64::from(audience.seats());
        let mut amount = BASE_AMOUNT;
        if audience.seats() > SEAT_THRESHOLD {
            let extra_seats = u64::from(audience.excess_over(SEAT_THRESHOLD));
            amount += LARGE_HOUSE_FEE + PER_EXTRA_SEAT * extra_seats;
        }
        amount += PER_SEAT * seats;
        Money::from_minor(amount)
    }

    fn volume_credits(&self, audience: Audience) -> u64 {
        base_volume_credits(audience) + u64::from(audience.seats() / BONUS_CREDIT_DIVISOR)
    }
}
