use playbill_core::{Audience, Money};

/// Audience size above which every genre starts earning volume credits.
pub const BASE_CREDIT_THRESHOLD: u32 = 30;

/// Volume credits every performance earns regardless of genre:
/// one credit per seat above [`BASE_CREDIT_THRESHOLD`].
pub fn base_volume_credits(audience: Audience) -> u64 {
    u64::from(audience.excess_over(BASE_CREDIT_THRESHOLD))
}

/// Pricing rules for one genre.
///
/// Implementations must be pure: the same audience always yields the same
/// amount and credits.
pub trait PerformanceCalculator: Send + Sync {
    /// Genre tag this calculator prices (matches `Play::genre`).
    fn genre(&self) -> &str;

    /// Price of a performance in minor currency units.
    fn amount(&self, audience: Audience) -> Money;

    /// Volume credits earned by a performance.
    ///
    /// Defaults to the base rule. Genres granting a bonus should add to
    /// [`base_volume_credits`] rather than replace it.
    fn volume_credits(&self, audience: Audience) -> u64 {
        base_volume_credits(audience)
    }

    fn quote(&self, audience: Audience) -> Quote {
        Quote {
            amount: self.amount(audience),
            volume_credits: self.volume_credits(audience),
        }
    }
}

/// Price and credits computed for one performance.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Quote {
    pub amount: Money,
    pub volume_credits: u64,
}
