use serde::Serialize;

use playbill_catalog::Play;
use playbill_core::{Audience, DomainError, DomainResult, Money, PlayId};
use playbill_pricing::Quote;

/// A performance with its resolved play and computed price/credits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedPerformance {
    #[serde(rename = "playID")]
    play_id: PlayId,
    audience: Audience,
    play: Play,
    amount: Money,
    volume_credits: u64,
}

impl EnrichedPerformance {
    pub fn new(play_id: PlayId, audience: Audience, play: Play, quote: Quote) -> Self {
        Self {
            play_id,
            audience,
            play,
            amount: quote.amount,
            volume_credits: quote.volume_credits,
        }
    }

    pub fn play_id(&self) -> &PlayId {
        &self.play_id
    }

    pub fn audience(&self) -> Audience {
        self.audience
    }

    pub fn play(&self) -> &Play {
        &self.play
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn volume_credits(&self) -> u64 {
        self.volume_credits
    }
}

/// Fully computed statement for one invoice.
///
/// Invariant: `total_amount` and `total_volume_credits` are the sums over
/// `performances`. They are derived in [`StatementData::new`] and cannot be
/// set independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementData {
    customer: String,
    performances: Vec<EnrichedPerformance>,
    total_amount: Money,
    total_volume_credits: u64,
}

impl StatementData {
    /// Assemble a statement, deriving totals from the performances.
    ///
    /// Fails with `InvariantViolation` if a total overflows.
    pub fn new(
        customer: impl Into<String>,
        performances: Vec<EnrichedPerformance>,
    ) -> DomainResult<Self> {
        let total_amount = Money::try_sum(performances.iter().map(EnrichedPerformance::amount))?;
        let total_volume_credits = performances.iter().try_fold(0u64, |acc, p| {
            acc.checked_add(p.volume_credits)
                .ok_or_else(|| DomainError::invariant("volume credit total overflow"))
        })?;

        Ok(Self {
            customer: customer.into(),
            performances,
            total_amount,
            total_volume_credits,
        })
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn performances(&self) -> &[EnrichedPerformance] {
        &self.performances
    }

    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    pub fn total_volume_credits(&self) -> u64 {
        self.total_volume_credits
    }
}
