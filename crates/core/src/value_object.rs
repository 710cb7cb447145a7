//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// create a new one.
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: debuggable in logs and tests
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Number of seats sold for a performance.
///
/// Always non-negative; raw (signed) input is validated through
/// [`Audience::try_from`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Audience(u32);

impl Audience {
    pub const fn new(seats: u32) -> Self {
        Self(seats)
    }

    pub const fn seats(self) -> u32 {
        self.0
    }

    /// Seats above `threshold`, or zero.
    pub const fn excess_over(self, threshold: u32) -> u32 {
        self.0.saturating_sub(threshold)
    }
}

impl ValueObject for Audience {}

impl TryFrom<i64> for Audience {
    type Error = DomainError;

    fn try_from(raw: i64) -> DomainResult<Self> {
        if raw < 0 {
            return Err(DomainError::invalid_input(format!(
                "audience must be non-negative (got {raw})"
            )));
        }
        u32::try_from(raw)
            .map(Self)
            .map_err(|_| DomainError::invalid_input(format!("audience out of range (got {raw})")))
    }
}

impl core::fmt::Display for Audience {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Amount of money in the smallest currency unit (e.g., cents).
///
/// Single-currency by construction; formatting lives with the renderers.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    pub const fn minor_units(self) -> u64 {
        self.0
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Sum amounts, failing on overflow instead of wrapping.
    pub fn try_sum<I>(amounts: I) -> DomainResult<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts.into_iter().try_fold(Money::ZERO, |acc, m| {
            acc.checked_add(m).ok_or_else(|| DomainError::invariant("money total overflow"))
        })
    }
}

impl ValueObject for Money {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_audience_is_invalid_input() {
        match Audience::try_from(-1) {
            Err(DomainError::InvalidInput(msg)) => assert!(msg.contains("non-negative")),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn zero_audience_is_valid() {
        assert_eq!(Audience::try_from(0).unwrap().seats(), 0);
    }

    #[test]
    fn audience_beyond_u32_is_rejected() {
        assert!(Audience::try_from(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn excess_over_saturates_at_zero() {
        assert_eq!(Audience::new(20).excess_over(30), 0);
        assert_eq!(Audience::new(55).excess_over(30), 25);
    }

    #[test]
    fn try_sum_detects_overflow() {
        let err = Money::try_sum([Money::from_minor(u64::MAX), Money::from_minor(1)]).unwrap_err();
        assert_eq!(err, DomainError::invariant("money total overflow"));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any non-negative i32 audience round-trips through validation.
            #[test]
            fn non_negative_audience_is_accepted(raw in 0i64..=i64::from(i32::MAX)) {
                let audience = Audience::try_from(raw).unwrap();
                prop_assert_eq!(i64::from(audience.seats()), raw);
            }

            /// Property: try_sum agrees with plain addition when nothing overflows.
            #[test]
            fn try_sum_matches_plain_sum(
                values in proptest::collection::vec(0u64..1_000_000, 0..50)
            ) {
                let expected: u64 = values.iter().sum();
                let total = Money::try_sum(values.into_iter().map(Money::from_minor)).unwrap();
                prop_assert_eq!(total.minor_units(), expected);
            }
        }
    }
}
