//! Percentage values rendered with one decimal place.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of fractional digits used when rendering percentages.
pub const PERCENT_DISPLAY_SCALE: u32 = 1;

/// A percentage on the 0-100 scale, e.g. `Percent::new(dec!(36))` is 36%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(Decimal);

impl Percent {
    /// Wraps a value already expressed on the 0-100 scale.
    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns `part / whole * 100`, or `None` when `whole` is zero.
    #[must_use]
    pub fn of(part: usize, whole: usize) -> Option<Self> {
        if whole == 0 {
            return None;
        }
        let value = Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(whole);
        Some(Self(value))
    }

    /// Returns the unrounded value.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// Returns the value rounded to display precision, exact midpoints to
    /// the even neighbour (`6.25` becomes `6.2`).
    #[must_use]
    pub fn rounded(self) -> Decimal {
        self.0
            .round_dp_with_strategy(PERCENT_DISPLAY_SCALE, RoundingStrategy::MidpointNearestEven)
    }
}

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.rounded())
    }
}
