//! Money type with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of fractional digits used when rendering money.
pub const MONEY_DISPLAY_SCALE: u32 = 2;

/// Symbol printed in front of amounts.
pub const CURRENCY_SYMBOL: &str = "$";

/// A US dollar amount.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
/// Renders as `$` followed by exactly two decimals, e.g. `$125.00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    /// The amount in dollars.
    pub amount: Decimal,
}

impl Money {
    /// Creates a US dollar amount.
    #[must_use]
    pub const fn usd(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Returns the amount rounded to display precision.
    ///
    /// Exact midpoints go to the even neighbour, so `10.005` becomes `10.00`
    /// and `10.015` becomes `10.02`.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        self.amount
            .round_dp_with_strategy(MONEY_DISPLAY_SCALE, RoundingStrategy::MidpointNearestEven)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{CURRENCY_SYMBOL}{:.2}", self.rounded())
    }
}
