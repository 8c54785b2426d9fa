//! Report error types.

use thiserror::Error;

use crate::math::MathError;

/// Errors that can occur during report generation.
///
/// The `Display` text of the empty-input variants is the exact sentence
/// rendered in place of a report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// No users to report on.
    #[error("No users found in the system.")]
    NoUsers,

    /// No transactions to report on.
    #[error("No transactions found in the system.")]
    NoTransactions,

    /// Spending analysis needs at least one completed transaction.
    #[error("No completed transactions found")]
    NoCompletedTransactions,

    /// Aggregate calculation failed.
    #[error(transparent)]
    Math(#[from] MathError),
}

impl ReportError {
    /// Returns true for the "nothing to report" variants.
    #[must_use]
    pub const fn is_empty_input(&self) -> bool {
        matches!(
            self,
            Self::NoUsers | Self::NoTransactions | Self::NoCompletedTransactions
        )
    }
}
