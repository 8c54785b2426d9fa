//! Report generation service.

use std::path::Path;

use indexmap::IndexMap;
use rust_decimal::Decimal;
use tally_shared::types::{Money, Percent};
use tracing::{debug, warn};

use super::error::ReportError;
use super::types::{
    FinancialSummary, RecentTransaction, SpendingAnalysis, TransactionStatistics,
    TransactionSummaryReport, TypeBreakdown, UserDetail, UserReport, UserSummary,
};
use crate::clock::{Clock, SystemClock};
use crate::math::{MathError, calculate_average, calculate_total};
use crate::models::{Transaction, TransactionStatus, TransactionType, User};
use crate::storage::FileSink;

/// Number of entries in the recent transactions section.
pub const RECENT_TRANSACTIONS_LIMIT: usize = 5;

/// Default file name for the user report.
pub const DEFAULT_USER_REPORT_FILE: &str = "user_report.txt";

/// Default file name for the transaction summary.
pub const DEFAULT_TRANSACTION_SUMMARY_FILE: &str = "transaction_summary.txt";

/// Service for generating user and transaction reports.
///
/// The clock supplies the "Generated on" timestamp. Inputs are borrowed,
/// never reordered in place, and may arrive in any order.
pub struct ReportService<C = SystemClock> {
    clock: C,
}

impl Default for ReportService<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> ReportService<C> {
    /// Creates a report service stamping reports with `clock`.
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Computes the user report.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::NoUsers`] for an empty slice.
    pub fn build_user_report(&self, users: &[User]) -> Result<UserReport, ReportError> {
        let offset = self.clock.offset();
        let total_users = users.len();
        let active_users = users.iter().filter(|user| user.is_active()).count();
        let active_rate = Percent::of(active_users, total_users).ok_or(ReportError::NoUsers)?;

        let details = users
            .iter()
            .map(|user| UserDetail {
                id: user.id(),
                full_name: user.full_name(),
                username: user.username.clone(),
                email: user.email().to_string(),
                is_active: user.is_active(),
                created_on: user.created_at.with_timezone(&offset).date_naive(),
                email_valid: user.is_valid_email(),
            })
            .collect();

        Ok(UserReport {
            generated_at: self.clock.local_now(),
            summary: UserSummary {
                total_users,
                active_users,
                inactive_users: total_users - active_users,
                active_rate,
            },
            users: details,
        })
    }

    /// Computes the transaction summary.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::NoTransactions`] for an empty slice, or a
    /// [`ReportError::Math`] if the completed amounts overflow when summed.
    pub fn build_transaction_summary(
        &self,
        transactions: &[Transaction],
    ) -> Result<TransactionSummaryReport, ReportError> {
        if transactions.is_empty() {
            return Err(ReportError::NoTransactions);
        }

        let offset = self.clock.offset();
        let statistics = count_by_status(transactions);

        let completed: Vec<Decimal> = transactions
            .iter()
            .filter(|transaction| transaction.is_completed())
            .map(|transaction| transaction.amount)
            .collect();
        let total_completed = calculate_total(&completed)?;
        let average_completed = if completed.is_empty() {
            Decimal::ZERO
        } else {
            calculate_average(&completed)?
        };

        let total = transactions.len();
        let by_type = count_by_type(transactions)
            .into_iter()
            .map(|(transaction_type, count)| TypeBreakdown {
                transaction_type,
                count,
                share: Percent::of(count, total).unwrap_or(Percent::new(Decimal::ZERO)),
            })
            .collect();

        let recent = most_recent(transactions, RECENT_TRANSACTIONS_LIMIT)
            .into_iter()
            .map(|transaction| RecentTransaction {
                id: transaction.id(),
                transaction_type: transaction.transaction_type,
                status: transaction.status(),
                amount: transaction.money(),
                user_id: transaction.user_id,
                created_on: transaction.created_at.with_timezone(&offset).date_naive(),
            })
            .collect();

        Ok(TransactionSummaryReport {
            generated_at: self.clock.local_now(),
            statistics,
            financial: FinancialSummary {
                total_completed: Money::usd(total_completed),
                average_completed: Money::usd(average_completed),
            },
            by_type,
            recent,
        })
    }

    /// Renders the user report, or the "no users" sentence for empty input.
    pub fn generate_user_report(&self, users: &[User]) -> String {
        match self.build_user_report(users) {
            Ok(report) => report.to_string(),
            Err(err) => err.to_string(),
        }
    }

    /// Renders the transaction summary, or the "no transactions" sentence
    /// for empty input.
    pub fn generate_transaction_summary(&self, transactions: &[Transaction]) -> String {
        match self.build_transaction_summary(transactions) {
            Ok(report) => report.to_string(),
            Err(err) => {
                if !err.is_empty_input() {
                    warn!(error = %err, "Transaction summary could not be computed");
                }
                err.to_string()
            }
        }
    }

    /// Renders the user report and writes it through `sink`.
    ///
    /// Returns false if the write failed.
    pub fn save_user_report(&self, sink: &FileSink, users: &[User], path: impl AsRef<Path>) -> bool {
        let content = self.generate_user_report(users);
        debug!(users = users.len(), "Saving user report");
        sink.write_file(path, &content)
    }

    /// Renders the transaction summary and writes it through `sink`.
    ///
    /// Returns false if the write failed.
    pub fn save_transaction_summary(
        &self,
        sink: &FileSink,
        transactions: &[Transaction],
        path: impl AsRef<Path>,
    ) -> bool {
        let content = self.generate_transaction_summary(transactions);
        debug!(transactions = transactions.len(), "Saving transaction summary");
        sink.write_file(path, &content)
    }
}

impl SpendingAnalysis {
    /// Aggregates completed transactions: total, mean, count and per-type sums.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::NoCompletedTransactions`] if none are completed,
    /// or [`ReportError::Math`] if the amounts overflow when summed.
    pub fn from_transactions(transactions: &[Transaction]) -> Result<Self, ReportError> {
        let completed: Vec<&Transaction> = transactions
            .iter()
            .filter(|transaction| transaction.is_completed())
            .collect();

        if completed.is_empty() {
            return Err(ReportError::NoCompletedTransactions);
        }

        let amounts: Vec<Decimal> = completed.iter().map(|transaction| transaction.amount).collect();
        let total_spending = calculate_total(&amounts)?;
        let average_transaction = calculate_average(&amounts)?;

        let mut spending_by_type: IndexMap<TransactionType, Decimal> = IndexMap::new();
        for transaction in &completed {
            let entry = spending_by_type
                .entry(transaction.transaction_type)
                .or_insert(Decimal::ZERO);
            *entry = entry
                .checked_add(transaction.amount)
                .ok_or(MathError::Overflow)?;
        }

        Ok(Self {
            total_spending: Money::usd(total_spending),
            average_transaction: Money::usd(average_transaction),
            transaction_count: completed.len(),
            spending_by_type,
        })
    }
}

fn count_by_status(transactions: &[Transaction]) -> TransactionStatistics {
    let mut statistics = TransactionStatistics {
        total: transactions.len(),
        ..TransactionStatistics::default()
    };

    for transaction in transactions {
        match transaction.status() {
            TransactionStatus::Completed => statistics.completed += 1,
            TransactionStatus::Pending => statistics.pending += 1,
            TransactionStatus::Failed => statistics.failed += 1,
            TransactionStatus::Cancelled => statistics.cancelled += 1,
        }
    }

    statistics
}

/// Counts transactions per type, keyed in first-seen order.
fn count_by_type(transactions: &[Transaction]) -> IndexMap<TransactionType, usize> {
    let mut counts = IndexMap::new();
    for transaction in transactions {
        *counts.entry(transaction.transaction_type).or_insert(0) += 1;
    }
    counts
}

/// Returns up to `limit` transactions, newest first. Ties keep input order.
pub(crate) fn most_recent(transactions: &[Transaction], limit: usize) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}
