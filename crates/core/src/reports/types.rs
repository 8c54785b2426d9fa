//! Report data types.

use chrono::{DateTime, FixedOffset, NaiveDate};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::{Money, Percent, TransactionId, UserId};

use crate::models::{TransactionStatus, TransactionType};

/// User population summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// Total users.
    pub total_users: usize,
    /// Active users.
    pub active_users: usize,
    /// Inactive users (total - active).
    pub inactive_users: usize,
    /// Active users as a share of all users.
    pub active_rate: Percent,
}

/// One row of the user details section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetail {
    /// User ID.
    pub id: UserId,
    /// "First Last".
    pub full_name: String,
    /// Login name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Whether the account is active.
    pub is_active: bool,
    /// Creation date.
    pub created_on: NaiveDate,
    /// Whether the email passes the format check.
    pub email_valid: bool,
}

/// User report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserReport {
    /// When the report was generated.
    pub generated_at: DateTime<FixedOffset>,
    /// Summary counts.
    pub summary: UserSummary,
    /// Per-user details, in input order.
    pub users: Vec<UserDetail>,
}

/// Transaction counts by status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionStatistics {
    /// All transactions, any status.
    pub total: usize,
    /// Completed transactions.
    pub completed: usize,
    /// Pending transactions.
    pub pending: usize,
    /// Failed transactions.
    pub failed: usize,
    /// Cancelled transactions. Counted, but not printed in the text report.
    pub cancelled: usize,
}

/// Money totals over completed transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Sum of completed amounts.
    pub total_completed: Money,
    /// Mean completed amount, zero when nothing completed.
    pub average_completed: Money,
}

/// Share of one transaction type among all transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeBreakdown {
    /// Transaction type.
    pub transaction_type: TransactionType,
    /// Number of transactions of this type.
    pub count: usize,
    /// `count / total`.
    pub share: Percent,
}

/// One row of the recent transactions section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentTransaction {
    /// Transaction ID.
    pub id: TransactionId,
    /// Transaction type.
    pub transaction_type: TransactionType,
    /// Status at report time.
    pub status: TransactionStatus,
    /// Amount.
    pub amount: Money,
    /// Owning user.
    pub user_id: UserId,
    /// Creation date.
    pub created_on: NaiveDate,
}

/// Transaction summary report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSummaryReport {
    /// When the report was generated.
    pub generated_at: DateTime<FixedOffset>,
    /// Counts by status.
    pub statistics: TransactionStatistics,
    /// Completed totals.
    pub financial: FinancialSummary,
    /// Per-type counts in first-seen order.
    pub by_type: Vec<TypeBreakdown>,
    /// Up to five newest transactions, newest first.
    pub recent: Vec<RecentTransaction>,
}

/// Aggregates over completed transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendingAnalysis {
    /// Sum of completed amounts.
    pub total_spending: Money,
    /// Mean completed amount.
    pub average_transaction: Money,
    /// Number of completed transactions.
    pub transaction_count: usize,
    /// Completed amount per type, in first-seen order.
    pub spending_by_type: IndexMap<TransactionType, Decimal>,
}
