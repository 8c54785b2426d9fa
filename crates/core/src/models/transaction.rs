//! Transaction record and its lifecycle.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::{Money, TransactionId, UserId};

/// What a transaction does with money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money paid in.
    Deposit,
    /// Money taken out.
    Withdrawal,
    /// Movement between accounts.
    Transfer,
    /// Payment to a third party.
    Payment,
}

impl TransactionType {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 4] = [Self::Deposit, Self::Withdrawal, Self::Transfer, Self::Payment];

    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdrawal => "withdrawal",
            Self::Transfer => "transfer",
            Self::Payment => "payment",
        }
    }

    /// Returns the title-cased name used in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Deposit => "Deposit",
            Self::Withdrawal => "Withdrawal",
            Self::Transfer => "Transfer",
            Self::Payment => "Payment",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "deposit" => Ok(Self::Deposit),
            "withdrawal" => Ok(Self::Withdrawal),
            "transfer" => Ok(Self::Transfer),
            "payment" => Ok(Self::Payment),
            _ => Err(format!("Unknown transaction type: {s}")),
        }
    }
}

/// Lifecycle state of a transaction.
///
/// `Pending` is the only non-terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Awaiting completion.
    #[default]
    Pending,
    /// Settled.
    Completed,
    /// Failed.
    Failed,
    /// Cancelled before settling.
    Cancelled,
}

impl TransactionStatus {
    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns the title-cased name used in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::Failed => "Failed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Returns true for states no transition leaves.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("Unknown transaction status: {s}")),
        }
    }
}

/// A single money movement initiated by a user.
///
/// Created `Pending`. `complete` and `cancel` only act on pending
/// transactions; `fail` applies in any state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    /// Owning user. Not checked against any user list.
    pub user_id: UserId,
    /// Signed amount.
    pub amount: Decimal,
    /// Kind of transaction.
    pub transaction_type: TransactionType,
    /// Free-form description.
    pub description: String,
    /// When the transaction was created.
    pub created_at: DateTime<Utc>,
    status: TransactionStatus,
}

impl Transaction {
    /// Creates a pending transaction.
    #[must_use]
    pub fn new(
        id: TransactionId,
        user_id: UserId,
        amount: Decimal,
        transaction_type: TransactionType,
        description: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            amount,
            transaction_type,
            description: description.into(),
            created_at,
            status: TransactionStatus::Pending,
        }
    }

    /// Returns the transaction ID.
    #[must_use]
    pub const fn id(&self) -> TransactionId {
        self.id
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TransactionStatus {
        self.status
    }

    /// Returns true if the amount is strictly positive.
    #[must_use]
    pub fn is_valid_amount(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Returns true if the transaction is completed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == TransactionStatus::Completed
    }

    /// Returns true if the transaction is still pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == TransactionStatus::Pending
    }

    /// Marks a pending transaction completed. No-op in any other state.
    pub fn complete(&mut self) {
        if self.is_pending() {
            self.status = TransactionStatus::Completed;
        }
    }

    /// Marks the transaction failed, whatever its current state.
    ///
    /// A non-empty `reason` is appended to the description as
    /// ` [Failed: reason]`; repeated calls append repeatedly.
    pub fn fail(&mut self, reason: &str) {
        self.status = TransactionStatus::Failed;
        if !reason.is_empty() {
            self.description.push_str(&format!(" [Failed: {reason}]"));
        }
    }

    /// Cancels a pending transaction.
    ///
    /// Returns false and leaves the status unchanged if it was not pending.
    pub fn cancel(&mut self) -> bool {
        if !self.is_pending() {
            return false;
        }
        self.status = TransactionStatus::Cancelled;
        true
    }

    /// Returns the amount as US dollars.
    #[must_use]
    pub const fn money(&self) -> Money {
        Money::usd(self.amount)
    }

    /// Returns the amount formatted as currency, e.g. `$100.00`.
    #[must_use]
    pub fn formatted_amount(&self) -> String {
        self.money().to_string()
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Transaction({}): {} of {} - {}",
            self.id,
            self.transaction_type,
            self.money(),
            self.status
        )
    }
}
