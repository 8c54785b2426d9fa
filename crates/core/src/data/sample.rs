//! Built-in sample data for demos and tests.

use chrono::Duration;
use rand::Rng;
use rust_decimal::Decimal;
use tally_shared::types::{TransactionId, UserId};
use tracing::debug;

use super::DataProvider;
use crate::clock::Clock;
use crate::models::{Transaction, TransactionType, User};

/// Fixed sample users: (username, email, first name, last name).
const SAMPLE_USERS: [(&str, &str, &str, &str); 5] = [
    ("john_doe", "john@example.com", "John", "Doe"),
    ("jane_smith", "jane@example.com", "Jane", "Smith"),
    ("bob_wilson", "bob@example.com", "Bob", "Wilson"),
    ("alice_brown", "alice@example.com", "Alice", "Brown"),
    ("charlie_davis", "charlie@example.com", "Charlie", "Davis"),
];

/// Default number of generated transactions.
pub const DEFAULT_TRANSACTION_COUNT: u32 = 15;

/// Sample amounts range, in cents (10.00 ..= 1000.00).
const AMOUNT_CENTS_MIN: i64 = 1_000;
const AMOUNT_CENTS_MAX: i64 = 100_000;

/// Days before "now" the user list starts.
const USER_HISTORY_DAYS: i64 = 30;
/// Days between consecutive sample users.
const USER_SPACING_DAYS: i64 = 7;

/// Generates the five sample users and random transactions for them.
///
/// Every third transaction (by ID) is completed, the rest stay pending.
pub struct SampleDataProvider<C, R> {
    clock: C,
    rng: R,
    transaction_count: u32,
}

impl<C: Clock, R: Rng> SampleDataProvider<C, R> {
    /// Creates a provider generating `transaction_count` transactions.
    pub const fn new(clock: C, rng: R, transaction_count: u32) -> Self {
        Self {
            clock,
            rng,
            transaction_count,
        }
    }

    /// Creates a user stamped with the provider's current time.
    pub fn create_sample_user(
        &self,
        id: UserId,
        username: &str,
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> User {
        User::new(id, username, email, first_name, last_name, self.clock.now())
    }

    /// Creates a pending transaction stamped with the provider's current time.
    pub fn create_sample_transaction(
        &self,
        id: TransactionId,
        user_id: UserId,
        amount: Decimal,
        transaction_type: TransactionType,
        description: &str,
    ) -> Transaction {
        Transaction::new(
            id,
            user_id,
            amount,
            transaction_type,
            description,
            self.clock.now(),
        )
    }

    fn random_transaction(&mut self, index: u32) -> Transaction {
        let user_count = SAMPLE_USERS.len() as u64;
        let user_id = UserId::new(self.rng.random_range(1..=user_count));
        let amount = Decimal::new(
            self.rng.random_range(AMOUNT_CENTS_MIN..=AMOUNT_CENTS_MAX),
            2,
        );
        let transaction_type =
            TransactionType::ALL[self.rng.random_range(0..TransactionType::ALL.len())];
        let days_ago = self.rng.random_range(1..=USER_HISTORY_DAYS);

        let mut transaction = Transaction::new(
            TransactionId::new(u64::from(index)),
            user_id,
            amount,
            transaction_type,
            format!("Sample {} transaction #{index}", transaction_type.as_str()),
            self.clock.now() - Duration::days(days_ago),
        );

        if index % 3 == 0 {
            transaction.complete();
        }

        transaction
    }
}

impl<C: Clock, R: Rng> DataProvider for SampleDataProvider<C, R> {
    fn load_users(&mut self) -> Vec<User> {
        let base = self.clock.now() - Duration::days(USER_HISTORY_DAYS);

        SAMPLE_USERS
            .iter()
            .zip(0i64..)
            .map(|(&(username, email, first_name, last_name), offset)| {
                User::new(
                    UserId::new(offset.unsigned_abs() + 1),
                    username,
                    email,
                    first_name,
                    last_name,
                    base + Duration::days(offset * USER_SPACING_DAYS),
                )
            })
            .collect()
    }

    fn load_transactions(&mut self) -> Vec<Transaction> {
        let transactions: Vec<Transaction> = (1..=self.transaction_count)
            .map(|index| self.random_transaction(index))
            .collect();
        debug!(count = transactions.len(), "Generated sample transactions");
        transactions
    }
}

/// Finds a user by ID.
#[must_use]
pub fn find_user(users: &[User], id: UserId) -> Option<&User> {
    users.iter().find(|user| user.id() == id)
}

/// Returns the transactions owned by `user_id`, in input order.
#[must_use]
pub fn transactions_for_user(transactions: &[Transaction], user_id: UserId) -> Vec<&Transaction> {
    transactions
        .iter()
        .filter(|transaction| transaction.user_id == user_id)
        .collect()
}
