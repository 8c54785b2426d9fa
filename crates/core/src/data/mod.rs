//! Record sources feeding the report generator.

pub mod sample;

pub use sample::{SampleDataProvider, find_user, transactions_for_user};

use crate::models::{Transaction, User};

/// Supplies user and transaction lists.
///
/// Records come back in arbitrary order; consumers must not assume sorting.
pub trait DataProvider {
    /// Loads all users.
    fn load_users(&mut self) -> Vec<User>;

    /// Loads all transactions.
    fn load_transactions(&mut self) -> Vec<Transaction>;
}
