//! Record types: users and their transactions.

pub mod transaction;
pub mod user;

pub use transaction::{Transaction, TransactionStatus, TransactionType};
pub use user::{User, activity_label, is_valid_email_address};
