//! End-to-end tests: sample data through the report generator into files.

#![allow(clippy::uninlined_format_args)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use tally_core::clock::FixedClock;
use tally_core::data::{DataProvider, SampleDataProvider, transactions_for_user};
use tally_core::models::{Transaction, TransactionType, User};
use tally_core::reports::{
    DEFAULT_TRANSACTION_SUMMARY_FILE, DEFAULT_USER_REPORT_FILE, ReportService, SpendingAnalysis,
};
use tally_core::storage::FileSink;
use tally_shared::types::{TransactionId, UserId};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
}

fn sample_records(seed: u64) -> (Vec<User>, Vec<Transaction>) {
    let mut provider =
        SampleDataProvider::new(FixedClock(now()), StdRng::seed_from_u64(seed), 15);
    (provider.load_users(), provider.load_transactions())
}

#[test]
fn test_sample_reports_are_written() {
    let dir = TempDir::new().unwrap();
    let sink = FileSink::new(dir.path().join("out"));
    let reports = ReportService::new(FixedClock(now()));
    let (users, transactions) = sample_records(42);

    assert!(reports.save_user_report(&sink, &users, DEFAULT_USER_REPORT_FILE));
    assert!(reports.save_transaction_summary(&sink, &transactions, DEFAULT_TRANSACTION_SUMMARY_FILE));

    let user_report = sink.read_file(DEFAULT_USER_REPORT_FILE).unwrap();
    assert!(user_report.starts_with(&format!("{}\nUSER REPORT\n", "=".repeat(50))));
    assert!(user_report.contains("Generated on: 2024-03-01 09:30:00"));
    assert!(user_report.contains("Total Users: 5"));
    assert!(user_report.contains("Active Users: 5"));
    assert!(user_report.contains("Active Rate: 100.0%"));
    assert!(user_report.contains("ID: 4 | Alice Brown"));

    let summary = sink.read_file(DEFAULT_TRANSACTION_SUMMARY_FILE).unwrap();
    assert!(summary.contains("\nTRANSACTION SUMMARY REPORT\n"));
    assert!(summary.contains("Total Transactions: 15"));
    assert!(summary.contains("Completed: 5"));
    assert!(summary.contains("Pending: 10"));
    assert!(summary.contains("RECENT TRANSACTIONS:"));
    let recent = summary.split("RECENT TRANSACTIONS:").nth(1).unwrap();
    assert_eq!(recent.lines().skip(2).count(), 5);

    assert_eq!(
        sink.file_size(DEFAULT_TRANSACTION_SUMMARY_FILE),
        Some(summary.len() as u64)
    );
}

#[test]
fn test_rerun_overwrites_reports() {
    let dir = TempDir::new().unwrap();
    let sink = FileSink::new(dir.path());
    let reports = ReportService::new(FixedClock(now()));

    assert!(reports.save_user_report(&sink, &[], DEFAULT_USER_REPORT_FILE));
    assert_eq!(
        sink.read_file(DEFAULT_USER_REPORT_FILE).as_deref(),
        Some("No users found in the system.")
    );

    let (users, _) = sample_records(1);
    assert!(reports.save_user_report(&sink, &users, DEFAULT_USER_REPORT_FILE));
    let content = sink.read_file(DEFAULT_USER_REPORT_FILE).unwrap();
    assert!(content.contains("Total Users: 5"));
}

#[test]
fn test_spending_analysis_matches_summary_totals() {
    let (_, transactions) = sample_records(8);
    let analysis = SpendingAnalysis::from_transactions(&transactions).unwrap();

    let completed: Vec<&Transaction> = transactions.iter().filter(|t| t.is_completed()).collect();
    let total: rust_decimal::Decimal = completed.iter().map(|t| t.amount).sum();

    assert_eq!(analysis.transaction_count, completed.len());
    assert_eq!(analysis.total_spending.amount, total);
    assert_eq!(analysis.spending_by_type.values().copied().sum::<rust_decimal::Decimal>(), total);
}

#[test]
fn test_user_lifecycle_reflected_in_report() {
    let reports = ReportService::new(FixedClock(now()));
    let (mut users, transactions) = sample_records(3);

    users[1].deactivate();
    assert!(users[0].update_email("john.doe@example.org"));
    assert!(!users[2].update_email("bob-at-example"));

    let report = reports.generate_user_report(&users);
    assert!(report.contains("Active Users: 4"));
    assert!(report.contains("Active Rate: 80.0%"));
    assert!(report.contains("Email: john.doe@example.org"));
    assert!(report.contains("Email: bob@example.com"));
    assert!(report.contains("Status: Inactive"));

    let mine = transactions_for_user(&transactions, users[0].id());
    assert!(mine.iter().all(|t| t.user_id == UserId::new(1)));
}

#[test]
fn test_handmade_transactions_in_summary() {
    let reports = ReportService::new(FixedClock(now()));
    let mut transactions = vec![
        Transaction::new(
            TransactionId::new(1),
            UserId::new(1),
            dec!(100.00),
            TransactionType::Deposit,
            "Paycheck",
            now() - Duration::days(2),
        ),
        Transaction::new(
            TransactionId::new(2),
            UserId::new(1),
            dec!(40.00),
            TransactionType::Payment,
            "Groceries",
            now() - Duration::days(1),
        ),
    ];
    transactions[0].complete();
    assert!(transactions[1].cancel());

    let summary = reports.generate_transaction_summary(&transactions);
    assert!(summary.contains("Total Transactions: 2"));
    assert!(summary.contains("Completed: 1"));
    assert!(summary.contains("Pending: 0"));
    assert!(summary.contains("Failed: 0"));
    assert!(summary.contains("Total Completed Amount: $100.00"));
    assert!(summary.contains("Average Transaction: $100.00"));
}
