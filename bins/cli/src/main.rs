//! Tally personal finance tracker.
//!
//! Loads the sample users and transactions, writes the user report and the
//! transaction summary, then prints a savings and investment demo.
//!
//! Usage: cargo run --bin tally

use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tally_core::clock::LocalClock;
use tally_core::data::{DataProvider, SampleDataProvider};
use tally_core::math::{calculate_compound_growth, calculate_savings_rate};
use tally_core::models::{Transaction, User};
use tally_core::reports::{ReportService, SpendingAnalysis};
use tally_core::storage::FileSink;
use tally_shared::AppConfig;
use tally_shared::config::DemoConfig;
use tally_shared::types::{Money, Percent};

const RULE_WIDTH: usize = 50;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tally=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().inspect_err(|err| {
        error!(code = err.error_code(), error = %err, "Failed to load configuration");
    })?;

    println!("🏦 Starting Personal Finance Tracker...");
    println!("{}", "=".repeat(RULE_WIDTH));

    let (users, transactions) = load_records(&config);
    println!(
        "📊 Loaded {} users and {} transactions",
        users.len(),
        transactions.len()
    );

    let sink = FileSink::new(&config.output.directory);
    let reports = ReportService::new(LocalClock);

    if !reports.save_user_report(&sink, &users, &config.output.user_report) {
        warn!(path = %config.output.user_report, "User report was not saved");
    }
    if !reports.save_transaction_summary(&sink, &transactions, &config.output.transaction_summary)
    {
        warn!(
            path = %config.output.transaction_summary,
            "Transaction summary was not saved"
        );
    }

    print_financial_demo(&config.demo)?;
    print_spending_analysis(&transactions);

    println!("\n✅ Personal Finance Tracker completed successfully!");
    println!(
        "📄 Reports saved to: {}, {}",
        config.output.user_report, config.output.transaction_summary
    );

    Ok(())
}

fn load_records(config: &AppConfig) -> (Vec<User>, Vec<Transaction>) {
    let rng = match config.sample.seed {
        Some(seed) => {
            info!(seed, "Using seeded sample data");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let mut provider =
        SampleDataProvider::new(LocalClock, rng, config.sample.transaction_count);
    let users = provider.load_users();
    let transactions = provider.load_transactions();
    (users, transactions)
}

fn print_financial_demo(demo: &DemoConfig) -> anyhow::Result<()> {
    let savings_rate = calculate_savings_rate(demo.monthly_income, demo.monthly_expenses)?;
    let growth = calculate_compound_growth(demo.principal, demo.annual_rate, demo.years)?;

    println!("\n💰 Financial Summary:");
    println!("   Monthly Income: {}", Money::usd(demo.monthly_income));
    println!("   Monthly Expenses: {}", Money::usd(demo.monthly_expenses));
    println!("   Savings Rate: {}", Percent::new(savings_rate));
    println!(
        "   Investment Growth: {} → {} ({}% over {} years)",
        grouped_dollars(demo.principal),
        Money::usd(growth),
        (demo.annual_rate * Decimal::ONE_HUNDRED).normalize(),
        demo.years
    );

    Ok(())
}

fn print_spending_analysis(transactions: &[Transaction]) {
    println!("\n📈 Spending Analysis:");
    match SpendingAnalysis::from_transactions(transactions) {
        Ok(analysis) => {
            println!("   Completed Transactions: {}", analysis.transaction_count);
            println!("   Total Spending: {}", analysis.total_spending);
            println!("   Average Transaction: {}", analysis.average_transaction);
            for (transaction_type, amount) in &analysis.spending_by_type {
                println!("   {}: {}", transaction_type.label(), Money::usd(*amount));
            }
        }
        Err(err) => println!("   {err}"),
    }
}

/// Formats a dollar amount with thousands separators, e.g. `$1,000` or
/// `$12,500.50`. Cents are only shown when non-zero.
fn grouped_dollars(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let cents = rounded.abs().fract();
    if cents.is_zero() {
        format!("{sign}${grouped}")
    } else {
        // "0.50" -> ".50"
        let cents = format!("{cents:.2}");
        format!("{sign}${grouped}{}", cents.trim_start_matches('0'))
    }
}
