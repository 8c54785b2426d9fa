//! Plain-text rendering of reports.

use std::fmt;

use super::types::{RecentTransaction, TransactionSummaryReport, UserDetail, UserReport};
use crate::models::{TransactionStatus, activity_label};

/// Rule above and below report titles.
pub const BANNER_RULE: &str = "==================================================";
/// Rule under the user details heading.
pub const DETAILS_RULE: &str = "------------------------------";
/// Rule under transaction section headings.
pub const SECTION_RULE: &str = "-------------------------";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Glyph shown in front of a recent transaction.
#[must_use]
pub const fn status_glyph(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Completed => "✓",
        TransactionStatus::Pending => "⏳",
        TransactionStatus::Failed | TransactionStatus::Cancelled => "✗",
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

fn banner(lines: &mut Vec<String>, title: &str, generated_at: &chrono::DateTime<chrono::FixedOffset>) {
    lines.push(BANNER_RULE.to_string());
    lines.push(title.to_string());
    lines.push(BANNER_RULE.to_string());
    lines.push(format!(
        "Generated on: {}",
        generated_at.format(TIMESTAMP_FORMAT)
    ));
    lines.push(String::new());
}

fn push_user(lines: &mut Vec<String>, user: &UserDetail) {
    lines.push(format!("ID: {} | {}", user.id, user.full_name));
    lines.push(format!("  Username: {}", user.username));
    lines.push(format!("  Email: {}", user.email));
    lines.push(format!("  Status: {}", activity_label(user.is_active)));
    lines.push(format!("  Created: {}", user.created_on.format(DATE_FORMAT)));
    lines.push(format!("  Email Valid: {}", yes_no(user.email_valid)));
    lines.push(String::new());
}

fn recent_line(transaction: &RecentTransaction) -> String {
    format!(
        "  {} {} - {} (User {}) - {}",
        status_glyph(transaction.status),
        transaction.transaction_type,
        transaction.amount,
        transaction.user_id,
        transaction.created_on.format(DATE_FORMAT)
    )
}

impl UserReport {
    /// Returns the report as individual lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let summary = &self.summary;
        let mut lines = Vec::with_capacity(13 + self.users.len() * 7);

        banner(&mut lines, "USER REPORT", &self.generated_at);
        lines.push("SUMMARY:".to_string());
        lines.push(format!("  Total Users: {}", summary.total_users));
        lines.push(format!("  Active Users: {}", summary.active_users));
        lines.push(format!("  Inactive Users: {}", summary.inactive_users));
        lines.push(format!("  Active Rate: {}", summary.active_rate));
        lines.push(String::new());
        lines.push("USER DETAILS:".to_string());
        lines.push(DETAILS_RULE.to_string());

        for user in &self.users {
            push_user(&mut lines, user);
        }

        lines
    }
}

impl TransactionSummaryReport {
    /// Returns the report as individual lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let stats = &self.statistics;
        let mut lines = Vec::with_capacity(24 + self.by_type.len() + self.recent.len());

        banner(&mut lines, "TRANSACTION SUMMARY REPORT", &self.generated_at);
        lines.push("TRANSACTION STATISTICS:".to_string());
        lines.push(format!("  Total Transactions: {}", stats.total));
        lines.push(format!("  Completed: {}", stats.completed));
        lines.push(format!("  Pending: {}", stats.pending));
        lines.push(format!("  Failed: {}", stats.failed));
        lines.push(String::new());
        lines.push("FINANCIAL SUMMARY:".to_string());
        lines.push(format!(
            "  Total Completed Amount: {}",
            self.financial.total_completed
        ));
        lines.push(format!(
            "  Average Transaction: {}",
            self.financial.average_completed
        ));
        lines.push(String::new());
        lines.push("BY TRANSACTION TYPE:".to_string());
        lines.push(SECTION_RULE.to_string());

        for entry in &self.by_type {
            lines.push(format!(
                "  {}: {} ({})",
                entry.transaction_type, entry.count, entry.share
            ));
        }

        lines.push(String::new());
        lines.push("RECENT TRANSACTIONS:".to_string());
        lines.push(SECTION_RULE.to_string());
        lines.extend(self.recent.iter().map(recent_line));

        lines
    }
}

impl fmt::Display for UserReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

impl fmt::Display for TransactionSummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}
