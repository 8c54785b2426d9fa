//! User and transaction report generation.
//!
//! This module turns record lists into reports in two steps:
//! - `ReportService::build_*` computes typed, serializable report data
//! - `Display` on the report types renders the plain-text layout
//!
//! `SpendingAnalysis` aggregates completed transactions for the demo
//! printout.

pub mod error;
pub mod render;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use render::status_glyph;
pub use service::{
    DEFAULT_TRANSACTION_SUMMARY_FILE, DEFAULT_USER_REPORT_FILE, RECENT_TRANSACTIONS_LIMIT,
    ReportService,
};
pub use types::*;
