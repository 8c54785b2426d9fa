//! Core records, calculations and reports for Tally.
//!
//! Everything here is synchronous and free of global state. "Now" comes
//! from an injected [`clock::Clock`], randomness from a caller-supplied RNG,
//! and the only I/O is the flat-file sink in [`storage`].
//!
//! # Modules
//!
//! - `models` - Users and transactions with their lifecycle rules
//! - `math` - Decimal helpers for averages, rates and growth
//! - `reports` - User and transaction reports plus spending analysis
//! - `data` - Sample data provider and record lookups
//! - `storage` - Text file output
//! - `clock` - Time source abstraction

pub mod clock;
pub mod data;
pub mod math;
pub mod models;
pub mod reports;
pub mod storage;
