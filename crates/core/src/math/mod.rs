//! Numeric helpers used by reports and the demo printout.
//!
//! All functions operate on `Decimal`. Fallible helpers return
//! [`MathError`] and leave recovery to the caller.

pub mod error;
pub mod ops;


pub use error::{MathError, MathResult};
pub use ops::{
    add, calculate_average, calculate_compound_growth, calculate_savings_rate, calculate_total,
    multiply, percentage_change,
};
