//! Common types used across the application.

pub mod id;
pub mod money;
pub mod percent;

pub use id::*;
pub use money::Money;
pub use percent::Percent;
