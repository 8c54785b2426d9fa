//! Flat-file output for rendered reports.
//!
//! `FileSink` resolves relative paths against a root directory, creates
//! missing parent directories and overwrites existing files. The `bool` and
//! `Option` returning methods log failures and never propagate them; the
//! `try_*` variants return [`StorageError`] for callers that want it.

mod error;
mod service;

pub use error::StorageError;
pub use service::FileSink;
