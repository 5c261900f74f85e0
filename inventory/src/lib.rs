//! Certificate and key inventories
//!
//! Expiry status for certificates and summaries of whole directories of
//! certificates or private keys. The current time is always passed in by the
//! caller.

pub mod error;
pub mod expiry;
pub mod summary;
mod walk;

pub use error::{Error, Result};
pub use expiry::{EXPIRY_WARNING_DAYS, Status, days_remaining, status};
pub use summary::{CertificateSummary, KeySummary, summarize_certificates, summarize_keys};
