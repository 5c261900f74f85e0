//! Private key inspection
//!
//! Classifies private keys stored as PEM or DER in any of the common
//! container formats:
//! - PKCS#1 (RSA keys only)
//! - SEC1 (EC keys only)
//! - PKCS#8 (generic format for any key type)
//!
//! Post-quantum keys that the structural decoders cannot read are still
//! recognised through their algorithm OID or the labels in the file. See
//! [`private_key`] for the order in which the strategies run.

pub mod error;
mod heuristic;
mod pkcs1;
mod pkcs8;
pub mod private_key;
mod sec1;

pub use error::{Error, Result};
pub use private_key::{KeyRecord, classify, inspect, inspect_file};
