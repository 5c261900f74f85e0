//! X.509 certificate inspection
//!
//! Locates a certificate in PEM or DER input and extracts the fields shown
//! to users: names, validity, serial number, subject alternative names,
//! basic constraints and extended key usage, the signature algorithm and a
//! classification of the subject public key.
//!
//! The post-quantum verdict follows the signature algorithm. When the
//! signature OID is unknown, the file is scanned for post-quantum labels
//! instead.
//!
//! ```no_run
//! use certlens_x509::inspect_file;
//!
//! let record = inspect_file("server.pem").unwrap();
//! println!("{} expires {}", record.common_name, record.not_after);
//! ```

pub mod certificate;
pub mod error;
mod extensions;
mod public_key;
mod signature;

pub use certificate::{CertificateRecord, TIMESTAMP_FORMAT, inspect, inspect_file};
pub use error::{Error, Result};
