//! # certlens
//!
//! Core traits and input types shared by the certlens inspection crates.
//!
//! The inspection pipeline flows like this:
//! ```text
//! RawMaterial → (PEM block | DER bytes) → KeyRecord / CertificateRecord
//! ```
//!
//! Each step uses the `Decoder` trait to convert from one representation to
//! the next. The concrete conversions live in the `pem`, `pkcs` and `x509`
//! crates.
//!
//! ## Example
//!
//! ```ignore
//! use certlens::decoder::Decoder;
//! use certlens::RawMaterial;
//! use certlens_pkcs::KeyRecord;
//!
//! let material = RawMaterial::from_path("server.key")?;
//! let record: KeyRecord = material.decode()?;
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
pub mod material;

pub use material::RawMaterial;
