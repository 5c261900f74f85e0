//! Directory summaries.
//!
//! Every regular file is run through the single-file pipeline. Files that
//! fail are left out of the result; the scan itself only fails when the root
//! directory cannot be read.

use std::path::Path;

use certlens::RawMaterial;
use certlens::decoder::{DecodableFrom, Decoder};
use certlens_pem::Encoding;
use certlens_pkcs::KeyRecord;
use certlens_pkix_types::KeyType;
use certlens_x509::CertificateRecord;
use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;

use crate::error::Result;
use crate::expiry::{self, Status};
use crate::walk;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateSummary {
    pub filename: String,
    pub encoding: Encoding,
    pub common_name: String,
    pub issuer: String,
    pub status: Status,
    pub is_quantum_safe: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pqc_types: Vec<String>,
}

impl CertificateSummary {
    pub fn new(record: CertificateRecord, now: DateTime<Utc>) -> Self {
        CertificateSummary {
            status: expiry::status(record.not_after, now),
            filename: record.filename,
            encoding: record.encoding,
            common_name: record.common_name,
            issuer: record.issuer,
            is_quantum_safe: record.is_quantum_safe,
            pqc_types: record.pqc_types,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeySummary {
    pub filename: String,
    pub encoding: Encoding,
    pub key_type: KeyType,
    pub bits: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve: Option<String>,
    pub is_quantum_safe: bool,
}

impl From<KeyRecord> for KeySummary {
    fn from(record: KeyRecord) -> Self {
        KeySummary {
            filename: record.filename,
            encoding: record.encoding,
            key_type: record.key_type,
            bits: record.bits,
            curve: record.curve,
            is_quantum_safe: record.is_quantum_safe,
        }
    }
}

/// Reads every file under `dir` and decodes the ones that hold a `T`, named
/// by their path relative to `dir`.
fn collect<T>(dir: &Path, recursive: bool) -> Result<Vec<T>>
where
    T: DecodableFrom<RawMaterial>,
    RawMaterial: Decoder<RawMaterial, T>,
    <RawMaterial as Decoder<RawMaterial, T>>::Error: std::fmt::Display,
{
    let records = walk::files(dir, recursive)?
        .into_iter()
        .filter_map(|entry| {
            let material = match RawMaterial::from_path(&entry.path) {
                Ok(material) => material.with_filename(entry.name),
                Err(e) => {
                    debug!("skipping {}: {e}", entry.name);
                    return None;
                }
            };
            match <RawMaterial as Decoder<RawMaterial, T>>::decode(&material) {
                Ok(record) => Some(record),
                Err(e) => {
                    debug!("skipping {}: {e}", material.filename());
                    None
                }
            }
        })
        .collect();
    Ok(records)
}

/// Summarises every certificate under `dir`, with expiry status computed
/// against `now`.
pub fn summarize_certificates(
    dir: impl AsRef<Path>,
    recursive: bool,
    now: DateTime<Utc>,
) -> Result<Vec<CertificateSummary>> {
    let records: Vec<CertificateRecord> = collect(dir.as_ref(), recursive)?;
    Ok(records
        .into_iter()
        .map(|record| CertificateSummary::new(record, now))
        .collect())
}

/// Summarises every private key under `dir`.
///
/// Unrecognised binary files are reported as `Unknown` keys; only PEM files
/// without a key block are left out.
pub fn summarize_keys(dir: impl AsRef<Path>, recursive: bool) -> Result<Vec<KeySummary>> {
    let records: Vec<KeyRecord> = collect(dir.as_ref(), recursive)?;
    Ok(records.into_iter().map(KeySummary::from).collect())
}
