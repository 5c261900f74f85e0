//! Private key classification.
//!
//! The decoded payload is offered to each structural format in turn and the
//! first success wins:
//! - PKCS#1 (RSA keys only)
//! - SEC1 (EC keys only)
//! - PKCS#8 (generic format for any key type)
//!
//! When none of them succeeds the heuristics run, also in order: a known
//! post-quantum OID quoted by one of the decoder errors, then a scan of the
//! file for post-quantum labels. If nothing matches the key is reported as
//! `Unknown`. Only a PEM file without any private key block is an error.
//!
//! ```no_run
//! use certlens::RawMaterial;
//! use certlens::decoder::Decoder;
//! use certlens_pkcs::KeyRecord;
//!
//! let material = RawMaterial::from_path("server.key").unwrap();
//! let record: KeyRecord = material.decode().unwrap();
//! println!("{} {} bits", record.key_type, record.bits);
//! ```

use std::path::Path;

use certlens::RawMaterial;
use certlens::decoder::{DecodableFrom, Decoder};
use certlens_pem::{Encoding, Label, Opened};
use certlens_pkix_types::pqc::{self, PqcAlgorithm};
use certlens_pkix_types::{Classification, KeyType};
use log::debug;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::heuristic::{self, Evidence};
use crate::{pkcs1, pkcs8, sec1};

pub const PKCS1: &str = "PKCS#1";
pub const SEC1: &str = "SEC1";
pub const PKCS8: &str = "PKCS#8";

type Structural = fn(&[u8]) -> Result<Classification>;
type Heuristic = fn(&Evidence<'_>) -> Option<Classification>;

const STRUCTURAL: &[(&str, Structural)] = &[
    (PKCS1, pkcs1::classify),
    (SEC1, sec1::classify),
    (PKCS8, pkcs8::classify),
];

const HEURISTICS: &[(&str, Heuristic)] = &[
    ("OID in decoder error", heuristic::oid_in_failures),
    ("text scan", heuristic::text_scan),
];

/// Everything reported about one private key file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyRecord {
    pub filename: String,
    pub encoding: Encoding,
    pub key_type: KeyType,
    pub algorithm: String,
    pub bits: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve: Option<String>,
    pub is_quantum_safe: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pqc_types: Vec<String>,
}

impl KeyRecord {
    fn new(filename: &str, encoding: Encoding, classification: Classification) -> Self {
        // Only EC keys carry a curve and only the post-quantum families are
        // quantum-safe, whatever the classification path.
        let curve = match classification.key_type {
            KeyType::Ec => classification.curve,
            _ => None,
        };
        let is_quantum_safe =
            classification.is_quantum_safe && classification.key_type.is_pqc_family();
        KeyRecord {
            filename: filename.to_string(),
            encoding,
            key_type: classification.key_type,
            algorithm: classification.algorithm,
            bits: classification.bits,
            curve,
            is_quantum_safe,
            pqc_types: classification.pqc_labels,
        }
    }
}

impl DecodableFrom<RawMaterial> for KeyRecord {}

impl Decoder<RawMaterial, KeyRecord> for RawMaterial {
    type Error = Error;

    fn decode(&self) -> Result<KeyRecord> {
        inspect(self.bytes(), self.filename())
    }
}

/// Classifies the key held in `data`.
///
/// # Errors
///
/// `Error::NoPrivateKey` when `data` is PEM but carries no private key
/// block. Every other input produces a record.
pub fn inspect(data: &[u8], filename: &str) -> Result<KeyRecord> {
    let Opened { envelope, payload } = certlens_pem::open(data, Label::PRIVATE_KEYS).map_err(
        |source| Error::NoPrivateKey {
            filename: filename.to_string(),
            source,
        },
    )?;

    let mut haystack = data.to_vec();
    if envelope.encoding == Encoding::Pem {
        haystack.extend_from_slice(&payload);
    }
    let scanned = pqc::scan_text(&haystack);

    let classification = classify(&payload, &scanned);
    debug!(
        "{filename}: {} ({}, {} bits)",
        classification.key_type, classification.algorithm, classification.bits
    );
    Ok(KeyRecord::new(filename, envelope.encoding, classification))
}

/// Reads and classifies the key file at `path`.
pub fn inspect_file(path: impl AsRef<Path>) -> Result<KeyRecord> {
    let material = RawMaterial::from_path(path)?;
    material.decode()
}

/// Runs the strategy chain over a decoded payload. `scanned` holds the
/// post-quantum labels found in the surrounding file.
pub fn classify(payload: &[u8], scanned: &[&'static PqcAlgorithm]) -> Classification {
    let mut failures = Vec::with_capacity(STRUCTURAL.len());
    for (name, attempt) in STRUCTURAL {
        match attempt(payload) {
            Ok(classification) => {
                debug!("decoded as {name}");
                return refine_named(classification.with_algorithm(*name), scanned);
            }
            Err(e) => {
                debug!("not {name}: {e}");
                failures.push(e);
            }
        }
    }

    let evidence = Evidence {
        failures: &failures,
        scanned,
    };
    HEURISTICS
        .iter()
        .find_map(|(name, heuristic)| {
            let classification = heuristic(&evidence)?;
            debug!("classified by {name}");
            Some(classification)
        })
        .unwrap_or_else(|| {
            debug!("no strategy matched");
            Classification::unknown()
        })
}

/// A post-quantum family recognised only by name takes its size and labels
/// from scanned labels of the same family. The family itself never changes.
fn refine_named(
    classification: Classification,
    scanned: &[&'static PqcAlgorithm],
) -> Classification {
    if !classification.is_quantum_safe || !classification.pqc_labels.is_empty() {
        return classification;
    }
    let same_family: Vec<&PqcAlgorithm> = scanned
        .iter()
        .copied()
        .filter(|alg| alg.family.key_type() == classification.key_type)
        .collect();
    let algorithm = classification.algorithm.clone();
    classification.refine(&same_family).with_algorithm(algorithm)
}
