//! Algorithm-generic private keys in the PKCS#8 `PrivateKeyInfo` /
//! `OneAsymmetricKey` structure
//! ([RFC 5958](https://datatracker.ietf.org/doc/html/rfc5958)).
//!
//! The algorithm identifier decides the classification. Identifiers that are
//! not listed here fail with [`Error::UnsupportedAlgorithm`], whose message
//! carries the dotted OID so that the OID fallback can still recognise
//! post-quantum parameter sets.

use ::pkcs8::PrivateKeyInfo;
use ::pkcs8::der::Decode;
use certlens_pkix_types::{Classification, OID_ED25519, OID_ED448};

use crate::error::{Error, Result};

pub const OID_RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.1";
pub const OID_RSASSA_PSS: &str = "1.2.840.113549.1.1.10";
pub const OID_EC_PUBLIC_KEY: &str = "1.2.840.10045.2.1";

/// Algorithms recognised only by name.
///
/// Classical entries become `KeyType::Other`. The pre-standard Open Quantum
/// Safe identifiers pass the post-quantum token test and are refined by the
/// text scan.
static NAMED_ALGORITHMS: &[(&str, &str)] = &[
    ("1.3.101.110", "X25519"),
    ("1.3.101.111", "X448"),
    ("1.2.840.10040.4.1", "DSA"),
    ("1.2.840.113549.1.3.1", "DH"),
    ("1.2.840.10046.2.1", "DH"),
    ("1.3.6.1.4.1.2.267.7.4.4", "dilithium2"),
    ("1.3.6.1.4.1.2.267.7.6.5", "dilithium3"),
    ("1.3.6.1.4.1.2.267.7.8.7", "dilithium5"),
    ("1.3.9999.3.11", "falcon512"),
    ("1.3.9999.3.14", "falcon1024"),
    ("1.3.6.1.4.1.22554.5.6.1", "kyber512"),
    ("1.3.6.1.4.1.22554.5.6.2", "kyber768"),
    ("1.3.6.1.4.1.22554.5.6.3", "kyber1024"),
];

pub(crate) fn classify(der: &[u8]) -> Result<Classification> {
    let info = PrivateKeyInfo::from_der(der).map_err(::pkcs8::Error::from)?;
    let oid = info.algorithm.oid.to_string();

    match oid.as_str() {
        OID_RSA_ENCRYPTION | OID_RSASSA_PSS => crate::pkcs1::classify(info.private_key),
        OID_EC_PUBLIC_KEY => {
            let curve = info
                .algorithm
                .parameters_oid()
                .map_err(|_| Error::MissingCurve)?;
            Ok(Classification::ec(&curve.to_string()))
        }
        OID_ED25519 => Ok(Classification::ed25519()),
        OID_ED448 => Ok(Classification::ed448()),
        other => NAMED_ALGORITHMS
            .iter()
            .find(|(named, _)| *named == other)
            .map(|(_, name)| Classification::opaque(name))
            .ok_or_else(|| Error::UnsupportedAlgorithm {
                oid: other.to_string(),
            }),
    }
}
