//! Certificate field extraction.
//!
//! Unlike keys, a certificate that cannot be located or parsed is always an
//! error: there is no partial record.

use std::path::Path;

use certlens::RawMaterial;
use certlens::decoder::{DecodableFrom, Decoder};
use certlens_pem::{Encoding, Label, Opened};
use certlens_pkix_types::KeyType;
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Serialize, Serializer};
use x509_parser::prelude::*;
use x509_parser::time::ASN1Time;

use crate::error::{Error, Result};
use crate::signature::SignatureLabel;
use crate::{extensions, public_key};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Everything reported about one certificate file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRecord {
    pub filename: String,
    pub encoding: Encoding,
    pub common_name: String,
    /// Common name of the issuer.
    pub issuer: String,
    pub subject: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub not_before: DateTime<Utc>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub not_after: DateTime<Utc>,
    /// Signature algorithm label.
    pub algorithm: String,
    pub key_type: KeyType,
    pub bits: u32,
    /// Decimal serial number.
    pub serial_number: String,
    #[serde(rename = "SANs", skip_serializing_if = "Vec::is_empty")]
    pub sans: Vec<String>,
    #[serde(rename = "isCA")]
    pub is_ca: bool,
    pub is_quantum_safe: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pqc_types: Vec<String>,
    #[serde(rename = "extKeyUsage", skip_serializing_if = "Vec::is_empty")]
    pub ext_key_usage: Vec<String>,
}

fn serialize_timestamp<S>(time: &DateTime<Utc>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&time.format(TIMESTAMP_FORMAT))
}

impl DecodableFrom<RawMaterial> for CertificateRecord {}

impl Decoder<RawMaterial, CertificateRecord> for RawMaterial {
    type Error = Error;

    fn decode(&self) -> Result<CertificateRecord> {
        inspect(self.bytes(), self.filename())
    }
}

/// Extracts the first certificate held in `data`.
///
/// # Errors
///
/// `Error::NoCertificate` for PEM input without a certificate block and
/// `Error::Decode` when the bytes are not a certificate.
pub fn inspect(data: &[u8], filename: &str) -> Result<CertificateRecord> {
    let Opened { envelope, payload } = certlens_pem::open(data, Label::CERTIFICATES).map_err(
        |source| Error::NoCertificate {
            filename: filename.to_string(),
            source,
        },
    )?;

    let (_, cert) =
        X509Certificate::from_der(&payload).map_err(|e| Error::Decode(e.to_string()))?;

    let signature = SignatureLabel::of(&cert.signature_algorithm.algorithm);
    let mut haystack = data.to_vec();
    if envelope.encoding == Encoding::Pem {
        haystack.extend_from_slice(&payload);
    }
    let pqc_types = signature.pqc_labels(&haystack);
    let key = public_key::classify(cert.public_key());
    debug!(
        "{filename}: signed with {}, {} key",
        signature.as_str(),
        key.key_type
    );

    Ok(CertificateRecord {
        filename: filename.to_string(),
        encoding: envelope.encoding,
        common_name: common_name(cert.subject()),
        issuer: common_name(cert.issuer()),
        subject: cert.subject().to_string(),
        not_before: to_datetime(&cert.validity().not_before)?,
        not_after: to_datetime(&cert.validity().not_after)?,
        algorithm: signature.as_str().to_string(),
        key_type: key.key_type,
        bits: key.bits,
        serial_number: cert.tbs_certificate.serial.to_string(),
        sans: extensions::dns_names(&cert),
        is_ca: extensions::is_ca(&cert),
        is_quantum_safe: !pqc_types.is_empty(),
        pqc_types,
        ext_key_usage: extensions::extended_key_usages(&cert),
    })
}

/// Reads and extracts the certificate file at `path`.
pub fn inspect_file(path: impl AsRef<Path>) -> Result<CertificateRecord> {
    let material = RawMaterial::from_path(path)?;
    material.decode()
}

fn common_name(name: &X509Name<'_>) -> String {
    name.iter_common_name()
        .next()
        .and_then(|cn| cn.as_str().ok())
        .unwrap_or_default()
        .to_string()
}

fn to_datetime(time: &ASN1Time) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(time.timestamp(), 0)
        .ok_or_else(|| Error::Decode(format!("time out of range: {time}")))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn cert(name: &str) -> Vec<u8> {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../testdata/certs")
            .join(name);
        std::fs::read(path).unwrap()
    }

    #[test]
    fn test_inspect_rsa_server() {
        let record = inspect(&cert("rsa-server.pem"), "rsa-server.pem").unwrap();
        assert_eq!(record.filename, "rsa-server.pem");
        assert_eq!(record.encoding, Encoding::Pem);
        assert_eq!(record.common_name, "example.test");
        assert_eq!(record.issuer, "Test RSA CA");
        assert!(record.subject.contains("CN=example.test"));
        assert_eq!(record.algorithm, "SHA256-RSA");
        assert_eq!(record.key_type, KeyType::Rsa);
        assert_eq!(record.bits, 2048);
        assert_eq!(record.serial_number, "4660");
        assert_eq!(record.sans, vec!["example.test", "www.example.test"]);
        assert!(!record.is_ca);
        assert_eq!(
            record.ext_key_usage,
            vec!["Server Authentication", "Client Authentication"]
        );
        assert!(!record.is_quantum_safe);
        assert!(record.pqc_types.is_empty());
        assert_eq!(
            record.not_before.format(TIMESTAMP_FORMAT).to_string(),
            "2025-01-01 00:00:00"
        );
        assert_eq!(
            record.not_after.format(TIMESTAMP_FORMAT).to_string(),
            "2035-01-01 00:00:00"
        );
    }

    #[test]
    fn test_inspect_der_matches_pem() {
        let pem = inspect(&cert("rsa-server.pem"), "server").unwrap();
        let der = inspect(&cert("rsa-server.der"), "server").unwrap();
        assert_eq!(der.encoding, Encoding::Der);
        assert_eq!(
            CertificateRecord {
                encoding: Encoding::Pem,
                ..der
            },
            pem
        );
    }

    #[rstest]
    #[case::rsa_ca("rsa-ca.pem", "Test RSA CA", "SHA256-RSA", KeyType::Rsa, 2048)]
    #[case::ec("ec-p256.pem", "Test EC Leaf", "ECDSA-SHA256", KeyType::Ec, 256)]
    #[case::ed25519("ed25519.pem", "Test Ed25519", "Ed25519", KeyType::Ed25519, 256)]
    fn test_inspect_classical_ca(
        #[case] file: &str,
        #[case] cn: &str,
        #[case] algorithm: &str,
        #[case] key_type: KeyType,
        #[case] bits: u32,
    ) {
        let record = inspect(&cert(file), file).unwrap();
        assert_eq!(record.common_name, cn);
        assert_eq!(record.issuer, cn);
        assert_eq!(record.algorithm, algorithm);
        assert_eq!(record.key_type, key_type);
        assert_eq!(record.bits, bits);
        assert!(record.is_ca);
        assert!(record.sans.is_empty());
        assert!(!record.is_quantum_safe);
    }

    #[test]
    fn test_inspect_mldsa() {
        let record = inspect(&cert("mldsa44-ca.pem"), "mldsa44-ca.pem").unwrap();
        assert_eq!(record.common_name, "Test ML-DSA-44 CA");
        assert_eq!(record.algorithm, "ML-DSA-44");
        assert_eq!(record.key_type, KeyType::MlDsa);
        assert_eq!(record.bits, 44);
        assert!(record.is_quantum_safe);
        assert_eq!(record.pqc_types, vec!["ML-DSA-44"]);
    }

    #[test]
    fn test_inspect_certificate_after_key() {
        let mut data = b"bundle\n".to_vec();
        data.extend_from_slice(include_bytes!("../../testdata/keys/ec-p256-pkcs8.pem"));
        data.extend_from_slice(&cert("ec-p256.pem"));
        let record = inspect(&data, "bundle.pem").unwrap();
        assert_eq!(record.common_name, "Test EC Leaf");
    }

    #[rstest]
    #[case::empty(b"".as_slice())]
    #[case::garbage(b"\x30\x03\x02\x01\x00 definitely not a certificate".as_slice())]
    #[case::key(include_bytes!("../../testdata/keys/ec-p256-pkcs8.der").as_slice())]
    fn test_inspect_decode_error(#[case] data: &[u8]) {
        assert!(matches!(inspect(data, "bad"), Err(Error::Decode(_))));
    }

    #[rstest]
    #[case::key_only(include_bytes!("../../testdata/keys/ec-p256-pkcs8.pem").as_slice())]
    #[case::invalid_base64(b"-----BEGIN CERTIFICATE-----\n!!!!\n-----END CERTIFICATE-----\n".as_slice())]
    fn test_inspect_no_certificate(#[case] data: &[u8]) {
        let err = inspect(data, "bad.pem").unwrap_err();
        assert!(matches!(&err, Error::NoCertificate { filename, .. } if filename == "bad.pem"));
    }

    #[test]
    fn test_decode_raw_material() {
        let material = RawMaterial::new(cert("ed25519.pem"), "ed25519.pem");
        let record: CertificateRecord = material.decode().unwrap();
        assert_eq!(record.key_type, KeyType::Ed25519);
    }

    #[test]
    fn test_inspect_file_missing() {
        assert!(matches!(
            inspect_file("/nonexistent/certlens/cert.pem"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_serialize() {
        let record = inspect(&cert("rsa-server.pem"), "rsa-server.pem").unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["commonName"], "example.test");
        assert_eq!(json["notBefore"], "2025-01-01 00:00:00");
        assert_eq!(json["keyType"], "RSA");
        assert_eq!(json["serialNumber"], "4660");
        assert_eq!(json["SANs"], serde_json::json!(["example.test", "www.example.test"]));
        assert_eq!(json["isCA"], false);
        assert!(json.get("pqcTypes").is_none());

        let record = inspect(&cert("ec-p256.pem"), "ec-p256.pem").unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("SANs").is_none());
        assert!(json.get("extKeyUsage").is_none());
    }
}
