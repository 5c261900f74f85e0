//! Signature algorithm labels and the post-quantum verdict drawn from them.

use certlens_pkix_types::pqc::{self, PqcAlgorithm};
use x509_parser::der_parser::oid::Oid;
use x509_parser::objects::{oid_registry, oid2sn};

/// Signature algorithms named the way most tooling prints them.
static SIGNATURE_ALGORITHMS: &[(&str, &str)] = &[
    ("1.2.840.113549.1.1.4", "MD5-RSA"),
    ("1.2.840.113549.1.1.5", "SHA1-RSA"),
    ("1.2.840.113549.1.1.11", "SHA256-RSA"),
    ("1.2.840.113549.1.1.12", "SHA384-RSA"),
    ("1.2.840.113549.1.1.13", "SHA512-RSA"),
    ("1.2.840.113549.1.1.10", "RSA-PSS"),
    ("1.2.840.10040.4.3", "DSA-SHA1"),
    ("2.16.840.1.101.3.4.3.2", "DSA-SHA256"),
    ("1.2.840.10045.4.1", "ECDSA-SHA1"),
    ("1.2.840.10045.4.3.2", "ECDSA-SHA256"),
    ("1.2.840.10045.4.3.3", "ECDSA-SHA384"),
    ("1.2.840.10045.4.3.4", "ECDSA-SHA512"),
    ("1.3.101.112", "Ed25519"),
    ("1.3.101.113", "Ed448"),
];

/// How a certificate's signature algorithm was identified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SignatureLabel {
    /// A post-quantum parameter set matched by OID.
    Pqc(&'static PqcAlgorithm),
    /// A name from the local table or the OID registry.
    Named(String),
    /// Neither table knows the OID; carries the dotted form.
    Unrecognised(String),
}

impl SignatureLabel {
    pub(crate) fn of(oid: &Oid<'_>) -> Self {
        let dotted = oid.to_id_string();
        if let Some(alg) = pqc::by_oid(&dotted) {
            return SignatureLabel::Pqc(alg);
        }
        if let Some((_, name)) = SIGNATURE_ALGORITHMS.iter().find(|(o, _)| *o == dotted) {
            return SignatureLabel::Named(name.to_string());
        }
        match oid2sn(oid, oid_registry()) {
            Ok(name) => SignatureLabel::Named(name.to_string()),
            Err(_) => SignatureLabel::Unrecognised(dotted),
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        match self {
            SignatureLabel::Pqc(alg) => alg.label,
            SignatureLabel::Named(name) | SignatureLabel::Unrecognised(name) => name,
        }
    }

    /// Post-quantum labels implied by the signature algorithm.
    ///
    /// Only an unrecognised algorithm falls back to scanning `raw` for
    /// labels.
    pub(crate) fn pqc_labels(&self, raw: &[u8]) -> Vec<String> {
        match self {
            SignatureLabel::Pqc(alg) => vec![alg.label.to_string()],
            SignatureLabel::Named(name) if pqc::is_pqc_name(name) => vec![name.clone()],
            SignatureLabel::Named(_) => vec![],
            SignatureLabel::Unrecognised(_) => pqc::scan_text(raw)
                .into_iter()
                .map(|alg| alg.label.to_string())
                .collect(),
        }
    }
}
