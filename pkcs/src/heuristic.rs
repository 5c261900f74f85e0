//! Fallbacks used once every structural format has failed.

use certlens_pkix_types::pqc::{self, PqcAlgorithm};
use certlens_pkix_types::Classification;

use crate::error::Error;

/// What the structural stage left behind.
pub(crate) struct Evidence<'a> {
    /// Errors from each structural attempt, in attempt order.
    pub failures: &'a [Error],
    /// Post-quantum labels found in the raw file and the decoded payload.
    pub scanned: &'a [&'static PqcAlgorithm],
}

/// A known post-quantum OID quoted in a decoder error.
///
/// The container was readable far enough to expose its algorithm
/// identifier, so the record keeps the `PKCS#8` label.
pub(crate) fn oid_in_failures(evidence: &Evidence<'_>) -> Option<Classification> {
    evidence
        .failures
        .iter()
        .find_map(|err| pqc::oid_in_text(&err.to_string()))
        .map(|alg| Classification::pqc(alg).with_algorithm(crate::private_key::PKCS8))
}

pub(crate) fn text_scan(evidence: &Evidence<'_>) -> Option<Classification> {
    if evidence.scanned.is_empty() {
        return None;
    }
    Some(Classification::unknown().refine(evidence.scanned))
}

#[cfg(test)]
mod tests {
    use certlens_pkix_types::KeyType;
    use certlens_pkix_types::pqc::scan_text;

    use super::*;

    #[test]
    fn test_oid_in_failures() {
        let failures = vec![
            Error::MissingCurve,
            Error::UnsupportedAlgorithm {
                oid: "2.16.840.1.101.3.4.3.18".to_string(),
            },
        ];
        let evidence = Evidence {
            failures: &failures,
            scanned: &[],
        };
        let c = oid_in_failures(&evidence).unwrap();
        assert_eq!(c.key_type, KeyType::MlDsa);
        assert_eq!(c.bits, 65);
        assert_eq!(c.algorithm, "PKCS#8");
        assert!(c.is_quantum_safe);
        assert_eq!(c.pqc_labels, vec!["ML-DSA-65"]);
    }

    #[test]
    fn test_oid_in_failures_ignores_classical_oid() {
        let failures = vec![Error::UnsupportedAlgorithm {
            oid: "1.2.840.10040.4.3".to_string(),
        }];
        let evidence = Evidence {
            failures: &failures,
            scanned: &[],
        };
        assert_eq!(oid_in_failures(&evidence), None);
    }

    #[test]
    fn test_text_scan() {
        let scanned = scan_text(b"composite of ML-DSA-65 and FALCON-512");
        let evidence = Evidence {
            failures: &[],
            scanned: &scanned,
        };
        let c = text_scan(&evidence).unwrap();
        assert_eq!(c.key_type, KeyType::FnDsa);
        assert_eq!(c.algorithm, "FN-DSA");
        assert_eq!(c.bits, 512);
        assert_eq!(c.pqc_labels, vec!["ML-DSA-65", "FALCON-512"]);

        let empty = Evidence {
            failures: &[],
            scanned: &[],
        };
        assert_eq!(text_scan(&empty), None);
    }
}
