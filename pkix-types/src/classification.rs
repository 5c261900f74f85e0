//! The normalised verdict for one key: family, size, curve and whether it
//! is post-quantum.

use crate::pqc::{self, PqcAlgorithm};
use crate::{KeyType, NamedCurve};

pub const UNKNOWN_ALGORITHM: &str = "Unknown";

/// Result of classifying a key.
///
/// `curve` is only ever set for `KeyType::Ec`, and `is_quantum_safe` only
/// for the post-quantum families. The constructors keep both rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub key_type: KeyType,
    /// Container or family label, e.g. `PKCS#8` or `ML-DSA`.
    pub algorithm: String,
    pub bits: u32,
    pub curve: Option<String>,
    pub is_quantum_safe: bool,
    /// Every post-quantum label seen, each once.
    pub pqc_labels: Vec<String>,
}

impl Classification {
    fn of(key_type: KeyType, bits: u32) -> Self {
        let algorithm = key_type.name().to_string();
        Classification {
            key_type,
            algorithm,
            bits,
            curve: None,
            is_quantum_safe: false,
            pqc_labels: vec![],
        }
    }

    pub fn rsa(bits: u32) -> Self {
        Self::of(KeyType::Rsa, bits)
    }

    /// EC key on the curve named by `curve_oid`.
    ///
    /// Unrecognised curves keep the dotted OID as their name and report 0 bits.
    pub fn ec(curve_oid: &str) -> Self {
        let mut classification = Self::of(KeyType::Ec, 0);
        match NamedCurve::from_oid_str(curve_oid) {
            Some(curve) => {
                classification.bits = curve.bits();
                classification.curve = Some(curve.display_name().to_string());
            }
            None => classification.curve = Some(curve_oid.to_string()),
        }
        classification
    }

    pub fn ed25519() -> Self {
        Self::of(KeyType::Ed25519, 256)
    }

    pub fn ed448() -> Self {
        Self::of(KeyType::Ed448, 448)
    }

    /// A concrete type known only by name.
    ///
    /// A name passing the post-quantum token test maps to its family with
    /// 0 bits; refine it with `refine` to fill in the size.
    pub fn opaque(name: &str) -> Self {
        match pqc::family_of_name(name) {
            Some(family) => {
                let mut classification = Self::of(family.key_type(), 0);
                classification.is_quantum_safe = true;
                classification
            }
            None => Self::of(KeyType::Other(name.to_string()), 0),
        }
    }

    /// A parameter set identified directly, e.g. by OID.
    pub fn pqc(algorithm: &PqcAlgorithm) -> Self {
        Self::unknown().refine(&[algorithm])
    }

    pub fn unknown() -> Self {
        let mut classification = Self::of(KeyType::Unknown, 0);
        classification.algorithm = UNKNOWN_ALGORITHM.to_string();
        classification
    }

    /// Applies text-scan matches in order.
    ///
    /// Every label is kept. The scalar fields take the values of the last
    /// match, so a composite key is reported under its final label.
    pub fn refine(mut self, matches: &[&PqcAlgorithm]) -> Self {
        for alg in matches {
            let key_type = alg.family.key_type();
            self.algorithm = key_type.name().to_string();
            self.key_type = key_type;
            self.bits = alg.bits;
            self.curve = None;
            self.is_quantum_safe = true;
            if !self.pqc_labels.iter().any(|l| l == alg.label) {
                self.pqc_labels.push(alg.label.to_string());
            }
        }
        self
    }

    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::pqc::{by_label, scan_text};

    #[rstest]
    #[case("1.2.840.10045.3.1.7", 256, "P-256")]
    #[case("1.3.132.0.34", 384, "P-384")]
    #[case("1.3.132.0.35", 521, "P-521")]
    #[case("1.3.132.0.10", 256, "secp256k1")]
    #[case("1.3.132.0.1", 0, "1.3.132.0.1")]
    fn test_ec(#[case] oid: &str, #[case] bits: u32, #[case] curve: &str) {
        let c = Classification::ec(oid);
        assert_eq!(c.key_type, KeyType::Ec);
        assert_eq!(c.bits, bits);
        assert_eq!(c.curve.as_deref(), Some(curve));
        assert!(!c.is_quantum_safe);
    }

    #[rstest]
    #[case(Classification::rsa(2048), KeyType::Rsa, 2048)]
    #[case(Classification::ed25519(), KeyType::Ed25519, 256)]
    #[case(Classification::ed448(), KeyType::Ed448, 448)]
    fn test_classical(#[case] c: Classification, #[case] key_type: KeyType, #[case] bits: u32) {
        assert_eq!(c.key_type, key_type);
        assert_eq!(c.bits, bits);
        assert_eq!(c.curve, None);
        assert!(!c.is_quantum_safe);
        assert!(c.pqc_labels.is_empty());
    }

    #[rstest]
    #[case("dilithium3", KeyType::MlDsa, true)]
    #[case("mlkem768", KeyType::MlKem, true)]
    #[case("falcon512", KeyType::FnDsa, true)]
    #[case("rainbow", KeyType::Other("rainbow".to_string()), false)]
    #[case("X25519", KeyType::Other("X25519".to_string()), false)]
    fn test_opaque(#[case] name: &str, #[case] key_type: KeyType, #[case] quantum_safe: bool) {
        let c = Classification::opaque(name);
        assert_eq!(c.key_type, key_type);
        assert_eq!(c.is_quantum_safe, quantum_safe);
        assert_eq!(c.bits, 0);
        assert_eq!(c.is_quantum_safe, c.key_type.is_pqc_family());
    }

    #[test]
    fn test_refine_last_match_wins_for_scalars() {
        let matches = scan_text(b"hybrid: ML-DSA-87 with ML-KEM-768");
        let c = Classification::unknown().refine(&matches);
        assert_eq!(c.key_type, KeyType::MlKem);
        assert_eq!(c.algorithm, "ML-KEM");
        assert_eq!(c.bits, 768);
        assert!(c.is_quantum_safe);
        assert_eq!(c.pqc_labels, vec!["ML-DSA-87", "ML-KEM-768"]);
    }

    #[test]
    fn test_refine_opaque_match() {
        let matches = scan_text(b"dilithium2 key, ML-DSA-44");
        let c = Classification::opaque("dilithium2").refine(&matches);
        assert_eq!(c.key_type, KeyType::MlDsa);
        assert_eq!(c.bits, 44);
        assert_eq!(c.pqc_labels, vec!["ML-DSA-44"]);
    }

    #[test]
    fn test_refine_without_matches_is_identity() {
        assert_eq!(Classification::unknown().refine(&[]), Classification::unknown());
    }

    #[test]
    fn test_pqc() {
        let alg = by_label("SLH-DSA-SHA2-128S").unwrap();
        let c = Classification::pqc(alg).with_algorithm("PKCS#8");
        assert_eq!(c.key_type, KeyType::SlhDsa);
        assert_eq!(c.bits, 128);
        assert_eq!(c.algorithm, "PKCS#8");
        assert_eq!(c.pqc_labels, vec!["SLH-DSA-SHA2-128S"]);
    }

    #[test]
    fn test_unknown() {
        let c = Classification::unknown();
        assert_eq!(c.key_type, KeyType::Unknown);
        assert_eq!(c.algorithm, UNKNOWN_ALGORITHM);
        assert!(!c.is_quantum_safe);
    }
}
