//! Post-quantum algorithm lookup data and the heuristics built on it.
//!
//! The nominal `bits` of each entry is the numeric suffix of the standard
//! parameter-set name (the `768` in ML-KEM-768). It is a size indicator for
//! display, not a security strength.

use std::sync::LazyLock;

use regex::Regex;

use crate::KeyType;

static DOTTED_OID: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b[0-2](?:\.[0-9]+){2,}\b").ok());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PqcFamily {
    MlDsa,
    MlKem,
    SlhDsa,
    FnDsa,
}

impl PqcFamily {
    pub fn key_type(self) -> KeyType {
        match self {
            PqcFamily::MlDsa => KeyType::MlDsa,
            PqcFamily::MlKem => KeyType::MlKem,
            PqcFamily::SlhDsa => KeyType::SlhDsa,
            PqcFamily::FnDsa => KeyType::FnDsa,
        }
    }
}

/// One post-quantum parameter set.
#[derive(Debug, PartialEq, Eq)]
pub struct PqcAlgorithm {
    /// Canonical label, also the primary text token.
    pub label: &'static str,
    /// Alternative spellings recognised by the text scan.
    pub aliases: &'static [&'static str],
    pub family: PqcFamily,
    pub bits: u32,
    pub oid: Option<&'static str>,
}

const fn entry(
    label: &'static str,
    aliases: &'static [&'static str],
    family: PqcFamily,
    bits: u32,
    oid: Option<&'static str>,
) -> PqcAlgorithm {
    PqcAlgorithm {
        label,
        aliases,
        family,
        bits,
        oid,
    }
}

/// Every known parameter set, in text-scan order.
pub static PQC_ALGORITHMS: &[PqcAlgorithm] = &[
    entry("ML-DSA-44", &["MLDSA44"], PqcFamily::MlDsa, 44, Some("2.16.840.1.101.3.4.3.17")),
    entry("ML-DSA-65", &["MLDSA65"], PqcFamily::MlDsa, 65, Some("2.16.840.1.101.3.4.3.18")),
    entry("ML-DSA-87", &["MLDSA87"], PqcFamily::MlDsa, 87, Some("2.16.840.1.101.3.4.3.19")),
    entry("ML-KEM-512", &["MLKEM512"], PqcFamily::MlKem, 512, Some("2.16.840.1.101.3.4.4.1")),
    entry("ML-KEM-768", &["MLKEM768"], PqcFamily::MlKem, 768, Some("2.16.840.1.101.3.4.4.2")),
    entry("ML-KEM-1024", &["MLKEM1024"], PqcFamily::MlKem, 1024, Some("2.16.840.1.101.3.4.4.3")),
    entry("SLH-DSA-SHA2-128S", &[], PqcFamily::SlhDsa, 128, Some("2.16.840.1.101.3.4.3.20")),
    entry("SLH-DSA-SHA2-128F", &[], PqcFamily::SlhDsa, 128, Some("2.16.840.1.101.3.4.3.21")),
    entry("SLH-DSA-SHA2-192S", &[], PqcFamily::SlhDsa, 192, Some("2.16.840.1.101.3.4.3.22")),
    entry("SLH-DSA-SHA2-192F", &[], PqcFamily::SlhDsa, 192, Some("2.16.840.1.101.3.4.3.23")),
    entry("SLH-DSA-SHA2-256S", &[], PqcFamily::SlhDsa, 256, Some("2.16.840.1.101.3.4.3.24")),
    entry("SLH-DSA-SHA2-256F", &[], PqcFamily::SlhDsa, 256, Some("2.16.840.1.101.3.4.3.25")),
    entry("SLH-DSA-SHAKE-128S", &[], PqcFamily::SlhDsa, 128, Some("2.16.840.1.101.3.4.3.26")),
    entry("SLH-DSA-SHAKE-128F", &[], PqcFamily::SlhDsa, 128, Some("2.16.840.1.101.3.4.3.27")),
    entry("SLH-DSA-SHAKE-192S", &[], PqcFamily::SlhDsa, 192, Some("2.16.840.1.101.3.4.3.28")),
    entry("SLH-DSA-SHAKE-192F", &[], PqcFamily::SlhDsa, 192, Some("2.16.840.1.101.3.4.3.29")),
    entry("SLH-DSA-SHAKE-256S", &[], PqcFamily::SlhDsa, 256, Some("2.16.840.1.101.3.4.3.30")),
    entry("SLH-DSA-SHAKE-256F", &[], PqcFamily::SlhDsa, 256, Some("2.16.840.1.101.3.4.3.31")),
    entry("FALCON-512", &[], PqcFamily::FnDsa, 512, None),
    entry("FALCON-1024", &[], PqcFamily::FnDsa, 1024, None),
];

/// Substrings that mark an algorithm name as post-quantum. `rainbow` has no
/// surviving family.
static PQC_TOKENS: &[(&str, Option<PqcFamily>)] = &[
    ("ml-kem", Some(PqcFamily::MlKem)),
    ("ml-dsa", Some(PqcFamily::MlDsa)),
    ("slh-dsa", Some(PqcFamily::SlhDsa)),
    ("fn-dsa", Some(PqcFamily::FnDsa)),
    ("falcon", Some(PqcFamily::FnDsa)),
    ("dilithium", Some(PqcFamily::MlDsa)),
    ("kyber", Some(PqcFamily::MlKem)),
    ("sphincs", Some(PqcFamily::SlhDsa)),
    ("rainbow", None),
];

pub fn by_oid(oid: &str) -> Option<&'static PqcAlgorithm> {
    PQC_ALGORITHMS.iter().find(|alg| alg.oid == Some(oid))
}

pub fn by_label(label: &str) -> Option<&'static PqcAlgorithm> {
    PQC_ALGORITHMS.iter().find(|alg| alg.label == label)
}

fn match_token(name: &str) -> Option<Option<PqcFamily>> {
    let lower = name.to_ascii_lowercase();
    let squashed: String = lower.chars().filter(|c| *c != '-' && *c != '_').collect();
    PQC_TOKENS
        .iter()
        .find(|(token, _)| lower.contains(token) || squashed.contains(&token.replace('-', "")))
        .map(|(_, family)| *family)
}

/// Case-insensitive token test over an algorithm or type name.
///
/// ```
/// use certlens_pkix_types::pqc::is_pqc_name;
///
/// assert!(is_pqc_name("ML-DSA-65"));
/// assert!(is_pqc_name("mldsa44"));
/// assert!(!is_pqc_name("sha256WithRSAEncryption"));
/// ```
pub fn is_pqc_name(name: &str) -> bool {
    match_token(name).is_some()
}

/// Family implied by a name, if its token has one.
pub fn family_of_name(name: &str) -> Option<PqcFamily> {
    match_token(name).flatten()
}

/// Every parameter set whose label or alias occurs in `data`, each once, in
/// table order.
pub fn scan_text(data: &[u8]) -> Vec<&'static PqcAlgorithm> {
    let text = String::from_utf8_lossy(data);
    PQC_ALGORITHMS
        .iter()
        .filter(|alg| {
            text.contains(alg.label) || alg.aliases.iter().any(|alias| text.contains(alias))
        })
        .collect()
}

/// First dotted OID in `text` that names a known parameter set.
pub fn oid_in_text(text: &str) -> Option<&'static PqcAlgorithm> {
    DOTTED_OID
        .as_ref()?
        .find_iter(text)
        .find_map(|m| by_oid(m.as_str()))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("2.16.840.1.101.3.4.3.17", "ML-DSA-44")]
    #[case("2.16.840.1.101.3.4.3.19", "ML-DSA-87")]
    #[case("2.16.840.1.101.3.4.4.2", "ML-KEM-768")]
    #[case("2.16.840.1.101.3.4.3.20", "SLH-DSA-SHA2-128S")]
    #[case("2.16.840.1.101.3.4.3.31", "SLH-DSA-SHAKE-256F")]
    fn test_by_oid(#[case] oid: &str, #[case] label: &str) {
        assert_eq!(by_oid(oid).map(|alg| alg.label), Some(label));
    }

    #[test]
    fn test_table_is_consistent() {
        for alg in PQC_ALGORITHMS {
            assert_eq!(by_label(alg.label), Some(alg));
            assert!(is_pqc_name(alg.label), "{} must pass the token test", alg.label);
            assert_eq!(family_of_name(alg.label), Some(alg.family));
            if let Some(oid) = alg.oid {
                assert_eq!(by_oid(oid), Some(alg));
            }
        }
    }

    #[rstest]
    #[case("ML-KEM-768", Some(Some(PqcFamily::MlKem)))]
    #[case("mlkem1024", Some(Some(PqcFamily::MlKem)))]
    #[case("Dilithium3", Some(Some(PqcFamily::MlDsa)))]
    #[case("falcon512", Some(Some(PqcFamily::FnDsa)))]
    #[case("FN-DSA", Some(Some(PqcFamily::FnDsa)))]
    #[case("SPHINCS+-SHA256", Some(Some(PqcFamily::SlhDsa)))]
    #[case("slh_dsa_sha2_128s", Some(Some(PqcFamily::SlhDsa)))]
    #[case("Kyber768", Some(Some(PqcFamily::MlKem)))]
    #[case("rainbowIII", Some(None))]
    #[case("X25519", None)]
    #[case("ecdsa-with-SHA256", None)]
    fn test_match_token(#[case] name: &str, #[case] expected: Option<Option<PqcFamily>>) {
        assert_eq!(match_token(name), expected);
        assert_eq!(is_pqc_name(name), expected.is_some());
    }

    #[rstest]
    #[case::none(b"no post quantum content here".as_slice(), vec![])]
    #[case::single(b"uses ML-DSA-44".as_slice(), vec!["ML-DSA-44"])]
    #[case::alias(b"MLKEM768 encapsulation key".as_slice(), vec!["ML-KEM-768"])]
    #[case::alias_and_label_once(b"ML-DSA-65 / MLDSA65".as_slice(), vec!["ML-DSA-65"])]
    #[case::hybrid(b"FALCON-512 + ML-KEM-1024 + ML-DSA-87".as_slice(), vec!["ML-DSA-87", "ML-KEM-1024", "FALCON-512"])]
    #[case::case_sensitive(b"ml-dsa-44".as_slice(), vec![])]
    fn test_scan_text(#[case] data: &[u8], #[case] expected: Vec<&str>) {
        let got: Vec<&str> = scan_text(data).iter().map(|alg| alg.label).collect();
        assert_eq!(got, expected);
    }

    #[rstest]
    #[case(
        "unknown algorithm: 2.16.840.1.101.3.4.3.18",
        Some("ML-DSA-65")
    )]
    #[case("oid 1.2.840.113549.1.1.1 then 2.16.840.1.101.3.4.4.1", Some("ML-KEM-512"))]
    #[case("2.16.840.1.101.3.4.3.170 is not a prefix match", None)]
    #[case("no identifier", None)]
    fn test_oid_in_text(#[case] text: &str, #[case] expected: Option<&str>) {
        assert_eq!(oid_in_text(text).map(|alg| alg.label), expected);
    }
}
