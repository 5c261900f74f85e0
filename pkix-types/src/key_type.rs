//! Normalised key algorithm families.

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

/// `id-Ed25519` from [RFC 8410](https://datatracker.ietf.org/doc/html/rfc8410#section-3).
pub const OID_ED25519: &str = "1.3.101.112";
/// `id-Ed448` from RFC 8410.
pub const OID_ED448: &str = "1.3.101.113";

/// Algorithm family of a key, as reported in records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum KeyType {
    Rsa,
    Ec,
    Ed25519,
    Ed448,
    MlDsa,
    MlKem,
    SlhDsa,
    /// FN-DSA, published before standardisation as FALCON
    FnDsa,
    /// A concrete, structurally decoded type outside the families above,
    /// e.g. X25519 or DSA. Never quantum-safe.
    Other(String),
    #[default]
    Unknown,
}

impl KeyType {
    pub fn name(&self) -> &str {
        match self {
            KeyType::Rsa => "RSA",
            KeyType::Ec => "EC",
            KeyType::Ed25519 => "Ed25519",
            KeyType::Ed448 => "Ed448",
            KeyType::MlDsa => "ML-DSA",
            KeyType::MlKem => "ML-KEM",
            KeyType::SlhDsa => "SLH-DSA",
            KeyType::FnDsa => "FN-DSA",
            KeyType::Other(name) => name,
            KeyType::Unknown => "Unknown",
        }
    }

    /// True for the post-quantum families.
    pub fn is_pqc_family(&self) -> bool {
        matches!(
            self,
            KeyType::MlDsa | KeyType::MlKem | KeyType::SlhDsa | KeyType::FnDsa
        )
    }
}

impl Display for KeyType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for KeyType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}
