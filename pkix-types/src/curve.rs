//! Elliptic curves recognised when classifying EC keys.
//!
//! OIDs from [RFC 5480 Section 2.1.1.1](https://datatracker.ietf.org/doc/html/rfc5480#section-2.1.1.1),
//! SEC 2 and [RFC 5639](https://datatracker.ietf.org/doc/html/rfc5639).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedCurve {
    /// secp192r1 (also known as prime192v1 or P-192)
    Secp192r1,
    /// secp224r1 (also known as P-224)
    Secp224r1,
    /// secp256r1 (also known as prime256v1 or P-256)
    Secp256r1,
    /// secp384r1 (also known as P-384)
    Secp384r1,
    /// secp521r1 (also known as P-521)
    Secp521r1,
    /// secp256k1, the Koblitz curve used by Bitcoin
    Secp256k1,
    BrainpoolP256r1,
    BrainpoolP384r1,
    BrainpoolP512r1,
}

impl NamedCurve {
    pub const OID_SECP192R1: &'static str = "1.2.840.10045.3.1.1";
    pub const OID_SECP224R1: &'static str = "1.3.132.0.33";
    pub const OID_SECP256R1: &'static str = "1.2.840.10045.3.1.7";
    pub const OID_SECP384R1: &'static str = "1.3.132.0.34";
    pub const OID_SECP521R1: &'static str = "1.3.132.0.35";
    pub const OID_SECP256K1: &'static str = "1.3.132.0.10";
    pub const OID_BRAINPOOL_P256R1: &'static str = "1.3.36.3.3.2.8.1.1.7";
    pub const OID_BRAINPOOL_P384R1: &'static str = "1.3.36.3.3.2.8.1.1.11";
    pub const OID_BRAINPOOL_P512R1: &'static str = "1.3.36.3.3.2.8.1.1.13";

    const ALL: [NamedCurve; 9] = [
        NamedCurve::Secp192r1,
        NamedCurve::Secp224r1,
        NamedCurve::Secp256r1,
        NamedCurve::Secp384r1,
        NamedCurve::Secp521r1,
        NamedCurve::Secp256k1,
        NamedCurve::BrainpoolP256r1,
        NamedCurve::BrainpoolP384r1,
        NamedCurve::BrainpoolP512r1,
    ];

    /// Get the dotted-decimal OID for this curve.
    ///
    /// ```
    /// use certlens_pkix_types::NamedCurve;
    ///
    /// assert_eq!(NamedCurve::Secp256r1.oid_str(), "1.2.840.10045.3.1.7");
    /// ```
    pub const fn oid_str(&self) -> &'static str {
        match self {
            Self::Secp192r1 => Self::OID_SECP192R1,
            Self::Secp224r1 => Self::OID_SECP224R1,
            Self::Secp256r1 => Self::OID_SECP256R1,
            Self::Secp384r1 => Self::OID_SECP384R1,
            Self::Secp521r1 => Self::OID_SECP521R1,
            Self::Secp256k1 => Self::OID_SECP256K1,
            Self::BrainpoolP256r1 => Self::OID_BRAINPOOL_P256R1,
            Self::BrainpoolP384r1 => Self::OID_BRAINPOOL_P384R1,
            Self::BrainpoolP512r1 => Self::OID_BRAINPOOL_P512R1,
        }
    }

    pub fn from_oid_str(oid: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|curve| curve.oid_str() == oid)
    }

    /// Field size in bits.
    pub const fn bits(&self) -> u32 {
        match self {
            Self::Secp192r1 => 192,
            Self::Secp224r1 => 224,
            Self::Secp256r1 | Self::Secp256k1 | Self::BrainpoolP256r1 => 256,
            Self::Secp384r1 | Self::BrainpoolP384r1 => 384,
            Self::Secp521r1 => 521,
            Self::BrainpoolP512r1 => 512,
        }
    }

    /// Name reported in records: the NIST name where one exists.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Secp192r1 => "P-192",
            Self::Secp224r1 => "P-224",
            Self::Secp256r1 => "P-256",
            Self::Secp384r1 => "P-384",
            Self::Secp521r1 => "P-521",
            Self::Secp256k1 => "secp256k1",
            Self::BrainpoolP256r1 => "brainpoolP256r1",
            Self::BrainpoolP384r1 => "brainpoolP384r1",
            Self::BrainpoolP512r1 => "brainpoolP512r1",
        }
    }
}
