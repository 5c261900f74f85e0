//! PKIX algorithm classification
//!
//! Shared lookup data and the normalised classification used by the key and
//! certificate inspectors:
//! - [`KeyType`]: the reported algorithm family
//! - [`NamedCurve`]: elliptic curves from RFC 5480, SEC 2 and RFC 5639
//! - [`pqc`]: post-quantum parameter sets, OIDs and the text heuristics
//! - [`Classification`]: family, size, curve and post-quantum verdict

pub mod classification;
pub mod curve;
pub mod key_type;
pub mod pqc;

pub use classification::Classification;
pub use curve::NamedCurve;
pub use key_type::{KeyType, OID_ED25519, OID_ED448};
pub use pqc::{PqcAlgorithm, PqcFamily};
