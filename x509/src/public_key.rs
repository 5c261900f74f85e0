//! Classification of a certificate's subject public key.

use certlens_pkix_types::{Classification, OID_ED25519, OID_ED448, pqc};
use log::debug;
use num_bigint::BigUint;
use x509_parser::prelude::*;
use x509_parser::public_key::PublicKey;

pub(crate) fn classify(spki: &SubjectPublicKeyInfo<'_>) -> Classification {
    let oid = spki.algorithm.oid().to_id_string();
    if let Some(alg) = pqc::by_oid(&oid) {
        return Classification::pqc(alg);
    }
    match oid.as_str() {
        OID_ED25519 => return Classification::ed25519(),
        OID_ED448 => return Classification::ed448(),
        _ => {}
    }

    match spki.parsed() {
        Ok(PublicKey::RSA(rsa)) => {
            Classification::rsa(BigUint::from_bytes_be(rsa.modulus).bits() as u32)
        }
        Ok(PublicKey::EC(_)) => {
            // Explicit curve parameters are left unclassified.
            spki.algorithm
                .parameters
                .as_ref()
                .and_then(|params| params.as_oid().ok())
                .map_or_else(Classification::unknown, |curve| {
                    Classification::ec(&curve.to_id_string())
                })
        }
        Ok(_) => {
            debug!("unclassified public key algorithm {oid}");
            Classification::unknown()
        }
        Err(e) => {
            debug!("cannot parse public key {oid}: {e}");
            Classification::unknown()
        }
    }
}
