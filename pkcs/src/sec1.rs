//! EC private keys in the SEC1 `ECPrivateKey` structure
//! ([RFC 5915](https://datatracker.ietf.org/doc/html/rfc5915)).

use ::sec1::EcPrivateKey;
use ::sec1::der::Decode;
use certlens_pkix_types::Classification;

use crate::error::{Error, Result};

/// A SEC1 key must name its curve; keys that rely on out-of-band domain
/// parameters are rejected so the next format can be tried.
pub(crate) fn classify(der: &[u8]) -> Result<Classification> {
    let key = EcPrivateKey::from_der(der).map_err(::sec1::Error::from)?;
    let curve = key
        .parameters
        .and_then(|params| params.named_curve())
        .ok_or(Error::MissingCurve)?;
    Ok(Classification::ec(&curve.to_string()))
}

#[cfg(test)]
mod tests {
    use certlens_pem::{Label, open};
    use certlens_pkix_types::KeyType;
    use rstest::rstest;

    use super::*;

    const P521_SEC1_DER: &[u8] = include_bytes!("../../testdata/keys/ec-p521-sec1.der");
    const P384_SEC1_PEM: &[u8] = include_bytes!("../../testdata/keys/ec-p384-sec1.pem");
    const K256_SEC1_PEM: &[u8] = include_bytes!("../../testdata/keys/ec-secp256k1-sec1.pem");
    const RSA_PKCS1_DER: &[u8] = include_bytes!("../../testdata/keys/rsa2048-pkcs1.der");
    const EC_PKCS8_DER: &[u8] = include_bytes!("../../testdata/keys/ec-p256-pkcs8.der");

    #[rstest]
    #[case::p521_der(P521_SEC1_DER, "P-521", 521)]
    #[case::p384_pem(P384_SEC1_PEM, "P-384", 384)]
    #[case::secp256k1_pem(K256_SEC1_PEM, "secp256k1", 256)]
    fn test_classify_ec(#[case] input: &[u8], #[case] curve: &str, #[case] bits: u32) {
        let opened = open(input, Label::PRIVATE_KEYS).unwrap();
        let c = classify(&opened.payload).unwrap();
        assert_eq!(c.key_type, KeyType::Ec);
        assert_eq!(c.curve.as_deref(), Some(curve));
        assert_eq!(c.bits, bits);
    }

    #[rstest]
    #[case::pkcs1(RSA_PKCS1_DER)]
    #[case::pkcs8(EC_PKCS8_DER)]
    #[case::empty(&[])]
    fn test_classify_rejects(#[case] der: &[u8]) {
        assert!(matches!(classify(der), Err(Error::Sec1(_))));
    }
}
