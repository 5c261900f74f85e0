//! RSA private keys in the PKCS#1 `RSAPrivateKey` structure
//! ([RFC 8017 Appendix A.1.2](https://datatracker.ietf.org/doc/html/rfc8017#appendix-A.1.2)).

use ::pkcs1::RsaPrivateKey;
use ::pkcs1::der::Decode;
use certlens_pkix_types::Classification;
use num_bigint::BigUint;

use crate::error::Result;

/// Size of an RSA modulus in bits, leading zero octets excluded.
pub(crate) fn modulus_bits(modulus: &[u8]) -> u32 {
    BigUint::from_bytes_be(modulus).bits() as u32
}

pub(crate) fn classify(der: &[u8]) -> Result<Classification> {
    let key = RsaPrivateKey::from_der(der).map_err(::pkcs1::Error::from)?;
    Ok(Classification::rsa(modulus_bits(key.modulus.as_bytes())))
}

#[cfg(test)]
mod tests {
    use certlens_pkix_types::KeyType;
    use rstest::rstest;

    use super::*;
    use crate::Error;

    const RSA_PKCS1_DER: &[u8] = include_bytes!("../../testdata/keys/rsa2048-pkcs1.der");
    const EC_PKCS8_DER: &[u8] = include_bytes!("../../testdata/keys/ec-p256-pkcs8.der");

    #[rstest]
    #[case(&[0x00, 0x80], 8)]
    #[case(&[0x01, 0x00, 0x01], 17)]
    #[case(&[0xff; 256], 2048)]
    #[case(&[], 0)]
    fn test_modulus_bits(#[case] modulus: &[u8], #[case] expected: u32) {
        assert_eq!(modulus_bits(modulus), expected);
    }

    #[test]
    fn test_classify_rsa() {
        let c = classify(RSA_PKCS1_DER).unwrap();
        assert_eq!(c.key_type, KeyType::Rsa);
        assert_eq!(c.bits, 2048);
        assert!(!c.is_quantum_safe);
    }

    #[rstest]
    #[case::pkcs8(EC_PKCS8_DER)]
    #[case::empty(&[])]
    #[case::garbage(b"not a key")]
    fn test_classify_rejects(#[case] der: &[u8]) {
        assert!(matches!(classify(der), Err(Error::Pkcs1(_))));
    }
}
