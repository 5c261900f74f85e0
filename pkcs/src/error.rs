use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no private key found in {filename}")]
    NoPrivateKey {
        filename: String,
        #[source]
        source: certlens_pem::Error,
    },

    #[error("PKCS#1 error: {0}")]
    Pkcs1(#[from] ::pkcs1::Error),

    #[error("SEC1 error: {0}")]
    Sec1(#[from] ::sec1::Error),

    #[error("PKCS#8 error: {0}")]
    Pkcs8(#[from] ::pkcs8::Error),

    #[error("SEC1 error: EC private key has no named curve")]
    MissingCurve,

    #[error("PKCS#8 error: unsupported private key algorithm {oid}")]
    UnsupportedAlgorithm { oid: String },
}

pub type Result<T> = std::result::Result<T, Error>;
