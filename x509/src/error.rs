use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no certificate found in {filename}")]
    NoCertificate {
        filename: String,
        #[source]
        source: certlens_pem::Error,
    },

    #[error("invalid certificate: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
