use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read standard input: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("{0}")]
    Key(#[from] certlens_pkcs::Error),

    #[error("{0}")]
    Certificate(#[from] certlens_x509::Error),

    #[error("{0}")]
    Inventory(#[from] certlens_inventory::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yml::Error),
}

pub(crate) type Result<T> = std::result::Result<T, Error>;
