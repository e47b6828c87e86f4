use thiserror::Error;

/// Failure modes of a single catalog page fetch
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid endpoint '{0}'")]
    InvalidEndpoint(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}
