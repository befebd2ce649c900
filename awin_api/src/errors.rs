//! Error types for the API client.

/// Errors that can occur when building requests, fetching feeds, or decoding them.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The transport failed outright (network, DNS, TLS, timeout).
    #[error("Request failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The API returned a non-success status. Awin answers with plain-text
    /// error messages, so the body is carried as-is.
    #[error("Request failed with status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    /// The response body was not a valid gzip stream.
    #[error("Failed to decompress response: {0}")]
    Decompression(#[source] std::io::Error),
    /// The (decompressed) body was not valid CSV for the expected record shape.
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
    /// The base URL or one of the inserted values produced an invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The feed query cannot be turned into a request.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl Error {
    /// Wraps any transport-level failure.
    pub fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport(Box::new(err))
    }
}
