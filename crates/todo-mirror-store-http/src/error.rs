//! Error types for HTTP store operations.

use thiserror::Error;

/// Errors that can occur during `HttpStore` operations.
#[derive(Error, Debug)]
pub enum HttpStoreError {
    /// The configured base URL does not parse.
    #[error("invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    /// Transport failure, non-success status, or undecodable body.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}
