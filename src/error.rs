//! Error types for the two external services.
//!
//! Catalog failures reach the user (as an error panel); trend store
//! failures are only ever logged.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure while fetching movies from the catalog API
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog answered with a non-2xx status
    #[error("catalog returned HTTP {status}")]
    Status { status: StatusCode },

    /// Transport-level failure (DNS, connect, TLS, timeout)
    #[error("catalog request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Body was not the JSON we expected
    #[error("failed to parse catalog response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Well-formed response that signals a logical failure
    #[error("catalog rejected the request: {}", message.as_deref().unwrap_or("no message"))]
    Api { message: Option<String> },
}

/// Failure while talking to the trend store
#[derive(Debug, Error)]
pub enum TrendStoreError {
    #[error("trend store returned HTTP {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("trend store request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to parse trend store response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("trend record for '{0}' already exists")]
    Duplicate(String),

    #[error("trend store is unavailable: {0}")]
    Unavailable(String),
}
