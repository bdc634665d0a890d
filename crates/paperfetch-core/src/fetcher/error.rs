//! Error type returned by paper sources.

use std::io;
use thiserror::Error;

/// Error returned by a single fetch attempt.
///
/// Every variant is treated as transient by the retry layer; the variants
/// only exist so that logs and callers can tell what went wrong.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Local or network I/O failure (including rejected identifiers).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Curl reported an error (timeout, connection, DNS, etc.).
    #[error("transport error: {0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {status}")]
    Http { status: u32 },
    /// The source has no document for this identifier.
    #[error("paper {id} not found")]
    NotFound { id: String },
}

impl FetchError {
    /// Short category name used in retry logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Io(_) => "Io",
            FetchError::Curl(e) if e.is_operation_timedout() => "Timeout",
            FetchError::Curl(_) => "Transport",
            FetchError::Http { .. } => "Http",
            FetchError::NotFound { .. } => "NotFound",
        }
    }

    pub(crate) fn invalid_id(id: &str) -> Self {
        FetchError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid paper id {:?}", id),
        ))
    }
}
