//! Paper sources.
//!
//! A [`Fetcher`] turns a paper identifier into a readable byte stream. The
//! retry layer (`crate::retry`) decorates any fetcher without it knowing.

mod dir;
mod error;
mod http;

pub use dir::DirFetcher;
pub use error::FetchError;
pub use http::{HttpFetcher, HttpFetcherOptions};

use std::io::Read;
use std::sync::Arc;

/// Document bytes handed back by a fetcher.
pub type ByteStream = Box<dyn Read + Send>;

/// Capability to retrieve a document by identifier.
///
/// Implementations must be usable from several threads at once; each call
/// is independent.
pub trait Fetcher {
    fn fetch(&self, id: &str) -> Result<ByteStream, FetchError>;
}

impl<T: Fetcher + ?Sized> Fetcher for &T {
    fn fetch(&self, id: &str) -> Result<ByteStream, FetchError> {
        (**self).fetch(id)
    }
}

impl<T: Fetcher + ?Sized> Fetcher for Box<T> {
    fn fetch(&self, id: &str) -> Result<ByteStream, FetchError> {
        (**self).fetch(id)
    }
}

impl<T: Fetcher + ?Sized> Fetcher for Arc<T> {
    fn fetch(&self, id: &str) -> Result<ByteStream, FetchError> {
        (**self).fetch(id)
    }
}

/// Suffix appended to ids by the built-in sources unless configured otherwise.
pub const DEFAULT_SUFFIX: &str = ".pdf";

/// Reject ids that could escape the source root (path separators, `..`, empty).
pub(crate) fn check_id(id: &str) -> Result<(), FetchError> {
    if id.is_empty() || id == "." || id == ".." || id.contains(['/', '\\', '\0']) {
        return Err(FetchError::invalid_id(id));
    }
    Ok(())
}
