//! Paper source backed by an HTTP server.
//!
//! Uses the curl crate (libcurl) to GET `<base_url>/<id><suffix>`. The body is
//! buffered in memory so the returned stream never fails mid-read.

use super::{check_id, ByteStream, FetchError, Fetcher, DEFAULT_SUFFIX};
use anyhow::{bail, Context, Result};
use std::io::Cursor;
use std::time::Duration;
use url::Url;

/// Timeouts and naming for [`HttpFetcher`].
#[derive(Debug, Clone)]
pub struct HttpFetcherOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub suffix: String,
}

impl Default for HttpFetcherOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(60),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    base: Url,
    options: HttpFetcherOptions,
}

impl HttpFetcher {
    /// Build a fetcher rooted at `base_url` (must be an absolute http(s) URL).
    pub fn new(base_url: &str, options: HttpFetcherOptions) -> Result<Self> {
        let base = Url::parse(base_url).with_context(|| format!("invalid base URL {}", base_url))?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            bail!("base URL must be http(s): {}", base_url);
        }
        Ok(Self { base, options })
    }

    /// URL the given id maps to.
    pub fn url_for(&self, id: &str) -> Result<Url, FetchError> {
        check_id(id)?;
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::invalid_id(id))?
            .pop_if_empty()
            .push(&format!("{}{}", id, self.options.suffix));
        Ok(url)
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, id: &str) -> Result<ByteStream, FetchError> {
        let url = self.url_for(id)?;
        tracing::debug!(%url, "GET paper");

        let mut body = Vec::new();
        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str())?;
        easy.follow_location(true)?;
        easy.connect_timeout(self.options.connect_timeout)?;
        easy.timeout(self.options.timeout)?;
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        match easy.response_code()? {
            200..=299 => Ok(Box::new(Cursor::new(body))),
            404 | 410 => Err(FetchError::NotFound { id: id.to_string() }),
            status => Err(FetchError::Http { status }),
        }
    }
}
