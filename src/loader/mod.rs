//! Catalog loading over HTTP or from a local file.
//!
//! A load is a single attempt: no retries, no caching. While it runs, a
//! [`LoadingIndicator`] is shown; [`LoadingGuard`] hides it again on every exit path,
//! including early returns through `?`.

mod indicator;

use std::path::Path;
use std::time::Duration;

pub use indicator::{LoadingGuard, LoadingIndicator};
use tracing::{info, warn};

use crate::config::{Config, DataSource};
use crate::error::{LoadError, Result};
use crate::models::EmojiRecord;
use crate::parsers::parse_records;
use crate::parsers::records::MAX_BODY_SIZE;

/// Build the HTTP client used for catalog requests
pub fn build_client(timeout: Option<Duration>) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(|e| LoadError::Network(format!("Failed to build HTTP client: {}", e)))
}

/// Load the catalog from the configured source
pub async fn load(config: &Config) -> Result<Vec<EmojiRecord>> {
    match &config.source {
        DataSource::Url(url) => {
            let client = build_client(config.timeout)?;
            fetch_records(&client, url).await
        }
        DataSource::File(path) => read_records(path).await,
    }
}

/// Load the catalog with `indicator` visible for the duration of the call
///
/// On success the indicator stays up for `config.settle_delay` longer before it is hidden.
pub async fn load_with_indicator<I>(indicator: &mut I, config: &Config) -> Result<Vec<EmojiRecord>>
where
    I: LoadingIndicator + ?Sized,
{
    let _guard = LoadingGuard::new(indicator);

    info!(source = %config.source, "loading emoji catalog");
    let result = load(config).await;

    match &result {
        Ok(records) => {
            info!(count = records.len(), "loaded emoji catalog");
            if !config.settle_delay.is_zero() {
                tokio::time::sleep(config.settle_delay).await;
            }
        }
        Err(e) => warn!(error = %e, "failed to load emoji catalog"),
    }

    result
}

/// GET `url` and parse the body as a catalog
///
/// The body is read chunk by chunk and abandoned as soon as it passes
/// [`MAX_BODY_SIZE`], whether or not the server declared a Content-Length.
pub async fn fetch_records(client: &reqwest::Client, url: &str) -> Result<Vec<EmojiRecord>> {
    let mut response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status(status.as_u16()));
    }

    if let Some(length) = response.content_length()
        && length as usize > MAX_BODY_SIZE
    {
        return Err(LoadError::TooLarge { size: length as usize, max: MAX_BODY_SIZE });
    }

    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        let size = body.len() + chunk.len();
        if size > MAX_BODY_SIZE {
            return Err(LoadError::TooLarge { size, max: MAX_BODY_SIZE });
        }
        body.extend_from_slice(&chunk);
    }

    let body = String::from_utf8(body)
        .map_err(|e| LoadError::Parse(format!("response body is not UTF-8: {}", e)))?;
    parse_records(&body)
}

/// Read and parse a catalog stored on disk
pub async fn read_records(path: &Path) -> Result<Vec<EmojiRecord>> {
    let io_error = |source: std::io::Error| LoadError::Io { path: path.to_path_buf(), source };

    let metadata = tokio::fs::metadata(path).await.map_err(io_error)?;
    if metadata.len() as usize > MAX_BODY_SIZE {
        return Err(LoadError::TooLarge { size: metadata.len() as usize, max: MAX_BODY_SIZE });
    }

    let body = tokio::fs::read_to_string(path).await.map_err(io_error)?;
    parse_records(&body)
}
