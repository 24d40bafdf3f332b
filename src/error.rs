use std::path::PathBuf;

use thiserror::Error;

/// Every way loading the catalog can fail.
///
/// The browser collapses all variants into one error alert; the variants exist so
/// callers and logs can tell a bad status from a broken connection or a bad body.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("HTTP error! Status: {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog too large ({size} bytes, max {max})")]
    TooLarge { size: usize, max: usize },
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => LoadError::Status(status.as_u16()),
            None if err.is_decode() => LoadError::Parse(err.to_string()),
            None => LoadError::Network(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;
