//! Runtime configuration assembled from command-line flags

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Catalog location used when neither `--url` nor `--file` is given
pub const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/kaybeenwar/cs3870_assignment2/refs/heads/main/emojis.json";

/// Where the catalog JSON comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Url(DEFAULT_CATALOG_URL.to_string())
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => f.write_str(url),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub source: DataSource,
    /// Request timeout; `None` waits for the transport to give up on its own
    pub timeout: Option<Duration>,
    /// Extra time the loading overlay stays up after a successful load
    pub settle_delay: Duration,
    pub log_file: Option<PathBuf>,
    pub verbose: bool,
}

impl Config {
    pub fn new(source: DataSource) -> Self {
        Self { source, ..Self::default() }
    }
}
