//! Tracing subscriber setup
//!
//! The interactive browser owns the terminal, so it only logs when a log file is given.
//! One-shot commands log to stderr. `RUST_LOG` overrides the default level.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "info" } else { "warn" }))
}

/// Install the global subscriber
pub fn init(verbose: bool, log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(default_filter(verbose));

    let result = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        None if interactive => return Ok(()),
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    result.map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}
