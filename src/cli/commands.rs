use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::{Config, DataSource};
use crate::filters::{apply_controls, unique_categories};
use crate::loader::load;
use crate::logging;
use crate::models::{Controls, EmojiRecord};
use crate::tui::run_interactive;
use crate::utils::sanitize_line;
use crate::view::{
    Card, LOAD_FAILED_MESSAGE, NO_RESULTS_HINT, NO_RESULTS_TITLE, results_summary,
};

#[derive(Parser)]
#[command(name = "emoji-catalog-explorer")]
#[command(version = "0.1.0")]
#[command(about = "Search, filter and sort an emoji catalog", long_about = None)]
pub struct Cli {
    /// URL of the catalog JSON (defaults to the public emoji catalog)
    #[arg(long, conflicts_with = "file")]
    pub url: Option<String>,

    /// Read the catalog from a local JSON file instead of the network
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Request timeout in seconds (waits indefinitely when omitted)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Keep the loading overlay up this many milliseconds after a successful load
    #[arg(long, default_value_t = 0)]
    pub settle_ms: u64,

    /// Append logs to this file (the interactive browser logs nowhere else)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log informational messages, not only warnings
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse the catalog interactively (default)
    Browse,
    /// Print the catalog after search, category filter and sort
    List {
        /// Case-insensitive text matched against name, description and category
        #[arg(short, long, default_value = "")]
        search: String,
        /// Exact category to keep
        #[arg(short, long, default_value = "")]
        category: String,
        /// `asc` or `desc` by name; anything else keeps catalog order
        #[arg(long, default_value = "")]
        sort: String,
    },
    /// Print every category in the catalog
    Categories,
}

impl Cli {
    pub fn config(&self) -> Config {
        let source = match (&self.url, &self.file) {
            (_, Some(path)) => DataSource::File(path.clone()),
            (Some(url), None) => DataSource::Url(url.clone()),
            (None, None) => DataSource::default(),
        };

        Config {
            source,
            timeout: self.timeout_secs.map(Duration::from_secs),
            settle_delay: Duration::from_millis(self.settle_ms),
            log_file: self.log_file.clone(),
            verbose: self.verbose,
        }
    }
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    let interactive = matches!(cli.command, None | Some(Commands::Browse));
    logging::init(config.verbose, config.log_file.as_deref(), interactive)?;

    match &cli.command {
        None | Some(Commands::Browse) => run_interactive(&config).await?,
        Some(Commands::List { search, category, sort }) => {
            let controls = Controls {
                search_term: search.clone(),
                selected_category: category.clone(),
                sort_order: sort.parse().unwrap_or_default(),
            };
            list(&config, &controls).await?;
        }
        Some(Commands::Categories) => {
            show_categories(&config).await?;
        }
    }

    Ok(())
}

async fn load_catalog(config: &Config) -> Result<Vec<EmojiRecord>> {
    load(config).await.context(LOAD_FAILED_MESSAGE)
}

async fn list(config: &Config, controls: &Controls) -> Result<()> {
    let records = load_catalog(config).await?;
    let visible = apply_controls(&records, controls);

    let mut stdout = io::stdout().lock();
    write_listing(&mut stdout, &visible)?;
    Ok(())
}

async fn show_categories(config: &Config) -> Result<()> {
    let records = load_catalog(config).await?;

    let mut stdout = io::stdout().lock();
    for category in unique_categories(&records) {
        writeln!(stdout, "{}", sanitize_line(&category))?;
    }
    Ok(())
}

/// Plain-text rendering of the card grid: summary line, then one line per card
fn write_listing(out: &mut impl Write, records: &[EmojiRecord]) -> io::Result<()> {
    writeln!(out, "{}", results_summary(records.len()))?;

    if records.is_empty() {
        writeln!(out, "{}", NO_RESULTS_TITLE)?;
        writeln!(out, "{}", NO_RESULTS_HINT)?;
        return Ok(());
    }

    for card in records.iter().map(Card::from) {
        writeln!(
            out,
            "{}  {}  [{}]  {}",
            card.glyph,
            card.name,
            card.category,
            sanitize_line(&card.description)
        )?;
    }
    Ok(())
}
