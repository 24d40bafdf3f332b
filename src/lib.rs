//! Emoji Catalog Explorer - Search, filter and sort a remote emoji catalog
//!
//! This library loads a JSON array of emoji records from a URL (or a local file) and turns
//! it, together with the user's control values, into the list of cards shown by the
//! terminal browser. It provides:
//!
//! - Loading the catalog with a loading indicator that is always hidden again
//! - Case-insensitive substring search, exact category filtering and stable name sorting
//! - Distinct category extraction for the category selector
//! - A view model for the card grid, results count and error alert
//! - An interactive `ratatui` browser driving recomputation from keyboard input
//!
//! # Example
//!
//! ```no_run
//! use emoji_catalog_explorer::config::{Config, DataSource};
//! use emoji_catalog_explorer::models::{Controls, SortOrder};
//! use emoji_catalog_explorer::{apply_controls, load};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::new(DataSource::File("emojis.json".into()));
//! let records = load(&config).await?;
//!
//! let controls = Controls {
//!     search_term: "heart".to_string(),
//!     selected_category: String::new(),
//!     sort_order: SortOrder::Ascending,
//! };
//! for record in apply_controls(&records, &controls) {
//!     println!("{} {}", record.unicode, record.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod filters;
pub mod loader;
pub mod logging;
pub mod models;
pub mod parsers;
pub mod tui;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use error::LoadError;
pub use filters::{apply_controls, filter_by_category, filter_by_search, sort_records, unique_categories};
pub use loader::{load, load_with_indicator};
pub use models::{CatalogState, Controls, EmojiRecord, SortOrder};
