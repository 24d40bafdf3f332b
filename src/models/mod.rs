//! Data models for the emoji catalog.
//!
//! - [`EmojiRecord`] - One emoji as delivered by the remote catalog
//! - [`Controls`] / [`SortOrder`] - The user's current search, category and sort choice
//! - [`CatalogState`] - Full and visible record collections owned by the browser
//!
//! Records use serde for JSON deserialization; the `id` field goes through a custom
//! deserializer in the `parsers::deserializers` module because the catalog may use
//! any JSON scalar for it.

pub mod catalog;
pub mod controls;
pub mod emoji;

pub use catalog::CatalogState;
pub use controls::{Controls, SortOrder};
pub use emoji::EmojiRecord;
