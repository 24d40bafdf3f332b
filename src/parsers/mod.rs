//! JSON parsing for the emoji catalog
//!
//! # Error Handling Strategy
//!
//! - **Body failures**: A body that is not a JSON array fails the whole load with
//!   [`LoadError::Parse`](crate::error::LoadError::Parse).
//!
//! - **Individual record failures**: An array element that does not deserialize into an
//!   [`EmojiRecord`](crate::models::EmojiRecord) is logged and skipped, so one bad entry
//!   does not hide the rest of the catalog.
//!
//! - **Catastrophic failure detection**: If more than half of the elements fail, the body
//!   is rejected as a parse error rather than showing a mostly-empty catalog.

pub mod deserializers;
pub mod records;

pub use records::parse_records;
