pub mod sanitize;

pub use sanitize::{sanitize_line, sanitize_text};
