pub mod apply;
pub mod categories;
pub mod sort;

pub use apply::{apply_controls, filter_by_category, filter_by_search};
pub use categories::unique_categories;
pub use sort::{compare_names, sort_records};
