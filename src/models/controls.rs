use std::fmt;
use std::str::FromStr;

/// Requested ordering of the visible records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Keep the order the catalog was delivered in
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl SortOrder {
    /// Next value in the selector cycle: unsorted -> asc -> desc -> unsorted
    pub fn next(self) -> Self {
        match self {
            SortOrder::Unsorted => SortOrder::Ascending,
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Unsorted,
        }
    }

    /// Previous value in the selector cycle
    pub fn previous(self) -> Self {
        match self {
            SortOrder::Unsorted => SortOrder::Descending,
            SortOrder::Ascending => SortOrder::Unsorted,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Unsorted => "Default",
            SortOrder::Ascending => "Name (A-Z)",
            SortOrder::Descending => "Name (Z-A)",
        }
    }
}

impl FromStr for SortOrder {
    type Err = std::convert::Infallible;

    /// Only `asc` and `desc` select an ordering; any other value leaves records unsorted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "asc" => SortOrder::Ascending,
            "desc" => SortOrder::Descending,
            _ => SortOrder::Unsorted,
        })
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SortOrder::Unsorted => "",
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        };
        f.write_str(value)
    }
}

/// Current values of the three user-facing controls.
///
/// An empty `search_term` or `selected_category` disables that filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Controls {
    pub search_term: String,
    pub selected_category: String,
    pub sort_order: SortOrder,
}

impl Controls {
    pub fn is_default(&self) -> bool {
        *self == Controls::default()
    }

    pub fn reset(&mut self) {
        *self = Controls::default();
    }
}
