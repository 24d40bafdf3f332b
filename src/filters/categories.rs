use std::collections::BTreeSet;

use crate::models::EmojiRecord;

/// Distinct category labels, sorted ascending by codepoint
pub fn unique_categories(records: &[EmojiRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.category.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
