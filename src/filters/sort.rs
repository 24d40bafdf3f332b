use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::models::{EmojiRecord, SortOrder};

/// Return a sorted copy of `records` ordered by name
///
/// The sort is stable, so records with equal names keep their relative order.
/// `SortOrder::Unsorted` returns the records in their input order.
pub fn sort_records(records: &[EmojiRecord], order: SortOrder) -> Vec<EmojiRecord> {
    let mut sorted = records.to_vec();

    match order {
        SortOrder::Ascending => sorted.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortOrder::Descending => sorted.sort_by(|a, b| compare_names(&b.name, &a.name)),
        SortOrder::Unsorted => {}
    }

    sorted
}

/// Locale-aware name comparison
///
/// Three levels, each consulted only when the previous one ties: base letters with
/// accents removed and case folded ("Éclair" sorts among the E names), then the
/// case-folded name with accents kept, then exact codepoints.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| case_folded(a).cmp(case_folded(b)))
        .then_with(|| a.cmp(b))
}

fn base_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase)
}

fn case_folded(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().flat_map(char::to_lowercase)
}
