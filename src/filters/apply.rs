use super::sort::sort_records;
use crate::models::{Controls, EmojiRecord};

/// Run the full pipeline over the complete collection
///
/// Order is fixed: search filter, then category filter, then sort. Both filters are
/// independent predicates, so only the position of the sort matters; sorting last keeps
/// ties in their filtered order.
pub fn apply_controls(records: &[EmojiRecord], controls: &Controls) -> Vec<EmojiRecord> {
    let matched = filter_by_search(records, &controls.search_term);
    let matched = filter_by_category(&matched, &controls.selected_category);
    sort_records(&matched, controls.sort_order)
}

/// Keep records whose name, description or category contains `term` (case-insensitive substring)
///
/// A term that is empty after trimming returns the input unchanged.
pub fn filter_by_search(records: &[EmojiRecord], term: &str) -> Vec<EmojiRecord> {
    let term = term.trim();
    if term.is_empty() {
        return records.to_vec();
    }

    let lower_term = term.to_lowercase();
    records.iter().filter(|record| matches_search(record, &lower_term)).cloned().collect()
}

/// Keep records whose category equals `category` exactly (case-sensitive)
pub fn filter_by_category(records: &[EmojiRecord], category: &str) -> Vec<EmojiRecord> {
    if category.is_empty() {
        return records.to_vec();
    }

    records.iter().filter(|record| record.category == category).cloned().collect()
}

fn matches_search(record: &EmojiRecord, lower_term: &str) -> bool {
    record.name.to_lowercase().contains(lower_term)
        || record.description.to_lowercase().contains(lower_term)
        || record.category.to_lowercase().contains(lower_term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortOrder;

    fn create_test_record(name: &str, category: &str, description: &str) -> EmojiRecord {
        EmojiRecord {
            id: name.to_lowercase(),
            name: name.to_string(),
            category: category.to_string(),
            unicode: "😀".to_string(),
            description: description.to_string(),
        }
    }

    fn scenario_records() -> Vec<EmojiRecord> {
        vec![
            create_test_record("Grinning", "Smileys", "A big happy face"),
            create_test_record("Heart", "Love", "Red heart symbol"),
        ]
    }

    #[test]
    fn test_search_matches_name() {
        let filtered = filter_by_search(&scenario_records(), "grin");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Grinning");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let filtered = filter_by_search(&scenario_records(), "HEART");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Heart");
    }

    #[test]
    fn test_search_matches_description() {
        let filtered = filter_by_search(&scenario_records(), "happy face");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Grinning");
    }

    #[test]
    fn test_search_matches_category() {
        let filtered = filter_by_search(&scenario_records(), "smil");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].category, "Smileys");
    }

    #[test]
    fn test_search_trims_term() {
        let filtered = filter_by_search(&scenario_records(), "  grin  ");
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_search_is_substring_not_fuzzy() {
        // Letters appear in order in "Grinning" but not contiguously
        let filtered = filter_by_search(&scenario_records(), "gnng");
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_empty_search_returns_input_unchanged() {
        let records = scenario_records();
        assert_eq!(filter_by_search(&records, ""), records);
        assert_eq!(filter_by_search(&records, "   "), records);
    }

    #[test]
    fn test_category_exact_match() {
        let filtered = filter_by_category(&scenario_records(), "Love");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Heart");
    }

    #[test]
    fn test_category_is_case_sensitive() {
        assert!(filter_by_category(&scenario_records(), "love").is_empty());
    }

    #[test]
    fn test_category_is_not_substring() {
        assert!(filter_by_category(&scenario_records(), "Smile").is_empty());
    }

    #[test]
    fn test_empty_category_returns_input_unchanged() {
        let records = scenario_records();
        assert_eq!(filter_by_category(&records, ""), records);
    }

    #[test]
    fn test_no_op_controls_return_everything_in_order() {
        let records: Vec<EmojiRecord> = ["Eagle", "Dolphin", "Cat", "Bee", "Ant"]
            .iter()
            .map(|name| create_test_record(name, "Animals", "creature"))
            .collect();

        let result = apply_controls(&records, &Controls::default());

        assert_eq!(result, records);
    }

    #[test]
    fn test_pipeline_combines_filters_and_sort() {
        let records = vec![
            create_test_record("Red Heart", "Love", "classic"),
            create_test_record("Grinning", "Smileys", "heart warming grin"),
            create_test_record("Blue Heart", "Love", "calm"),
            create_test_record("Broken Heart", "Love", "sad"),
        ];
        let controls = Controls {
            search_term: "heart".to_string(),
            selected_category: "Love".to_string(),
            sort_order: SortOrder::Ascending,
        };

        let names: Vec<String> =
            apply_controls(&records, &controls).into_iter().map(|r| r.name).collect();

        assert_eq!(names, vec!["Blue Heart", "Broken Heart", "Red Heart"]);
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let records = vec![
            create_test_record("Zebra", "Animals", "stripes"),
            create_test_record("Apple", "Food", "fruit"),
            create_test_record("Avocado", "Food", "fruit"),
        ];
        let controls = Controls {
            search_term: "fruit".to_string(),
            selected_category: String::new(),
            sort_order: SortOrder::Descending,
        };

        let once = apply_controls(&records, &controls);
        let twice = apply_controls(&once, &controls);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_filters_commute() {
        let records = vec![
            create_test_record("Red Heart", "Love", "classic"),
            create_test_record("Heart Eyes", "Smileys", "adoring"),
            create_test_record("Kiss", "Love", "smooch"),
        ];

        let search_first = filter_by_category(&filter_by_search(&records, "heart"), "Love");
        let category_first = filter_by_search(&filter_by_category(&records, "Love"), "heart");

        assert_eq!(search_first, category_first);
    }
}
