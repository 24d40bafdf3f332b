//! View model for the card grid.
//!
//! [`Display`] is the presentation surface the browser draws from: what fills the
//! card container, the results-count text, and whether the loading overlay is up.
//! The `render_*` functions replace its content wholesale; drawing it to a terminal
//! happens in the `tui` module.

use crate::loader::LoadingIndicator;
use crate::models::EmojiRecord;
use crate::utils::{sanitize_line, sanitize_text};

pub const NO_RESULTS_TITLE: &str = "No emojis found";
pub const NO_RESULTS_HINT: &str = "Try adjusting your search or filter criteria.";
pub const LOAD_FAILED_MESSAGE: &str =
    "Failed to load emoji data. Please check the JSON file URL and try again.";

/// One card in the grid, with every field already sanitized for the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub glyph: String,
    pub category: String,
    pub name: String,
    pub description: String,
}

impl From<&EmojiRecord> for Card {
    fn from(record: &EmojiRecord) -> Self {
        Self {
            glyph: sanitize_line(&record.unicode),
            category: sanitize_line(&record.category),
            name: sanitize_line(&record.name),
            description: sanitize_text(&record.description),
        }
    }
}

/// What currently occupies the card container
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    /// Nothing rendered yet (before the first load completes)
    #[default]
    Empty,
    Cards(Vec<Card>),
    NoResults,
    /// Transient spinner shown while a recomputation is pending
    Progress,
    Error(String),
}

#[derive(Debug, Clone, Default)]
pub struct Display {
    pub content: Content,
    pub results_count: String,
    pub loading: bool,
}

impl Display {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards currently on screen
    pub fn card_count(&self) -> usize {
        match &self.content {
            Content::Cards(cards) => cards.len(),
            _ => 0,
        }
    }
}

impl LoadingIndicator for Display {
    fn show_loading(&mut self) {
        self.loading = true;
    }

    fn hide_loading(&mut self) {
        self.loading = false;
    }
}

/// "Showing N emoji" / "Showing N emojis"
pub fn results_summary(count: usize) -> String {
    format!("Showing {} emoji{}", count, if count == 1 { "" } else { "s" })
}

/// Replace the card container with one card per record, or the no-results placeholder
pub fn render_cards(display: &mut Display, records: &[EmojiRecord]) {
    display.results_count = results_summary(records.len());
    display.content = if records.is_empty() {
        Content::NoResults
    } else {
        Content::Cards(records.iter().map(Card::from).collect())
    };
}

/// Replace the card container with an error alert
pub fn render_error(display: &mut Display, message: &str) {
    display.content = Content::Error(sanitize_text(message));
}

/// Replace the card container with the transient progress spinner
pub fn render_progress(display: &mut Display) {
    display.content = Content::Progress;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record(name: &str) -> EmojiRecord {
        EmojiRecord {
            id: name.to_lowercase(),
            name: name.to_string(),
            category: "Smileys".to_string(),
            unicode: "😀".to_string(),
            description: format!("{} description", name),
        }
    }

    #[test]
    fn test_results_summary_pluralization() {
        assert_eq!(results_summary(0), "Showing 0 emojis");
        assert_eq!(results_summary(1), "Showing 1 emoji");
        assert_eq!(results_summary(2), "Showing 2 emojis");
    }

    #[test]
    fn test_render_cards_one_card_per_record() {
        let mut display = Display::new();
        let records = vec![create_test_record("Grinning"), create_test_record("Heart")];

        render_cards(&mut display, &records);

        assert_eq!(display.card_count(), 2);
        assert_eq!(display.results_count, "Showing 2 emojis");
        let Content::Cards(cards) = &display.content else {
            panic!("expected cards, got {:?}", display.content);
        };
        assert_eq!(cards[0].name, "Grinning");
        assert_eq!(cards[0].glyph, "😀");
        assert_eq!(cards[0].category, "Smileys");
        assert_eq!(cards[1].description, "Heart description");
    }

    #[test]
    fn test_render_cards_empty_shows_placeholder_not_error() {
        let mut display = Display::new();

        render_cards(&mut display, &[]);

        assert_eq!(display.content, Content::NoResults);
        assert_eq!(display.results_count, "Showing 0 emojis");
    }

    #[test]
    fn test_render_cards_replaces_previous_content() {
        let mut display = Display::new();
        render_error(&mut display, "old");

        render_cards(&mut display, &[create_test_record("Heart")]);

        assert_eq!(display.card_count(), 1);
        assert_eq!(display.results_count, "Showing 1 emoji");
    }

    #[test]
    fn test_render_error_sanitizes_message() {
        let mut display = Display::new();
        render_error(&mut display, "\x1b[31mHTTP error! Status: 404\x1b[0m");
        assert_eq!(display.content, Content::Error("HTTP error! Status: 404".to_string()));
    }

    #[test]
    fn test_card_fields_are_sanitized() {
        let mut record = create_test_record("Heart");
        record.name = "\x1b[2JHeart\nEyes".to_string();

        let card = Card::from(&record);

        assert_eq!(card.name, "Heart Eyes");
    }

    #[test]
    fn test_display_acts_as_loading_indicator() {
        let mut display = Display::new();
        display.show_loading();
        assert!(display.loading);
        display.hide_loading();
        assert!(!display.loading);
    }
}
