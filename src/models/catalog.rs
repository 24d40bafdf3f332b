use super::controls::Controls;
use super::emoji::EmojiRecord;
use crate::filters::apply_controls;

/// Record collections and control values for one browsing session.
///
/// `all_records` is fixed at construction. `visible_records` is only ever replaced
/// wholesale, either by recomputing from `all_records` and the controls or by
/// resetting to a copy of `all_records`.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    all_records: Vec<EmojiRecord>,
    visible_records: Vec<EmojiRecord>,
    controls: Controls,
}

impl CatalogState {
    pub fn new(records: Vec<EmojiRecord>) -> Self {
        let visible_records = records.clone();
        Self { all_records: records, visible_records, controls: Controls::default() }
    }

    pub fn all_records(&self) -> &[EmojiRecord] {
        &self.all_records
    }

    pub fn visible_records(&self) -> &[EmojiRecord] {
        &self.visible_records
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut Controls {
        &mut self.controls
    }

    /// Rebuild the visible view from the full collection and current controls
    pub fn recompute(&mut self) {
        self.visible_records = apply_controls(&self.all_records, &self.controls);
    }

    /// Reset every control to its default and show the full collection again
    pub fn clear_filters(&mut self) {
        self.controls.reset();
        self.visible_records = self.all_records.clone();
    }
}
