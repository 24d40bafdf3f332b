//! TUI application state and event handling.
//!
//! This module implements the interaction controller of the catalog browser.
//! It manages:
//!
//! - **Control values**: search text, category selection and sort order, edited from the keyboard
//! - **Recomputation cycles**: every control change shows a progress spinner, then re-runs the
//!   filter/sort pipeline over the full catalog on the next loop turn
//! - **Generations**: each scheduled cycle is stamped; only the newest one commits its render
//! - **Status messages**: transient feedback for clipboard operations
//! - **Dirty state tracking**: the terminal is only redrawn when something changed
//!
//! # Architecture
//!
//! The `App` owns the [`CatalogState`] and the [`Display`] it renders into, and runs the main
//! event loop via `run()`. A loop turn draws first and computes second, so a spinner scheduled
//! by the previous key press is on screen before the (synchronous) pipeline runs.
//!
//! # Example
//!
//! ```rust,ignore
//! let records = vec![/* EmojiRecord instances */];
//! let mut app = App::new(records, Display::new());
//! app.run(&mut terminal)?;
//! ```

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::{debug, warn};

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::clipboard::copy_to_clipboard;
use crate::error::LoadError;
use crate::filters::unique_categories;
use crate::models::{CatalogState, EmojiRecord};
use crate::view::{Content, Display, LOAD_FAILED_MESSAGE, render_cards, render_error, render_progress};

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Longest accepted search term, in bytes
const MAX_SEARCH_LEN: usize = 256;
/// Cards moved by PageUp/PageDown
const PAGE_SIZE: isize = 10;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

/// Control that receives typed characters and Left/Right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Category,
    Sort,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Category,
            Focus::Category => Focus::Sort,
            Focus::Sort => Focus::Search,
        }
    }

    fn previous(self) -> Self {
        match self {
            Focus::Search => Focus::Sort,
            Focus::Category => Focus::Search,
            Focus::Sort => Focus::Category,
        }
    }
}

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Recomputing,
}

pub struct App {
    catalog: CatalogState,
    /// Selector options, computed once from the full catalog
    categories: Vec<String>,
    display: Display,
    focus: Focus,
    phase: Phase,
    /// Generation of the most recently issued cycle
    generation: u64,
    /// Cycles issued but not yet run, in issue order
    scheduled: Vec<u64>,
    selected_idx: usize,
    /// Set when the catalog failed to load; only quitting is possible then
    load_failed: bool,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    // Redraw bookkeeping
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    /// Browser over a successfully loaded catalog, showing every record
    pub fn new(records: Vec<EmojiRecord>, mut display: Display) -> Self {
        let categories = unique_categories(&records);
        let catalog = CatalogState::new(records);
        render_cards(&mut display, catalog.visible_records());

        Self::with_parts(catalog, categories, display, false)
    }

    /// Browser whose catalog failed to load: an error alert and nothing else
    pub fn failed(error: &LoadError, mut display: Display) -> Self {
        render_error(&mut display, &format!("{} ({})", LOAD_FAILED_MESSAGE, error));
        Self::with_parts(CatalogState::default(), Vec::new(), display, true)
    }

    pub fn from_load_result(
        result: std::result::Result<Vec<EmojiRecord>, LoadError>,
        display: Display,
    ) -> Self {
        match result {
            Ok(records) => Self::new(records, display),
            Err(e) => Self::failed(&e, display),
        }
    }

    fn with_parts(
        catalog: CatalogState,
        categories: Vec<String>,
        display: Display,
        load_failed: bool,
    ) -> Self {
        Self {
            catalog,
            categories,
            display,
            focus: Focus::Search,
            phase: Phase::Idle,
            generation: 0,
            scheduled: Vec::new(),
            selected_idx: 0,
            load_failed,
            should_quit: false,
            status_message: None,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
        }
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let should_clear = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if should_clear {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();

            // Periodic redraw also picks up terminal resizes
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                terminal.draw(|f| render_ui(f, &self.render_state()))?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            // The spinner for any scheduled cycle is on screen now; run the cycles
            if !self.scheduled.is_empty() {
                self.run_scheduled_cycles();
                continue;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    fn render_state(&self) -> RenderState<'_> {
        RenderState {
            controls: self.catalog.controls(),
            focus: self.focus,
            display: &self.display,
            selected_idx: self.selected_idx,
            category_count: self.categories.len(),
            status_message: self.status_message.as_ref(),
        }
    }

    /// Apply one keyboard action to the controller state
    fn handle_action(&mut self, action: Action) {
        if self.load_failed {
            if matches!(action, Action::Quit | Action::Escape) {
                self.should_quit = true;
            }
            return;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::Escape => {
                if self.catalog.controls().is_default() {
                    self.should_quit = true;
                } else {
                    self.clear_filters();
                }
            }
            Action::ClearFilters => self.clear_filters(),
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::PageUp => self.move_selection(-PAGE_SIZE),
            Action::PageDown => self.move_selection(PAGE_SIZE),
            Action::Apply => {
                if self.focus == Focus::Search {
                    self.schedule_recompute();
                }
            }
            Action::CopyToClipboard => self.copy_selected_glyph(),
            Action::FocusNext => {
                self.focus = self.focus.next();
                self.needs_redraw = true;
            }
            Action::FocusPrevious => {
                self.focus = self.focus.previous();
                self.needs_redraw = true;
            }
            Action::OptionNext => self.cycle_option(1),
            Action::OptionPrevious => self.cycle_option(-1),
            Action::InsertChar(c) => self.insert_char(c),
            Action::DeleteChar => self.delete_char(),
            Action::None => {}
        }
    }

    /// Show the spinner and queue a recomputation for the next loop turn
    fn schedule_recompute(&mut self) {
        self.generation += 1;
        self.scheduled.push(self.generation);
        self.phase = Phase::Recomputing;
        render_progress(&mut self.display);
        self.needs_redraw = true;
    }

    /// Run queued cycles; only the newest issued generation commits
    fn run_scheduled_cycles(&mut self) {
        for generation in std::mem::take(&mut self.scheduled) {
            if generation == self.generation {
                self.commit_recompute();
            } else {
                debug!(generation, latest = self.generation, "skipping superseded recompute");
            }
        }
        self.phase = Phase::Idle;
    }

    fn commit_recompute(&mut self) {
        self.catalog.recompute();
        render_cards(&mut self.display, self.catalog.visible_records());
        self.selected_idx = 0;
        self.needs_redraw = true;
        debug!(
            generation = self.generation,
            visible = self.catalog.visible_records().len(),
            "recomputed catalog view"
        );
    }

    /// Reset every control and re-render the full catalog immediately
    fn clear_filters(&mut self) {
        // Pending cycles predate the reset and must not overwrite it
        self.generation += 1;
        self.scheduled.clear();
        self.phase = Phase::Idle;

        self.catalog.clear_filters();
        render_cards(&mut self.display, self.catalog.visible_records());
        self.selected_idx = 0;
        self.needs_redraw = true;
    }

    fn move_selection(&mut self, delta: isize) {
        let total = self.display.card_count();
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }

    fn insert_char(&mut self, c: char) {
        if self.focus != Focus::Search {
            return;
        }

        let search_term = &mut self.catalog.controls_mut().search_term;
        if search_term.len() + c.len_utf8() <= MAX_SEARCH_LEN {
            search_term.push(c);
            self.schedule_recompute();
        }
    }

    fn delete_char(&mut self) {
        if self.focus != Focus::Search {
            return;
        }

        if self.catalog.controls_mut().search_term.pop().is_some() {
            self.schedule_recompute();
        }
    }

    /// Step the focused selector (category or sort) forwards or backwards, wrapping
    fn cycle_option(&mut self, delta: isize) {
        match self.focus {
            Focus::Search => {}
            Focus::Category => {
                // Option 0 is "All Categories" (the empty value)
                let option_count = self.categories.len() as isize + 1;
                let controls = self.catalog.controls_mut();
                let current = self
                    .categories
                    .iter()
                    .position(|c| *c == controls.selected_category)
                    .map(|i| i as isize + 1)
                    .unwrap_or(0);
                let next = (current + delta).rem_euclid(option_count);
                controls.selected_category =
                    if next == 0 { String::new() } else { self.categories[next as usize - 1].clone() };
                self.schedule_recompute();
            }
            Focus::Sort => {
                let controls = self.catalog.controls_mut();
                controls.sort_order =
                    if delta > 0 { controls.sort_order.next() } else { controls.sort_order.previous() };
                self.schedule_recompute();
            }
        }
    }

    fn copy_selected_glyph(&mut self) {
        let glyph = match &self.display.content {
            Content::Cards(cards) => cards.get(self.selected_idx).map(|card| card.glyph.clone()),
            _ => None,
        };

        let Some(glyph) = glyph else {
            self.set_status("✗ No emoji selected", MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        };

        match copy_to_clipboard(&glyph) {
            Ok(()) => {
                self.set_status(
                    format!("✓ Copied {} to clipboard", glyph),
                    MessageType::Success,
                    STATUS_SUCCESS_DURATION_MS,
                );
            }
            Err(e) => {
                warn!(error = %e, "clipboard copy failed");
                self.set_status(
                    format!("✗ Clipboard error: {}", e),
                    MessageType::Error,
                    STATUS_ERROR_DURATION_MS,
                );
            }
        }
    }
}
