use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the browser to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Clear filters, or quit when nothing is filtered
    Escape,
    ClearFilters,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    /// Enter: re-run the pipeline with the current controls
    Apply,
    CopyToClipboard,
    FocusNext,
    FocusPrevious,
    OptionNext,
    OptionPrevious,
    InsertChar(char),
    DeleteChar,
    None,
}

/// Wait up to `timeout` for a key press; anything else maps to [`Action::None`]
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if !event::poll(timeout)? {
        return Ok(Action::None);
    }

    match event::read()? {
        // Release and repeat events are ignored
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(action_for_key(key)),
        _ => Ok(Action::None),
    }
}

fn action_for_key(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Action::Quit,
            KeyCode::Char('x') => Action::ClearFilters,
            KeyCode::Char('y') => Action::CopyToClipboard,
            KeyCode::Char('p') => Action::MoveUp,
            KeyCode::Char('n') => Action::MoveDown,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Esc => Action::Escape,
        KeyCode::Enter => Action::Apply,
        KeyCode::Tab => Action::FocusNext,
        KeyCode::BackTab => Action::FocusPrevious,
        KeyCode::Right => Action::OptionNext,
        KeyCode::Left => Action::OptionPrevious,
        KeyCode::Up => Action::MoveUp,
        KeyCode::Down => Action::MoveDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::Backspace => Action::DeleteChar,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => Action::InsertChar(c),
        _ => Action::None,
    }
}
