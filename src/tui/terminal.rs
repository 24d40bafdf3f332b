use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal while the browser runs and puts it back afterwards
///
/// Call [`TerminalManager::restore`] to surface restore errors. Dropping an
/// unrestored manager (panic, early `?`) restores on a best-effort basis.
pub struct TerminalManager {
    terminal: CrosstermTerminal,
    restored: bool,
}

impl TerminalManager {
    /// Switch to raw mode and the alternate screen
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to enter alternate screen");
        }

        let terminal = Terminal::new(CrosstermBackend::new(stdout))
            .context("Failed to initialize terminal backend")?;
        Ok(Self { terminal, restored: false })
    }

    pub fn terminal_mut(&mut self) -> &mut CrosstermTerminal {
        &mut self.terminal
    }

    pub fn restore(mut self) -> Result<()> {
        self.restored = true;
        leave(&mut self.terminal)
    }
}

fn leave(terminal: &mut CrosstermTerminal) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        if !self.restored {
            let _ = leave(&mut self.terminal);
        }
    }
}
