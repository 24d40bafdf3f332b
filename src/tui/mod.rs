// TUI module for the interactive catalog browser
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use anyhow::Result;
pub use app::{App, Phase};
use ratatui::Terminal;
use ratatui::backend::Backend;
use terminal::TerminalManager;
use tracing::warn;

use crate::config::Config;
use crate::loader::{LoadingIndicator, load_with_indicator};
use crate::view::Display;

/// Run the interactive browser: load the catalog behind an overlay, then browse it
pub async fn run_interactive(config: &Config) -> Result<()> {
    let mut manager = TerminalManager::new()?;

    let result = browse(manager.terminal_mut(), config).await;

    manager.restore()?;
    result
}

async fn browse<B: Backend>(terminal: &mut Terminal<B>, config: &Config) -> Result<()> {
    let mut screen = LoadingScreen { terminal: &mut *terminal, display: Display::new() };
    let loaded = load_with_indicator(&mut screen, config).await;

    let mut app = App::from_load_result(loaded, screen.display);
    app.run(terminal)
}

/// Paints the loading overlay as soon as it is shown
struct LoadingScreen<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    display: Display,
}

impl<B: Backend> LoadingIndicator for LoadingScreen<'_, B> {
    fn show_loading(&mut self) {
        self.display.show_loading();
        let display = &self.display;
        if let Err(e) = self.terminal.draw(|f| rendering::render_loading_screen(f, display)) {
            warn!(error = %e, "failed to draw loading overlay");
        }
    }

    fn hide_loading(&mut self) {
        self.display.hide_loading();
    }
}
