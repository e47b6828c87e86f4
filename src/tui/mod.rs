// TUI module for the interactive catalog browser
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use std::sync::Arc;

use anyhow::Result;
pub use app::App;
pub use rendering::paginator_text;
use terminal::TerminalManager;

use crate::catalog::CatalogSource;
use crate::config::Settings;

/// Run the interactive TUI until the user quits
pub fn run_interactive(settings: &Settings, source: Arc<dyn CatalogSource>) -> Result<()> {
    let mut manager = TerminalManager::new()?;
    let mut app = App::new(settings, source);

    let res = app.run(manager.terminal_mut());

    manager.restore()?;
    res
}
