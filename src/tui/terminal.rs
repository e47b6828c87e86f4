use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

type BrowserTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Holds the screen for the browser: raw mode plus the alternate screen.
///
/// The shell screen comes back on [`TerminalManager::restore`], or on drop if
/// the browser loop bails out first.
pub struct TerminalManager {
    terminal: BrowserTerminal,
    on_alternate_screen: bool,
}

impl TerminalManager {
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to enter alternate screen");
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self { terminal, on_alternate_screen: true })
    }

    pub fn terminal_mut(&mut self) -> &mut BrowserTerminal {
        &mut self.terminal
    }

    /// Hand the screen back to the shell, reporting any failure
    pub fn restore(mut self) -> Result<()> {
        self.leave().context("Failed to restore terminal")
    }

    fn leave(&mut self) -> io::Result<()> {
        if !self.on_alternate_screen {
            return Ok(());
        }
        self.on_alternate_screen = false;
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}
