//! TUI application state and event handling.
//!
//! - **Page controller wiring**: paginator keys become `go_to_page` calls whose
//!   fetch tickets run on the [`Fetcher`]
//! - **Fetch delivery**: completed fetches are drained every loop iteration and
//!   applied to the [`ViewState`]; stale ones are dropped there
//! - **Selection**: row/page toggles are turned into grid selection events
//! - **Status messages**: transient feedback for clipboard operations
//! - **Dirty state tracking**: redraw only when state changes (or every 100ms
//!   for terminal resizes)
//!
//! # Example
//!
//! ```rust,ignore
//! let mut app = App::new(&settings, Arc::new(catalog));
//! app.run(&mut terminal)?;
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::info;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::catalog::{CatalogSource, FetchOutcome, Fetcher};
use crate::clipboard::copy_selection;
use crate::config::Settings;
use crate::state::ViewState;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;

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

pub struct App {
    view: ViewState,
    fetcher: Fetcher,
    cursor: usize,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(settings: &Settings, source: Arc<dyn CatalogSource>) -> Self {
        Self {
            view: ViewState::new(settings.rows_per_page, settings.selection_mode),
            fetcher: Fetcher::new(source),
            cursor: 0,
            should_quit: false,
            status_message: None,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    /// Request the first page
    pub fn start(&mut self) {
        self.go_to_index(0);
    }

    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

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
        self.start();

        while !self.should_quit {
            self.check_and_clear_expired_status();
            self.drain_fetches();

            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                self.draw(terminal)?;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        info!(selected = self.view.selection().len(), "closing browser");
        Ok(())
    }

    /// Draw one frame
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|f| {
            let state = RenderState {
                view: &self.view,
                cursor: self.cursor,
                status_message: self.status_message.as_ref(),
            };
            render_ui(f, &state);
        })?;
        self.needs_redraw = false;
        Ok(())
    }

    /// Apply every fetch that has completed since the last call
    fn drain_fetches(&mut self) {
        while let Some(outcome) = self.fetcher.try_next() {
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: FetchOutcome) {
        if self.view.apply_outcome(outcome) {
            let rows = self.view.page().records().len();
            self.cursor = self.cursor.min(rows.saturating_sub(1));
            self.needs_redraw = true;
        }
    }

    fn go_to_index(&mut self, index: u32) {
        let ticket = self.view.go_to_page(index);
        self.fetcher.spawn(ticket);
        self.cursor = 0;
        self.needs_redraw = true;
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::MoveUp => self.move_cursor(-1),
            Action::MoveDown => self.move_cursor(1),
            Action::NextPage => {
                let page = self.view.page();
                if page.has_next() {
                    let next = page.page_index() + 1;
                    self.go_to_index(next);
                }
            }
            Action::PreviousPage => {
                let page = self.view.page();
                if page.has_previous() {
                    let previous = page.page_index() - 1;
                    self.go_to_index(previous);
                }
            }
            Action::FirstPage => {
                if self.view.page().page_index() != 0 {
                    self.go_to_index(0);
                }
            }
            Action::LastPage => {
                let page = self.view.page();
                let total_pages = page.total_pages();
                let last = u32::try_from(total_pages.saturating_sub(1)).unwrap_or(u32::MAX - 1);
                if total_pages > 0 && last != page.page_index() {
                    self.go_to_index(last);
                }
            }
            Action::ToggleRow => {
                if self.view.toggle_row(self.cursor) {
                    self.needs_redraw = true;
                }
            }
            Action::TogglePage => {
                if self.view.toggle_page() {
                    self.needs_redraw = true;
                }
            }
            Action::Reload => {
                let ticket = self.view.reload();
                self.fetcher.spawn(ticket);
                self.needs_redraw = true;
            }
            Action::CopySelection => match copy_selection(self.view.selection()) {
                Ok(count) => {
                    let noun = if count == 1 { "artwork" } else { "artworks" };
                    self.set_status(
                        format!("✓ Copied {} {}", count, noun),
                        MessageType::Success,
                        STATUS_SUCCESS_DURATION_MS,
                    );
                }
                Err(e) => {
                    self.set_status(
                        format!("✗ {}", e),
                        MessageType::Error,
                        STATUS_ERROR_DURATION_MS,
                    );
                }
            },
            Action::ClearSelection => {
                if !self.view.selection().is_empty() {
                    self.view.clear_selection();
                    self.set_status(
                        "Selection cleared",
                        MessageType::Success,
                        STATUS_SUCCESS_DURATION_MS,
                    );
                }
            }
            Action::None => {}
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let total = self.view.page().records().len();
        if total == 0 {
            self.cursor = 0;
            return;
        }

        let old = self.cursor;
        let new = (self.cursor as isize + delta).max(0) as usize;
        self.cursor = new.min(total - 1);

        if old != self.cursor {
            self.needs_redraw = true;
        }
    }
}
