use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen layout: artwork table beside the selection panel, with the
/// paginator and status bar underneath
pub struct AppLayout {
    pub table_area: Rect,
    pub selection_area: Rect,
    pub paginator_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// - Table: 65% width (left)
    /// - Selection panel: 35% width (right)
    /// - Paginator: one row
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area (at least 3 rows)
                Constraint::Length(1), // Paginator
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(vertical_chunks[0]);

        Self {
            table_area: horizontal_chunks[0],
            selection_area: horizontal_chunks[1],
            paginator_area: vertical_chunks[1],
            status_area: vertical_chunks[2],
        }
    }
}
