use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table};

use super::app::{MessageType, StatusMessage};
use super::layout::AppLayout;
use crate::state::{LoadStatus, PageState, SelectionSet, ViewState};
use crate::utils::cell_text;

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const DANGER: Color = Color::Rgb(239, 68, 68);
const BAR_BG: Color = Color::Rgb(24, 24, 27);

/// Everything the renderer needs for one frame
pub struct RenderState<'a> {
    pub view: &'a ViewState,
    pub cursor: usize,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_table(frame, layout.table_area, state.view, state.cursor);
    render_selection_panel(frame, layout.selection_area, state.view.selection());
    render_paginator(frame, layout.paginator_area, state.view.page());
    render_status_bar(frame, layout.status_area, state.view, state.status_message);
}

fn render_table(frame: &mut Frame, area: Rect, view: &ViewState, cursor: usize) {
    let header = Row::new(["", "ID", "Artwork Title", "Artist", "Date"])
        .style(Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = view
        .page()
        .records()
        .iter()
        .enumerate()
        .map(|(idx, artwork)| {
            let checkbox = if view.is_selected(artwork.id) { "[x]" } else { "[ ]" };
            let style = if idx == cursor {
                Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
            } else if view.is_selected(artwork.id) {
                Style::default().fg(BRIGHT)
            } else {
                Style::default().fg(MUTED)
            };

            Row::new([
                Cell::from(checkbox),
                Cell::from(artwork.id.to_string()),
                Cell::from(cell_text(&artwork.title, 80)),
                Cell::from(cell_text(&artwork.artist_title, 60)),
                Cell::from(cell_text(&artwork.date_display, 30)),
            ])
            .style(style)
        })
        .collect();

    let title = match view.page().status() {
        LoadStatus::Loading { page } => format!(" Artworks (loading page {}…) ", page),
        _ => " Artworks ".to_string(),
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Length(8),
            Constraint::Percentage(45),
            Constraint::Percentage(30),
            Constraint::Percentage(25),
        ],
    )
    .header(header)
    .block(
        Block::default().borders(Borders::ALL).border_style(Style::default().fg(MUTED)).title(title),
    );

    frame.render_widget(table, area);
}

fn render_selection_panel(frame: &mut Frame, area: Rect, selection: &SelectionSet) {
    let items: Vec<ListItem> = if selection.is_empty() {
        vec![ListItem::new(Line::from("Nothing selected")).style(Style::default().fg(MUTED))]
    } else {
        selection.labels().iter().map(|label| ListItem::new(cell_text(label, 200))).collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(format!(" Selected Artworks ({}) ", selection.len())),
    );

    frame.render_widget(list, area);
}

/// Paginator text for the records on screen, e.g. "Page 2 of 3 | rows 6-10 of 12".
///
/// Describes the page the held records belong to, which lags the requested
/// page while it loads or after its load failed.
pub fn paginator_text(page: &PageState) -> String {
    if page.total() == 0 {
        return "No records".to_string();
    }

    let first = page.first_row_index() + 1;
    let last = (page.first_row_index() + page.records().len() as u64).max(first);
    format!(
        "Page {} of {} | rows {}-{} of {}",
        page.shown_page(),
        page.total_pages(),
        first,
        last,
        page.total()
    )
}

fn render_paginator(frame: &mut Frame, area: Rect, page: &PageState) {
    let mut text = format!(" {} ", paginator_text(page));
    if let LoadStatus::Loading { page: requested } = page.status() {
        text.push_str(&format!("| loading page {}… ", requested));
    }
    text.push_str("| ←/→: page  Home/End: first/last ");

    let paragraph = Paragraph::new(text).style(Style::default().fg(MUTED));
    frame.render_widget(paragraph, area);
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    view: &ViewState,
    status_message: Option<&StatusMessage>,
) {
    let (status_text, style) = if let Some(message) = status_message {
        let fg = match message.message_type {
            MessageType::Success => ACCENT,
            MessageType::Error => DANGER,
        };
        (format!(" {} ", message.text), Style::default().fg(fg).bg(BAR_BG))
    } else if let LoadStatus::Failed { message, .. } = view.page().status() {
        (
            format!(" [ERROR] {} | r: retry | q: quit ", message),
            Style::default().fg(DANGER).bg(BAR_BG),
        )
    } else {
        let parts = [
            format!("[{}]", view.mode()),
            format!("{} selected", view.selection().len()),
            "Space: toggle".to_string(),
            "a: page".to_string(),
            "y: copy".to_string(),
            "c: clear".to_string(),
            "r: reload".to_string(),
            "q: quit".to_string(),
        ];
        (format!(" {} ", parts.join(" | ")), Style::default().fg(BRIGHT).bg(BAR_BG))
    };

    frame.render_widget(Paragraph::new(status_text).style(style), area);
}
