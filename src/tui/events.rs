use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User actions from keyboard events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    ToggleRow,
    TogglePage,
    Reload,
    CopySelection,
    ClearSelection,
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind != KeyEventKind::Release
    {
        return Ok(key_to_action(key));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,

        // Row cursor (Vim/Emacs style)
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::MoveUp,
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::MoveDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::MoveUp,
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::MoveDown,
        (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Down, _) => Action::MoveDown,

        // Paginator
        (KeyCode::Right, _) | (KeyCode::PageDown, _) => Action::NextPage,
        (KeyCode::Char('n'), KeyModifiers::NONE) => Action::NextPage,
        (KeyCode::Left, _) | (KeyCode::PageUp, _) => Action::PreviousPage,
        (KeyCode::Char('p'), KeyModifiers::NONE) => Action::PreviousPage,
        (KeyCode::Home, _) => Action::FirstPage,
        (KeyCode::End, _) => Action::LastPage,

        // Selection
        (KeyCode::Char(' '), _) => Action::ToggleRow,
        (KeyCode::Char('a'), KeyModifiers::NONE) => Action::TogglePage,
        (KeyCode::Char('c'), KeyModifiers::NONE) => Action::ClearSelection,
        (KeyCode::Char('y'), KeyModifiers::NONE) | (KeyCode::Char('y'), KeyModifiers::CONTROL) => {
            Action::CopySelection
        }

        (KeyCode::Char('r'), KeyModifiers::NONE) | (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
            Action::Reload
        }

        _ => Action::None,
    }
}
