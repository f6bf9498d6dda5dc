use crate::actions::Action;
use crate::app::{AppMode, AppState};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

pub fn handle_events(app: &mut AppState) -> Result<Option<Action>> {
    if event::poll(Duration::from_millis(50))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                return Ok(handle_key_event(app, key));
            }
            Event::Resize(width, height) => {
                app.terminal_width = width;
                app.terminal_height = height;
            }
            _ => {}
        }
    }
    Ok(None)
}

pub fn handle_key_event(app: &AppState, key: KeyEvent) -> Option<Action> {
    match &app.mode {
        AppMode::Normal => handle_normal_mode(key),
        AppMode::Editing { .. } => handle_editing_mode(key),
        AppMode::Help => handle_help_mode(key),
    }
}

fn handle_normal_mode(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    // Terminals disagree on whether capitals carry SHIFT, so uppercase keys
    // match on the character alone.
    match (key.code, key.modifiers) {
        // Quit
        (Char('q'), KeyModifiers::NONE) => Some(Action::Quit),
        (Char('Q'), _) => Some(Action::ForceQuit),
        (Char('c'), KeyModifiers::CONTROL) => Some(Action::Quit),

        // Selection
        (Char('h'), KeyModifiers::NONE) | (Left, _) => Some(Action::SelectParent),
        (Char('j'), KeyModifiers::NONE) | (Down, _) => Some(Action::SelectNext),
        (Char('k'), KeyModifiers::NONE) | (Up, _) => Some(Action::SelectPrevious),
        (Char('l'), KeyModifiers::NONE) | (Right, _) => Some(Action::SelectFirstChild),
        (Char('g'), KeyModifiers::NONE) => Some(Action::SelectRoot),

        // Node manipulation
        (Tab, _) | (Char('o'), KeyModifiers::NONE) => Some(Action::AddChild),
        (Char('d'), KeyModifiers::NONE) => Some(Action::DeleteNode),
        (Char(' '), KeyModifiers::NONE) => Some(Action::ToggleExpanded),
        (Char('e'), KeyModifiers::NONE) | (Enter, _) => Some(Action::EditNode),
        (Char('c'), KeyModifiers::NONE) => Some(Action::CycleColor),
        (Char('C'), _) => Some(Action::RecolorNode),

        // Nudge
        (Char('H'), _) => Some(Action::NudgeNode { dx: -1, dy: 0 }),
        (Char('J'), _) => Some(Action::NudgeNode { dx: 0, dy: 1 }),
        (Char('K'), _) => Some(Action::NudgeNode { dx: 0, dy: -1 }),
        (Char('L'), _) => Some(Action::NudgeNode { dx: 1, dy: 0 }),

        // View control
        (Char('+'), _) | (Char('='), KeyModifiers::NONE) => Some(Action::ZoomIn),
        (Char('-'), KeyModifiers::NONE) => Some(Action::ZoomOut),
        (Char('0'), KeyModifiers::NONE) => Some(Action::ResetView),
        (Char('z'), KeyModifiers::NONE) => Some(Action::CenterSelected),

        // File operations
        (Char('s'), KeyModifiers::NONE) => Some(Action::Save),
        (Char('x'), KeyModifiers::NONE) => Some(Action::Export),

        // Help
        (Char('?'), _) => Some(Action::ShowHelp),

        _ => None,
    }
}

fn handle_editing_mode(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match (key.code, key.modifiers) {
        (Esc, _) => Some(Action::CancelEdit),
        (Enter, _) => Some(Action::ConfirmEdit),
        (Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Some(Action::TypeChar(c)),

        // Deletion
        (Backspace, _) => Some(Action::Backspace),
        (Delete, _) => Some(Action::Delete),

        // Movement
        (Left, _) => Some(Action::MoveCursorLeft),
        (Right, _) => Some(Action::MoveCursorRight),
        (Home, _) => Some(Action::MoveCursorHome),
        (End, _) => Some(Action::MoveCursorEnd),
        (Char('a'), KeyModifiers::CONTROL) => Some(Action::MoveCursorHome),
        (Char('e'), KeyModifiers::CONTROL) => Some(Action::MoveCursorEnd),

        _ => None,
    }
}

fn handle_help_mode(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseHelp),
        _ => None,
    }
}
