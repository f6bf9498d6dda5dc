use crate::app::{AppMode, AppState};

/// Help is only reachable from normal mode; an open rename keeps focus.
pub fn show_help(app: &mut AppState) {
    if app.mode == AppMode::Normal {
        app.mode = AppMode::Help;
    }
}

pub fn close_help(app: &mut AppState) {
    if app.mode == AppMode::Help {
        app.mode = AppMode::Normal;
    }
}
