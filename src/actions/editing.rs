use crate::app::{AppMode, AppState};

fn byte_index(buffer: &str, char_pos: usize) -> usize {
    buffer
        .char_indices()
        .nth(char_pos)
        .map(|(idx, _)| idx)
        .unwrap_or(buffer.len())
}

/// Opens the rename buffer on the selected node, prefilled with its title.
pub fn start_editing(app: &mut AppState) {
    let target = app.selected.clone();
    let Some(title) = app.map.get(&target).map(|n| n.title.clone()) else {
        return;
    };
    if app.map.begin_edit(&target) {
        let cursor_pos = title.chars().count();
        app.mode = AppMode::Editing {
            buffer: title,
            cursor_pos,
        };
    }
}

/// Opens an empty rename buffer for a freshly added child.
pub(crate) fn start_editing_new(app: &mut AppState) {
    app.mode = AppMode::Editing {
        buffer: String::new(),
        cursor_pos: 0,
    };
}

pub fn type_char(app: &mut AppState, c: char) {
    if let AppMode::Editing { buffer, cursor_pos } = &mut app.mode {
        let idx = byte_index(buffer, *cursor_pos);
        buffer.insert(idx, c);
        *cursor_pos += 1;
    }
}

pub fn backspace(app: &mut AppState) {
    if let AppMode::Editing { buffer, cursor_pos } = &mut app.mode {
        if *cursor_pos > 0 {
            *cursor_pos -= 1;
            let idx = byte_index(buffer, *cursor_pos);
            buffer.remove(idx);
        }
    }
}

pub fn delete_char(app: &mut AppState) {
    if let AppMode::Editing { buffer, cursor_pos } = &mut app.mode {
        if *cursor_pos < buffer.chars().count() {
            let idx = byte_index(buffer, *cursor_pos);
            buffer.remove(idx);
        }
    }
}

pub fn move_cursor_left(app: &mut AppState) {
    if let AppMode::Editing { cursor_pos, .. } = &mut app.mode {
        *cursor_pos = cursor_pos.saturating_sub(1);
    }
}

pub fn move_cursor_right(app: &mut AppState) {
    if let AppMode::Editing { buffer, cursor_pos } = &mut app.mode {
        if *cursor_pos < buffer.chars().count() {
            *cursor_pos += 1;
        }
    }
}

pub fn move_cursor_home(app: &mut AppState) {
    if let AppMode::Editing { cursor_pos, .. } = &mut app.mode {
        *cursor_pos = 0;
    }
}

pub fn move_cursor_end(app: &mut AppState) {
    if let AppMode::Editing { buffer, cursor_pos } = &mut app.mode {
        *cursor_pos = buffer.chars().count();
    }
}

/// Commits the buffer. Blank input keeps the previous title.
///
/// Closing the editor clears the persisted `isEditing` flag, so the session
/// is dirty afterwards even when the title itself did not change.
pub fn confirm_edit(app: &mut AppState) {
    let AppMode::Editing { buffer, .. } = std::mem::replace(&mut app.mode, AppMode::Normal)
    else {
        return;
    };

    let target = app.selected.clone();
    if app.map.commit_rename(&target, &buffer) {
        app.mark_dirty();
    }
}

pub fn cancel_edit(app: &mut AppState) {
    if matches!(app.mode, AppMode::Editing { .. }) {
        app.mode = AppMode::Normal;
        let target = app.selected.clone();
        if app.map.cancel_edit(&target) {
            app.mark_dirty();
        }
    }
}
