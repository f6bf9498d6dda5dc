mod editing;
mod file;
mod help;
mod movement;
mod node;
mod view;

use crate::app::AppState;
use anyhow::Result;

// Re-export all public functions from submodules
pub use editing::*;
pub use file::*;
pub use help::*;
pub use movement::*;
pub use node::*;
pub use view::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Application control
    Quit,
    ForceQuit,

    // Selection
    SelectNext,
    SelectPrevious,
    SelectParent,
    SelectFirstChild,
    SelectRoot,

    // Tree mutation
    AddChild,
    DeleteNode,
    ToggleExpanded,
    CycleColor,
    RecolorNode,
    NudgeNode { dx: i8, dy: i8 },

    // Inline rename
    EditNode,
    TypeChar(char),
    Backspace,
    Delete,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,
    ConfirmEdit,
    CancelEdit,

    // View control
    ZoomIn,
    ZoomOut,
    ResetView,
    CenterSelected,

    // File operations
    Save,
    Export,

    // Help
    ShowHelp,
    CloseHelp,
}

pub fn execute_action(action: Action, app: &mut AppState) -> Result<()> {
    match action {
        Action::Quit => {
            if app.is_dirty {
                app.set_message("Unsaved changes! Press Shift+Q to force quit or 's' to save");
            } else {
                app.running = false;
            }
        }
        Action::ForceQuit => {
            app.running = false;
        }

        Action::SelectNext => movement::select_next(app),
        Action::SelectPrevious => movement::select_previous(app),
        Action::SelectParent => movement::select_parent(app),
        Action::SelectFirstChild => movement::select_first_child(app),
        Action::SelectRoot => movement::select_root(app),

        Action::AddChild => node::add_child(app),
        Action::DeleteNode => node::delete_node(app),
        Action::ToggleExpanded => node::toggle_expanded(app),
        Action::CycleColor => node::cycle_color(app),
        Action::RecolorNode => node::recolor_node(app),
        Action::NudgeNode { dx, dy } => node::nudge_node(app, dx, dy),

        Action::EditNode => editing::start_editing(app),
        Action::TypeChar(c) => editing::type_char(app, c),
        Action::Backspace => editing::backspace(app),
        Action::Delete => editing::delete_char(app),
        Action::MoveCursorLeft => editing::move_cursor_left(app),
        Action::MoveCursorRight => editing::move_cursor_right(app),
        Action::MoveCursorHome => editing::move_cursor_home(app),
        Action::MoveCursorEnd => editing::move_cursor_end(app),
        Action::ConfirmEdit => editing::confirm_edit(app),
        Action::CancelEdit => editing::cancel_edit(app),

        Action::ZoomIn => view::zoom_in(app),
        Action::ZoomOut => view::zoom_out(app),
        Action::ResetView => view::reset_view(app),
        Action::CenterSelected => view::center_selected(app),

        Action::Save => file::save(app)?,
        Action::Export => file::export(app)?,

        Action::ShowHelp => help::show_help(app),
        Action::CloseHelp => help::close_help(app),
    }
    Ok(())
}
