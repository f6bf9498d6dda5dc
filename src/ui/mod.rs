mod canvas;
mod connections;
mod constants;
mod help;
mod mindmap;
mod status_line;

use crate::app::{AppMode, AppState};
use crate::layout::{LayoutEngine, STATUS_LINE_HEIGHT};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    prelude::CrosstermBackend,
    Frame, Terminal,
};
use std::io::{self, stdout, Stdout};

pub use canvas::BufferCanvas;
pub use connections::ConnectionRenderer;
pub use constants::palette_color;
pub use help::HelpRenderer;
pub use mindmap::MindMapRenderer;
pub use status_line::StatusLineRenderer;

#[derive(thiserror::Error, Debug)]
pub enum UiError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

// Main render function
pub fn render(frame: &mut Frame, app: &mut AppState) {
    let size = frame.area();
    app.terminal_width = size.width;
    app.terminal_height = size.height;

    let layout = LayoutEngine::calculate_layout(app);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_LINE_HEIGHT)])
        .split(size);

    match &app.mode {
        AppMode::Help => HelpRenderer::render(frame, chunks[0]),
        _ => MindMapRenderer::new(app, &layout).render(frame, chunks[0]),
    }

    StatusLineRenderer::render(frame, app, chunks[1]);
}

pub fn setup_terminal() -> Result<Tui, UiError> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

pub fn restore_terminal(terminal: &mut Tui) -> Result<(), UiError> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
