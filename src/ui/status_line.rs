use crate::app::{AppMode, AppState};
use crate::ui::constants::{palette_color, CURSOR_INDICATOR, STATUS_EDIT_PREFIX};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

// Status line renderer
pub struct StatusLineRenderer;

impl StatusLineRenderer {
    pub fn render(frame: &mut Frame, app: &AppState, area: Rect) {
        let line = Self::build_line(app, area.width);
        frame.render_widget(Paragraph::new(line), area);
    }

    pub fn build_line(app: &AppState, width: u16) -> Line<'static> {
        match &app.mode {
            AppMode::Normal => Self::render_normal_mode(app),
            AppMode::Editing { buffer, cursor_pos } => {
                Self::render_edit_mode(buffer, *cursor_pos, width)
            }
            AppMode::Help => Self::render_help_mode(),
        }
    }

    fn render_normal_mode(app: &AppState) -> Line<'static> {
        let swatch = Span::styled(
            format!(" ● {} ", app.current_color),
            Style::default()
                .fg(palette_color(app.current_color))
                .bg(Color::Black),
        );

        let (content, style) = if let Some(ref msg) = app.message {
            (
                format!(" {}", msg),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            let dirty = if app.is_dirty { " [+]" } else { "" };
            (
                format!(
                    " {}{} | {} nodes | zoom {:.0}%",
                    app.map.title(),
                    dirty,
                    app.map.len(),
                    app.zoom * 100.0
                ),
                Style::default().fg(Color::Gray).bg(Color::Black),
            )
        };

        Line::from(vec![swatch, Span::styled(content, style)])
    }

    fn render_edit_mode(buffer: &str, cursor_pos: usize, width: u16) -> Line<'static> {
        let chars: Vec<char> = buffer.chars().collect();

        // Scroll so the cursor stays on screen for long titles
        let available_width =
            (width as usize).saturating_sub(STATUS_EDIT_PREFIX.len() + 1);
        let text_start = if cursor_pos > available_width.saturating_sub(10) {
            cursor_pos.saturating_sub(available_width / 2)
        } else {
            0
        };
        let text_end = (text_start + available_width).min(chars.len());
        let cursor = cursor_pos.clamp(text_start, text_end);

        let mut display = String::from(STATUS_EDIT_PREFIX);
        display.extend(&chars[text_start..cursor]);
        display.push(CURSOR_INDICATOR);
        display.extend(&chars[cursor..text_end]);

        let style = Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        Line::from(Span::styled(display, style))
    }

    fn render_help_mode() -> Line<'static> {
        let style = Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        Line::from(Span::styled("Press ESC or q to close help", style))
    }
}
