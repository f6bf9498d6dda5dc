use crate::app::{AppMode, AppState};
use crate::core::Node;
use crate::layout::{LayoutEngine, LayoutNode};
use crate::ui::canvas::BufferCanvas;
use crate::ui::connections::ConnectionRenderer;
use crate::ui::constants::{palette_color, CURSOR_INDICATOR};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

// Mind map renderer
pub struct MindMapRenderer<'a> {
    app: &'a AppState,
    layout: &'a LayoutEngine,
}

impl<'a> MindMapRenderer<'a> {
    pub fn new(app: &'a AppState, layout: &'a LayoutEngine) -> Self {
        Self { app, layout }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut canvas = BufferCanvas::new(area.width as usize, area.height as usize);
        self.draw(&mut canvas);

        let lines = canvas.to_lines();
        let paragraph = Paragraph::new(lines);
        frame.render_widget(paragraph, area);
    }

    pub fn draw(&self, canvas: &mut BufferCanvas) {
        // Connections first, behind the labels
        let connections = self.app.map.connections();
        ConnectionRenderer::new(canvas, self.layout).draw_connections(&connections);

        let viewport = (0.0, 0.0, canvas.width as f64, canvas.height as f64);
        let on_screen = self.layout.get_visible_nodes(viewport);

        // Pre-order keeps children above parents where labels overlap
        for node in self.app.map.visible_nodes() {
            if !on_screen.contains(&node.id) {
                continue;
            }
            if let Some(node_layout) = self.layout.nodes.get(&node.id) {
                self.draw_node(canvas, node, node_layout);
            }
        }
    }

    fn draw_node(&self, canvas: &mut BufferCanvas, node: &Node, node_layout: &LayoutNode) {
        let x = node_layout.x as i32;
        let y = node_layout.y as i32;
        let style = self.get_node_style(node);

        match &self.app.mode {
            AppMode::Editing { buffer, cursor_pos } if node.id == self.app.selected => {
                let split = buffer
                    .char_indices()
                    .nth(*cursor_pos)
                    .map(|(idx, _)| idx)
                    .unwrap_or(buffer.len());
                let (before, after) = buffer.split_at(split);
                let cursor_x = x + before.width() as i32;

                canvas.draw_styled_text(x, y, before, style);
                canvas.set_char(cursor_x, y, CURSOR_INDICATOR, style);
                canvas.draw_styled_text(cursor_x + 1, y, after, style);
            }
            _ => canvas.draw_styled_text(x, y, &node_layout.label, style),
        }
    }

    fn get_node_style(&self, node: &Node) -> Style {
        let color = palette_color(node.color);
        if node.id == self.app.selected {
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD)
        } else if node.is_root() {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        }
    }
}
