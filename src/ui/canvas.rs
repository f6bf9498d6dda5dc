use crate::ui::constants::{CharBuffer, StyleBuffer, WIDE_CONTINUATION};
use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthChar;

// Buffer canvas for drawing characters and styles
pub struct BufferCanvas {
    pub char_buffer: CharBuffer,
    pub style_buffer: StyleBuffer,
    pub width: usize,
    pub height: usize,
}

impl BufferCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            char_buffer: vec![vec![' '; width]; height],
            style_buffer: vec![vec![Style::default(); width]; height],
            width,
            height,
        }
    }

    /// Signed coordinates so callers can clip projected points that land
    /// left of or above the canvas.
    pub fn set_char(&mut self, x: i32, y: i32, ch: char, style: Style) {
        if let Some((x, y)) = self.cell(x, y) {
            self.char_buffer[y][x] = ch;
            self.style_buffer[y][x] = style;
        }
    }

    /// Writes `text` starting at column `x`; a double-width character takes
    /// two cells.
    pub fn draw_styled_text(&mut self, x: i32, y: i32, text: &str, style: Style) {
        let mut col = x;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0) as i32;
            if w == 0 {
                continue;
            }
            if w == 2 && !(self.cell(col, y).is_some() && self.cell(col + 1, y).is_some()) {
                // Half a wide glyph cannot be drawn
                self.set_char(col, y, ' ', style);
                self.set_char(col + 1, y, ' ', style);
            } else {
                self.set_char(col, y, ch, style);
                if w == 2 {
                    self.set_char(col + 1, y, WIDE_CONTINUATION, style);
                }
            }
            col += w;
        }
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.cell(x, y).is_some()
    }

    fn cell(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (y < self.height && x < self.width).then_some((x, y))
    }

    pub fn to_lines(&self) -> Vec<Line<'_>> {
        let mut lines = Vec::new();

        for (y, row) in self.char_buffer.iter().enumerate() {
            let mut spans = Vec::new();
            let mut current_style = Style::default();
            let mut current_text = String::new();

            for (x, &ch) in row.iter().enumerate() {
                if ch == WIDE_CONTINUATION {
                    continue;
                }
                let style = self.style_buffer[y][x];
                if style != current_style {
                    if !current_text.is_empty() {
                        spans.push(Span::styled(current_text.clone(), current_style));
                        current_text.clear();
                    }
                    current_style = style;
                }
                current_text.push(ch);
            }

            if !current_text.is_empty() {
                spans.push(Span::styled(current_text, current_style));
            }

            lines.push(Line::from(spans));
        }

        lines
    }
}
