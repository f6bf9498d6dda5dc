use crate::core::Connection;
use crate::layout::LayoutEngine;
use crate::ui::canvas::BufferCanvas;
use crate::ui::constants::{edge, palette_color};
use ratatui::style::Style;

/// Draws parent-to-child edges. It is only ever handed the connections of
/// the visible set, so a hidden node never gets an edge.
pub struct ConnectionRenderer<'a> {
    canvas: &'a mut BufferCanvas,
    layout: &'a LayoutEngine,
}

impl<'a> ConnectionRenderer<'a> {
    pub fn new(canvas: &'a mut BufferCanvas, layout: &'a LayoutEngine) -> Self {
        Self { canvas, layout }
    }

    pub fn draw_connections(&mut self, connections: &[Connection]) {
        for connection in connections {
            self.draw_connection(connection);
        }
    }

    fn draw_connection(&mut self, connection: &Connection) {
        let (Some(from), Some(to)) = (
            self.layout.nodes.get(&connection.parent),
            self.layout.nodes.get(&connection.child),
        ) else {
            return;
        };

        let glyph = glyph_for(to.cx - from.cx, to.cy - from.cy);
        // One cell of margin so an edge entering from off-screen still
        // reaches the border
        let bounds = (
            -1.0,
            -1.0,
            self.canvas.width as f64,
            self.canvas.height as f64,
        );
        let Some((a, b)) = clip_segment((from.cx, from.cy), (to.cx, to.cy), bounds) else {
            return;
        };

        let style = Style::default().fg(palette_color(connection.color));
        self.draw_line(
            (a.0.round() as i32, a.1.round() as i32),
            (b.0.round() as i32, b.1.round() as i32),
            glyph,
            style,
        );
    }

    /// Bresenham walk between two cells. Cells outside the canvas are
    /// skipped but the walk continues, so a segment can cross the edge.
    fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), glyph: char, style: Style) {
        let (mut x, mut y) = from;
        let dx = (to.0 - from.0).abs();
        let dy = -(to.1 - from.1).abs();
        let sx = if from.0 < to.0 { 1 } else { -1 };
        let sy = if from.1 < to.1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.canvas.set_char(x, y, glyph, style);
            if (x, y) == to {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

/// Liang-Barsky clip of the segment `a`-`b` to `(min_x, min_y, max_x, max_y)`.
/// Returns `None` when the segment misses the rectangle or is not finite.
fn clip_segment(
    a: (f64, f64),
    b: (f64, f64),
    (min_x, min_y, max_x, max_y): (f64, f64, f64, f64),
) -> Option<((f64, f64), (f64, f64))> {
    if ![a.0, a.1, b.0, b.1].iter().all(|v| v.is_finite()) {
        return None;
    }

    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;
    let edges = [
        (-dx, a.0 - min_x),
        (dx, max_x - a.0),
        (-dy, a.1 - min_y),
        (dy, max_y - a.1),
    ];

    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            t0 = t0.max(t);
        } else {
            t1 = t1.min(t);
        }
        if t0 > t1 {
            return None;
        }
    }

    Some((
        (a.0 + t0 * dx, a.1 + t0 * dy),
        (a.0 + t1 * dx, a.1 + t1 * dy),
    ))
}

/// Cells are about twice as tall as wide, so a vertical step counts double
/// when judging the slope.
fn glyph_for(dx: f64, dy: f64) -> char {
    let (ax, ay) = (dx.abs(), dy.abs() * 2.0);
    if ay * 2.0 < ax {
        edge::HORIZONTAL
    } else if ax * 2.0 < ay {
        edge::VERTICAL
    } else if (dx > 0.0) == (dy > 0.0) {
        edge::FALLING
    } else {
        edge::RISING
    }
}
