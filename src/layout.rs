//! Projection of canvas coordinates onto terminal cells.
//!
//! The core places nodes in continuous canvas units; a terminal cell is much
//! wider than it is tall, so one cell covers `CELL_WIDTH` x `CELL_HEIGHT`
//! canvas units at zoom 1.0. `view_center` lands in the middle of the canvas
//! area.

use crate::app::{AppMode, AppState};
use crate::core::{Node, NodeId, Position};
use std::collections::HashMap;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const CELL_WIDTH: f64 = 8.0;
pub const CELL_HEIGHT: f64 = 16.0;

/// Rows reserved below the canvas for the status line.
pub const STATUS_LINE_HEIGHT: u16 = 1;

/// Labels wider than this are cut and end in an ellipsis
const MAX_LABEL_WIDTH: usize = 24;

pub const COLLAPSED_MARKER: &str = " [+]";

#[derive(Debug, Clone)]
pub struct LayoutNode {
    // Left edge and row of the label
    pub x: f64,
    pub y: f64,
    // Label width in cells
    pub w: f64,
    // Projected node center, where edges attach
    pub cx: f64,
    pub cy: f64,
    pub label: String,
}

pub struct LayoutEngine {
    pub nodes: HashMap<NodeId, LayoutNode>,
    pub width: f64,
    pub height: f64,
}

impl LayoutEngine {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            nodes: HashMap::new(),
            width,
            height,
        }
    }

    /// Lays out every visible node of the session's map.
    pub fn calculate_layout(app: &AppState) -> Self {
        let (width, height) = canvas_size(app);
        let mut engine = Self::new(width, height);

        for node in app.map.visible_nodes() {
            let (cx, cy) = engine.project(app.view_center, app.zoom, node.position);

            let label = match &app.mode {
                AppMode::Editing { buffer, .. } if node.id == app.selected => buffer.clone(),
                _ => node_label(node),
            };
            let w = label.width().max(1) as f64;

            engine.nodes.insert(
                node.id.clone(),
                LayoutNode {
                    x: (cx - w / 2.0).round(),
                    y: cy.round(),
                    w,
                    cx,
                    cy,
                    label,
                },
            );
        }

        engine
    }

    /// Canvas point to fractional cell coordinates.
    pub fn project(&self, center: Position, zoom: f64, point: Position) -> (f64, f64) {
        let col = (point.x - center.x) * zoom / CELL_WIDTH + self.width / 2.0;
        let row = (point.y - center.y) * zoom / CELL_HEIGHT + self.height / 2.0;
        (col, row)
    }

    pub fn get_visible_nodes(&self, viewport: (f64, f64, f64, f64)) -> Vec<NodeId> {
        let (vp_left, vp_top, vp_right, vp_bottom) = viewport;

        self.nodes
            .iter()
            .filter_map(|(id, layout)| {
                let is_visible = layout.x + layout.w >= vp_left
                    && layout.x <= vp_right
                    && layout.y >= vp_top
                    && layout.y <= vp_bottom;

                is_visible.then(|| id.clone())
            })
            .collect()
    }
}

/// Width and height of the drawing area, in cells.
pub fn canvas_size(app: &AppState) -> (f64, f64) {
    let height = app.terminal_height.saturating_sub(STATUS_LINE_HEIGHT);
    (f64::from(app.terminal_width), f64::from(height))
}

/// Display text for a node: its title cut to fit, with a marker when hidden
/// children sit under it.
pub fn node_label(node: &Node) -> String {
    let mut label = truncate_to_width(&node.title, MAX_LABEL_WIDTH);
    if !node.is_expanded && node.has_children() {
        label.push_str(COLLAPSED_MARKER);
    }
    label
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let cw = c.width().unwrap_or(0);
        if used + cw + 1 > max_width {
            break;
        }
        out.push(c);
        used += cw;
    }
    out.push('…');
    out
}
