use crate::app::AppState;
use crate::core::NodeId;
use crate::layout::LayoutEngine;

use super::view::center_selected;

// Cells kept between a selected label and the canvas edge
const EDGE_MARGIN: f64 = 2.0;

/// Recenters the view on the selection when its label falls outside the
/// canvas (or too close to its edge).
pub fn ensure_node_visible(app: &mut AppState) {
    let layout = LayoutEngine::calculate_layout(app);
    let Some(node) = layout.nodes.get(&app.selected) else {
        return;
    };

    let on_screen = node.x >= EDGE_MARGIN
        && node.x + node.w <= layout.width - EDGE_MARGIN
        && node.y >= 0.0
        && node.y < layout.height;
    if !on_screen {
        center_selected(app);
    }
}

fn select(app: &mut AppState, id: NodeId) {
    if id != app.selected {
        app.selected = id;
        ensure_node_visible(app);
    }
}

fn visible_order(app: &AppState) -> Vec<NodeId> {
    app.map
        .visible_nodes()
        .into_iter()
        .map(|node| node.id.clone())
        .collect()
}

/// Next node in visible pre-order, wrapping to the root after the last one.
pub fn select_next(app: &mut AppState) {
    let order = visible_order(app);
    if let Some(idx) = order.iter().position(|id| *id == app.selected) {
        let next = order[(idx + 1) % order.len()].clone();
        select(app, next);
    }
}

pub fn select_previous(app: &mut AppState) {
    let order = visible_order(app);
    if let Some(idx) = order.iter().position(|id| *id == app.selected) {
        let prev = order[(idx + order.len() - 1) % order.len()].clone();
        select(app, prev);
    }
}

pub fn select_parent(app: &mut AppState) {
    if let Some(parent) = app.selected_node().and_then(|n| n.parent_id.clone()) {
        select(app, parent);
    }
}

/// Descends into the first child, expanding a collapsed node on the way.
pub fn select_first_child(app: &mut AppState) {
    let Some(node) = app.selected_node() else {
        return;
    };
    let Some(first) = node.children.first().cloned() else {
        return;
    };

    if !node.is_expanded {
        let target = app.selected.clone();
        app.map.toggle_expanded(&target);
        app.mark_dirty();
    }
    select(app, first);
}

pub fn select_root(app: &mut AppState) {
    let root = app.map.root_id().clone();
    select(app, root);
}
