use crate::app::AppState;
use crate::core::NodePatch;

use super::editing::start_editing_new;

pub fn add_child(app: &mut AppState) {
    let parent = app.selected.clone();
    let title = app.config.child_title.clone();

    if let Some(child) = app.map.add_child_titled(&parent, title, app.current_color) {
        app.selected = child;
        app.mark_dirty();
        start_editing_new(app);
    }
}

pub fn delete_node(app: &mut AppState) {
    let target = app.selected.clone();
    if &target == app.map.root_id() {
        app.set_message("Cannot delete root node");
        return;
    }

    // Land on the previous sibling, else the next one, else the parent.
    let next_selection = app.map.store().parent_of(&target).map(|parent| {
        let siblings = &parent.children;
        match siblings.iter().position(|id| *id == target) {
            Some(idx) if idx > 0 => siblings[idx - 1].clone(),
            Some(_) if siblings.len() > 1 => siblings[1].clone(),
            _ => parent.id.clone(),
        }
    });

    let removed = app.map.delete_node(&target);
    if removed.is_empty() {
        return;
    }

    if let Some(id) = next_selection {
        app.selected = id;
    }
    app.ensure_selection_visible();
    app.mark_dirty();
    if removed.len() > 1 {
        app.set_message(format!("Deleted {} nodes", removed.len()));
    }
}

pub fn toggle_expanded(app: &mut AppState) {
    let target = app.selected.clone();
    if app.map.toggle_expanded(&target) {
        app.mark_dirty();
    }
}

pub fn cycle_color(app: &mut AppState) {
    app.current_color = app.current_color.next();
    app.set_message(format!("Color: {}", app.current_color));
}

pub fn recolor_node(app: &mut AppState) {
    let target = app.selected.clone();
    let patch = NodePatch::new().color(app.current_color);
    if app.map.update_node(&target, &patch) {
        app.mark_dirty();
    }
}

/// Drags the selected node by one nudge step in each nonzero direction.
pub fn nudge_node(app: &mut AppState, dx: i8, dy: i8) {
    let Some(node) = app.selected_node() else {
        return;
    };
    let step = app.config.nudge_step;
    let position = node
        .position
        .offset(f64::from(dx) * step, f64::from(dy) * step);

    let target = app.selected.clone();
    if app
        .map
        .update_node(&target, &NodePatch::new().position(position))
    {
        app.mark_dirty();
    }
}
