use crate::app::AppState;

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 2.0;

fn set_zoom(app: &mut AppState, zoom: f64) {
    // Round to one decimal so repeated steps do not drift
    let zoom = (zoom * 10.0).round() / 10.0;
    app.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    app.set_message(format!("Zoom: {:.0}%", app.zoom * 100.0));
}

pub fn zoom_in(app: &mut AppState) {
    let zoom = app.zoom + app.config.zoom_step;
    set_zoom(app, zoom);
}

pub fn zoom_out(app: &mut AppState) {
    let zoom = app.zoom - app.config.zoom_step;
    set_zoom(app, zoom);
}

/// Back to zoom 1.0, centered on the root.
pub fn reset_view(app: &mut AppState) {
    app.zoom = 1.0;
    if let Some(root) = app.map.store().root() {
        app.view_center = root.position;
    }
}

pub fn center_selected(app: &mut AppState) {
    if let Some(node) = app.selected_node() {
        app.view_center = node.position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::{Color, Position};

    fn create_test_app() -> AppState {
        AppState::new(AppConfig::default())
    }

    #[test]
    fn test_zoom_steps_and_clamps() {
        let mut app = create_test_app();

        zoom_in(&mut app);
        assert_eq!(app.zoom, 1.1);

        for _ in 0..20 {
            zoom_in(&mut app);
        }
        assert_eq!(app.zoom, MAX_ZOOM);

        for _ in 0..30 {
            zoom_out(&mut app);
        }
        assert_eq!(app.zoom, MIN_ZOOM);
    }

    #[test]
    fn test_reset_view() {
        let mut app = create_test_app();
        let root = app.map.root_id().clone();
        let child = app.map.add_child(&root, Color::Blue).unwrap();
        app.selected = child;
        center_selected(&mut app);
        zoom_out(&mut app);
        assert_eq!(app.view_center, Position::new(400.0, 150.0));

        reset_view(&mut app);

        assert_eq!(app.zoom, 1.0);
        assert_eq!(app.view_center, Position::new(400.0, 300.0));
    }
}
