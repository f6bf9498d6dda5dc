use crate::config::AppConfig;
use crate::core::mind_map::DEFAULT_ROOT_COLOR;
use crate::core::{Color, MindMap, Node, NodeId, Position};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    /// Inline rename of the selected node. `cursor_pos` counts chars.
    Editing { buffer: String, cursor_pos: usize },
    Help,
}

pub struct AppState {
    pub running: bool,
    pub mode: AppMode,
    pub map: MindMap,
    pub selected: NodeId,
    /// Palette entry given to the next child.
    pub current_color: Color,
    pub config: AppConfig,
    pub filename: Option<PathBuf>,

    // Viewport: the canvas point shown at the center of the screen
    pub view_center: Position,
    pub zoom: f64,
    pub terminal_width: u16,
    pub terminal_height: u16,

    pub is_dirty: bool,
    pub last_modify_time: Option<Instant>,
    pub last_save_time: Option<Instant>,

    // Message for status line
    pub message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let map = MindMap::new(
            config.map_title.clone(),
            config.root_title.clone(),
            config.root_position,
            DEFAULT_ROOT_COLOR,
        );
        Self::with_map(config, map)
    }

    pub fn with_map(config: AppConfig, map: MindMap) -> Self {
        let selected = map.root_id().clone();
        let view_center = map
            .get(&selected)
            .map(|root| root.position)
            .unwrap_or_default();

        Self {
            running: true,
            mode: AppMode::Normal,
            map,
            selected,
            current_color: config.default_color,
            config,
            filename: None,
            view_center,
            zoom: 1.0,
            terminal_width: 80,
            terminal_height: 24,
            is_dirty: false,
            last_modify_time: None,
            last_save_time: None,
            message: None,
        }
    }

    pub fn selected_node(&self) -> Option<&Node> {
        self.map.get(&self.selected)
    }

    pub fn mark_dirty(&mut self) {
        self.is_dirty = true;
        self.last_modify_time = Some(Instant::now());
    }

    /// Moves the selection to the closest visible ancestor when the selected
    /// node was deleted or hidden by a collapse.
    pub fn ensure_selection_visible(&mut self) {
        if self.map.is_visible(&self.selected) {
            return;
        }

        let mut candidate = self.map.get(&self.selected).and_then(|n| n.parent_id.clone());
        while let Some(id) = candidate {
            if self.map.is_visible(&id) {
                self.selected = id;
                return;
            }
            candidate = self.map.get(&id).and_then(|n| n.parent_id.clone());
        }

        self.selected = self.map.root_id().clone();
    }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }
}
