use serde::{Deserialize, Serialize};
use std::fmt;

use super::clock;
use super::palette::Color;

/// Opaque node identifier. Generated ids look like
/// `node_1729158000000_k3j9x0q1z`; the seed root is simply `root`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub const ROOT: &'static str = "root";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn root() -> Self {
        Self(Self::ROOT.to_string())
    }

    pub fn generate() -> Self {
        Self(clock::generate_id("node"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn distance(self, other: Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Inline-rename lifecycle of a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Idle,
    Editing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: NodeId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(flatten)]
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<NodeId>,
    #[serde(default)]
    pub children: Vec<NodeId>,
    pub level: u32,
    pub color: Color,
    /// View state carried in the model: the UI focuses the inline editor
    /// while this is set.
    #[serde(default)]
    pub is_editing: bool,
    #[serde(default = "expanded_by_default")]
    pub is_expanded: bool,
}

fn expanded_by_default() -> bool {
    true
}

impl Node {
    pub(crate) fn new_root(id: NodeId, title: String, position: Position, color: Color) -> Self {
        Self {
            id,
            title,
            content: None,
            position,
            parent_id: None,
            children: Vec::new(),
            level: 0,
            color,
            is_editing: false,
            is_expanded: true,
        }
    }

    pub(crate) fn new_child(
        id: NodeId,
        parent: &Node,
        title: String,
        position: Position,
        color: Color,
    ) -> Self {
        Self {
            id,
            title,
            content: None,
            position,
            parent_id: Some(parent.id.clone()),
            children: Vec::new(),
            level: parent.level + 1,
            color,
            is_editing: true,
            is_expanded: true,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn edit_state(&self) -> EditState {
        if self.is_editing {
            EditState::Editing
        } else {
            EditState::Idle
        }
    }
}

/// Partial update for a node. Only fields that are `Some` are written;
/// identity and tree linkage are not patchable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodePatch {
    pub title: Option<String>,
    /// `Some(None)` clears the note.
    pub content: Option<Option<String>>,
    pub position: Option<Position>,
    pub color: Option<Color>,
    pub is_editing: Option<bool>,
    pub is_expanded: Option<bool>,
}

impl NodePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: Option<String>) -> Self {
        self.content = Some(content);
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn editing(mut self, is_editing: bool) -> Self {
        self.is_editing = Some(is_editing);
        self
    }

    pub fn expanded(mut self, is_expanded: bool) -> Self {
        self.is_expanded = Some(is_expanded);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn apply_to(&self, node: &mut Node) {
        if let Some(title) = &self.title {
            node.title = title.clone();
        }
        if let Some(content) = &self.content {
            node.content = content.clone();
        }
        if let Some(position) = self.position {
            node.position = position;
        }
        if let Some(color) = self.color {
            node.color = color;
        }
        if let Some(is_editing) = self.is_editing {
            node.is_editing = is_editing;
        }
        if let Some(is_expanded) = self.is_expanded {
            node.is_expanded = is_expanded;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_root() -> Node {
        Node::new_root(
            NodeId::root(),
            "Main Idea".to_string(),
            Position::new(400.0, 300.0),
            Color::Blue,
        )
    }

    #[test]
    fn test_root_creation() {
        let root = create_test_root();
        assert!(root.is_root());
        assert_eq!(root.level, 0);
        assert!(root.is_expanded);
        assert_eq!(root.edit_state(), EditState::Idle);
    }

    #[test]
    fn test_child_starts_in_editing() {
        let root = create_test_root();
        let child = Node::new_child(
            NodeId::new("a"),
            &root,
            "New Idea".to_string(),
            Position::new(400.0, 150.0),
            Color::Purple,
        );
        assert_eq!(child.parent_id, Some(NodeId::root()));
        assert_eq!(child.level, 1);
        assert_eq!(child.edit_state(), EditState::Editing);
        assert!(child.is_expanded);
    }

    #[test]
    fn test_patch_touches_only_supplied_fields() {
        let mut node = create_test_root();
        node.content = Some("notes".to_string());

        NodePatch::new().color(Color::Rose).apply_to(&mut node);

        assert_eq!(node.color, Color::Rose);
        assert_eq!(node.title, "Main Idea");
        assert_eq!(node.content.as_deref(), Some("notes"));
        assert_eq!(node.position, Position::new(400.0, 300.0));
    }

    #[test]
    fn test_patch_can_clear_content() {
        let mut node = create_test_root();
        node.content = Some("notes".to_string());

        NodePatch::new().content(None).apply_to(&mut node);

        assert_eq!(node.content, None);
    }

    #[test]
    fn test_empty_patch() {
        assert!(NodePatch::new().is_empty());
        assert!(!NodePatch::new().expanded(false).is_empty());
    }

    #[test]
    fn test_node_json_uses_flat_coordinates() {
        let node = create_test_root();
        let value = serde_json::to_value(&node).unwrap();

        assert_eq!(value["x"], 400.0);
        assert_eq!(value["y"], 300.0);
        assert_eq!(value["color"], "blue");
        assert_eq!(value["isExpanded"], true);
        assert!(value.get("parentId").is_none());
        assert!(value.get("content").is_none());
    }

    #[test]
    fn test_node_json_defaults_missing_flags() {
        let json = r#"{"id":"root","title":"Main Idea","x":400,"y":300,"level":0,"color":"blue"}"#;
        let node: Node = serde_json::from_str(json).unwrap();

        assert!(node.is_expanded);
        assert!(!node.is_editing);
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        assert_eq!(a.distance(a.offset(3.0, 4.0)), 5.0);
    }
}
