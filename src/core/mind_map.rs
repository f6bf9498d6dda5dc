use time::OffsetDateTime;

use super::clock;
use super::node::{Node, NodeId, Position};
use super::palette::Color;
use super::store::NodeStore;

pub const DEFAULT_MAP_TITLE: &str = "My Mind Map";
pub const DEFAULT_ROOT_TITLE: &str = "Main Idea";
pub const DEFAULT_CHILD_TITLE: &str = "New Idea";
pub const DEFAULT_ROOT_POSITION: Position = Position::new(400.0, 300.0);
pub const DEFAULT_ROOT_COLOR: Color = Color::Blue;

/// Aggregate root of one mind-map document. Owns every node; all changes go
/// through the mutation methods so the tree invariants always hold.
#[derive(Debug, Clone, PartialEq)]
pub struct MindMap {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) store: NodeStore,
    pub(crate) created_at: OffsetDateTime,
    pub(crate) updated_at: OffsetDateTime,
}

impl Default for MindMap {
    fn default() -> Self {
        Self::new(
            DEFAULT_MAP_TITLE,
            DEFAULT_ROOT_TITLE,
            DEFAULT_ROOT_POSITION,
            DEFAULT_ROOT_COLOR,
        )
    }
}

impl MindMap {
    /// Creates a document holding only its root node.
    pub fn new(
        title: impl Into<String>,
        root_title: impl Into<String>,
        root_position: Position,
        root_color: Color,
    ) -> Self {
        let root = Node::new_root(NodeId::root(), root_title.into(), root_position, root_color);
        let now = clock::now();

        Self {
            id: clock::generate_id("map"),
            title: title.into(),
            store: NodeStore::with_root(root),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn store(&self) -> &NodeStore {
        &self.store
    }

    pub fn root_id(&self) -> &NodeId {
        self.store.root_id()
    }

    pub fn get(&self, id: &NodeId) -> Option<&Node> {
        self.store.get(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.store.all()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    pub fn updated_at(&self) -> OffsetDateTime {
        self.updated_at
    }

    pub fn visible_nodes(&self) -> Vec<&Node> {
        super::visibility::visible_nodes(self)
    }

    pub fn is_visible(&self, id: &NodeId) -> bool {
        super::visibility::is_visible(self, id)
    }

    pub fn connections(&self) -> Vec<super::visibility::Connection> {
        super::visibility::connections(self)
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = clock::now();
    }
}
