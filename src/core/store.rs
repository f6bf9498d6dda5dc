use std::collections::HashMap;

use super::node::{Node, NodeId};

/// Authoritative id -> node mapping plus the root id.
///
/// Read access is public; the write primitives are reserved for the mutation
/// API on `MindMap`, which keeps the tree invariants.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeStore {
    nodes: HashMap<NodeId, Node>,
    root_id: NodeId,
}

impl NodeStore {
    pub(crate) fn with_root(root: Node) -> Self {
        let root_id = root.id.clone();
        let mut nodes = HashMap::new();
        nodes.insert(root_id.clone(), root);
        Self { nodes, root_id }
    }

    /// Assembles a store from already validated parts.
    pub(crate) fn from_parts(nodes: HashMap<NodeId, Node>, root_id: NodeId) -> Self {
        Self { nodes, root_id }
    }

    pub fn root_id(&self) -> &NodeId {
        &self.root_id
    }

    pub fn root(&self) -> Option<&Node> {
        self.nodes.get(&self.root_id)
    }

    pub fn get(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// All nodes, in no particular order.
    pub fn all(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn parent_of(&self, id: &NodeId) -> Option<&Node> {
        self.get(id)
            .and_then(|node| node.parent_id.as_ref())
            .and_then(|parent_id| self.get(parent_id))
    }

    /// Children of `id` in creation order. Dangling child ids are skipped.
    pub fn children_of<'a>(&'a self, id: &NodeId) -> impl Iterator<Item = &'a Node> + 'a {
        let children: &'a [NodeId] = self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[]);
        children.iter().filter_map(move |child_id| self.nodes.get(child_id))
    }

    pub(crate) fn get_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub(crate) fn insert(&mut self, node: Node) -> Option<Node> {
        self.nodes.insert(node.id.clone(), node)
    }

    pub(crate) fn remove(&mut self, id: &NodeId) -> Option<Node> {
        self.nodes.remove(id)
    }

    /// A fresh id not present in the store.
    pub(crate) fn allocate_id(&self) -> NodeId {
        loop {
            let id = NodeId::generate();
            if !self.contains(&id) {
                return id;
            }
            log::warn!("generated node id {} already in use; regenerating", id);
        }
    }
}
