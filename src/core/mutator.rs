//! Mutation API on [`MindMap`].
//!
//! Misuse is absorbed: an id that does not resolve (or the root, for
//! deletion) turns the call into a no-op. Every call that does apply
//! re-stamps `updated_at`. Return values only report what happened; callers
//! are free to ignore them.

use std::collections::HashSet;

use log::{debug, info, warn};

use super::layout;
use super::mind_map::{MindMap, DEFAULT_CHILD_TITLE};
use super::node::{Node, NodeId, NodePatch};
use super::palette::Color;

impl MindMap {
    /// Appends a new child to `parent_id`, placed radially and opened for
    /// inline editing. The parent is forced expanded so the child shows up.
    pub fn add_child(&mut self, parent_id: &NodeId, color: Color) -> Option<NodeId> {
        self.add_child_titled(parent_id, DEFAULT_CHILD_TITLE, color)
    }

    pub fn add_child_titled(
        &mut self,
        parent_id: &NodeId,
        title: impl Into<String>,
        color: Color,
    ) -> Option<NodeId> {
        let Some(parent) = self.store.get(parent_id) else {
            debug!("add_child: parent {} not found; ignoring", parent_id);
            return None;
        };

        let child_id = self.store.allocate_id();
        let position = layout::next_child_position(parent);
        let child = Node::new_child(child_id.clone(), parent, title.into(), position, color);

        self.store.insert(child);
        if let Some(parent) = self.store.get_mut(parent_id) {
            parent.children.push(child_id.clone());
            parent.is_expanded = true;
        }
        self.touch();

        info!("added node {} under {}", child_id, parent_id);
        Some(child_id)
    }

    /// Merges the supplied fields into the node.
    pub fn update_node(&mut self, id: &NodeId, patch: &NodePatch) -> bool {
        let Some(node) = self.store.get_mut(id) else {
            debug!("update_node: node {} not found; ignoring", id);
            return false;
        };

        patch.apply_to(node);
        self.touch();
        true
    }

    /// Removes `id` and its whole subtree, and unlinks it from its parent.
    /// The root and unknown ids are left alone. Returns the removed ids in
    /// pre-order.
    pub fn delete_node(&mut self, id: &NodeId) -> Vec<NodeId> {
        if id == self.store.root_id() {
            debug!("delete_node: refusing to delete the root");
            return Vec::new();
        }
        let Some(node) = self.store.get(id) else {
            debug!("delete_node: node {} not found; ignoring", id);
            return Vec::new();
        };
        let parent_id = node.parent_id.clone();

        let doomed = self.subtree(id);
        for doomed_id in &doomed {
            self.store.remove(doomed_id);
        }

        if let Some(parent) = parent_id.and_then(|pid| self.store.get_mut(&pid)) {
            parent.children.retain(|child_id| child_id != id);
        }
        self.touch();

        info!("deleted node {} and {} descendant(s)", id, doomed.len() - 1);
        doomed
    }

    /// Flips `is_expanded` on this node only; descendants keep their own
    /// flags, so re-expanding restores the subtree as it was.
    pub fn toggle_expanded(&mut self, id: &NodeId) -> bool {
        let Some(node) = self.store.get_mut(id) else {
            debug!("toggle_expanded: node {} not found; ignoring", id);
            return false;
        };
        node.is_expanded = !node.is_expanded;
        self.touch();
        true
    }

    /// Idle -> Editing.
    pub fn begin_edit(&mut self, id: &NodeId) -> bool {
        self.update_node(id, &NodePatch::new().editing(true))
    }

    /// Editing -> Idle. The trimmed text becomes the title unless it is
    /// empty, in which case the previous title stays.
    pub fn commit_rename(&mut self, id: &NodeId, text: &str) -> bool {
        let trimmed = text.trim();
        let mut patch = NodePatch::new().editing(false);
        if trimmed.is_empty() {
            debug!("commit_rename: empty title for {}; keeping previous", id);
        } else {
            patch = patch.title(trimmed);
        }
        self.update_node(id, &patch)
    }

    /// Editing -> Idle without touching the stored title.
    pub fn cancel_edit(&mut self, id: &NodeId) -> bool {
        self.update_node(id, &NodePatch::new().editing(false))
    }

    /// Renames the document itself.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.touch();
    }

    /// `id` followed by all of its descendants, depth-first in child order.
    /// Each node is visited once; a node reachable twice means the tree is
    /// corrupt and the repeat is skipped.
    pub fn subtree(&self, id: &NodeId) -> Vec<NodeId> {
        let mut closure = Vec::new();
        let mut seen = HashSet::new();
        let mut stack = vec![id];

        while let Some(current) = stack.pop() {
            let Some(node) = self.store.get(current) else {
                continue;
            };
            if !seen.insert(current) {
                warn!("node {} appears under more than one parent", current);
                continue;
            }
            closure.push(current.clone());
            stack.extend(node.children.iter().rev());
        }

        closure
    }
}
