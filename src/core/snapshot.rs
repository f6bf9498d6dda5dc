//! Whole-document export and import.
//!
//! A snapshot is a read-only copy of the aggregate:
//! `{id, title, nodes, rootNodeId, createdAt, updatedAt}` with nodes keyed by
//! id. Importing validates the tree invariants before anything is trusted.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;

use super::clock;
use super::mind_map::MindMap;
use super::node::{Node, NodeId};
use super::store::NodeStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub id: String,
    pub title: String,
    pub nodes: BTreeMap<NodeId, Node>,
    pub root_node_id: NodeId,
    #[serde(with = "clock::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "clock::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Malformed snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Node stored under key {key} carries id {id}")]
    KeyMismatch { key: NodeId, id: NodeId },

    #[error("Root node {0} is missing")]
    MissingRoot(NodeId),

    #[error("Root node {0} must not have a parent")]
    RootHasParent(NodeId),

    #[error("Node {0} has no parent but is not the root")]
    ExtraRoot(NodeId),

    #[error("Node {node} refers to unknown parent {parent}")]
    UnknownParent { node: NodeId, parent: NodeId },

    #[error("Node {node} is not listed among the children of its parent {parent}")]
    NotListedByParent { node: NodeId, parent: NodeId },

    #[error("Node {node} lists unknown child {child}")]
    UnknownChild { node: NodeId, child: NodeId },

    #[error("Node {node} lists child {child}, whose parent is not {node}")]
    ForeignChild { node: NodeId, child: NodeId },

    #[error("Node {node} lists child {child} more than once")]
    DuplicateChild { node: NodeId, child: NodeId },

    #[error("Node {node} has level {found}, expected {expected}")]
    LevelMismatch {
        node: NodeId,
        expected: u32,
        found: u32,
    },

    #[error("Node {0} cannot be reached from the root")]
    Unreachable(NodeId),
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// `mindmap-<title>.json`, whitespace runs turned into `-`, lowercased.
    pub fn default_file_name(&self) -> String {
        let slug = self
            .title
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase();
        format!("mindmap-{}.json", slug)
    }

    /// Checks every tree invariant. On success the node map is known to be a
    /// single tree rooted at `root_node_id` with consistent levels.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        for (key, node) in &self.nodes {
            if *key != node.id {
                return Err(SnapshotError::KeyMismatch {
                    key: key.clone(),
                    id: node.id.clone(),
                });
            }
        }

        let root = self
            .nodes
            .get(&self.root_node_id)
            .ok_or_else(|| SnapshotError::MissingRoot(self.root_node_id.clone()))?;
        if root.parent_id.is_some() {
            return Err(SnapshotError::RootHasParent(root.id.clone()));
        }
        if root.level != 0 {
            return Err(SnapshotError::LevelMismatch {
                node: root.id.clone(),
                expected: 0,
                found: root.level,
            });
        }

        for node in self.nodes.values() {
            self.validate_links(node)?;
        }

        self.validate_reachability()
    }

    fn validate_links(&self, node: &Node) -> Result<(), SnapshotError> {
        match &node.parent_id {
            None if node.id != self.root_node_id => {
                return Err(SnapshotError::ExtraRoot(node.id.clone()));
            }
            None => {}
            Some(parent_id) => {
                let parent =
                    self.nodes
                        .get(parent_id)
                        .ok_or_else(|| SnapshotError::UnknownParent {
                            node: node.id.clone(),
                            parent: parent_id.clone(),
                        })?;
                if !parent.children.contains(&node.id) {
                    return Err(SnapshotError::NotListedByParent {
                        node: node.id.clone(),
                        parent: parent_id.clone(),
                    });
                }
            }
        }

        let mut listed = HashSet::new();
        for child_id in &node.children {
            if !listed.insert(child_id) {
                return Err(SnapshotError::DuplicateChild {
                    node: node.id.clone(),
                    child: child_id.clone(),
                });
            }
            let child = self
                .nodes
                .get(child_id)
                .ok_or_else(|| SnapshotError::UnknownChild {
                    node: node.id.clone(),
                    child: child_id.clone(),
                })?;
            if child.parent_id.as_ref() != Some(&node.id) {
                return Err(SnapshotError::ForeignChild {
                    node: node.id.clone(),
                    child: child_id.clone(),
                });
            }
        }

        Ok(())
    }

    // With parent links already checked, anything left over after a walk
    // from the root sits on a cycle.
    fn validate_reachability(&self) -> Result<(), SnapshotError> {
        let mut reached = HashSet::new();
        let mut stack = vec![&self.root_node_id];

        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            if !reached.insert(id) {
                continue;
            }
            for child_id in &node.children {
                if let Some(child) = self.nodes.get(child_id) {
                    if child.level != node.level + 1 {
                        return Err(SnapshotError::LevelMismatch {
                            node: child.id.clone(),
                            expected: node.level + 1,
                            found: child.level,
                        });
                    }
                }
                stack.push(child_id);
            }
        }

        match self.nodes.keys().find(|id| !reached.contains(id)) {
            Some(orphan) => Err(SnapshotError::Unreachable(orphan.clone())),
            None => Ok(()),
        }
    }
}

impl MindMap {
    /// Read-only copy of the whole document.
    pub fn export_snapshot(&self) -> Snapshot {
        Snapshot {
            id: self.id.clone(),
            title: self.title.clone(),
            nodes: self
                .store
                .all()
                .map(|node| (node.id.clone(), node.clone()))
                .collect(),
            root_node_id: self.store.root_id().clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Rebuilds a document from a snapshot, rejecting anything that is not a
    /// well-formed tree.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, SnapshotError> {
        snapshot.validate()?;

        let nodes: HashMap<NodeId, Node> = snapshot.nodes.into_iter().collect();
        Ok(Self {
            id: snapshot.id,
            title: snapshot.title,
            store: NodeStore::from_parts(nodes, snapshot.root_node_id),
            created_at: snapshot.created_at,
            updated_at: snapshot.updated_at,
        })
    }
}
