//! Which nodes are eligible for rendering.
//!
//! The root is always visible. Any other node is visible iff its parent is
//! visible and expanded, which is resolved top-down from the root: an
//! expanded parent under a collapsed grandparent still hides its children.

use std::collections::HashSet;

use super::mind_map::MindMap;
use super::node::{Node, NodeId, Position};
use super::palette::Color;

/// Visible nodes in pre-order (root first, children in creation order).
pub fn visible_nodes(map: &MindMap) -> Vec<&Node> {
    let store = map.store();
    let mut visible = Vec::new();
    let mut seen = HashSet::new();
    let mut stack = vec![store.root_id()];

    while let Some(id) = stack.pop() {
        let Some(node) = store.get(id) else {
            continue;
        };
        if !seen.insert(id) {
            log::warn!("node {} reached twice while resolving visibility", id);
            continue;
        }

        visible.push(node);
        if node.is_expanded {
            stack.extend(node.children.iter().rev());
        }
    }

    visible
}

pub fn visible_ids(map: &MindMap) -> HashSet<NodeId> {
    visible_nodes(map).into_iter().map(|n| n.id.clone()).collect()
}

/// Checks a single node by walking up to the root.
pub fn is_visible(map: &MindMap, id: &NodeId) -> bool {
    let store = map.store();
    let Some(mut current) = store.get(id) else {
        return false;
    };

    // A well-formed chain is never longer than the store.
    for _ in 0..store.len() {
        if current.id == *store.root_id() {
            return true;
        }
        let Some(parent) = store.parent_of(&current.id) else {
            return false;
        };
        if !parent.is_expanded {
            return false;
        }
        current = parent;
    }

    false
}

/// A parent -> child edge between two visible nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub parent: NodeId,
    pub child: NodeId,
    pub from: Position,
    pub to: Position,
    pub color: Color,
}

/// Edges for the renderer, derived only from the store and the visible set.
pub fn connections(map: &MindMap) -> Vec<Connection> {
    visible_nodes(map)
        .into_iter()
        .filter_map(|child| {
            let parent = map.store().parent_of(&child.id)?;
            Some(Connection {
                parent: parent.id.clone(),
                child: child.id.clone(),
                from: parent.position,
                to: child.position,
                color: child.color,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::palette::Color;

    /// root -> a -> a1 -> a1x, root -> b
    fn create_test_map() -> (MindMap, NodeId, NodeId, NodeId, NodeId) {
        let mut map = MindMap::default();
        let root = map.root_id().clone();
        let a = map.add_child(&root, Color::Green).unwrap();
        let b = map.add_child(&root, Color::Green).unwrap();
        let a1 = map.add_child(&a, Color::Cyan).unwrap();
        let a1x = map.add_child(&a1, Color::Cyan).unwrap();
        (map, a, b, a1, a1x)
    }

    #[test]
    fn test_everything_visible_when_expanded() {
        let (map, ..) = create_test_map();
        assert_eq!(visible_nodes(&map).len(), map.len());
    }

    #[test]
    fn test_pre_order() {
        let (map, a, b, a1, a1x) = create_test_map();
        let order: Vec<&NodeId> = visible_nodes(&map).iter().map(|n| &n.id).collect();
        assert_eq!(order, vec![map.root_id(), &a, &a1, &a1x, &b]);
    }

    #[test]
    fn test_collapsed_grandparent_hides_grandchildren() {
        let (mut map, a, _b, a1, a1x) = create_test_map();
        map.toggle_expanded(&a);

        let visible = visible_ids(&map);
        assert!(visible.contains(&a));
        assert!(!visible.contains(&a1));
        // a1 itself is still expanded, but its parent chain is not.
        assert!(map.get(&a1).unwrap().is_expanded);
        assert!(!visible.contains(&a1x));
        assert!(!is_visible(&map, &a1x));
    }

    #[test]
    fn test_is_visible_matches_visible_set() {
        let (mut map, a, b, a1, a1x) = create_test_map();
        map.toggle_expanded(&a1);

        let visible = visible_ids(&map);
        for id in [map.root_id().clone(), a, b, a1, a1x] {
            assert_eq!(is_visible(&map, &id), visible.contains(&id), "{}", id);
        }
    }

    #[test]
    fn test_unknown_node_is_not_visible() {
        let (map, ..) = create_test_map();
        assert!(!is_visible(&map, &NodeId::new("missing")));
    }

    #[test]
    fn test_collapsed_root_shows_only_root() {
        let (mut map, ..) = create_test_map();
        let root = map.root_id().clone();
        map.toggle_expanded(&root);

        let visible = visible_nodes(&map);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, root);
    }

    #[test]
    fn test_connections_follow_visible_edges() {
        let (mut map, a, b, a1, _a1x) = create_test_map();
        map.toggle_expanded(&a1);

        let edges: Vec<(NodeId, NodeId)> = connections(&map)
            .into_iter()
            .map(|c| (c.parent, c.child))
            .collect();

        assert_eq!(
            edges,
            vec![
                (map.root_id().clone(), a.clone()),
                (a, a1),
                (map.root_id().clone(), b),
            ]
        );
    }

    #[test]
    fn test_connection_endpoints_are_node_positions() {
        let (map, a, ..) = create_test_map();
        let edge = connections(&map)
            .into_iter()
            .find(|c| c.child == a)
            .unwrap();

        assert_eq!(edge.from, map.get(map.root_id()).unwrap().position);
        assert_eq!(edge.to, map.get(&a).unwrap().position);
        assert_eq!(edge.color, Color::Green);
    }
}
