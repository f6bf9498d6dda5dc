use cortex_map::{Color, MindMap, NodeId};
use std::collections::HashSet;

/// Builds
///
/// ```text
/// Main Idea
///   Projects
///     Website
///     Garden
///   Reading
///     Novels
/// ```
#[allow(dead_code)]
pub fn create_test_map() -> MindMap {
    let mut map = MindMap::default();
    let root = map.root_id().clone();

    let projects = add(&mut map, &root, "Projects");
    add(&mut map, &projects, "Website");
    add(&mut map, &projects, "Garden");
    let reading = add(&mut map, &root, "Reading");
    add(&mut map, &reading, "Novels");

    map
}

/// Adds a titled child and closes its rename, the way a user would.
#[allow(dead_code)]
pub fn add(map: &mut MindMap, parent: &NodeId, title: &str) -> NodeId {
    let id = map
        .add_child(parent, Color::Blue)
        .expect("parent exists in test map");
    map.commit_rename(&id, title);
    id
}

/// Find a node by title
#[allow(dead_code)]
pub fn find_node_by_title(map: &MindMap, title: &str) -> Option<NodeId> {
    map.nodes()
        .find(|node| node.title == title)
        .map(|node| node.id.clone())
}

/// Titles of the visible nodes, in render order
#[allow(dead_code)]
pub fn visible_titles(map: &MindMap) -> Vec<String> {
    map.visible_nodes()
        .into_iter()
        .map(|node| node.title.clone())
        .collect()
}

/// Get all node titles as a set for comparison
#[allow(dead_code)]
pub fn get_all_titles(map: &MindMap) -> HashSet<String> {
    map.nodes().map(|node| node.title.clone()).collect()
}

/// Every parent/child link agrees in both directions and levels step by one.
#[allow(dead_code)]
pub fn assert_tree_consistent(map: &MindMap) {
    for node in map.nodes() {
        match &node.parent_id {
            None => {
                assert_eq!(&node.id, map.root_id(), "only the root may lack a parent");
                assert_eq!(node.level, 0);
            }
            Some(parent_id) => {
                let parent = map
                    .get(parent_id)
                    .unwrap_or_else(|| panic!("{} has a dangling parent", node.id));
                assert!(parent.children.contains(&node.id));
                assert_eq!(node.level, parent.level + 1);
            }
        }
        for child in &node.children {
            assert!(map.get(child).is_some(), "{} lists a missing child", node.id);
        }
    }
}
