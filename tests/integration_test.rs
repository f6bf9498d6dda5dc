use cortex_map::actions::{execute_action, Action};
use cortex_map::{AppConfig, AppMode, AppState, Color, MindMap, Position};
use std::collections::HashSet;
use std::f64::consts::PI;

mod common;
use common::*;

fn assert_close(actual: Position, expected: Position) {
    assert!(
        (actual.x - expected.x).abs() < 1e-9 && (actual.y - expected.y).abs() < 1e-9,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

#[test]
fn test_worked_example() {
    let mut map = MindMap::default();
    let root = map.root_id().clone();

    let a = map.add_child(&root, Color::Purple).unwrap();
    assert_close(map.get(&a).unwrap().position, Position::new(400.0, 150.0));

    let b = map.add_child(&root, Color::Purple).unwrap();
    let angle = 30f64.to_radians();
    let expected_b = Position::new(400.0 + 150.0 * angle.cos(), 300.0 + 150.0 * angle.sin());
    assert_close(map.get(&b).unwrap().position, expected_b);

    let b_before = map.get(&b).unwrap().clone();
    let removed = map.delete_node(&a);

    assert_eq!(removed, vec![a]);
    assert_eq!(map.get(&root).unwrap().children, vec![b.clone()]);
    assert_eq!(map.get(&b).unwrap(), &b_before);
}

#[test]
fn test_root_invariance() {
    let mut map = create_test_map();
    let before = map.export_snapshot();
    let root = map.root_id().clone();

    assert!(map.delete_node(&root).is_empty());

    let after = map.export_snapshot();
    assert_eq!(after.nodes, before.nodes);
    assert_eq!(after.root_node_id, before.root_node_id);
}

#[test]
fn test_subtree_deletion_completeness() {
    let mut map = create_test_map();
    let projects = find_node_by_title(&map, "Projects").unwrap();
    let reading = find_node_by_title(&map, "Reading").unwrap();
    let reading_before = map.get(&reading).unwrap().clone();

    let removed = map.delete_node(&projects);

    assert_eq!(removed.len(), 3);
    assert_eq!(removed[0], projects);
    let expected: HashSet<String> = ["Main Idea", "Reading", "Novels"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(get_all_titles(&map), expected);
    assert!(!map.get(map.root_id()).unwrap().children.contains(&projects));
    assert_eq!(map.get(&reading).unwrap(), &reading_before);
    assert_tree_consistent(&map);
}

#[test]
fn test_level_consistency_after_many_adds() {
    let mut map = MindMap::default();
    let mut frontier = vec![map.root_id().clone()];

    for round in 0..4 {
        let mut next = Vec::new();
        for parent in &frontier {
            for i in 0..3 {
                next.push(add(&mut map, parent, &format!("n{}-{}", round, i)));
            }
        }
        frontier = next;
    }

    assert_eq!(map.len(), 1 + 3 + 9 + 27 + 81);
    assert_tree_consistent(&map);
}

#[test]
fn test_visibility_transitivity() {
    let mut map = create_test_map();
    let projects = find_node_by_title(&map, "Projects").unwrap();
    let garden = find_node_by_title(&map, "Garden").unwrap();
    let root = map.root_id().clone();

    // A collapsed grandchild-level node keeps its own flag through the round trip
    map.toggle_expanded(&garden);
    let visible_before = visible_titles(&map);

    map.toggle_expanded(&root);
    assert_eq!(visible_titles(&map), vec!["Main Idea"]);
    assert!(!map.is_visible(&projects));
    assert!(!map.is_visible(&garden));

    map.toggle_expanded(&root);
    assert_eq!(visible_titles(&map), visible_before);
    assert!(!map.get(&garden).unwrap().is_expanded);
}

#[test]
fn test_connections_only_between_visible_nodes() {
    let mut map = create_test_map();
    let projects = find_node_by_title(&map, "Projects").unwrap();
    map.toggle_expanded(&projects);

    let visible: HashSet<_> = map.visible_nodes().into_iter().map(|n| n.id.clone()).collect();
    let connections = map.connections();

    assert_eq!(connections.len(), visible.len() - 1);
    for connection in &connections {
        assert!(visible.contains(&connection.parent));
        assert!(visible.contains(&connection.child));
    }
}

#[test]
fn test_empty_rename_is_idempotent() {
    let mut map = create_test_map();
    let novels = find_node_by_title(&map, "Novels").unwrap();

    for blank in ["", "   ", "\t\n"] {
        map.begin_edit(&novels);
        map.commit_rename(&novels, blank);

        let node = map.get(&novels).unwrap();
        assert_eq!(node.title, "Novels");
        assert!(!node.is_editing);
    }
}

#[test]
fn test_layout_determinism() {
    let mut first = MindMap::default();
    let mut second = MindMap::default();
    let r1 = first.root_id().clone();
    let r2 = second.root_id().clone();

    for _ in 0..5 {
        let a = first.add_child(&r1, Color::Blue).unwrap();
        let b = second.add_child(&r2, Color::Rose).unwrap();
        assert_eq!(first.get(&a).unwrap().position, second.get(&b).unwrap().position);
    }

    // Fourth child onward spaces by the real count instead of thirds
    let fifth = first.get(&r1).unwrap().children[4].clone();
    let expected = 4.0 * 2.0 * PI / 5.0 - PI / 2.0;
    assert_close(
        first.get(&fifth).unwrap().position,
        Position::new(400.0 + 150.0 * expected.cos(), 300.0 + 150.0 * expected.sin()),
    );
}

#[test]
fn test_keystrokes_drive_rename() {
    let mut app = AppState::new(AppConfig::default());

    let actions = [
        Action::AddChild,
        Action::TypeChar('I'),
        Action::TypeChar('d'),
        Action::TypeChar('e'),
        Action::TypeChar('a'),
        Action::ConfirmEdit,
    ];
    for action in actions {
        execute_action(action, &mut app).unwrap();
    }

    assert_eq!(app.mode, AppMode::Normal);
    let node = app.selected_node().unwrap();
    assert_eq!(node.title, "Idea");
    assert_eq!(node.level, 1);
    assert!(!node.is_editing);
    assert!(app.is_dirty);
}

#[test]
fn test_escape_on_new_child_keeps_default_title() {
    let mut app = AppState::new(AppConfig::default());

    execute_action(Action::AddChild, &mut app).unwrap();
    execute_action(Action::TypeChar('x'), &mut app).unwrap();
    execute_action(Action::CancelEdit, &mut app).unwrap();

    let node = app.selected_node().unwrap();
    assert_eq!(node.title, "New Idea");
    assert!(!node.is_editing);
}

#[test]
fn test_delete_then_navigate() {
    let mut app = AppState::with_map(AppConfig::default(), create_test_map());
    let projects = find_node_by_title(&app.map, "Projects").unwrap();
    let reading = find_node_by_title(&app.map, "Reading").unwrap();
    app.selected = projects;

    execute_action(Action::DeleteNode, &mut app).unwrap();
    assert_eq!(app.selected, reading);

    execute_action(Action::SelectFirstChild, &mut app).unwrap();
    assert_eq!(app.selected_node().unwrap().title, "Novels");

    execute_action(Action::SelectRoot, &mut app).unwrap();
    assert_eq!(&app.selected, app.map.root_id());
}
