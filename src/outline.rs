//! Plain-text rendering of the visible tree, one node per line, indented
//! with a tab per level.

use crate::core::MindMap;
use crate::layout::COLLAPSED_MARKER;

pub fn render_outline(map: &MindMap) -> String {
    map.visible_nodes()
        .into_iter()
        .map(|node| {
            let mut line = "\t".repeat(node.level as usize);
            line.push_str(&node.title);
            if !node.is_expanded && node.has_children() {
                line.push_str(COLLAPSED_MARKER);
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    #[test]
    fn test_outline_of_seed_map() {
        assert_eq!(render_outline(&MindMap::default()), "Main Idea");
    }

    #[test]
    fn test_outline_indents_and_marks_collapsed() {
        let mut map = MindMap::default();
        let root = map.root_id().clone();
        let a = map.add_child_titled(&root, "Plans", Color::Blue).unwrap();
        map.add_child_titled(&a, "Hidden", Color::Blue).unwrap();
        let b = map.add_child_titled(&root, "Notes", Color::Blue).unwrap();
        map.add_child_titled(&b, "Shown", Color::Blue).unwrap();
        map.toggle_expanded(&a);

        assert_eq!(
            render_outline(&map),
            "Main Idea\n\tPlans [+]\n\tNotes\n\t\tShown"
        );
    }
}
