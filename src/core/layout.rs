//! Radial placement of new children around their parent.
//!
//! Siblings fan out on a circle whose radius grows with the parent's depth.
//! Only the sibling count is consulted, never the siblings' actual
//! positions, so there is no collision handling between unrelated branches.

use std::f64::consts::{FRAC_PI_2, TAU};

use super::node::{Node, Position};

pub const BASE_RADIUS: f64 = 150.0;
pub const RADIUS_PER_LEVEL: f64 = 50.0;
/// Smallest divisor of the full circle, so one or two children are not
/// spread out to opposite sides.
pub const MIN_ANGULAR_DIVISOR: usize = 3;

pub fn radius_for_level(parent_level: u32) -> f64 {
    BASE_RADIUS + f64::from(parent_level) * RADIUS_PER_LEVEL
}

/// Position of child `child_index` when the parent has `sibling_count`
/// children after the insertion. Child 0 sits straight above the parent.
pub fn child_position(
    parent: Position,
    parent_level: u32,
    child_index: usize,
    sibling_count: usize,
) -> Position {
    let radius = radius_for_level(parent_level);
    let step = TAU / sibling_count.max(MIN_ANGULAR_DIVISOR) as f64;
    let angle = step * child_index as f64 - FRAC_PI_2;

    Position::new(
        parent.x + angle.cos() * radius,
        parent.y + angle.sin() * radius,
    )
}

/// Where the next child appended to `parent` goes.
pub fn next_child_position(parent: &Node) -> Position {
    let index = parent.children.len();
    child_position(parent.position, parent.level, index, index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: Position, expected: Position) {
        assert!(
            (actual.x - expected.x).abs() < EPS && (actual.y - expected.y).abs() < EPS,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_radius_grows_with_level() {
        assert_eq!(radius_for_level(0), 150.0);
        assert_eq!(radius_for_level(1), 200.0);
        assert_eq!(radius_for_level(4), 350.0);
    }

    #[test]
    fn test_first_child_goes_up() {
        let pos = child_position(Position::new(400.0, 300.0), 0, 0, 1);
        assert_close(pos, Position::new(400.0, 150.0));
    }

    #[test]
    fn test_second_child_uses_minimum_divisor() {
        let pos = child_position(Position::new(400.0, 300.0), 0, 1, 2);
        let angle = 30f64.to_radians();
        assert_close(
            pos,
            Position::new(400.0 + 150.0 * angle.cos(), 300.0 + 150.0 * angle.sin()),
        );
    }

    #[test]
    fn test_large_fan_divides_circle_evenly() {
        let parent = Position::new(0.0, 0.0);
        // Fifth of six children: -90 + 4 * 60 = 150 degrees.
        let pos = child_position(parent, 1, 4, 6);
        let angle = 150f64.to_radians();
        assert_close(pos, Position::new(200.0 * angle.cos(), 200.0 * angle.sin()));
    }

    #[test]
    fn test_every_child_sits_on_the_radius() {
        let parent = Position::new(-20.0, 35.0);
        for count in 1..10 {
            for index in 0..count {
                let pos = child_position(parent, 2, index, count);
                assert!((pos.distance(parent) - 250.0).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_placement_is_deterministic() {
        let a = child_position(Position::new(12.5, -3.0), 3, 2, 5);
        let b = child_position(Position::new(12.5, -3.0), 3, 2, 5);
        assert_eq!(a, b);
    }
}
