use crate::style::Anchor;
use glam::{Vec2, vec2};

/// Origin of a `node`-sized box anchored inside a `parent`-sized box.
pub fn anchor(node: Vec2, parent: Vec2, anchor: Anchor) -> Vec2 {
    let far = parent - node;
    let mid = parent * 0.5 - node * 0.5;

    match anchor {
        Anchor::TopLeft | Anchor::Top | Anchor::Left => Vec2::ZERO,
        Anchor::TopRight | Anchor::Right => vec2(far.x, 0.0),
        Anchor::Bottom | Anchor::BottomLeft => vec2(0.0, far.y),
        Anchor::BottomRight => far,
        Anchor::Center => mid,
        Anchor::CenterTop => vec2(mid.x, 0.0),
        Anchor::CenterBottom => vec2(mid.x, far.y),
        Anchor::CenterLeft => vec2(0.0, mid.y),
        Anchor::CenterRight => vec2(far.x, mid.y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NODE: Vec2 = vec2(50.0, 50.0);
    const PARENT: Vec2 = vec2(200.0, 100.0);

    #[test]
    fn bottom_right_is_flush_with_the_far_edges() {
        assert_eq!(anchor(NODE, PARENT, Anchor::BottomRight), vec2(150.0, 50.0));
    }

    #[test]
    fn top_left_family_does_not_move() {
        for a in [Anchor::TopLeft, Anchor::Top, Anchor::Left] {
            assert_eq!(anchor(NODE, PARENT, a), Vec2::ZERO);
        }
    }

    #[test]
    fn center_variants() {
        assert_eq!(anchor(NODE, PARENT, Anchor::Center), vec2(75.0, 25.0));
        assert_eq!(anchor(NODE, PARENT, Anchor::CenterTop), vec2(75.0, 0.0));
        assert_eq!(anchor(NODE, PARENT, Anchor::CenterBottom), vec2(75.0, 50.0));
        assert_eq!(anchor(NODE, PARENT, Anchor::CenterLeft), vec2(0.0, 25.0));
        assert_eq!(anchor(NODE, PARENT, Anchor::CenterRight), vec2(150.0, 25.0));
    }

    #[test]
    fn single_edges_move_one_axis() {
        assert_eq!(anchor(NODE, PARENT, Anchor::Right), vec2(150.0, 0.0));
        assert_eq!(anchor(NODE, PARENT, Anchor::TopRight), vec2(150.0, 0.0));
        assert_eq!(anchor(NODE, PARENT, Anchor::Bottom), vec2(0.0, 50.0));
        assert_eq!(anchor(NODE, PARENT, Anchor::BottomLeft), vec2(0.0, 50.0));
    }
}
