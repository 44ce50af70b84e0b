use glam::Vec2;

/// Resolved placement of a node, relative to its parent's origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Geometry {
    pub size: Vec2,
    pub scale: Vec2,
    pub position: Vec2,
    pub visible: bool,
}

impl Default for Geometry {
    fn default() -> Self {
        Self::hidden()
    }
}

impl Geometry {
    /// Every field zeroed, scale included.
    pub fn hidden() -> Self {
        Self {
            size: Vec2::ZERO,
            scale: Vec2::ZERO,
            position: Vec2::ZERO,
            visible: false,
        }
    }

    /// A visible box, or `hidden()` when either axis is empty.
    pub fn shown(size: Vec2, scale: Vec2, position: Vec2) -> Self {
        if !(size.x > 0.0 && size.y > 0.0) {
            return Self::hidden();
        }
        Self {
            size,
            scale,
            position,
            visible: true,
        }
    }

    /// Space the node takes up in its parent once scaled.
    pub fn footprint(&self) -> Vec2 {
        self.size * self.scale
    }

    pub fn contains(&self, p: Vec2) -> bool {
        let min = self.position;
        let max = self.position + self.footprint();
        self.visible && p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    #[test]
    fn empty_axis_hides() {
        let g = Geometry::shown(vec2(10.0, 0.0), Vec2::ONE, vec2(3.0, 3.0));
        assert_eq!(g, Geometry::hidden());
        assert!(!g.visible);
        assert_eq!(g.scale, Vec2::ZERO);
        assert_eq!(g.position, Vec2::ZERO);
    }

    #[test]
    fn footprint_and_containment_follow_scale() {
        let g = Geometry::shown(vec2(100.0, 40.0), Vec2::splat(0.5), vec2(10.0, 10.0));
        assert_eq!(g.footprint(), vec2(50.0, 20.0));
        assert!(g.contains(vec2(60.0, 30.0)));
        assert!(!g.contains(vec2(61.0, 30.0)));
    }
}
