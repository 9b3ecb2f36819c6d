//! Overlap tests and obstacle repulsion
//!
//! Two interchangeable strategies exist across the prototype iterations: a
//! bounding-box intersection test (a circle contributes its enclosing square)
//! and a direct center-distance test for circle/circle pairs. The box test is
//! the superset and is what anything involving a rectangle falls back to.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Collision footprint of an actor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle { radius: f32 },
    Rect { width: f32, height: f32 },
}

impl Shape {
    /// Half-extents of the shape's axis-aligned bounding box
    pub fn half_extents(&self) -> Vec2 {
        match *self {
            Shape::Circle { radius } => Vec2::splat(radius),
            Shape::Rect { width, height } => Vec2::new(width / 2.0, height / 2.0),
        }
    }

    /// Bounding box of the shape placed at `center`
    pub fn aabb(&self, center: Vec2) -> Aabb {
        let half = self.half_extents();
        Aabb {
            min: center - half,
            max: center + half,
        }
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

/// Which overlap test an iteration uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollisionStrategy {
    /// Bounding-box intersection (handles circle/rectangle too)
    #[default]
    Aabb,
    /// Center distance vs combined radii, circle/circle only
    Radius,
}

/// Overlap test between two placed shapes under the given strategy.
///
/// The radius strategy only applies to circle pairs; mixed pairs always use
/// the box test.
pub fn overlaps(strategy: CollisionStrategy, a: (Vec2, Shape), b: (Vec2, Shape)) -> bool {
    match (strategy, a.1, b.1) {
        (CollisionStrategy::Radius, Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => {
            a.0.distance_squared(b.0) <= (ra + rb) * (ra + rb)
        }
        _ => a.1.aabb(a.0).intersects(&b.1.aabb(b.0)),
    }
}

/// Push `pos` away from an impassable obstacle at `obstacle`.
///
/// Replaces the steering step for the frame: the player backs out along the
/// obstacle->player axis by `fraction` of the current separation. A player
/// exactly on the obstacle center does not move (zero separation).
pub fn repel_from(pos: Vec2, obstacle: Vec2, fraction: f32) -> Vec2 {
    let d = obstacle - pos;
    let distance = d.length();
    let angle = d.y.atan2(d.x);
    let move_distance = fraction * distance;
    pos - move_distance * Vec2::new(angle.cos(), angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAT: Shape = Shape::Circle { radius: 48.0 };
    const BUG: Shape = Shape::Circle { radius: 16.0 };
    const TREE: Shape = Shape::Rect {
        width: 150.0,
        height: 50.0,
    };

    #[test]
    fn test_circle_aabb_is_enclosing_square() {
        let b = BAT.aabb(Vec2::new(10.0, -5.0));
        assert_eq!(b.min, Vec2::new(-38.0, -53.0));
        assert_eq!(b.max, Vec2::new(58.0, 43.0));
    }

    #[test]
    fn test_aabb_strategy_circle_rect() {
        // Bat square reaches x=48; tree half-width is 75, so a tree at
        // x=120 just touches and x=124 does not.
        let bat = (Vec2::ZERO, BAT);
        assert!(overlaps(
            CollisionStrategy::Aabb,
            bat,
            (Vec2::new(120.0, 0.0), TREE)
        ));
        assert!(!overlaps(
            CollisionStrategy::Aabb,
            bat,
            (Vec2::new(124.0, 0.0), TREE)
        ));
    }

    #[test]
    fn test_radius_strategy_circle_pair() {
        let bat = (Vec2::ZERO, BAT);
        // Combined radii 64: diagonal offset (50,50) is ~70.7 apart, which
        // the box test catches but the radius test does not.
        let bug = (Vec2::new(50.0, 50.0), BUG);
        assert!(!overlaps(CollisionStrategy::Radius, bat, bug));
        assert!(overlaps(CollisionStrategy::Aabb, bat, bug));

        let near = (Vec2::new(40.0, 40.0), BUG);
        assert!(overlaps(CollisionStrategy::Radius, bat, near));
    }

    #[test]
    fn test_radius_strategy_falls_back_for_rects() {
        let bat = (Vec2::ZERO, BAT);
        let tree = (Vec2::new(100.0, 0.0), TREE);
        assert!(overlaps(CollisionStrategy::Radius, bat, tree));
    }

    #[test]
    fn test_repulsion_is_monotonic() {
        let tree = Vec2::ZERO;
        let pos = Vec2::new(30.0, -20.0);
        let next = repel_from(pos, tree, 0.1);
        assert!(next.distance(tree) > pos.distance(tree));
        // Pushed along the tree->player axis, so direction is preserved.
        let dir = (pos - tree).normalize();
        let moved = (next - pos).normalize();
        assert!(dir.dot(moved) > 0.999);
    }

    #[test]
    fn test_repulsion_degenerate_center() {
        let p = Vec2::new(5.0, 5.0);
        assert_eq!(repel_from(p, p, 0.1), p);
    }
}
