//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{CollisionStrategy, Shape};
use super::visibility::VisibilityMask;
use crate::consts::*;

/// Something with a place and a heading on the field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub pos: Vec2,
    /// Facing angle in radians (unused for the tree)
    pub facing: f32,
}

impl Actor {
    pub fn at(pos: Vec2) -> Self {
        Self { pos, facing: 0.0 }
    }
}

/// Feature flags and tunables selecting one of the prototype iterations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Static impassable tree at the origin
    pub has_tree: bool,
    /// Fog-of-war raster revealed around the player
    pub visibility_mask: bool,
    /// Overlap test used for scoring and tree contact
    pub collision: CollisionStrategy,
    /// Fraction of the remaining distance covered per frame
    pub steer_fraction: f32,
    /// Sight distance beyond the player radius
    pub vision_margin: f32,
    /// Play-field size; bounds random bug placement and the fog raster
    pub field: Vec2,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            has_tree: false,
            visibility_mask: false,
            collision: CollisionStrategy::Aabb,
            steer_fraction: STEER_FRACTION,
            vision_margin: VISION_MARGIN,
            field: Vec2::new(DEFAULT_FIELD_WIDTH, DEFAULT_FIELD_HEIGHT),
        }
    }
}

impl SimConfig {
    /// Sight radius for the fog reveal
    pub fn vision_radius(&self) -> f32 {
        PLAYER_RADIUS + self.vision_margin
    }
}

/// Complete simulation state, mutated once per frame by [`tick`](super::tick)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: SimConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// The bat the user steers
    pub player: Actor,
    /// Where the player is headed; written only by input callbacks
    pub target: Option<Vec2>,
    /// The bug being chased; static until relocated on contact
    pub bug: Actor,
    /// Impassable obstacle, present when the iteration has one
    pub tree: Option<Actor>,
    pub score: u32,
    /// Previous-frame bug contact, the edge-detection latch
    pub bug_contact: bool,
    /// Fog raster, present in the fog iteration
    pub mask: Option<VisibilityMask>,
    /// Frame counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a fresh state: bat at the start point, bug at a uniform-random
    /// spot inside the field.
    pub fn new(config: SimConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let bug_pos = random_field_point(&mut rng, config.field);
        Self {
            config,
            seed,
            rng,
            player: Actor::at(PLAYER_START),
            target: None,
            bug: Actor::at(bug_pos),
            tree: config.has_tree.then(|| Actor::at(Vec2::ZERO)),
            score: 0,
            bug_contact: false,
            mask: config
                .visibility_mask
                .then(|| VisibilityMask::new(config.field)),
            time_ticks: 0,
        }
    }

    pub fn player_shape(&self) -> Shape {
        Shape::Circle {
            radius: PLAYER_RADIUS,
        }
    }

    pub fn bug_shape(&self) -> Shape {
        Shape::Circle { radius: BUG_RADIUS }
    }

    pub fn tree_shape(&self) -> Shape {
        Shape::Rect {
            width: TREE_WIDTH,
            height: TREE_HEIGHT,
        }
    }

    /// Move the bug to a new uniform-random point inside the field
    pub fn relocate_bug(&mut self) -> Vec2 {
        let pos = random_field_point(&mut self.rng, self.config.field);
        self.bug.pos = pos;
        pos
    }

    /// Adopt a new viewport size: future bug relocations use the new bounds.
    /// The fog raster keeps its resolution; it is presentation-scaled.
    pub fn resize_field(&mut self, field: Vec2) {
        self.config.field = field;
    }
}

/// Uniform-random point in `[-w/2, w/2] x [-h/2, h/2]`
fn random_field_point(rng: &mut Pcg32, field: Vec2) -> Vec2 {
    Vec2::new(
        rng.random::<f32>() * field.x - field.x / 2.0,
        rng.random::<f32>() * field.y - field.y / 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_places_bug_in_field() {
        let config = SimConfig::default();
        let state = GameState::new(config, 7);
        assert!(state.bug.pos.x.abs() <= config.field.x / 2.0);
        assert!(state.bug.pos.y.abs() <= config.field.y / 2.0);
        assert_eq!(state.player.pos, PLAYER_START);
        assert_eq!(state.score, 0);
        assert!(state.tree.is_none());
        assert!(state.mask.is_none());
    }

    #[test]
    fn test_features_follow_config() {
        let config = SimConfig {
            has_tree: true,
            visibility_mask: true,
            ..Default::default()
        };
        let state = GameState::new(config, 7);
        assert_eq!(state.tree.map(|t| t.pos), Some(Vec2::ZERO));
        assert!(state.mask.is_some());
    }

    #[test]
    fn test_relocation_stays_in_bounds() {
        let config = SimConfig::default();
        let mut state = GameState::new(config, 42);
        for _ in 0..100 {
            let p = state.relocate_bug();
            assert!(p.x.abs() <= config.field.x / 2.0);
            assert!(p.y.abs() <= config.field.y / 2.0);
        }
    }

    #[test]
    fn test_same_seed_same_bug() {
        let a = GameState::new(SimConfig::default(), 99);
        let b = GameState::new(SimConfig::default(), 99);
        assert_eq!(a.bug.pos, b.bug.pos);
    }
}
