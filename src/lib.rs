//! Bug Chase - a bat-chases-bug arcade prototype
//!
//! Core modules:
//! - `sim`: Deterministic simulation (steering, collisions, scoring, fog)
//! - `platform`: Input adapter (screen-to-world mapping, mouse gating)
//! - `render`: Renderer/score-sink trait seams and the scene presenter
//! - `settings`: The four prototype iterations as presets

pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::IterationPreset;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Bat (player) disk radius
    pub const PLAYER_RADIUS: f32 = 48.0;
    /// Bug disk radius
    pub const BUG_RADIUS: f32 = 16.0;
    /// Tree obstacle dimensions
    pub const TREE_WIDTH: f32 = 150.0;
    pub const TREE_HEIGHT: f32 = 50.0;
    /// Direction arrow length (presentation only)
    pub const ARROW_LENGTH: f32 = 50.0;

    /// Fraction of the remaining distance covered per frame
    pub const STEER_FRACTION: f32 = 0.1;
    /// Fraction used when the tree pushes the player back out
    pub const REPEL_FRACTION: f32 = 0.1;
    /// Extra sight distance beyond the player radius
    pub const VISION_MARGIN: f32 = 48.0;

    /// Where the bat starts a run
    pub const PLAYER_START: Vec2 = Vec2::new(0.0, -100.0);

    /// Default play-field size when no viewport is reported yet
    pub const DEFAULT_FIELD_WIDTH: f32 = 800.0;
    pub const DEFAULT_FIELD_HEIGHT: f32 = 600.0;
}
