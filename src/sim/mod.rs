//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per display frame
//! - Seeded RNG only (bug relocation is the single random draw)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod steering;
pub mod tick;
pub mod visibility;

pub use collision::{Aabb, CollisionStrategy, Shape, overlaps, repel_from};
pub use state::{Actor, GameState, SimConfig};
pub use steering::{facing_angle, step_toward};
pub use tick::{GameEvent, TickInput, tick};
pub use visibility::VisibilityMask;
