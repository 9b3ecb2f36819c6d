//! Fraction-of-distance steering
//!
//! The bat never moves at constant speed: each frame it covers a fixed
//! fraction of the remaining gap to the target, an exponential approach that
//! feels critically damped. Facing snaps straight to the target angle with no
//! turn-rate limit.

use glam::Vec2;

/// Angle from `current` toward `target`.
///
/// `atan2(0, 0)` is 0 by convention, so a degenerate target (on top of the
/// actor) yields facing 0 rather than a fault.
#[inline]
pub fn facing_angle(current: Vec2, target: Vec2) -> f32 {
    let d = target - current;
    d.y.atan2(d.x)
}

/// Advance `current` a `fraction` of the remaining distance toward `target`.
///
/// The displacement is rebuilt from the heading angle rather than scaling the
/// delta vector directly, matching the facing computation exactly.
pub fn step_toward(current: Vec2, target: Vec2, fraction: f32) -> Vec2 {
    let angle = facing_angle(current, target);
    let distance = current.distance(target);
    let move_distance = fraction * distance;
    current + move_distance * Vec2::new(angle.cos(), angle.sin())
}
