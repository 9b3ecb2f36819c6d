//! Pointer/touch to world-space target mapping
//!
//! World coordinates are origin-centered with y pointing up, so a screen
//! point converts as `(sx - w/2, -(sy - h/2))`. Mouse input only counts while
//! the primary button is held; touch input always counts. Start and move
//! events go through the same path, and every event overwrites the pending
//! target (last-write-wins, no debouncing).

use glam::Vec2;

use crate::consts::{DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH};
use crate::sim::TickInput;

/// Converts raw platform events into the sim's pending steering target
#[derive(Debug, Clone)]
pub struct InputAdapter {
    viewport: Vec2,
    mouse_active: bool,
    target: Option<Vec2>,
}

impl Default for InputAdapter {
    fn default() -> Self {
        Self::new(Vec2::new(DEFAULT_FIELD_WIDTH, DEFAULT_FIELD_HEIGHT))
    }
}

impl InputAdapter {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            viewport,
            mouse_active: false,
            target: None,
        }
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Screen point (y down, origin top-left) to world point (y up, centered)
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        Vec2::new(
            screen.x - self.viewport.x / 2.0,
            -screen.y + self.viewport.y / 2.0,
        )
    }

    /// Viewport resized; future conversions center on the new size
    pub fn resized(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    /// Primary mouse button state changed
    pub fn set_mouse_active(&mut self, active: bool) {
        self.mouse_active = active;
    }

    /// Mouse button pressed at a screen point: activates and targets
    pub fn pointer_pressed(&mut self, screen: Vec2) {
        self.mouse_active = true;
        self.set_target(screen);
    }

    pub fn pointer_released(&mut self) {
        self.mouse_active = false;
    }

    /// Mouse moved; only targets while the button is held
    pub fn pointer_moved(&mut self, screen: Vec2) {
        if self.mouse_active {
            self.set_target(screen);
        }
    }

    /// Touch start or move; ungated, same path as the pointer
    pub fn touch(&mut self, screen: Vec2) {
        self.set_target(screen);
    }

    fn set_target(&mut self, screen: Vec2) {
        self.target = Some(self.screen_to_world(screen));
    }

    /// Pending world-space target, if any event set one
    pub fn target(&self) -> Option<Vec2> {
        self.target
    }

    /// Consume the pending target into a frame input
    pub fn frame_input(&mut self) -> TickInput {
        TickInput {
            target: self.target.take(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter() -> InputAdapter {
        InputAdapter::new(Vec2::new(800.0, 600.0))
    }

    #[test]
    fn test_screen_to_world_centers_and_inverts_y() {
        let a = adapter();
        assert_eq!(a.screen_to_world(Vec2::new(400.0, 300.0)), Vec2::ZERO);
        assert_eq!(a.screen_to_world(Vec2::ZERO), Vec2::new(-400.0, 300.0));
        assert_eq!(
            a.screen_to_world(Vec2::new(800.0, 600.0)),
            Vec2::new(400.0, -300.0)
        );
    }

    #[test]
    fn test_mouse_is_gated_on_button() {
        let mut a = adapter();
        a.pointer_moved(Vec2::new(100.0, 100.0));
        assert_eq!(a.target(), None);

        a.pointer_pressed(Vec2::new(100.0, 100.0));
        assert_eq!(a.target(), Some(Vec2::new(-300.0, 200.0)));

        a.pointer_moved(Vec2::new(500.0, 100.0));
        assert_eq!(a.target(), Some(Vec2::new(100.0, 200.0)));

        a.pointer_released();
        a.pointer_moved(Vec2::new(0.0, 0.0));
        // Released: move stops updating, last target survives.
        assert_eq!(a.target(), Some(Vec2::new(100.0, 200.0)));
    }

    #[test]
    fn test_touch_is_ungated() {
        let mut a = adapter();
        a.touch(Vec2::new(400.0, 0.0));
        assert_eq!(a.target(), Some(Vec2::new(0.0, 300.0)));
    }

    #[test]
    fn test_last_write_wins() {
        let mut a = adapter();
        a.touch(Vec2::new(100.0, 100.0));
        a.pointer_pressed(Vec2::new(200.0, 200.0));
        a.touch(Vec2::new(300.0, 300.0));
        assert_eq!(a.target(), Some(a.screen_to_world(Vec2::new(300.0, 300.0))));
    }

    #[test]
    fn test_frame_input_consumes_target() {
        let mut a = adapter();
        a.touch(Vec2::new(400.0, 300.0));
        let input = a.frame_input();
        assert_eq!(input.target, Some(Vec2::ZERO));
        assert_eq!(a.frame_input().target, None);
    }

    #[test]
    fn test_resize_recenters() {
        let mut a = adapter();
        a.resized(400.0, 400.0);
        assert_eq!(a.screen_to_world(Vec2::new(200.0, 200.0)), Vec2::ZERO);
    }
}
