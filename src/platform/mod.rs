//! Platform abstraction layer
//!
//! The host (browser canvas, winit window, a test harness) owns the event
//! loop and forwards raw pointer/touch/resize events here; the sim never
//! sees screen coordinates.

pub mod input;

pub use input::InputAdapter;
