//! Bug Chase entry point
//!
//! Headless demo run: picks an iteration preset from argv, feeds a scripted
//! pointer stream through the input adapter, and steps the sim for a few
//! hundred frames while a logging score sink plays the part of the DOM label.

use glam::Vec2;

use bug_chase::IterationPreset;
use bug_chase::platform::InputAdapter;
use bug_chase::render::{LogScoreSink, Renderer, ScenePresenter, ShapeId, forward_score};
use bug_chase::sim::{GameState, Shape, tick};

/// Renderer that only tracks shape count; the demo has no screen
#[derive(Debug, Default)]
struct HeadlessRenderer {
    shapes: u32,
}

impl Renderer for HeadlessRenderer {
    fn create_shape(&mut self, _shape: Shape, _layer: f32) -> ShapeId {
        self.shapes += 1;
        ShapeId(self.shapes - 1)
    }
    fn set_position(&mut self, _id: ShapeId, _pos: Vec2) {}
    fn set_rotation(&mut self, _id: ShapeId, _angle: f32) {}
    fn present(&mut self) {}
}

const DEMO_FRAMES: u64 = 600;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let preset = args
        .next()
        .and_then(|s| IterationPreset::from_str(&s))
        .unwrap_or_default();
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(0xB0B);

    log::info!("bug-chase iteration {} (seed {seed})", preset.as_str());

    let mut state = GameState::new(preset.sim_config(), seed);
    let mut adapter = InputAdapter::new(state.config.field);
    let mut renderer = HeadlessRenderer::default();
    let scene = ScenePresenter::new(&mut renderer, &state);
    let mut score = LogScoreSink;

    for _ in 0..DEMO_FRAMES {
        // Scripted player: press-and-drag toward wherever the bug is now.
        let half = adapter.viewport() / 2.0;
        let bug = state.bug.pos;
        adapter.touch(Vec2::new(bug.x + half.x, -bug.y + half.y));

        let input = adapter.frame_input();
        let events = tick(&mut state, &input);
        forward_score(&events, &mut score);
        scene.sync(&mut renderer, &state);
    }

    println!("final score after {DEMO_FRAMES} frames: {}", state.score);
    match serde_json::to_string(&state) {
        Ok(json) => log::debug!("state snapshot: {} bytes", json.len()),
        Err(e) => log::warn!("snapshot failed: {e}"),
    }
}
