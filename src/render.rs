//! Presentation seams
//!
//! The sim never talks to a real scene graph. The host supplies a [`Renderer`]
//! ("draw this shape at this position/rotation") and a [`ScoreSink`] (a text
//! sink for the score), and [`ScenePresenter`] pushes committed sim state into
//! them once per frame. The direction arrow is NOT a scene-graph child of the
//! player: its transform is derived here from the player's committed position
//! and facing every frame.

use glam::Vec2;

use crate::consts::ARROW_LENGTH;
use crate::sim::{GameEvent, GameState, Shape};

/// Handle to a shape owned by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(pub u32);

/// Draw-order layers, back to front
pub mod layer {
    pub const MAP: f32 = 0.0;
    pub const PLAYER: f32 = 1.0;
    pub const ARROW: f32 = 2.0;
    pub const FOG: f32 = 3.0;
}

/// Minimal scene-graph surface the host must provide
pub trait Renderer {
    /// Create a shape on a draw-order layer, returning its handle
    fn create_shape(&mut self, shape: Shape, layer: f32) -> ShapeId;
    fn set_position(&mut self, id: ShapeId, pos: Vec2);
    fn set_rotation(&mut self, id: ShapeId, angle: f32);
    /// Flush the frame to the screen
    fn present(&mut self);
}

/// Text sink for the integer score
pub trait ScoreSink {
    fn set_score(&mut self, score: u32);
}

/// Score sink that just logs; the demo binary's display collaborator
#[derive(Debug, Default)]
pub struct LogScoreSink;

impl ScoreSink for LogScoreSink {
    fn set_score(&mut self, score: u32) {
        log::info!("score: {score}");
    }
}

/// Owns the shape handles for one scene and keeps them in sync with the sim
#[derive(Debug)]
pub struct ScenePresenter {
    player: ShapeId,
    arrow: ShapeId,
    bug: ShapeId,
    tree: Option<ShapeId>,
    fog: Option<ShapeId>,
}

impl ScenePresenter {
    /// Create the scene's shapes for the iteration the state was built with
    pub fn new<R: Renderer>(renderer: &mut R, state: &GameState) -> Self {
        let player = renderer.create_shape(state.player_shape(), layer::PLAYER);
        let arrow = renderer.create_shape(
            Shape::Rect {
                width: ARROW_LENGTH,
                height: 4.0,
            },
            layer::ARROW,
        );
        let bug = renderer.create_shape(state.bug_shape(), layer::MAP);
        let tree = state
            .tree
            .map(|_| renderer.create_shape(state.tree_shape(), layer::MAP));
        let fog = state.mask.as_ref().map(|_| {
            renderer.create_shape(
                Shape::Rect {
                    width: state.config.field.x,
                    height: state.config.field.y,
                },
                layer::FOG,
            )
        });
        Self {
            player,
            arrow,
            bug,
            tree,
            fog,
        }
    }

    /// Push committed sim state into the renderer and flush the frame
    pub fn sync<R: Renderer>(&self, renderer: &mut R, state: &GameState) {
        renderer.set_position(self.player, state.player.pos);
        renderer.set_rotation(self.player, state.player.facing);

        // Derived transform: the arrow sits on the player and points where
        // the player faces, recomputed from committed state each frame.
        renderer.set_position(self.arrow, state.player.pos);
        renderer.set_rotation(self.arrow, state.player.facing);

        renderer.set_position(self.bug, state.bug.pos);
        if let (Some(id), Some(tree)) = (self.tree, state.tree) {
            renderer.set_position(id, tree.pos);
        }
        if let Some(id) = self.fog {
            // The fog plane itself never moves; the mask texture behind it
            // is what changes.
            renderer.set_position(id, Vec2::ZERO);
        }
        renderer.present();
    }
}

/// Forward frame events to the score display
pub fn forward_score<S: ScoreSink>(events: &[GameEvent], sink: &mut S) {
    for event in events {
        if let GameEvent::ScoreChanged(score) = event {
            sink.set_score(*score);
        }
    }
}
