//! Per-frame simulation step
//!
//! Order within a frame: absorb the pending target, bug contact edge
//! detection (score + relocate), steering proposal, tree repulsion veto,
//! commit position and facing, fog reveal from the committed position.

use glam::Vec2;

use super::collision::{overlaps, repel_from};
use super::state::GameState;
use super::steering::{facing_angle, step_toward};
use crate::consts::REPEL_FRACTION;

/// Input for a single frame, written by platform callbacks between frames
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// World-space point the player is steering toward; `None` leaves the
    /// previous target in place (last-write-wins upstream).
    pub target: Option<Vec2>,
}

/// Something the presentation layer needs to hear about
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Score changed; forward to the score display
    ScoreChanged(u32),
    /// Bug jumped to a new spot after being caught
    BugRelocated(Vec2),
    /// Tree contact overrode steering this frame
    TreeRepelled,
}

/// Advance the simulation by one display frame
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if let Some(target) = input.target {
        state.target = Some(target);
    }

    // Edge-triggered scoring: only a fresh contact counts, holding contact
    // over several frames scores once.
    let bug_hit = overlaps(
        state.config.collision,
        (state.player.pos, state.player_shape()),
        (state.bug.pos, state.bug_shape()),
    );
    if bug_hit && !state.bug_contact {
        state.bug_contact = true;
        state.score += 1;
        events.push(GameEvent::ScoreChanged(state.score));
        let pos = state.relocate_bug();
        log::info!("bug caught, score {}, relocated to {pos}", state.score);
        events.push(GameEvent::BugRelocated(pos));
    } else if !bug_hit && state.bug_contact {
        state.bug_contact = false;
    }

    // Steering proposal, possibly vetoed by the tree.
    let mut next = state.player.pos;
    if let Some(target) = state.target {
        next = step_toward(state.player.pos, target, state.config.steer_fraction);
        state.player.facing = facing_angle(state.player.pos, target);
    }
    if let Some(tree) = state.tree {
        let touching = overlaps(
            state.config.collision,
            (state.player.pos, state.player_shape()),
            (tree.pos, state.tree_shape()),
        );
        if touching {
            next = repel_from(state.player.pos, tree.pos, REPEL_FRACTION);
            events.push(GameEvent::TreeRepelled);
        }
    }
    state.player.pos = next;

    // Fog reveal runs last, from the committed position.
    let vision = state.config.vision_radius();
    if let Some(mask) = &mut state.mask {
        mask.reveal(state.player.pos, vision);
    }

    state.time_ticks += 1;
    events
}
