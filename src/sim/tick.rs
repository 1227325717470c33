//! Per-frame simulation step
//!
//! Frame order: spawn check, camera, platforms, player, score. Drawing
//! happens afterwards from the resulting state.

use super::collision::{self, Resolution};
use super::spawn;
use super::state::{GamePhase, GameState};
use crate::input::InputState;

/// What happened during one frame (for logging and tests)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameEvents {
    pub spawned: bool,
    pub removed: usize,
    pub landed: bool,
    pub died: bool,
}

/// Advance the running game by one frame.
///
/// Does nothing once the phase is `GameOver`. Death is only latched here; the
/// loop driver notices it at the start of the next frame.
pub fn tick(state: &mut GameState, input: &InputState, now_ms: f64) -> FrameEvents {
    let mut events = FrameEvents::default();
    if state.phase == GamePhase::GameOver {
        return events;
    }

    events.spawned = spawn::maybe_spawn(state).is_some();

    state.camera.update();

    // Platforms drop out once they've scrolled past the top
    let camera = &state.camera;
    let removed = state.platforms.retain(|p| !p.scrolled_past(camera));
    for id in &removed {
        log::trace!("Platform {} scrolled off", id.get());
    }
    events.removed = removed.len();

    update_player(state, input, &mut events);

    state.score.update(now_ms);
    state.frame += 1;
    events
}

fn update_player(state: &mut GameState, input: &InputState, events: &mut FrameEvents) {
    let speed = state.tuning.player_speed;
    let body = &mut state.player.body;

    // Independent checks: holding both cancels out
    if input.left {
        body.pos.x -= speed;
    }
    if input.right {
        body.pos.x += speed;
    }

    body.integrate();

    if !state.dead && state.player.out_of_view(&state.camera) {
        state.dead = true;
        events.died = true;
        log::info!(
            "Player left the view at frame {} (score {})",
            state.frame,
            state.score.display()
        );
    }

    let tolerance = state.tuning.landing_tolerance;
    for platform in state.platforms.values() {
        let hit = collision::resolve(&mut state.player.body, &platform.rect, input, tolerance);
        if hit == Some(Resolution::Landed) {
            events.landed = true;
        }
    }
}
