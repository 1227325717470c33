//! Demo mode: steer toward the nearest platform below the player
//!
//! Only produces Left/Right, so it plays by exactly the same rules as a
//! keyboard.

use super::state::GameState;
use crate::input::InputState;

/// Dead zone around the target so the player doesn't jitter
const STEER_DEAD_ZONE: f32 = 4.0;

pub fn autopilot(state: &GameState) -> InputState {
    let player = state.player.aabb();
    let center = player.pos.x + player.size.x / 2.0;

    // Closest platform whose top is at or below the player's feet
    let target = state
        .platforms
        .values()
        .filter(|p| p.rect.top() >= player.bottom())
        .min_by(|a, b| {
            a.rect
                .top()
                .partial_cmp(&b.rect.top())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let mut input = InputState::default();
    if let Some(platform) = target {
        let goal = platform.rect.pos.x + platform.rect.size.x / 2.0;
        if goal < center - STEER_DEAD_ZONE {
            input.left = true;
        } else if goal > center + STEER_DEAD_ZONE {
            input.right = true;
        }
    }
    input
}
