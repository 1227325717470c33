//! Procedural platform generation
//!
//! One platform is kept queued below the visible area at all times. The lead
//! distance grows with scroll speed so faster scrolling still leaves room to
//! land, up to a cap.

use rand::Rng;

use super::registry::EntityId;
use super::state::GameState;

/// World y for the next platform, given the current camera
pub fn spawn_y(state: &GameState) -> f32 {
    let t = &state.tuning;
    let lead = (-t.spawn_lead_per_speed * state.camera.vel_y).min(t.spawn_lead_cap);
    t.game_height + lead - state.camera.y
}

/// Spawn a platform if none is waiting below the visible bottom edge
pub fn maybe_spawn(state: &mut GameState) -> Option<EntityId> {
    let camera = &state.camera;
    if state.platforms.values().any(|p| p.below_view(camera)) {
        return None;
    }
    let y = spawn_y(state);
    Some(add_platform(state, y))
}

/// Add a platform of random width and x at world height `y`
pub fn add_platform(state: &mut GameState, y: f32) -> EntityId {
    let t = &state.tuning;
    let (min_w, max_w) = (t.min_platform_width, t.max_platform_width);
    let overhang = t.platform_x_overhang;
    let game_width = t.game_width;

    let width = state.rng.random_range(min_w..max_w).floor().max(min_w);
    let min_x = -overhang;
    let max_x = game_width - width + overhang;
    let x = state.rng.random_range(min_x..max_x).floor().max(min_x);

    let id = state.insert_platform(x, y, width);
    log::debug!(
        "Spawned platform {} at ({}, {:.1}) width {}",
        id.get(),
        x,
        y,
        width
    );
    id
}
