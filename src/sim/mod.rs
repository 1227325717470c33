//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, no wall-clock reads (time is passed in)
//! - Seeded RNG only
//! - Stable iteration order (registry slot order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod body;
pub mod camera;
pub mod collision;
pub mod registry;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use body::{Aabb, Body};
pub use camera::Camera;
pub use collision::{Resolution, resolve};
pub use registry::{EntityId, Registry};
pub use spawn::{add_platform, maybe_spawn, spawn_y};
pub use state::{GamePhase, GameState, Platform, Player, Score};
pub use tick::{FrameEvents, tick};
