//! Scroll Hop - a vertically scrolling platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, camera, platforms, collisions)
//! - `render`: Drawing-surface abstraction and the scene drawn on it
//! - `game`: Per-frame driver (RUNNING / GAME_OVER)
//! - `input`: Keyboard mapping to the four logical buttons
//! - `tuning`: Data-driven game constants

pub mod game;
pub mod input;
pub mod render;
pub mod sim;
pub mod tuning;

pub use game::{Game, LoopControl};
pub use input::{Button, InputState};
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Logical play area, in canvas units
    pub const GAME_WIDTH: f32 = 640.0;
    pub const GAME_HEIGHT: f32 = 480.0;
    /// Backing-store scale of the canvas relative to its CSS size
    pub const PIXEL_RATIO: f64 = 2.0;

    /// Downward acceleration applied to the player every frame
    pub const GRAVITY: f32 = 0.2;

    /// Platform widths are drawn from [MIN, MAX)
    pub const MIN_PLATFORM_WIDTH: f32 = 100.0;
    pub const MAX_PLATFORM_WIDTH: f32 = 200.0;
    pub const PLATFORM_HEIGHT: f32 = 25.0;
    /// How far a platform may hang off either side of the play area
    pub const PLATFORM_X_OVERHANG: f32 = 50.0;

    /// Spawn lead below the visible bottom: min(CAP, PER_SPEED * -camera.vel_y)
    pub const SPAWN_LEAD_CAP: f32 = 250.0;
    pub const SPAWN_LEAD_PER_SPEED: f32 = 100.0;

    pub const PLAYER_SIZE: f32 = 30.0;
    /// Lateral step per frame while Left/Right is held
    pub const PLAYER_SPEED: f32 = 7.0;
    pub const PLAYER_START_VEL_Y: f32 = 1.0;

    /// A hit whose bottom edge is within this band of the top counts as a landing
    pub const LANDING_TOLERANCE: f32 = 15.0;

    /// Camera scroll; negative is upward
    pub const WINDOW_START_VELOCITY: f32 = -1.0;
    pub const WINDOW_ACCELERATION: f32 = 0.001;

    pub const SCORE_PADDING: f32 = 10.0;
}

/// Palette and fonts of the canvas output
pub mod palette {
    pub const BACKGROUND: &str = "#EDF2F7";
    pub const PLAYER: &str = "#4FD1C5";
    pub const PLATFORM: &str = "#1A202C";
    pub const SCORE: &str = "#5A67D8";
    pub const GAME_OVER_HEADING: &str = "#E53E3E";
    pub const GAME_OVER_SUBTITLE: &str = "#2D3748";
    pub const GAME_OVER_OVERLAY: &str = "rgba(255, 255, 255, 0.65)";

    pub const SCORE_FONT: &str = "20px Arial";
    pub const HEADING_FONT: &str = "50px Arial";
    pub const SUBTITLE_FONT: &str = "20px Arial";
}

/// Horizontal offset that centers an item of `width` inside `container`
#[inline]
pub fn centered(container: f32, width: f32) -> f32 {
    container / 2.0 - width / 2.0
}
