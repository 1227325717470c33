//! Game state and core simulation types
//!
//! Everything a frame reads or writes lives in [`GameState`]; there are no
//! globals. The host only adds the wall-clock time and the input flags.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::body::{Aabb, Body};
use super::camera::Camera;
use super::registry::{EntityId, Registry};
use crate::tuning::Tuning;

/// Loop state. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    GameOver,
}

/// A static platform
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub id: EntityId,
    pub rect: Aabb,
}

impl Platform {
    /// Fully above the visible top edge
    pub fn scrolled_past(&self, camera: &Camera) -> bool {
        camera.y + self.rect.bottom() < 0.0
    }

    /// Still below the visible bottom edge
    pub fn below_view(&self, camera: &Camera) -> bool {
        self.rect.top() + camera.y > camera.height
    }
}

/// The player-controlled square
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: Body,
}

impl Player {
    /// Horizontally centered, one body-height below the top
    pub fn new(tuning: &Tuning) -> Self {
        let size = tuning.player_size;
        let mut body = Body::new(
            Vec2::new(crate::centered(tuning.game_width, size), size),
            Vec2::splat(size),
        );
        body.vel.y = tuning.player_start_vel_y;
        body.accel = Vec2::new(0.0, tuning.gravity);
        Self { body }
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        self.body.aabb()
    }

    /// Fully below the visible bottom or fully above the visible top
    pub fn out_of_view(&self, camera: &Camera) -> bool {
        let rect = self.aabb();
        rect.top() > camera.bottom() || rect.bottom() < camera.top()
    }
}

/// Survival time
#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    /// Wall-clock start, milliseconds
    pub start_ms: f64,
    /// Elapsed seconds as of the last update
    pub value: f64,
}

impl Score {
    pub fn new(start_ms: f64) -> Self {
        Self {
            start_ms,
            value: 0.0,
        }
    }

    pub fn update(&mut self, now_ms: f64) {
        self.value = (now_ms - self.start_ms) / 1000.0;
    }

    /// Two-decimal display value; ties round up, not to even
    pub fn display(&self) -> String {
        format!("{:.2}", (self.value * 100.0).round() / 100.0)
    }
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameState {
    pub seed: u64,
    pub tuning: Tuning,
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Latched by the player update; the loop reads it at the start of the next frame
    pub dead: bool,
    pub frame: u64,
    pub camera: Camera,
    pub player: Player,
    pub platforms: Registry<Platform>,
    pub score: Score,
}

impl GameState {
    /// New session with one platform at the visible bottom edge
    pub fn new(seed: u64, tuning: Tuning, start_ms: f64) -> Self {
        let mut state = Self::empty(seed, tuning, start_ms);
        let y = state.tuning.game_height;
        super::spawn::add_platform(&mut state, y);
        state
    }

    /// New session without the starting platform
    pub fn empty(seed: u64, tuning: Tuning, start_ms: f64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            dead: false,
            frame: 0,
            camera: Camera::new(&tuning),
            player: Player::new(&tuning),
            platforms: Registry::new(),
            score: Score::new(start_ms),
            tuning,
        }
    }

    /// Insert a platform with an explicit rectangle
    pub fn insert_platform(&mut self, x: f32, y: f32, width: f32) -> EntityId {
        let height = self.tuning.platform_height;
        self.platforms.insert_with(|id| Platform {
            id,
            rect: Aabb::new(x, y, width, height),
        })
    }
}
