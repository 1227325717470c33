//! Scrolling game window
//!
//! The camera's `y` is applied as a translation when drawing, so the visible
//! world rows are `[-y, -y + height)`. It starts scrolling up at 1 unit per
//! frame and keeps speeding up.

use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
    pub vel_y: f32,
    pub accel_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Camera {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            vel_y: tuning.window_start_velocity,
            accel_y: -tuning.window_acceleration,
            width: tuning.game_width,
            height: tuning.game_height,
        }
    }

    pub fn update(&mut self) {
        self.vel_y += self.accel_y;
        self.y += self.vel_y;
    }

    /// World y of the top visible row
    #[inline]
    pub fn top(&self) -> f32 {
        -self.y
    }

    /// World y just past the bottom visible row
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.height - self.y
    }
}
