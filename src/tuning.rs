//! Data-driven game constants
//!
//! Every gameplay number lives here so a page (or the native runner) can
//! override it with a JSON object. Missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub game_width: f32,
    pub game_height: f32,
    pub gravity: f32,

    pub min_platform_width: f32,
    pub max_platform_width: f32,
    pub platform_height: f32,
    pub platform_x_overhang: f32,
    pub spawn_lead_cap: f32,
    pub spawn_lead_per_speed: f32,

    pub player_size: f32,
    pub player_speed: f32,
    pub player_start_vel_y: f32,
    pub landing_tolerance: f32,

    pub window_start_velocity: f32,
    pub window_acceleration: f32,

    pub score_padding: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            game_width: GAME_WIDTH,
            game_height: GAME_HEIGHT,
            gravity: GRAVITY,

            min_platform_width: MIN_PLATFORM_WIDTH,
            max_platform_width: MAX_PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            platform_x_overhang: PLATFORM_X_OVERHANG,
            spawn_lead_cap: SPAWN_LEAD_CAP,
            spawn_lead_per_speed: SPAWN_LEAD_PER_SPEED,

            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            player_start_vel_y: PLAYER_START_VEL_Y,
            landing_tolerance: LANDING_TOLERANCE,

            window_start_velocity: WINDOW_START_VELOCITY,
            window_acceleration: WINDOW_ACCELERATION,

            score_padding: SCORE_PADDING,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON object
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Every field by name
    fn fields(&self) -> [(&'static str, f32); 16] {
        [
            ("game_width", self.game_width),
            ("game_height", self.game_height),
            ("gravity", self.gravity),
            ("min_platform_width", self.min_platform_width),
            ("max_platform_width", self.max_platform_width),
            ("platform_height", self.platform_height),
            ("platform_x_overhang", self.platform_x_overhang),
            ("spawn_lead_cap", self.spawn_lead_cap),
            ("spawn_lead_per_speed", self.spawn_lead_per_speed),
            ("player_size", self.player_size),
            ("player_speed", self.player_speed),
            ("player_start_vel_y", self.player_start_vel_y),
            ("landing_tolerance", self.landing_tolerance),
            ("window_start_velocity", self.window_start_velocity),
            ("window_acceleration", self.window_acceleration),
            ("score_padding", self.score_padding),
        ]
    }

    /// Reject values the simulation can't work with
    pub fn validate(&self) -> Result<(), String> {
        // JSON numbers beyond f32 range come through as infinity
        if let Some((name, value)) = self.fields().into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(format!("{} must be finite, got {}", name, value));
        }
        // A non-positive lead puts new platforms inside the view, so one spawns every frame
        if self.spawn_lead_cap <= 0.0 || self.spawn_lead_per_speed <= 0.0 {
            return Err(format!(
                "spawn lead must be positive, got cap {} and per-speed {}",
                self.spawn_lead_cap, self.spawn_lead_per_speed
            ));
        }
        if self.game_width <= 0.0 || self.game_height <= 0.0 {
            return Err(format!(
                "game area must be positive, got {}x{}",
                self.game_width, self.game_height
            ));
        }
        if self.player_size <= 0.0 || self.platform_height <= 0.0 {
            return Err("player and platform sizes must be positive".to_string());
        }
        if self.min_platform_width <= 0.0 || self.min_platform_width >= self.max_platform_width {
            return Err(format!(
                "platform width range [{}, {}) is empty",
                self.min_platform_width, self.max_platform_width
            ));
        }
        if self.max_platform_width > self.game_width + 2.0 * self.platform_x_overhang {
            return Err("platforms can't be wider than the play area plus overhang".to_string());
        }
        Ok(())
    }

    /// Parse and validate, falling back to defaults on any problem
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => match tuning.validate() {
                Ok(()) => {
                    log::info!("Loaded custom tuning");
                    tuning
                }
                Err(e) => {
                    log::warn!("Invalid tuning ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not parse tuning: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let t = Tuning::default();
        assert_eq!(t.game_width, 640.0);
        assert_eq!(t.game_height, 480.0);
        assert_eq!(t.gravity, 0.2);
        assert_eq!(t.player_speed, 7.0);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "gravity": 0.5, "player_speed": 3 }"#).unwrap();
        assert_eq!(t.gravity, 0.5);
        assert_eq!(t.player_speed, 3.0);
        assert_eq!(t.platform_height, PLATFORM_HEIGHT);
    }

    #[test]
    fn test_bad_json_falls_back() {
        assert_eq!(Tuning::from_json_or_default("not json"), Tuning::default());
    }

    #[test]
    fn test_empty_width_range_rejected() {
        let t = Tuning {
            min_platform_width: 200.0,
            max_platform_width: 200.0,
            ..Default::default()
        };
        assert!(t.validate().is_err());
        let json = r#"{ "min_platform_width": 300, "max_platform_width": 200 }"#;
        assert_eq!(Tuning::from_json_or_default(json), Tuning::default());
    }

    #[test]
    fn test_out_of_range_number_rejected() {
        let t = Tuning::from_json(r#"{ "game_width": 1e39 }"#).unwrap();
        assert!(t.game_width.is_infinite());
        assert!(t.validate().is_err());
        let t = Tuning::from_json_or_default(r#"{ "game_width": 1e39 }"#);
        assert_eq!(t, Tuning::default());
        // The fallback is safe to start a session with
        let state = crate::sim::GameState::new(1, t, 0.0);
        assert_eq!(state.platforms.len(), 1);
    }

    #[test]
    fn test_every_field_must_be_finite() {
        let t = Tuning::default();
        for i in 0..t.fields().len() {
            let mut bad = Tuning::default();
            match i {
                0 => bad.game_width = f32::INFINITY,
                1 => bad.game_height = f32::NAN,
                2 => bad.gravity = f32::NEG_INFINITY,
                3 => bad.min_platform_width = f32::NAN,
                4 => bad.max_platform_width = f32::INFINITY,
                5 => bad.platform_height = f32::INFINITY,
                6 => bad.platform_x_overhang = f32::NAN,
                7 => bad.spawn_lead_cap = f32::INFINITY,
                8 => bad.spawn_lead_per_speed = f32::NAN,
                9 => bad.player_size = f32::INFINITY,
                10 => bad.player_speed = f32::NAN,
                11 => bad.player_start_vel_y = f32::INFINITY,
                12 => bad.landing_tolerance = f32::NAN,
                13 => bad.window_start_velocity = f32::NEG_INFINITY,
                14 => bad.window_acceleration = f32::NAN,
                _ => bad.score_padding = f32::INFINITY,
            }
            let err = bad.validate().unwrap_err();
            assert!(err.contains(t.fields()[i].0), "{}", err);
        }
    }

    #[test]
    fn test_negative_spawn_lead_rejected() {
        let cap = Tuning {
            spawn_lead_cap: -10.0,
            ..Default::default()
        };
        assert!(cap.validate().is_err());
        let per_speed = Tuning {
            spawn_lead_per_speed: -100.0,
            ..Default::default()
        };
        assert!(per_speed.validate().is_err());
        let json = r#"{ "spawn_lead_per_speed": -100 }"#;
        assert_eq!(Tuning::from_json_or_default(json), Tuning::default());
    }
}
