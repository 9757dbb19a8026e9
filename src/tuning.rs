//! Game balance knobs
//!
//! One immutable struct built at startup and passed by reference into every
//! simulation component. Values can be overridden from a JSON file; missing
//! fields keep their defaults.

use std::path::Path;

use serde::de::Error as _;
use serde::{Deserialize, Serialize};

/// Data-driven gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Horizontal speed (units/frame)
    pub player_speed: f32,
    /// Vertical velocity applied by a jump (negative = up)
    pub jump_velocity: f32,
    /// Gravity added to vertical velocity each frame
    pub gravity: f32,
    /// Fastest allowed upward velocity
    pub max_rise_speed: f32,
    /// Fastest allowed fall velocity
    pub max_fall_speed: f32,
    /// Seconds a jump is still allowed after walking off a platform
    pub coyote_time: f32,
    /// Seconds an early jump press stays valid
    pub jump_buffer: f32,

    // === Damage / respawn ===
    /// Seconds of hazard immunity after a respawn
    pub invulnerability: f32,
    /// Respawn platforms must sit at least this far above the lava
    pub respawn_clearance: f32,
    /// Respawned player x is kept this far inside the screen edges
    pub respawn_margin_x: i32,
    /// Player x may leave the screen by at most this much
    pub world_margin_x: i32,
    /// Starting lives for levels 1, 2, and 3+
    pub lives_per_level: [u8; 3],

    // === Hazards ===
    /// Saw blade spin (radians/sec, visual only)
    pub saw_spin_speed: f32,
    /// Saw contact radius is shrunk by this much
    pub saw_contact_margin: f32,
    /// Projectile contact radius is shrunk by this much
    pub projectile_contact_margin: f32,
    /// Lava speed multiplier applied every frame
    pub lava_acceleration: f32,

    // === Camera ===
    /// Player is kept at this fraction of the screen height
    pub camera_follow_fraction: f32,
    /// Exponential smoothing rate (1/sec)
    pub camera_smoothing: f32,
    /// Camera may look this far above the highest platform or door
    pub camera_top_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: 5.0,
            jump_velocity: -14.0,
            gravity: 0.7,
            max_rise_speed: -50.0,
            max_fall_speed: 30.0,
            coyote_time: 0.12,
            jump_buffer: 0.12,

            invulnerability: 1.2,
            respawn_clearance: 60.0,
            respawn_margin_x: 20,
            world_margin_x: 200,
            lives_per_level: [5, 4, 3],

            saw_spin_speed: 6.0,
            saw_contact_margin: 2.0,
            projectile_contact_margin: 1.0,
            lava_acceleration: 1.001,

            camera_follow_fraction: 0.6,
            camera_smoothing: 10.0,
            camera_top_margin: 200.0,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; absent fields fall back to defaults.
    ///
    /// Values that parse but cannot be simulated are rejected.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate().map_err(serde_json::Error::custom)?;
        Ok(tuning)
    }

    /// Check that every knob is finite and the ranges are ordered
    pub fn validate(&self) -> Result<(), String> {
        let floats = [
            ("player_speed", self.player_speed),
            ("jump_velocity", self.jump_velocity),
            ("gravity", self.gravity),
            ("max_rise_speed", self.max_rise_speed),
            ("max_fall_speed", self.max_fall_speed),
            ("coyote_time", self.coyote_time),
            ("jump_buffer", self.jump_buffer),
            ("invulnerability", self.invulnerability),
            ("respawn_clearance", self.respawn_clearance),
            ("saw_spin_speed", self.saw_spin_speed),
            ("saw_contact_margin", self.saw_contact_margin),
            ("projectile_contact_margin", self.projectile_contact_margin),
            ("lava_acceleration", self.lava_acceleration),
            ("camera_follow_fraction", self.camera_follow_fraction),
            ("camera_smoothing", self.camera_smoothing),
            ("camera_top_margin", self.camera_top_margin),
        ];
        if let Some((name, _)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(format!("{name} must be finite"));
        }

        if self.max_rise_speed > self.max_fall_speed {
            return Err(format!(
                "max_rise_speed ({}) is above max_fall_speed ({})",
                self.max_rise_speed, self.max_fall_speed
            ));
        }
        let non_negative = [
            ("coyote_time", self.coyote_time),
            ("jump_buffer", self.jump_buffer),
            ("invulnerability", self.invulnerability),
            ("camera_smoothing", self.camera_smoothing),
        ];
        if let Some((name, v)) = non_negative.iter().find(|(_, v)| *v < 0.0) {
            return Err(format!("{name} must not be negative, got {v}"));
        }
        if self.lava_acceleration <= 0.0 {
            return Err(format!("lava_acceleration must be positive, got {}", self.lava_acceleration));
        }
        if self.respawn_margin_x < 0 || self.world_margin_x < 0 {
            return Err("respawn_margin_x and world_margin_x must not be negative".to_string());
        }
        Ok(())
    }

    /// Load tuning from a JSON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Invalid tuning file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read tuning file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Starting lives for a level index
    pub fn lives_for_level(&self, level_index: usize) -> u8 {
        let slot = level_index.min(self.lives_per_level.len() - 1);
        self.lives_per_level[slot]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lives_per_level() {
        let tuning = Tuning::default();
        assert_eq!(tuning.lives_for_level(0), 5);
        assert_eq!(tuning.lives_for_level(1), 4);
        assert_eq!(tuning.lives_for_level(2), 3);
        assert_eq!(tuning.lives_for_level(7), 3);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "player_speed": 7.5 }"#).unwrap();
        assert_eq!(tuning.player_speed, 7.5);
        assert_eq!(tuning.jump_velocity, Tuning::default().jump_velocity);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Tuning::from_json("{ not json").is_err());
    }

    #[test]
    fn test_inverted_speed_bounds_are_rejected() {
        let err = Tuning::from_json(r#"{ "max_rise_speed": 40.0 }"#).unwrap_err();
        assert!(err.to_string().contains("max_rise_speed"));
    }

    #[test]
    fn test_negative_timer_is_rejected() {
        assert!(Tuning::from_json(r#"{ "coyote_time": -0.5 }"#).is_err());
        assert!(Tuning::from_json(r#"{ "lava_acceleration": 0.0 }"#).is_err());
    }

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(Tuning::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejected_file_falls_back() {
        let path = std::env::temp_dir().join(format!("lava-escape-tuning-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "max_rise_speed": 40.0, "max_fall_speed": 30.0 }"#).unwrap();
        let tuning = Tuning::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let tuning = Tuning::load(Path::new("/definitely/not/here.json"));
        assert_eq!(tuning, Tuning::default());
    }
}
