//! Vertical follow camera

use serde::{Deserialize, Serialize};

use super::level::Level;
use super::player::Player;
use crate::consts::SCREEN_HEIGHT;
use crate::tuning::Tuning;

/// Vertical view offset: world y of the top screen row
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub offset: f32,
}

impl Camera {
    /// Offset that puts the player at the follow fraction of the screen
    pub fn target_for(player: &Player, tuning: &Tuning) -> f32 {
        player.rect.y as f32 - SCREEN_HEIGHT as f32 * tuning.camera_follow_fraction
    }

    /// Camera snapped onto the player, used when a level starts
    pub fn centered_on(player: &Player, tuning: &Tuning) -> Self {
        Self { offset: Self::target_for(player, tuning) }
    }

    /// Ease toward the player, then keep the view within the generated content
    pub fn follow(&mut self, dt: f32, player: &Player, level: &Level, tuning: &Tuning) {
        let target = Self::target_for(player, tuning);
        self.offset += (target - self.offset) * (tuning.camera_smoothing * dt).min(1.0);

        let upper = level.top_extent() as f32 - tuning.camera_top_margin;
        self.offset = self.offset.max(upper).min(level.height);
    }

    /// World y to screen y
    #[inline]
    pub fn to_screen(&self, world_y: f32) -> f32 {
        world_y - self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_on_player() {
        let tuning = Tuning::default();
        let player = Player::new(0, 1000);
        let cam = Camera::centered_on(&player, &tuning);
        assert_eq!(cam.offset, 1000.0 - 540.0);
        assert_eq!(cam.to_screen(1000.0), 540.0);
    }

    #[test]
    fn test_follow_eases() {
        let tuning = Tuning::default();
        let level = Level::build(0, &tuning);
        let player = Player::new(0, 1500);
        let mut cam = Camera { offset: 1000.0 };
        cam.follow(0.05, &player, &level, &tuning);
        // Halfway toward target 960
        assert!((cam.offset - 980.0).abs() < 1e-3);
    }

    #[test]
    fn test_large_dt_snaps() {
        let tuning = Tuning::default();
        let level = Level::build(0, &tuning);
        let player = Player::new(0, 1500);
        let mut cam = Camera { offset: 0.0 };
        cam.follow(0.5, &player, &level, &tuning);
        assert_eq!(cam.offset, 960.0);
    }

    #[test]
    fn test_clamped_to_content() {
        let tuning = Tuning::default();
        let level = Level::build(0, &tuning);
        let upper = level.top_extent() as f32 - tuning.camera_top_margin;

        let high = Player::new(0, -10000);
        let mut cam = Camera { offset: -10000.0 };
        cam.follow(1.0, &high, &level, &tuning);
        assert_eq!(cam.offset, upper);

        let low = Player::new(0, 100000);
        let mut cam = Camera { offset: 100000.0 };
        cam.follow(1.0, &low, &level, &tuning);
        assert_eq!(cam.offset, level.height);
    }
}
