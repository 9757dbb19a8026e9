//! Hazard entities: spinning saws, moving saws, cannons, and their projectiles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::{Rect, circle_rect_overlap};
use crate::consts::SCREEN_WIDTH;
use crate::tuning::Tuning;

/// Projectiles die once they leave this band around the screen
const PROJECTILE_MARGIN_X: f32 = 100.0;
const PROJECTILE_LIMIT_Y: f32 = 20000.0;

/// Projectile radius fired by every cannon
pub const PROJECTILE_RADIUS: f32 = 10.0;

/// Shared behavior of anything that can hurt the player
pub trait Hazard {
    /// Advance one frame
    fn update(&mut self, dt: f32, tuning: &Tuning);
    /// Whether the hazard currently touches `rect`
    fn hits(&self, rect: &Rect, tuning: &Tuning) -> bool;
}

/// Ping-pong travel between two endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PingPong {
    pub a: Vec2,
    pub b: Vec2,
    /// Seconds for one full A -> B traversal
    pub duration: f32,
    /// Time along the segment, always within [0, duration]
    pub t: f32,
    /// 1.0 toward B, -1.0 toward A
    pub dir: f32,
}

impl PingPong {
    /// Minimum traversal time, keeps zero-length segments well-defined
    pub const MIN_DURATION: f32 = 0.1;

    pub fn new(a: Vec2, b: Vec2, speed: f32) -> Self {
        let duration = (a.distance(b) / speed).max(Self::MIN_DURATION);
        Self { a, b, duration, t: 0.0, dir: 1.0 }
    }

    /// Advance `t`, reversing at either end, and return the new position
    pub fn advance(&mut self, dt: f32) -> Vec2 {
        self.t += self.dir * dt;
        if self.t > self.duration {
            self.t = self.duration;
            self.dir = -1.0;
        }
        if self.t < 0.0 {
            self.t = 0.0;
            self.dir = 1.0;
        }
        self.position()
    }

    pub fn position(&self) -> Vec2 {
        self.a.lerp(self.b, self.t / self.duration)
    }
}

/// How a saw moves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SawMotion {
    Stationary,
    Moving(PingPong),
}

/// A spinning circular blade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Saw {
    pub pos: Vec2,
    pub radius: f32,
    /// Blade rotation (radians, visual only)
    pub angle: f32,
    pub motion: SawMotion,
}

impl Saw {
    pub fn stationary(pos: Vec2, radius: f32) -> Self {
        Self { pos, radius, angle: 0.0, motion: SawMotion::Stationary }
    }

    /// Saw sliding back and forth between `a` and `b`, starting at `a`
    pub fn moving(a: Vec2, b: Vec2, radius: f32, speed: f32) -> Self {
        Self { pos: a, radius, angle: 0.0, motion: SawMotion::Moving(PingPong::new(a, b, speed)) }
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.motion, SawMotion::Moving(_))
    }
}

impl Hazard for Saw {
    fn update(&mut self, dt: f32, tuning: &Tuning) {
        self.angle += tuning.saw_spin_speed * dt;
        if let SawMotion::Moving(ref mut path) = self.motion {
            self.pos = path.advance(dt);
        }
    }

    fn hits(&self, rect: &Rect, tuning: &Tuning) -> bool {
        circle_rect_overlap(self.pos, self.radius - tuning.saw_contact_margin, rect)
    }
}

/// Wall-mounted cannon that periodically fires horizontally
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cannon {
    pub pos: Vec2,
    /// 1 fires right, -1 fires left
    pub dir: i32,
    /// Seconds between shots
    pub cooldown: f32,
    /// Seconds until the next shot
    pub timer: f32,
    pub projectile_speed: f32,
    pub projectile_radius: f32,
}

impl Cannon {
    /// `timer` should be drawn from [0, cooldown) so cannons fire out of step
    pub fn new(pos: Vec2, dir: i32, cooldown: f32, timer: f32, projectile_speed: f32) -> Self {
        Self {
            pos,
            dir: if dir >= 0 { 1 } else { -1 },
            cooldown,
            timer,
            projectile_speed,
            projectile_radius: PROJECTILE_RADIUS,
        }
    }

    /// Count down; returns a projectile when the cannon fires
    pub fn update(&mut self, dt: f32) -> Option<Projectile> {
        self.timer -= dt;
        if self.timer <= 0.0 {
            self.timer = self.cooldown;
            let vel = Vec2::new(self.projectile_speed * self.dir as f32, 0.0);
            Some(Projectile::new(self.pos, vel, self.projectile_radius))
        } else {
            None
        }
    }
}

/// A cannonball in flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    /// Velocity in units/sec
    pub vel: Vec2,
    pub radius: f32,
    pub alive: bool,
}

impl Projectile {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius, alive: true }
    }

    fn out_of_bounds(&self) -> bool {
        self.pos.x < -PROJECTILE_MARGIN_X
            || self.pos.x > SCREEN_WIDTH as f32 + PROJECTILE_MARGIN_X
            || self.pos.y < -PROJECTILE_LIMIT_Y
            || self.pos.y > PROJECTILE_LIMIT_Y
    }
}

impl Hazard for Projectile {
    fn update(&mut self, dt: f32, _tuning: &Tuning) {
        self.pos += self.vel * dt;
        if self.out_of_bounds() {
            self.alive = false;
        }
    }

    fn hits(&self, rect: &Rect, tuning: &Tuning) -> bool {
        self.alive && circle_rect_overlap(self.pos, self.radius - tuning.projectile_contact_margin, rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_stationary_saw_only_spins() {
        let tuning = Tuning::default();
        let mut saw = Saw::stationary(Vec2::new(100.0, 100.0), 20.0);
        saw.update(0.5, &tuning);
        assert_eq!(saw.pos, Vec2::new(100.0, 100.0));
        assert!((saw.angle - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_saw_contact_uses_shrunk_radius() {
        let tuning = Tuning::default();
        let saw = Saw::stationary(Vec2::new(0.0, 0.0), 20.0);
        // Rect edge 19 away: outside the shrunk radius of 18
        assert!(!saw.hits(&Rect::new(19, -5, 10, 10), &tuning));
        assert!(saw.hits(&Rect::new(18, -5, 10, 10), &tuning));
    }

    #[test]
    fn test_moving_saw_reverses_at_ends() {
        let tuning = Tuning::default();
        // 100 units at 100 units/sec: one second per leg
        let mut saw = Saw::moving(Vec2::new(0.0, 50.0), Vec2::new(100.0, 50.0), 22.0, 100.0);
        saw.update(0.75, &tuning);
        assert!((saw.pos.x - 75.0).abs() < 1e-3);

        saw.update(0.5, &tuning);
        let SawMotion::Moving(ref path) = saw.motion else { panic!("expected moving saw") };
        assert_eq!(path.t, path.duration);
        assert_eq!(path.dir, -1.0);
        assert!((saw.pos.x - 100.0).abs() < 1e-3);

        saw.update(0.25, &tuning);
        assert!((saw.pos.x - 75.0).abs() < 1e-3);
    }

    #[test]
    fn test_zero_length_segment_has_min_duration() {
        let path = PingPong::new(Vec2::ZERO, Vec2::ZERO, 140.0);
        assert_eq!(path.duration, PingPong::MIN_DURATION);
        assert_eq!(path.position(), Vec2::ZERO);
    }

    #[test]
    fn test_cannon_fires_once_and_resets() {
        let mut cannon = Cannon::new(Vec2::new(20.0, 500.0), 1, 1.6, 0.01, 240.0);
        let shot = cannon.update(1.0 / 60.0).expect("cannon should fire");
        assert_eq!(shot.vel, Vec2::new(240.0, 0.0));
        assert_eq!(shot.pos, Vec2::new(20.0, 500.0));
        assert_eq!(shot.radius, PROJECTILE_RADIUS);
        assert_eq!(cannon.timer, 1.6);
        assert!(cannon.update(1.0 / 60.0).is_none());
    }

    #[test]
    fn test_cannon_direction_is_normalized() {
        let cannon = Cannon::new(Vec2::ZERO, -5, 1.0, 0.5, 100.0);
        assert_eq!(cannon.dir, -1);
    }

    #[test]
    fn test_projectile_dies_off_screen() {
        let tuning = Tuning::default();
        let mut shot = Projectile::new(Vec2::new(890.0, 0.0), Vec2::new(600.0, 0.0), 10.0);
        shot.update(0.01, &tuning);
        assert!(shot.alive);
        shot.update(0.1, &tuning);
        assert!(!shot.alive);
        // Dead projectiles never register contact
        shot.pos = Vec2::new(5.0, 5.0);
        assert!(!shot.hits(&Rect::new(0, 0, 10, 10), &tuning));
    }

    proptest! {
        #[test]
        fn prop_ping_pong_stays_in_range(
            len in 0.0f32..600.0,
            speed in 50.0f32..300.0,
            steps in proptest::collection::vec(0.0f32..0.5, 1..200),
        ) {
            let mut path = PingPong::new(Vec2::ZERO, Vec2::new(len, 0.0), speed);
            for dt in steps {
                let pos = path.advance(dt);
                prop_assert!(path.t >= 0.0 && path.t <= path.duration);
                prop_assert!(pos.x >= -1e-3 && pos.x <= len + 1e-3);
                prop_assert!(path.dir == 1.0 || path.dir == -1.0);
            }
        }
    }
}
