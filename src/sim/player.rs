//! Player controller
//!
//! Horizontal velocity comes straight from held keys; vertical velocity
//! integrates gravity. Jumps are forgiving: coyote time covers walking off a
//! ledge and the jump buffer remembers a press made just before landing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use crate::consts::{PLAYER_HEIGHT, PLAYER_WIDTH};
use crate::tuning::Tuning;

/// Movement intent for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveInput {
    pub left: bool,
    pub right: bool,
    /// Jump key went down this frame
    pub jump_pressed: bool,
}

/// The player-controlled climber
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Velocity in units/frame
    pub vel: Vec2,
    pub on_ground: bool,
    /// Seconds a jump is still allowed after leaving a platform
    pub coyote_timer: f32,
    /// Seconds an early jump press stays valid
    pub jump_buffer_timer: f32,
    /// -1 = left, 1 = right
    pub facing: i32,
    /// Seconds remaining where hazard contact is ignored
    pub invuln_timer: f32,
}

impl Player {
    /// New player with its top-left corner at (x, y)
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            rect: Rect::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT),
            vel: Vec2::ZERO,
            on_ground: false,
            coyote_timer: 0.0,
            jump_buffer_timer: 0.0,
            facing: 1,
            invuln_timer: 0.0,
        }
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invuln_timer > 0.0
    }

    /// Advance timers, apply input and gravity for one frame
    pub fn update(&mut self, dt: f32, input: &MoveInput, tuning: &Tuning) {
        // Last write wins: holding both keys moves right
        self.vel.x = 0.0;
        if input.left {
            self.vel.x = -tuning.player_speed;
            self.facing = -1;
        }
        if input.right {
            self.vel.x = tuning.player_speed;
            self.facing = 1;
        }

        self.coyote_timer = (self.coyote_timer - dt).max(0.0);
        self.jump_buffer_timer = (self.jump_buffer_timer - dt).max(0.0);
        self.invuln_timer = (self.invuln_timer - dt).max(0.0);

        if input.jump_pressed {
            self.jump_buffer_timer = tuning.jump_buffer;
        }

        // Honor a buffered press once we are standing on something
        if self.on_ground && self.jump_buffer_timer > 0.0 {
            self.try_jump(tuning);
        }

        self.vel.y = (self.vel.y + tuning.gravity).max(tuning.max_rise_speed).min(tuning.max_fall_speed);
    }

    /// Jump if grounded, within coyote time, or holding a buffered press.
    /// Returns whether the jump happened.
    pub fn try_jump(&mut self, tuning: &Tuning) -> bool {
        if self.on_ground || self.coyote_timer > 0.0 || self.jump_buffer_timer > 0.0 {
            self.vel.y = tuning.jump_velocity;
            self.on_ground = false;
            self.coyote_timer = 0.0;
            self.jump_buffer_timer = 0.0;
            true
        } else {
            false
        }
    }

    /// Land on a surface: refresh the coyote window
    pub fn land(&mut self, top: i32, tuning: &Tuning) {
        self.rect.set_bottom(top);
        self.vel.y = 0.0;
        self.on_ground = true;
        self.coyote_timer = tuning.coyote_time;
    }
}
