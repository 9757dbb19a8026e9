//! Lava Escape - climb a tower of platforms before the lava catches you
//!
//! Core modules:
//! - `sim`: Deterministic simulation (level generation, physics, hazards, game state)
//! - `renderer`: Draw-order list and HUD strings for an external renderer
//! - `tuning`: Data-driven game balance

pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Screen dimensions (the world is exactly one screen wide)
    pub const SCREEN_WIDTH: i32 = 800;
    pub const SCREEN_HEIGHT: i32 = 900;

    /// Frame rate the per-frame physics constants are tuned for
    pub const FPS: u32 = 60;
    /// Fixed frame timestep
    pub const FRAME_DT: f32 = 1.0 / FPS as f32;

    /// Player hitbox
    pub const PLAYER_WIDTH: i32 = 38;
    pub const PLAYER_HEIGHT: i32 = 50;

    /// Platform thickness
    pub const PLATFORM_HEIGHT: i32 = 20;

    /// Number of levels; clearing the last one wins the game
    pub const LEVEL_COUNT: usize = 3;
}

/// Clamp for integer coordinates that tolerates `lo > hi` by preferring `lo`
#[inline]
pub fn clamp_i32(v: i32, lo: i32, hi: i32) -> i32 {
    lo.max(hi.min(v))
}
