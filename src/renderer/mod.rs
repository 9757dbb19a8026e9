//! Rendering boundary
//!
//! The simulation never draws. Each frame it hands an external renderer an
//! ordered list of primitives in screen space, tagged with a semantic role
//! and a color, plus plain HUD strings.

pub mod hud;
pub mod scene;

pub use hud::{CONTROL_HINT, hud_lines};
pub use scene::{Anchor, DrawItem, Role, Shape, scene};

/// Colors for game elements
pub mod colors {
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const PLATFORM: [f32; 4] = [0.55, 0.55, 0.55, 1.0];
    pub const DOOR: [f32; 4] = [0.24, 0.82, 0.47, 1.0];
    pub const PLAYER: [f32; 4] = [0.31, 0.63, 0.94, 1.0];
    pub const PLAYER_INVULNERABLE: [f32; 4] = [1.0, 0.78, 0.0, 1.0];
    pub const SAW: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const CANNON: [f32; 4] = [0.63, 0.39, 0.86, 1.0];
    pub const PROJECTILE: [f32; 4] = [0.82, 0.2, 0.2, 1.0];
    pub const LAVA: [f32; 4] = [0.94, 0.31, 0.2, 1.0];
    pub const LAVA_BUBBLE: [f32; 4] = [1.0, 0.71, 0.47, 1.0];
    pub const PROMPT: [f32; 4] = [0.24, 0.82, 0.47, 1.0];
    pub const DEATH_TITLE: [f32; 4] = [0.82, 0.2, 0.2, 1.0];

    pub const BACKGROUND_PLAY: [f32; 4] = [0.086, 0.1, 0.157, 1.0];
    pub const BACKGROUND_MENU: [f32; 4] = [0.063, 0.07, 0.11, 1.0];
    pub const BACKGROUND_DEAD: [f32; 4] = [0.04, 0.0, 0.0, 1.0];
    pub const BACKGROUND_WON: [f32; 4] = [0.0, 0.07, 0.0, 1.0];
}
