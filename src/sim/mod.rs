//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only (one generator per level, seeded from the level index)
//! - Stable iteration order (hazard priority is the order of the collections)
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod geom;
pub mod hazard;
pub mod level;
pub mod player;
pub mod state;
pub mod tick;

pub use camera::Camera;
pub use collision::HitSource;
pub use geom::{Rect, circle_rect_overlap};
pub use hazard::{Cannon, Hazard, PingPong, Projectile, Saw, SawMotion};
pub use level::{Door, Level, Platform};
pub use player::{MoveInput, Player};
pub use state::{GameEvent, GamePhase, GameState, Stage};
pub use tick::{TickInput, tick};
