//! Top-level game state
//!
//! The current level and player are replaced wholesale on every level start,
//! so nothing from a previous attempt outlives it.

use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::collision::HitSource;
use super::level::Level;
use super::player::Player;
use crate::consts::LEVEL_COUNT;
use crate::tuning::Tuning;

/// Which screen the game is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Level select
    #[default]
    Menu,
    /// Climbing
    Playing,
    /// Out of lives
    Dead,
    /// Cleared the final level
    Won,
}

/// Something noteworthy that happened during a tick (for audio/effects)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    LevelStarted(usize),
    Hit { source: HitSource },
    Respawned { y: i32 },
    LevelCleared(usize),
    Died,
    Won,
    ReturnedToMenu,
}

/// The level being played and the player climbing it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    pub level: Level,
    pub player: Player,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Active level (0-based)
    pub level_index: usize,
    pub lives: u8,
    pub camera: Camera,
    /// Present once a level has been started
    pub stage: Option<Stage>,
    /// Events raised by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameState {
    /// Fresh game sitting on the menu
    pub fn new(tuning: Tuning) -> Self {
        Self {
            tuning,
            phase: GamePhase::Menu,
            level_index: 0,
            lives: 0,
            camera: Camera::default(),
            stage: None,
            events: Vec::new(),
        }
    }

    /// Build `index` from scratch and start playing it.
    ///
    /// Out-of-range indices start the last level.
    pub fn start_level(&mut self, index: usize) {
        let index = index.min(LEVEL_COUNT - 1);
        let level = Level::build(index, &self.tuning);
        let (x, y) = level.spawn;
        let player = Player::new(x, y);

        self.camera = Camera::centered_on(&player, &self.tuning);
        self.level_index = index;
        self.lives = self.tuning.lives_for_level(index);
        self.stage = Some(Stage { level, player });
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::LevelStarted(index));

        log::info!("Level {} started with {} lives", index + 1, self.lives);
    }

    pub fn level(&self) -> Option<&Level> {
        self.stage.as_ref().map(|s| &s.level)
    }

    pub fn player(&self) -> Option<&Player> {
        self.stage.as_ref().map(|s| &s.player)
    }

    /// Whether `index` is the final level
    pub fn is_last_level(index: usize) -> bool {
        index + 1 >= LEVEL_COUNT
    }
}
