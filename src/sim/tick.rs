//! Per-frame simulation step
//!
//! Drives the menu/play/dead/won state machine and, while playing, runs the
//! frame pipeline: player input, hazards and lava, collision, camera.

use super::collision::{
    clamp_to_world, find_hit, resolve_horizontal, resolve_vertical, respawn, touches_door,
};
use super::player::MoveInput;
use super::state::{GameEvent, GamePhase, GameState};

/// Logical input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move left held
    pub left: bool,
    /// Move right held
    pub right: bool,
    /// Jump went down this frame
    pub jump_pressed: bool,
    /// Level chosen on the menu (0-based)
    pub select_level: Option<usize>,
    /// Confirm (start from the menu, leave the dead/won screens)
    pub confirm: bool,
    /// Back to the menu
    pub cancel: bool,
}

impl TickInput {
    fn movement(&self) -> MoveInput {
        MoveInput { left: self.left, right: self.right, jump_pressed: self.jump_pressed }
    }
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    match state.phase {
        GamePhase::Menu => {
            if let Some(index) = input.select_level {
                state.start_level(index);
            } else if input.confirm {
                state.start_level(0);
            }
        }

        GamePhase::Playing => {
            if input.cancel {
                state.phase = GamePhase::Menu;
                state.events.push(GameEvent::ReturnedToMenu);
                return;
            }
            step_play(state, input, dt);
        }

        GamePhase::Dead | GamePhase::Won => {
            if input.confirm {
                state.phase = GamePhase::Menu;
                state.events.push(GameEvent::ReturnedToMenu);
            }
        }
    }
}

fn step_play(state: &mut GameState, input: &TickInput, dt: f32) {
    let tuning = &state.tuning;
    let Some(stage) = state.stage.as_mut() else {
        log::warn!("Playing without a level, returning to menu");
        state.phase = GamePhase::Menu;
        return;
    };
    let player = &mut stage.player;
    let level = &mut stage.level;

    // The press itself tries to jump before it feeds the buffer
    if input.jump_pressed {
        player.try_jump(tuning);
    }
    player.update(dt, &input.movement(), tuning);
    level.update(dt, tuning);

    resolve_horizontal(player, level);
    resolve_vertical(player, level, tuning);

    if touches_door(player, level) {
        let cleared = state.level_index;
        state.events.push(GameEvent::LevelCleared(cleared));
        if GameState::is_last_level(cleared) {
            log::info!("Final level cleared");
            state.phase = GamePhase::Won;
            state.events.push(GameEvent::Won);
        } else {
            log::info!("Level {} cleared", cleared + 1);
            state.start_level(cleared + 1);
        }
        return;
    }

    if let Some(source) = find_hit(player, level, tuning) {
        if !player.is_invulnerable() {
            state.lives = state.lives.saturating_sub(1);
            state.events.push(GameEvent::Hit { source });
            log::debug!("Hit by {:?}, {} lives left", source, state.lives);

            if state.lives == 0 {
                log::info!("Out of lives on level {}", state.level_index + 1);
                state.phase = GamePhase::Dead;
                state.events.push(GameEvent::Died);
            } else {
                respawn(player, level, tuning);
                state.events.push(GameEvent::Respawned { y: player.rect.y });
                log::debug!("Respawned at ({}, {})", player.rect.x, player.rect.y);
            }
        }
    }

    clamp_to_world(player, tuning);
    level.prune_projectiles();
    state.camera.follow(dt, player, level, tuning);
}
