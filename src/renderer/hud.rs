//! HUD strings

use crate::consts::LEVEL_COUNT;
use crate::sim::GameState;

/// Static control reminder shown under the HUD
pub const CONTROL_HINT: &str = "Move A or Left and D or Right. Jump Space or W or Up";

/// Lives, level progress, and the control hint
pub fn hud_lines(state: &GameState) -> [String; 3] {
    [
        format!("Lives: {}", state.lives),
        format!("Level: {}/{}", state.level_index + 1, LEVEL_COUNT),
        CONTROL_HINT.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hud_lines() {
        let mut state = GameState::default();
        state.start_level(1);
        let [lives, level, hint] = hud_lines(&state);
        assert_eq!(lives, "Lives: 4");
        assert_eq!(level, "Level: 2/3");
        assert_eq!(hint, CONTROL_HINT);
    }
}
