//! Collision resolution against platforms and hazard contact tests
//!
//! Movement is resolved one axis at a time: first x, then y. Hazards are
//! checked in a fixed priority (saws, moving saws, projectiles, lava) and the
//! first contact wins.

use serde::{Deserialize, Serialize};

use super::hazard::Hazard;
use super::level::Level;
use super::player::Player;
use crate::consts::{PLAYER_HEIGHT, PLAYER_WIDTH, SCREEN_WIDTH};
use crate::clamp_i32;
use crate::tuning::Tuning;

/// What hurt the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitSource {
    Saw,
    MovingSaw,
    Projectile,
    Lava,
}

/// Move along x and push out of any platform the player ends up inside
pub fn resolve_horizontal(player: &mut Player, level: &Level) {
    player.rect.x += player.vel.x as i32;
    for platform in &level.platforms {
        if player.rect.intersects(&platform.rect) {
            if player.vel.x > 0.0 {
                player.rect.set_right(platform.rect.left());
            } else if player.vel.x < 0.0 {
                player.rect.x = platform.rect.right();
            }
        }
    }
}

/// Move along y; land on platform tops and bump heads on undersides
pub fn resolve_vertical(player: &mut Player, level: &Level, tuning: &Tuning) {
    player.on_ground = false;
    player.rect.y += player.vel.y as i32;
    for platform in &level.platforms {
        if player.rect.intersects(&platform.rect) {
            if player.vel.y > 0.0 {
                player.land(platform.rect.top(), tuning);
            } else if player.vel.y < 0.0 {
                player.rect.y = platform.rect.bottom();
                player.vel.y = 0.0;
            }
        }
    }
}

/// Whether the player is touching the exit door
pub fn touches_door(player: &Player, level: &Level) -> bool {
    player.rect.intersects(&level.door.rect)
}

/// First hazard touching the player, in priority order
pub fn find_hit(player: &Player, level: &Level, tuning: &Tuning) -> Option<HitSource> {
    let rect = &player.rect;
    if level.saws.iter().any(|s| s.hits(rect, tuning)) {
        Some(HitSource::Saw)
    } else if level.moving_saws.iter().any(|s| s.hits(rect, tuning)) {
        Some(HitSource::MovingSaw)
    } else if level.projectiles.iter().any(|p| p.hits(rect, tuning)) {
        Some(HitSource::Projectile)
    } else if rect.bottom() as f32 > level.lava_y {
        Some(HitSource::Lava)
    } else {
        None
    }
}

/// Player y for a respawn: standing on the lowest platform that still clears
/// the lava by `respawn_clearance`, or the level spawn if none does.
///
/// Platforms are scanned bottom-up (largest `y` first), so the search settles
/// on the safe platform nearest the lava, not the one beside the door.
pub fn respawn_y(level: &Level, tuning: &Tuning) -> i32 {
    level
        .platforms
        .iter()
        .map(|p| p.rect.top())
        .filter(|&top| level.lava_y - top as f32 >= tuning.respawn_clearance)
        .max()
        .map(|top| top - PLAYER_HEIGHT)
        .unwrap_or(level.spawn.1)
}

/// Put the player back above the lava with a short invulnerability window
pub fn respawn(player: &mut Player, level: &Level, tuning: &Tuning) {
    let margin = tuning.respawn_margin_x;
    player.rect.x = clamp_i32(player.rect.x, margin, SCREEN_WIDTH - margin - PLAYER_WIDTH);
    player.rect.y = respawn_y(level, tuning);
    player.vel.y = 0.0;
    player.invuln_timer = tuning.invulnerability;
}

/// Keep the player within a generous band around the screen
pub fn clamp_to_world(player: &mut Player, tuning: &Tuning) {
    let margin = tuning.world_margin_x;
    player.rect.x = clamp_i32(player.rect.x, -margin, SCREEN_WIDTH + margin);
}
