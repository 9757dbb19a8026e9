//! Level layout and per-frame hazard update
//!
//! Every level is generated from its index alone: the same index always
//! produces the same platforms, hazards, and door, so a layout stays fair
//! across deaths and reproducible in tests.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use super::hazard::{Cannon, Hazard, Projectile, Saw};
use crate::consts::{PLATFORM_HEIGHT, PLAYER_HEIGHT, PLAYER_WIDTH, SCREEN_WIDTH};
use crate::tuning::Tuning;

/// Top edge of the full-width ground platform
pub const GROUND_Y: i32 = 2000;
/// Top edge of the first generated row
const FIRST_ROW_Y: i32 = 1800;
/// Vertical distance between rows on level 0; shrinks by 10 per level
const ROW_SPACING: i32 = 180;
const BASE_ROWS: usize = 18;
const ROWS_PER_LEVEL: usize = 4;

/// Lava starts just below the ground
const LAVA_START_Y: f32 = 2050.0;
const LAVA_BASE_SPEED: f32 = 40.0;
const LAVA_SPEED_PER_LEVEL: f32 = 12.0;

/// Cannons sit this far in from the screen edge
const CANNON_INSET: f32 = 20.0;

pub const DOOR_WIDTH: i32 = 50;
pub const DOOR_HEIGHT: i32 = 80;

/// Seed for a level's layout RNG
pub fn level_seed(index: usize) -> u64 {
    100 + 7 * index as u64
}

/// A static platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    pub fn new(x: i32, y: i32, w: i32) -> Self {
        Self { rect: Rect::new(x, y, w, PLATFORM_HEIGHT) }
    }
}

/// The exit; touching it clears the level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    pub rect: Rect,
}

impl Door {
    /// Door standing on the floor line `floor_y`
    pub fn new(x: i32, floor_y: i32) -> Self {
        Self { rect: Rect::new(x, floor_y - DOOR_HEIGHT, DOOR_WIDTH, DOOR_HEIGHT) }
    }
}

/// Per-level knobs derived from the level index
struct RowStyle {
    width: i32,
    gap: i32,
    jitter: i32,
}

impl RowStyle {
    fn for_level(index: usize) -> Self {
        if index == 0 {
            Self { width: 200, gap: 140, jitter: 25 }
        } else {
            Self { width: 160, gap: 120, jitter: 40 }
        }
    }
}

/// One generated level and everything that lives in it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub index: usize,
    pub platforms: Vec<Platform>,
    pub saws: Vec<Saw>,
    pub moving_saws: Vec<Saw>,
    pub cannons: Vec<Cannon>,
    pub projectiles: Vec<Projectile>,
    pub door: Door,
    /// Player top-left at level start
    pub spawn: (i32, i32),
    /// Total world height, bounds the camera
    pub height: f32,
    /// Lava surface; decreasing means rising
    pub lava_y: f32,
    /// Lava rise speed (units/sec)
    pub lava_speed: f32,
    /// Lava speed multiplier per frame
    pub lava_accel: f32,
}

impl Level {
    /// Generate the level for `index`
    pub fn build(index: usize, tuning: &Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(level_seed(index));
        let k = index as i32;
        let kf = index as f32;
        let style = RowStyle::for_level(index);

        let mut platforms = vec![Platform::new(0, GROUND_Y, SCREEN_WIDTH)];
        let mut saws = Vec::new();
        let mut moving_saws = Vec::new();
        let mut cannons = Vec::new();

        let rows = BASE_ROWS + ROWS_PER_LEVEL * index;
        let mut y = FIRST_ROW_Y;

        for row in 0..rows {
            let count = if row % 2 == 0 { 3 } else { 2 };
            let first = platforms.len();
            add_platform_row(&mut platforms, &mut rng, y, count, &style);
            let row_platforms = &platforms[first..];

            if row % 3 == 2 {
                for p in row_platforms {
                    if rng.random::<f32>() < 0.5 {
                        let pos = Vec2::new(p.rect.center_x() as f32, (p.rect.top() - 30) as f32);
                        saws.push(Saw::stationary(pos, 20.0 + 2.0 * kf));
                    }
                }
            }

            if row % 4 == 1 && row_platforms.len() >= 2 {
                let a = row_platforms[0].rect;
                let b = row_platforms[row_platforms.len() - 1].rect;
                let ymid = (a.top().min(b.top()) - 80) as f32;
                moving_saws.push(Saw::moving(
                    Vec2::new(a.center_x() as f32, ymid),
                    Vec2::new(b.center_x() as f32, ymid),
                    22.0 + 2.0 * kf,
                    140.0 + 10.0 * kf,
                ));
            }

            if row % 5 == 0 && row > 0 {
                // Mounted on a random wall, firing inward
                let (x, dir) = if rng.random_bool(0.5) {
                    (CANNON_INSET, 1)
                } else {
                    (SCREEN_WIDTH as f32 - CANNON_INSET, -1)
                };
                let cooldown = 1.6 - (0.1 * kf).min(0.6);
                let timer = rng.random_range(0.0..cooldown);
                cannons.push(Cannon::new(
                    Vec2::new(x, (y - 40) as f32),
                    dir,
                    cooldown,
                    timer,
                    240.0 + 20.0 * kf,
                ));
            }

            y -= ROW_SPACING - 10 * k;
        }

        let top_platform_y = platforms.iter().map(|p| p.rect.top()).min().unwrap_or(GROUND_Y);
        let door = Door::new(SCREEN_WIDTH / 2 - DOOR_WIDTH / 2, top_platform_y - 4);

        log::info!(
            "Built level {}: {} platforms, {} saws, {} moving saws, {} cannons",
            index + 1,
            platforms.len(),
            saws.len(),
            moving_saws.len(),
            cannons.len()
        );

        Self {
            index,
            platforms,
            saws,
            moving_saws,
            cannons,
            projectiles: Vec::new(),
            door,
            spawn: (SCREEN_WIDTH / 2 - PLAYER_WIDTH / 2, GROUND_Y - PLAYER_HEIGHT - 2),
            height: (2100 + rows as i32 * ROW_SPACING) as f32,
            lava_y: LAVA_START_Y,
            lava_speed: LAVA_BASE_SPEED + LAVA_SPEED_PER_LEVEL * kf,
            lava_accel: tuning.lava_acceleration,
        }
    }

    /// Advance hazards and the lava by one frame.
    ///
    /// Projectiles that leave the play area are only flagged dead here;
    /// `prune_projectiles` removes them after contact checks.
    pub fn update(&mut self, dt: f32, tuning: &Tuning) {
        for saw in &mut self.saws {
            saw.update(dt, tuning);
        }
        for saw in &mut self.moving_saws {
            saw.update(dt, tuning);
        }
        for cannon in &mut self.cannons {
            if let Some(shot) = cannon.update(dt) {
                log::trace!("Cannon at ({}, {}) fired", cannon.pos.x, cannon.pos.y);
                self.projectiles.push(shot);
            }
        }
        for shot in &mut self.projectiles {
            shot.update(dt, tuning);
        }

        self.lava_speed *= self.lava_accel;
        self.lava_y -= self.lava_speed * dt;
    }

    /// Drop projectiles flagged dead
    pub fn prune_projectiles(&mut self) {
        self.projectiles.retain(|p| p.alive);
    }

    /// Highest point of generated content (smallest y): platform tops, the
    /// door, and hazard positions
    pub fn top_extent(&self) -> i32 {
        let saws = self.saws.iter().chain(&self.moving_saws).map(|s| s.pos.y.floor() as i32);
        let cannons = self.cannons.iter().map(|c| c.pos.y.floor() as i32);
        self.platforms
            .iter()
            .map(|p| p.rect.top())
            .chain(saws)
            .chain(cannons)
            .fold(self.door.rect.top(), i32::min)
    }
}

/// Lay out `count` platforms centered on the screen with jittered x
fn add_platform_row(platforms: &mut Vec<Platform>, rng: &mut Pcg32, y: i32, count: i32, style: &RowStyle) {
    let total_width = count * style.width + (count - 1) * style.gap;
    let start_x = (SCREEN_WIDTH - total_width).div_euclid(2);
    for i in 0..count {
        let x = start_x + i * (style.width + style.gap) + rng.random_range(-style.jitter..=style.jitter);
        platforms.push(Platform::new(x, y, style.width));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_zero_layout() {
        let level = Level::build(0, &Tuning::default());

        // Ground plus 18 rows alternating 3 and 2 platforms
        assert_eq!(level.platforms[0].rect, Rect::new(0, GROUND_Y, SCREEN_WIDTH, PLATFORM_HEIGHT));
        assert_eq!(level.platforms.len(), 1 + 9 * 3 + 9 * 2);

        let row_tops: std::collections::BTreeSet<i32> =
            level.platforms[1..].iter().map(|p| p.rect.top()).collect();
        assert_eq!(row_tops.len(), 18);
        assert_eq!(*row_tops.last().unwrap(), 1800);
        assert_eq!(*row_tops.first().unwrap(), 1800 - 17 * 180);

        // Door sits just above the topmost row
        let top = level.platforms.iter().map(|p| p.rect.top()).min().unwrap();
        assert_eq!(level.door.rect.bottom(), top - 4);
        assert_eq!(level.door.rect.x, 375);

        assert_eq!(level.lava_speed, 40.0);
        assert_eq!(level.lava_y, 2050.0);
        assert_eq!(level.spawn, (381, 1948));
        assert_eq!(level.height, (2100 + 18 * 180) as f32);
    }

    #[test]
    fn test_build_is_deterministic() {
        let tuning = Tuning::default();
        for index in 0..3 {
            let a = serde_json::to_string(&Level::build(index, &tuning)).unwrap();
            let b = serde_json::to_string(&Level::build(index, &tuning)).unwrap();
            assert_eq!(a, b, "level {} layout differs between builds", index);
        }
    }

    #[test]
    fn test_levels_differ() {
        let tuning = Tuning::default();
        assert_ne!(Level::build(0, &tuning).platforms, Level::build(1, &tuning).platforms);
    }

    #[test]
    fn test_harder_levels_have_more_rows_and_tighter_spacing() {
        let tuning = Tuning::default();
        let level = Level::build(2, &tuning);
        assert_eq!(level.platforms.len(), 1 + 13 * 3 + 13 * 2);
        let lowest_row = level.platforms[1].rect.top();
        let second_row = level.platforms[4].rect.top();
        assert_eq!(lowest_row - second_row, 160);
        assert_eq!(level.lava_speed, 64.0);
    }

    #[test]
    fn test_jitter_stays_in_range() {
        let level = Level::build(1, &Tuning::default());
        // Row 0 of level 1: three 160-wide platforms with 120 gaps, centered
        let start_x = (SCREEN_WIDTH - (3 * 160 + 2 * 120)).div_euclid(2);
        for (i, p) in level.platforms[1..4].iter().enumerate() {
            let base = start_x + i as i32 * 280;
            assert!((p.rect.x - base).abs() <= 40);
        }
    }

    #[test]
    fn test_hazard_placement() {
        let level = Level::build(0, &Tuning::default());
        // Rows 1, 5, 9, 13, 17 carry moving saws
        assert_eq!(level.moving_saws.len(), 5);
        assert!(level.moving_saws.iter().all(|s| s.is_moving()));
        // Rows 5, 10, 15 carry cannons
        assert_eq!(level.cannons.len(), 3);
        for cannon in &level.cannons {
            assert!(cannon.timer >= 0.0 && cannon.timer < cannon.cooldown);
            assert_eq!(cannon.cooldown, 1.6);
            assert_eq!(cannon.projectile_speed, 240.0);
            if cannon.dir == 1 {
                assert_eq!(cannon.pos.x, CANNON_INSET);
            } else {
                assert_eq!(cannon.pos.x, SCREEN_WIDTH as f32 - CANNON_INSET);
            }
        }
        // Saws only on rows 2, 5, 8, 11, 14, 17 (at most 2 or 3 each)
        assert!(level.saws.len() <= 6 * 3);
        assert!(level.saws.iter().all(|s| !s.is_moving() && s.radius == 20.0));
    }

    #[test]
    fn test_lava_rises_and_accelerates() {
        let tuning = Tuning::default();
        let mut level = Level::build(0, &tuning);
        let dt = 1.0 / 60.0;
        let mut last_y = level.lava_y;
        let mut last_speed = level.lava_speed;
        for _ in 0..10 {
            level.update(dt, &tuning);
            assert!(level.lava_y < last_y);
            assert!(level.lava_speed > last_speed);
            last_y = level.lava_y;
            last_speed = level.lava_speed;
        }
        assert!((level.lava_speed - 40.0 * 1.001f32.powi(10)).abs() < 1e-3);
    }

    #[test]
    fn test_projectiles_pruned_after_leaving() {
        let tuning = Tuning::default();
        let mut level = Level::build(0, &tuning);
        level.projectiles.push(Projectile::new(Vec2::new(899.0, 0.0), Vec2::new(600.0, 0.0), 10.0));
        level.update(0.1, &tuning);
        assert!(level.projectiles.iter().any(|p| !p.alive));
        level.prune_projectiles();
        assert!(level.projectiles.iter().all(|p| p.alive));
    }

    #[test]
    fn test_top_extent_includes_door() {
        let level = Level::build(0, &Tuning::default());
        assert_eq!(level.top_extent(), level.door.rect.top());
    }

    #[test]
    fn test_top_extent_includes_hazards() {
        let mut level = Level::build(0, &Tuning::default());
        let above_door = level.door.rect.top() - 150;
        level.saws.push(Saw::stationary(Vec2::new(400.0, above_door as f32), 20.0));
        assert_eq!(level.top_extent(), above_door);

        level.cannons.push(Cannon::new(Vec2::new(20.0, (above_door - 30) as f32), 1, 1.6, 0.0, 240.0));
        assert_eq!(level.top_extent(), above_door - 30);
    }
}
