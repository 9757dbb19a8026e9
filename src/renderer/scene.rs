//! Draw-order list for the current frame

use super::colors;
use super::hud::hud_lines;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{Camera, GamePhase, GameState, Level, Player, Rect, Saw};

const W: f32 = SCREEN_WIDTH as f32;
const H: f32 = SCREEN_HEIGHT as f32;

/// Spacing of the highlight blobs along the lava surface
const LAVA_BUBBLE_SPACING: usize = 40;
const LAVA_BUBBLE_RADIUS: f32 = 12.0;

/// What a primitive represents, for renderers that map roles to sprites
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Background,
    Platform,
    Door,
    DoorLabel,
    Saw,
    MovingSaw,
    Cannon,
    CannonBarrel,
    Projectile,
    Lava,
    LavaBubble,
    Player,
    PlayerEye,
    Hud,
    Title,
    Prompt,
}

/// Which point of the text box `(x, y)` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
}

/// Screen-space primitive
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect { x: f32, y: f32, w: f32, h: f32 },
    /// `angle` is the blade rotation for saws, 0 otherwise
    Circle { x: f32, y: f32, radius: f32, angle: f32 },
    Text { x: f32, y: f32, text: String, anchor: Anchor },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub role: Role,
    pub color: [f32; 4],
    pub shape: Shape,
}

impl DrawItem {
    fn rect(role: Role, color: [f32; 4], x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { role, color, shape: Shape::Rect { x, y, w, h } }
    }

    fn world_rect(role: Role, color: [f32; 4], r: &Rect, cam: &Camera) -> Self {
        Self::rect(role, color, r.x as f32, cam.to_screen(r.y as f32), r.w as f32, r.h as f32)
    }

    fn circle(role: Role, color: [f32; 4], x: f32, y: f32, radius: f32, angle: f32) -> Self {
        Self { role, color, shape: Shape::Circle { x, y, radius, angle } }
    }

    fn text(role: Role, color: [f32; 4], x: f32, y: f32, text: impl Into<String>, anchor: Anchor) -> Self {
        Self { role, color, shape: Shape::Text { x, y, text: text.into(), anchor } }
    }
}

/// Build the draw list for whatever screen the game is on
pub fn scene(state: &GameState) -> Vec<DrawItem> {
    match (state.phase, state.stage.as_ref()) {
        (GamePhase::Playing, Some(stage)) => play_scene(state, &stage.level, &stage.player),
        (GamePhase::Dead, _) => end_screen(colors::BACKGROUND_DEAD, "You Died", colors::DEATH_TITLE),
        (GamePhase::Won, _) => end_screen(colors::BACKGROUND_WON, "You Won", colors::PROMPT),
        _ => menu_screen(),
    }
}

fn play_scene(state: &GameState, level: &Level, player: &Player) -> Vec<DrawItem> {
    let cam = &state.camera;
    let mut items = Vec::with_capacity(level.platforms.len() + 64);

    items.push(DrawItem::rect(Role::Background, colors::BACKGROUND_PLAY, 0.0, 0.0, W, H));

    for platform in &level.platforms {
        items.push(DrawItem::world_rect(Role::Platform, colors::PLATFORM, &platform.rect, cam));
    }

    let door = &level.door.rect;
    items.push(DrawItem::world_rect(Role::Door, colors::DOOR, door, cam));
    items.push(DrawItem::text(
        Role::DoorLabel,
        colors::WHITE,
        door.center_x() as f32,
        cam.to_screen(door.top() as f32) - 28.0,
        "EXIT",
        Anchor::TopCenter,
    ));

    items.extend(level.saws.iter().map(|s| saw_item(Role::Saw, s, cam)));
    items.extend(level.moving_saws.iter().map(|s| saw_item(Role::MovingSaw, s, cam)));

    for cannon in &level.cannons {
        let cy = cam.to_screen(cannon.pos.y);
        items.push(DrawItem::rect(Role::Cannon, colors::CANNON, cannon.pos.x - 16.0, cy - 12.0, 32.0, 24.0));
        let barrel_x = if cannon.dir > 0 { cannon.pos.x + 14.0 } else { cannon.pos.x - 32.0 };
        items.push(DrawItem::rect(Role::CannonBarrel, colors::BLACK, barrel_x, cy - 6.0, 18.0, 12.0));
    }

    for shot in &level.projectiles {
        items.push(DrawItem::circle(
            Role::Projectile,
            colors::PROJECTILE,
            shot.pos.x,
            cam.to_screen(shot.pos.y),
            shot.radius,
            0.0,
        ));
    }

    let lava_h = lava_height(level, cam);
    if lava_h > 0.0 {
        let surface = H - lava_h;
        items.push(DrawItem::rect(Role::Lava, colors::LAVA, 0.0, surface, W, lava_h));
        for x in (0..SCREEN_WIDTH as usize).step_by(LAVA_BUBBLE_SPACING) {
            let cx = (x + LAVA_BUBBLE_SPACING / 2) as f32;
            items.push(DrawItem::circle(Role::LavaBubble, colors::LAVA_BUBBLE, cx, surface, LAVA_BUBBLE_RADIUS, 0.0));
        }
    }

    let body = if player.is_invulnerable() { colors::PLAYER_INVULNERABLE } else { colors::PLAYER };
    items.push(DrawItem::world_rect(Role::Player, body, &player.rect, cam));
    items.push(DrawItem::circle(
        Role::PlayerEye,
        colors::BLACK,
        (player.rect.center_x() + 10 * player.facing) as f32,
        cam.to_screen(player.rect.y as f32) + 15.0,
        4.0,
        0.0,
    ));

    let [lives, progress, hint] = hud_lines(state);
    items.push(DrawItem::text(Role::Hud, colors::WHITE, 16.0, 12.0, lives, Anchor::TopLeft));
    items.push(DrawItem::text(Role::Hud, colors::WHITE, W - 16.0, 12.0, progress, Anchor::TopRight));
    items.push(DrawItem::text(Role::Hud, colors::WHITE, W / 2.0, 42.0, hint, Anchor::TopCenter));

    items
}

fn saw_item(role: Role, saw: &Saw, cam: &Camera) -> DrawItem {
    DrawItem::circle(role, colors::SAW, saw.pos.x, cam.to_screen(saw.pos.y), saw.radius, saw.angle)
}

/// Visible height of the lava band at the bottom of the screen
fn lava_height(level: &Level, cam: &Camera) -> f32 {
    (H - cam.to_screen(level.lava_y)).max(0.0).floor()
}

fn menu_screen() -> Vec<DrawItem> {
    let lines: [(Role, [f32; 4], &str, f32); 6] = [
        (Role::Title, colors::WHITE, "Escape the Lava!", 0.0),
        (Role::Title, colors::WHITE, "Upward jumping with lava, saws, and cannons", 80.0),
        (Role::Prompt, colors::PROMPT, "Press 1 Enter or Space for Level 1", 160.0),
        (Role::Prompt, colors::PROMPT, "Press 2 for Level 2", 200.0),
        (Role::Prompt, colors::PROMPT, "Press 3 for Level 3", 240.0),
        (Role::Prompt, colors::WHITE, "Reach the green door at the top. Avoid saws, cannons, and lava.", 320.0),
    ];
    let top = H / 2.0 - 200.0;

    let mut items = vec![DrawItem::rect(Role::Background, colors::BACKGROUND_MENU, 0.0, 0.0, W, H)];
    items.extend(
        lines
            .iter()
            .map(|&(role, color, text, dy)| DrawItem::text(role, color, W / 2.0, top + dy, text, Anchor::TopCenter)),
    );
    items
}

fn end_screen(background: [f32; 4], title: &str, title_color: [f32; 4]) -> Vec<DrawItem> {
    vec![
        DrawItem::rect(Role::Background, background, 0.0, 0.0, W, H),
        DrawItem::text(Role::Title, title_color, W / 2.0, H / 2.0 - 60.0, title, Anchor::TopCenter),
        DrawItem::text(
            Role::Prompt,
            colors::WHITE,
            W / 2.0,
            H / 2.0 + 20.0,
            "Press Enter to return to Menu",
            Anchor::TopCenter,
        ),
    ]
}
