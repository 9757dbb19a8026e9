//! Lava Escape headless runner
//!
//! Plays one level with a scripted autopilot at the fixed frame rate and logs
//! what happens. Usage: `lava-escape [level 1-3] [tuning.json]`.

use std::path::Path;

use lava_escape::consts::{FPS, FRAME_DT, LEVEL_COUNT};
use lava_escape::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use lava_escape::Tuning;

/// Two minutes of play at most
const MAX_FRAMES: u32 = FPS * 120;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let level = match args.next().map(|a| a.parse::<usize>()) {
        Some(Ok(n)) if (1..=LEVEL_COUNT).contains(&n) => n - 1,
        Some(_) => {
            log::warn!("Level must be 1-{}, starting level 1", LEVEL_COUNT);
            0
        }
        None => 0,
    };
    let tuning = match args.next() {
        Some(path) => Tuning::load(Path::new(&path)),
        None => Tuning::default(),
    };

    log::info!("Lava Escape (headless) starting on level {}", level + 1);

    let mut state = GameState::new(tuning);
    tick(&mut state, &TickInput { select_level: Some(level), ..Default::default() }, FRAME_DT);
    report(&state.events);

    let mut frames = 0;
    while state.phase == GamePhase::Playing && frames < MAX_FRAMES {
        tick(&mut state, &autopilot(frames), FRAME_DT);
        report(&state.events);
        frames += 1;
    }

    let height = state.player().map(|p| p.rect.y).unwrap_or_default();
    log::info!(
        "Stopped after {} frames: {:?}, level {}, {} lives, player y {}",
        frames,
        state.phase,
        state.level_index + 1,
        state.lives,
        height
    );
}

/// Zig-zag across the screen and jump at a steady rhythm
fn autopilot(frame: u32) -> TickInput {
    let sweep = frame % 240;
    TickInput {
        left: sweep >= 120,
        right: sweep < 120,
        jump_pressed: frame % 20 == 0,
        ..Default::default()
    }
}

fn report(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::Hit { source } => log::info!("Hit by {:?}", source),
            GameEvent::Respawned { y } => log::info!("Respawned at y {}", y),
            other => log::info!("{:?}", other),
        }
    }
}
