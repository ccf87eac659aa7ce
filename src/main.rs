//! Rock Splitter headless entry point
//!
//! Drives the simulation at a fixed 60 Hz with a simple autopilot until the
//! ship runs out of lives or the frame cap is reached.
//!
//! Usage: `rock-splitter [tuning.json] [highscore.json]`

use std::path::PathBuf;

use rock_splitter::consts::HIGH_SCORE_FILE;
use rock_splitter::render::RenderFrame;
use rock_splitter::sim::{GameEvent, GameState, TickInput, tick};
use rock_splitter::{HighScoreStore, Tuning};

/// Frame time handed to the simulation
const FRAME_DT: f32 = 1.0 / 60.0;
/// Ten minutes of play
const MAX_FRAMES: u64 = 60 * 60 * 10;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => Tuning::load(&PathBuf::from(path)),
        None => Tuning::default(),
    };
    let store_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(HIGH_SCORE_FILE));

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    log::info!("Rock Splitter (headless) starting, seed {seed}");
    let mut state = GameState::new(seed, tuning, HighScoreStore::open(store_path));
    log::info!("High score to beat: {}", state.score.high_score());

    while state.frame < MAX_FRAMES {
        let input = autopilot(&state);
        for event in tick(&mut state, &input, FRAME_DT) {
            match event {
                GameEvent::PlayerHit { lives_left } => {
                    log::info!("Ship hit at frame {}, {lives_left} lives left", state.frame);
                }
                GameEvent::GameOver {
                    score,
                    new_high_score,
                } => {
                    log::info!("Final score {score} (new high score: {new_high_score})");
                }
                _ => {}
            }
        }
        if state.is_game_over() {
            break;
        }
    }

    let frame = RenderFrame::capture(&state);
    for line in &frame.hud {
        println!("{}", line.text);
    }
}

/// Aim at the nearest rock and keep the trigger held
fn autopilot(state: &GameState) -> TickInput {
    let ship = state.player.body.pos;
    let nearest = state
        .asteroids
        .iter()
        .map(|(_, a)| a.body.pos)
        .min_by(|a, b| {
            a.distance_squared(ship)
                .partial_cmp(&b.distance_squared(ship))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    // No rocks yet: sweep
    let Some(target) = nearest else {
        return TickInput {
            rotate_right: true,
            fire: true,
            ..Default::default()
        };
    };

    let facing = state.player.forward();
    let turn = facing.perp_dot(target - ship);
    TickInput {
        rotate_left: turn < 0.0,
        rotate_right: turn > 0.0,
        fire: true,
        ..Default::default()
    }
}
