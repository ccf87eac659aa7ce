//! Rock Splitter - simulation core of an arcade asteroid shooter
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (kinematics, collisions, splitting, scoring)
//! - `highscores`: Durable best-score record
//! - `tuning`: Data-driven game balance
//! - `render`: Draw-ready snapshot for an external renderer
//! - `error`: Persistence error types

pub mod error;
pub mod highscores;
pub mod render;
pub mod sim;
pub mod tuning;

pub use error::StoreError;
pub use highscores::HighScoreStore;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Play area dimensions
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 20.0;
    /// Degrees per second
    pub const PLAYER_TURN_SPEED: f32 = 300.0;
    /// Pixels per second
    pub const PLAYER_SPEED: f32 = 200.0;
    pub const PLAYER_SHOOT_SPEED: f32 = 500.0;
    pub const PLAYER_SHOOT_COOLDOWN_SECONDS: f32 = 0.3;
    pub const PLAYER_RESPAWN_INVULN_SECONDS: f32 = 2.0;
    pub const PLAYER_LIVES: u8 = 3;

    /// Shot defaults
    pub const SHOT_RADIUS: f32 = 5.0;

    /// Asteroid sizes: radius = ASTEROID_MIN_RADIUS * kind, kind in 1..=ASTEROID_KINDS
    pub const ASTEROID_MIN_RADIUS: f32 = 20.0;
    pub const ASTEROID_KINDS: u32 = 3;
    pub const ASTEROID_MAX_RADIUS: f32 = ASTEROID_MIN_RADIUS * ASTEROID_KINDS as f32;
    pub const ASTEROID_SPAWN_RATE_SECONDS: f32 = 0.8;

    /// Split rule
    pub const SPLIT_ANGLE_MIN_DEG: f32 = 20.0;
    pub const SPLIT_ANGLE_MAX_DEG: f32 = 50.0;
    /// Speed boost applied to the child rotated by +angle
    pub const SPLIT_SPEED_BOOST: f32 = 1.2;

    /// Scoring
    pub const SCORE_SMALL_ASTEROID: u64 = 50;
    pub const SCORE_MEDIUM_ASTEROID: u64 = 150;
    pub const SCORE_LARGE_ASTEROID: u64 = 400;
    /// Maximum displayable score
    pub const SCORE_MAX: u64 = 999_999;

    /// Combo system
    pub const COMBO_WINDOW_SECONDS: f32 = 2.0;
    pub const COMBO_INITIAL_MULTIPLIER: u32 = 1;

    /// High score persistence
    pub const HIGH_SCORE_FILE: &str = "highscore.json";
}

/// Unit facing vector for a rotation in degrees.
///
/// Rotation 0 faces +Y; positive angles turn counter-clockwise.
#[inline]
pub fn heading(rotation_deg: f32) -> Vec2 {
    rotate_deg(Vec2::Y, rotation_deg)
}

/// Rotate a vector counter-clockwise by an angle in degrees
#[inline]
pub fn rotate_deg(v: Vec2, angle_deg: f32) -> Vec2 {
    Vec2::from_angle(angle_deg.to_radians()).rotate(v)
}
