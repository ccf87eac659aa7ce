//! Data-driven game balance
//!
//! [`Tuning`] mirrors every gameplay constant in [`crate::consts`]. A JSON
//! file may override any subset of fields; missing keys fall back to the
//! compile-time defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Point-value class of an asteroid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Small,
    Medium,
    Large,
}

/// Classify an asteroid radius against the smallest and largest kinds.
///
/// Exact equality against the two extremes; anything else is medium.
/// Only sound while radii stay integral multiples of the minimum.
#[allow(clippy::float_cmp)]
pub fn tier_for(radius: f32, min_radius: f32, max_radius: f32) -> Tier {
    if radius == max_radius {
        Tier::Large
    } else if radius == min_radius {
        Tier::Small
    } else {
        Tier::Medium
    }
}

/// Runtime-tunable gameplay values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Play area ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Player ===
    pub player_radius: f32,
    pub player_turn_speed: f32,
    pub player_speed: f32,
    pub player_shoot_speed: f32,
    pub player_shoot_cooldown: f32,
    pub player_respawn_invuln: f32,
    pub player_lives: u8,

    // === Shots ===
    pub shot_radius: f32,

    // === Asteroids ===
    pub asteroid_min_radius: f32,
    pub asteroid_kinds: u32,
    pub asteroid_spawn_rate: f32,
    pub split_angle_min_deg: f32,
    pub split_angle_max_deg: f32,
    pub split_speed_boost: f32,

    // === Scoring ===
    pub score_small: u64,
    pub score_medium: u64,
    pub score_large: u64,
    pub score_max: u64,
    pub combo_window: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            player_radius: PLAYER_RADIUS,
            player_turn_speed: PLAYER_TURN_SPEED,
            player_speed: PLAYER_SPEED,
            player_shoot_speed: PLAYER_SHOOT_SPEED,
            player_shoot_cooldown: PLAYER_SHOOT_COOLDOWN_SECONDS,
            player_respawn_invuln: PLAYER_RESPAWN_INVULN_SECONDS,
            player_lives: PLAYER_LIVES,

            shot_radius: SHOT_RADIUS,

            asteroid_min_radius: ASTEROID_MIN_RADIUS,
            asteroid_kinds: ASTEROID_KINDS,
            asteroid_spawn_rate: ASTEROID_SPAWN_RATE_SECONDS,
            split_angle_min_deg: SPLIT_ANGLE_MIN_DEG,
            split_angle_max_deg: SPLIT_ANGLE_MAX_DEG,
            split_speed_boost: SPLIT_SPEED_BOOST,

            score_small: SCORE_SMALL_ASTEROID,
            score_medium: SCORE_MEDIUM_ASTEROID,
            score_large: SCORE_LARGE_ASTEROID,
            score_max: SCORE_MAX,
            combo_window: COMBO_WINDOW_SECONDS,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        let parsed = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|json| serde_json::from_str::<Tuning>(&json).map_err(|e| e.to_string()));

        match parsed {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning.validated()
            }
            Err(err) => {
                log::warn!("Using default tuning ({}: {err})", path.display());
                Self::default()
            }
        }
    }

    /// Replace out-of-range values with their defaults
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();

        let positive = [
            ("screen_width", &mut self.screen_width, defaults.screen_width),
            ("screen_height", &mut self.screen_height, defaults.screen_height),
            ("player_radius", &mut self.player_radius, defaults.player_radius),
            ("player_shoot_cooldown", &mut self.player_shoot_cooldown, defaults.player_shoot_cooldown),
            ("shot_radius", &mut self.shot_radius, defaults.shot_radius),
            ("asteroid_min_radius", &mut self.asteroid_min_radius, defaults.asteroid_min_radius),
            ("asteroid_spawn_rate", &mut self.asteroid_spawn_rate, defaults.asteroid_spawn_rate),
            ("combo_window", &mut self.combo_window, defaults.combo_window),
        ];
        for (name, value, default) in positive {
            // Also rejects NaN
            if !(*value > 0.0) {
                log::warn!("tuning.{name} = {value} must be positive, using {default}");
                *value = default;
            }
        }

        if self.asteroid_kinds == 0 {
            log::warn!("tuning.asteroid_kinds must be at least 1, using {}", defaults.asteroid_kinds);
            self.asteroid_kinds = defaults.asteroid_kinds;
        }
        if self.player_lives == 0 {
            log::warn!("tuning.player_lives must be at least 1, using {}", defaults.player_lives);
            self.player_lives = defaults.player_lives;
        }
        if self.player_respawn_invuln < 0.0 {
            self.player_respawn_invuln = 0.0;
        }
        if !(self.split_angle_min_deg.is_finite() && self.split_angle_max_deg.is_finite()) {
            log::warn!("tuning.split_angle_*_deg must be finite, using defaults");
            self.split_angle_min_deg = defaults.split_angle_min_deg;
            self.split_angle_max_deg = defaults.split_angle_max_deg;
        }
        if self.split_angle_min_deg > self.split_angle_max_deg {
            std::mem::swap(&mut self.split_angle_min_deg, &mut self.split_angle_max_deg);
        }
        self
    }

    /// Radius of the largest asteroid kind
    #[inline]
    pub fn asteroid_max_radius(&self) -> f32 {
        self.asteroid_min_radius * self.asteroid_kinds as f32
    }

    /// Classify an asteroid by radius, see [`tier_for`]
    pub fn tier_for_radius(&self, radius: f32) -> Tier {
        tier_for(radius, self.asteroid_min_radius, self.asteroid_max_radius())
    }

    /// Base (un-multiplied) points for a tier
    pub fn points_for_tier(&self, tier: Tier) -> u64 {
        match tier {
            Tier::Small => self.score_small,
            Tier::Medium => self.score_medium,
            Tier::Large => self.score_large,
        }
    }
}
