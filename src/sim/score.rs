//! Score and combo engine
//!
//! Each destroyed asteroid awards its tier's base points times the current
//! combo multiplier, then bumps the multiplier and reopens the combo window.
//! The window drains every frame; once it runs dry the multiplier falls back
//! to 1. The running total is capped at `score_max`.

use serde::{Deserialize, Serialize};

use crate::consts::COMBO_INITIAL_MULTIPLIER;
use crate::highscores::HighScoreStore;
use crate::tuning::{Tier, Tuning, tier_for};

/// Scoring values captured from [`Tuning`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRules {
    pub min_radius: f32,
    pub max_radius: f32,
    pub small_points: u64,
    pub medium_points: u64,
    pub large_points: u64,
    pub score_max: u64,
    pub combo_window: f32,
}

impl From<&Tuning> for ScoreRules {
    fn from(tuning: &Tuning) -> Self {
        Self {
            min_radius: tuning.asteroid_min_radius,
            max_radius: tuning.asteroid_max_radius(),
            small_points: tuning.points_for_tier(Tier::Small),
            medium_points: tuning.points_for_tier(Tier::Medium),
            large_points: tuning.points_for_tier(Tier::Large),
            score_max: tuning.score_max,
            combo_window: tuning.combo_window,
        }
    }
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self::from(&Tuning::default())
    }
}

impl ScoreRules {
    /// Base points for the tier `radius` falls in
    pub fn base_points(&self, radius: f32) -> u64 {
        match tier_for(radius, self.min_radius, self.max_radius) {
            Tier::Small => self.small_points,
            Tier::Medium => self.medium_points,
            Tier::Large => self.large_points,
        }
    }
}

/// Mutable scoring state for one run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreState {
    pub current_score: u64,
    pub combo_multiplier: u32,
    pub combo_timer: f32,
}

impl Default for ScoreState {
    fn default() -> Self {
        Self {
            current_score: 0,
            combo_multiplier: COMBO_INITIAL_MULTIPLIER,
            combo_timer: 0.0,
        }
    }
}

/// Owns the run score and the durable best score
#[derive(Debug, Clone)]
pub struct ScoreManager {
    rules: ScoreRules,
    state: ScoreState,
    high_scores: HighScoreStore,
}

impl ScoreManager {
    pub fn new(rules: ScoreRules, high_scores: HighScoreStore) -> Self {
        Self {
            rules,
            state: ScoreState::default(),
            high_scores,
        }
    }

    /// Credit a destroyed asteroid. Returns the points actually added.
    pub fn add_score(&mut self, asteroid_radius: f32) -> u64 {
        let award = self
            .rules
            .base_points(asteroid_radius)
            .saturating_mul(u64::from(self.state.combo_multiplier));

        let before = self.state.current_score;
        self.state.current_score = before.saturating_add(award).min(self.rules.score_max);

        self.state.combo_multiplier = self.state.combo_multiplier.saturating_add(1);
        self.state.combo_timer = self.rules.combo_window;

        self.state.current_score - before
    }

    /// Drain the combo window; call once per frame
    pub fn update(&mut self, dt: f32) {
        self.state.combo_timer = (self.state.combo_timer - dt).max(0.0);
        if self.state.combo_timer <= 0.0 {
            self.state.combo_multiplier = COMBO_INITIAL_MULTIPLIER;
        }
    }

    /// Start a fresh run. The high score is kept.
    pub fn reset(&mut self) {
        self.state = ScoreState::default();
    }

    /// Record the current score if it beats the best so far.
    ///
    /// Persistence failures are logged and dropped; the cached best still
    /// reflects the new record for the rest of the session.
    pub fn check_and_save_high_score(&mut self) -> bool {
        let score = self.state.current_score;
        if score <= self.high_scores.high_score() {
            return false;
        }

        log::info!("New high score: {score}");
        if let Err(err) = self.high_scores.record(score) {
            log::warn!("High score not saved: {err}");
        }
        true
    }

    pub fn current_score(&self) -> u64 {
        self.state.current_score
    }

    pub fn combo_multiplier(&self) -> u32 {
        self.state.combo_multiplier
    }

    pub fn combo_timer(&self) -> f32 {
        self.state.combo_timer
    }

    pub fn high_score(&self) -> u64 {
        self.high_scores.high_score()
    }

    pub fn state(&self) -> &ScoreState {
        &self.state
    }

    pub fn rules(&self) -> &ScoreRules {
        &self.rules
    }

    pub fn high_scores(&self) -> &HighScoreStore {
        &self.high_scores
    }
}
