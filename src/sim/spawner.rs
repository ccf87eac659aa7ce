//! Periodic asteroid field
//!
//! Every spawn interval one rock enters from a random screen edge, heading
//! roughly inward with some angular scatter.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::asteroid::Asteroid;
use crate::rotate_deg;
use crate::tuning::Tuning;

/// Inbound speed range (pixels/s)
pub const SPAWN_SPEED_MIN: f32 = 40.0;
pub const SPAWN_SPEED_MAX: f32 = 100.0;
/// Maximum deviation from the inbound edge normal (degrees)
pub const SPAWN_SCATTER_DEG: f32 = 30.0;

/// Screen edge a rock enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    /// Direction pointing into the play area
    pub fn inward(self) -> Vec2 {
        match self {
            Edge::Left => Vec2::X,
            Edge::Right => Vec2::NEG_X,
            Edge::Top => Vec2::Y,
            Edge::Bottom => Vec2::NEG_Y,
        }
    }

    /// Point just outside the edge at fraction `t` along it
    pub fn point(self, t: f32, margin: f32, tuning: &Tuning) -> Vec2 {
        let w = tuning.screen_width;
        let h = tuning.screen_height;
        match self {
            Edge::Left => Vec2::new(-margin, t * h),
            Edge::Right => Vec2::new(w + margin, t * h),
            Edge::Top => Vec2::new(t * w, -margin),
            Edge::Bottom => Vec2::new(t * w, h + margin),
        }
    }
}

/// Emits a new asteroid each time the spawn timer elapses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AsteroidField {
    /// Seconds accumulated since the last spawn
    pub spawn_timer: f32,
}

impl AsteroidField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the timer, returning at most one new asteroid
    pub fn update<R: Rng>(&mut self, dt: f32, tuning: &Tuning, rng: &mut R) -> Option<Asteroid> {
        self.spawn_timer += dt;
        if self.spawn_timer <= tuning.asteroid_spawn_rate {
            return None;
        }
        self.spawn_timer = 0.0;
        Some(Self::spawn_random(tuning, rng))
    }

    /// One edge-entering asteroid of a random kind
    pub fn spawn_random<R: Rng>(tuning: &Tuning, rng: &mut R) -> Asteroid {
        let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
        let speed = rng.random_range(SPAWN_SPEED_MIN..=SPAWN_SPEED_MAX);
        let scatter = rng.random_range(-SPAWN_SCATTER_DEG..=SPAWN_SCATTER_DEG);
        let vel = rotate_deg(edge.inward() * speed, scatter);

        let t = rng.random_range(0.0..=1.0);
        let kind = rng.random_range(1..=tuning.asteroid_kinds);
        let radius = tuning.asteroid_min_radius * kind as f32;
        let pos = edge.point(t, tuning.asteroid_max_radius(), tuning);

        Asteroid::new(pos, vel, radius)
    }

    pub fn reset(&mut self) {
        self.spawn_timer = 0.0;
    }
}
