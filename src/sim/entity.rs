//! Kinematic bodies shared by every circular entity
//!
//! Players, asteroids and shots all embed a [`Body`]. What an entity may do
//! is described by its [`Capabilities`] rather than by its type.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Position, velocity and a fixed collision radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Fixed at creation; splitting makes new bodies instead of shrinking
    radius: f32,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive, got {radius}");
        Self { pos, vel, radius }
    }

    /// Body at rest
    pub fn at(pos: Vec2, radius: f32) -> Self {
        Self::new(pos, Vec2::ZERO, radius)
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Constant-velocity step: `pos += vel * dt`
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

/// Entity kinds the simulation tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Asteroid,
    Shot,
}

/// What the frame loop is allowed to do with an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Advanced by `Body::advance` every frame
    pub movable: bool,
    /// Takes part in overlap tests
    pub collidable: bool,
    /// Driven by per-frame input
    pub player_controlled: bool,
}

impl EntityKind {
    pub const fn capabilities(self) -> Capabilities {
        match self {
            // Player motion comes from thrust input, not velocity integration
            EntityKind::Player => Capabilities {
                movable: false,
                collidable: true,
                player_controlled: true,
            },
            EntityKind::Asteroid | EntityKind::Shot => Capabilities {
                movable: true,
                collidable: true,
                player_controlled: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_integrates_velocity() {
        let mut body = Body::new(Vec2::new(10.0, 10.0), Vec2::new(100.0, -50.0), 5.0);
        body.advance(0.5);
        assert!((body.pos - Vec2::new(60.0, -15.0)).length() < 1e-4);
        assert_eq!(body.radius(), 5.0);
    }

    #[test]
    fn test_advance_zero_dt_is_noop() {
        let mut body = Body::new(Vec2::new(1.0, 2.0), Vec2::new(300.0, 300.0), 5.0);
        body.advance(0.0);
        assert_eq!(body.pos, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_capability_tags() {
        assert!(EntityKind::Asteroid.capabilities().movable);
        assert!(EntityKind::Shot.capabilities().collidable);
        assert!(EntityKind::Player.capabilities().player_controlled);
        assert!(!EntityKind::Player.capabilities().movable);
    }
}
