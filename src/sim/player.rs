//! The player ship and its shots
//!
//! Ship motion is direct: turning accumulates into `rotation` and thrust
//! moves the position along the facing without any inertia. Two countdown
//! timers gate firing and damage.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Body;
use super::tick::TickInput;
use crate::heading;
use crate::tuning::Tuning;

/// A projectile fired from the ship's nose
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    pub body: Body,
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    /// Facing in degrees; 0 faces +Y
    pub rotation: f32,
    /// Seconds until the next shot is allowed
    pub shot_cooldown: f32,
    /// Seconds of damage immunity left (never negative)
    pub invulnerability_timer: f32,
}

impl Player {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            body: Body::at(pos, tuning.player_radius),
            rotation: 0.0,
            shot_cooldown: 0.0,
            invulnerability_timer: 0.0,
        }
    }

    /// Unit vector the ship is facing
    #[inline]
    pub fn forward(&self) -> Vec2 {
        heading(self.rotation)
    }

    /// Tip of the ship
    #[inline]
    pub fn nose(&self) -> Vec2 {
        self.body.pos + self.forward() * self.body.radius()
    }

    /// Count both timers down by `dt`
    pub fn tick_timers(&mut self, dt: f32) {
        self.shot_cooldown = (self.shot_cooldown - dt).max(0.0);
        self.invulnerability_timer = (self.invulnerability_timer - dt).max(0.0);
    }

    /// Turn by `turn_speed * dt`; pass a negative `dt` to turn the other way
    pub fn rotate(&mut self, dt: f32, tuning: &Tuning) {
        self.rotation += tuning.player_turn_speed * dt;
    }

    /// Move along the facing by `speed * dt`; negative `dt` backs up
    pub fn thrust(&mut self, dt: f32, tuning: &Tuning) {
        self.body.pos += self.forward() * tuning.player_speed * dt;
    }

    /// Fire if the cooldown has elapsed
    pub fn try_fire(&mut self, tuning: &Tuning) -> Option<Shot> {
        if self.shot_cooldown > 0.0 {
            return None;
        }
        self.shot_cooldown = tuning.player_shoot_cooldown;
        let vel = self.forward() * tuning.player_shoot_speed;
        Some(Shot {
            body: Body::new(self.nose(), vel, tuning.shot_radius),
        })
    }

    /// Apply one frame of input. Returns the shot fired this frame, if any.
    pub fn control(&mut self, input: &TickInput, dt: f32, tuning: &Tuning) -> Option<Shot> {
        self.tick_timers(dt);

        if input.rotate_left {
            self.rotate(-dt, tuning);
        }
        if input.rotate_right {
            self.rotate(dt, tuning);
        }
        if input.thrust_forward {
            self.thrust(dt, tuning);
        }
        if input.thrust_backward {
            self.thrust(-dt, tuning);
        }
        if input.fire {
            return self.try_fire(tuning);
        }
        None
    }

    pub fn is_vulnerable(&self) -> bool {
        self.invulnerability_timer <= 0.0
    }

    /// Reset in place at `pos` with a fresh invulnerability window
    pub fn respawn(&mut self, pos: Vec2, tuning: &Tuning) {
        self.body.pos = pos;
        self.body.vel = Vec2::ZERO;
        self.rotation = 0.0;
        self.invulnerability_timer = tuning.player_respawn_invuln;
    }

    /// Blink while invulnerable: shown on even tenths of a second remaining
    pub fn is_visible(&self) -> bool {
        if self.invulnerability_timer <= 0.0 {
            return true;
        }
        ((self.invulnerability_timer * 10.0) as u32) % 2 == 0
    }

    /// Ship outline: nose, then the two rear corners
    pub fn triangle(&self) -> [Vec2; 3] {
        let r = self.body.radius();
        let forward = self.forward();
        let right = heading(self.rotation + 90.0) * r / 1.5;
        let pos = self.body.pos;
        [
            pos + forward * r,
            pos - forward * r - right,
            pos - forward * r + right,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> (Player, Tuning) {
        let tuning = Tuning::default();
        (Player::new(Vec2::new(640.0, 360.0), &tuning), tuning)
    }

    #[test]
    fn test_invulnerability_clamps_to_zero() {
        let (mut p, _) = player();
        p.invulnerability_timer = 0.05;
        assert!(!p.is_vulnerable());
        p.tick_timers(0.1);
        assert_eq!(p.invulnerability_timer, 0.0);
        assert!(p.is_vulnerable());
    }

    #[test]
    fn test_fire_respects_cooldown() {
        let (mut p, tuning) = player();
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };

        assert!(p.control(&fire, 0.0, &tuning).is_some());
        assert_eq!(p.shot_cooldown, tuning.player_shoot_cooldown);

        // Still cooling down
        assert!(p.control(&fire, 0.1, &tuning).is_none());
        assert!(p.control(&fire, 0.1, &tuning).is_none());

        // Past the 0.3s cooldown
        assert!(p.control(&fire, 0.15, &tuning).is_some());
    }

    #[test]
    fn test_shot_leaves_from_nose() {
        let (mut p, tuning) = player();
        p.rotation = 90.0;
        let shot = p.try_fire(&tuning).unwrap();

        let expected_pos = Vec2::new(640.0 - tuning.player_radius, 360.0);
        assert!((shot.body.pos - expected_pos).length() < 1e-3);
        assert!((shot.body.vel - Vec2::new(-tuning.player_shoot_speed, 0.0)).length() < 1e-2);
        assert_eq!(shot.body.radius(), tuning.shot_radius);
    }

    #[test]
    fn test_rotation_accumulates() {
        let (mut p, tuning) = player();
        let right = TickInput {
            rotate_right: true,
            ..Default::default()
        };
        let left = TickInput {
            rotate_left: true,
            ..Default::default()
        };
        p.control(&right, 0.5, &tuning);
        assert!((p.rotation - 150.0).abs() < 1e-4);
        p.control(&left, 0.1, &tuning);
        p.control(&left, 0.1, &tuning);
        assert!((p.rotation - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_thrust_moves_without_inertia() {
        let (mut p, tuning) = player();
        let forward = TickInput {
            thrust_forward: true,
            ..Default::default()
        };
        p.control(&forward, 0.5, &tuning);
        assert!((p.body.pos - Vec2::new(640.0, 460.0)).length() < 1e-3);
        assert_eq!(p.body.vel, Vec2::ZERO);

        // No input: no drift
        p.control(&TickInput::default(), 0.5, &tuning);
        assert!((p.body.pos - Vec2::new(640.0, 460.0)).length() < 1e-3);

        let back = TickInput {
            thrust_backward: true,
            ..Default::default()
        };
        p.control(&back, 0.25, &tuning);
        assert!((p.body.pos - Vec2::new(640.0, 410.0)).length() < 1e-3);
    }

    #[test]
    fn test_respawn_resets_state() {
        let (mut p, tuning) = player();
        p.rotation = 123.0;
        p.body.vel = Vec2::new(5.0, 5.0);
        p.body.pos = Vec2::new(1.0, 1.0);

        p.respawn(Vec2::new(640.0, 360.0), &tuning);
        assert_eq!(p.body.pos, Vec2::new(640.0, 360.0));
        assert_eq!(p.body.vel, Vec2::ZERO);
        assert_eq!(p.rotation, 0.0);
        assert_eq!(p.invulnerability_timer, tuning.player_respawn_invuln);
        assert!(!p.is_vulnerable());
    }

    #[test]
    fn test_blink_visibility() {
        let (mut p, _) = player();
        assert!(p.is_visible());
        p.invulnerability_timer = 1.25; // 12 -> even
        assert!(p.is_visible());
        p.invulnerability_timer = 1.15; // 11 -> odd
        assert!(!p.is_visible());
    }

    #[test]
    fn test_triangle_nose_first() {
        let (p, _) = player();
        let [nose, a, b] = p.triangle();
        assert!((nose - p.nose()).length() < 1e-4);
        // Rear corners sit symmetric about the facing axis
        assert!(((a + b) / 2.0 - (p.body.pos - p.forward() * p.body.radius())).length() < 1e-3);
    }
}
