//! Asteroids and the subdivision rule
//!
//! A hit asteroid is always destroyed. Anything above the minimum radius
//! breaks into two children one minimum-radius step smaller, so a rock of
//! kind `k` survives at most `k - 1` splits along any branch.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::Body;
use crate::rotate_deg;
use crate::tuning::{Tier, Tuning};

/// A drifting rock
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub body: Body,
}

impl Asteroid {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            body: Body::new(pos, vel, radius),
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.body.radius()
    }

    /// Point-value class, derived from radius on demand
    pub fn tier(&self, tuning: &Tuning) -> Tier {
        tuning.tier_for_radius(self.radius())
    }

    /// True when a hit destroys the rock without children
    pub fn is_terminal(&self, tuning: &Tuning) -> bool {
        self.radius() <= tuning.asteroid_min_radius
    }

    /// Children produced by destroying this asteroid.
    ///
    /// Returns `None` at or below the minimum radius. Otherwise both children
    /// spawn at the parent's position with radius reduced by one minimum
    /// step. One velocity is rotated by `+angle` and boosted, the other is
    /// rotated by `-angle` at the parent's speed.
    pub fn split<R: Rng>(&self, tuning: &Tuning, rng: &mut R) -> Option<[Asteroid; 2]> {
        if self.is_terminal(tuning) {
            return None;
        }

        let angle = rng.random_range(tuning.split_angle_min_deg..=tuning.split_angle_max_deg);
        Some(self.split_at_angle(angle, tuning))
    }

    /// Deterministic core of [`Asteroid::split`] for a given angle in degrees
    pub fn split_at_angle(&self, angle_deg: f32, tuning: &Tuning) -> [Asteroid; 2] {
        let pos = self.body.pos;
        let vel = self.body.vel;
        let radius = self.radius() - tuning.asteroid_min_radius;

        let boosted = rotate_deg(vel, angle_deg) * tuning.split_speed_boost;
        let plain = rotate_deg(vel, -angle_deg);

        [
            Asteroid::new(pos, boosted, radius),
            Asteroid::new(pos, plain, radius),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_small_asteroid_has_no_children() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let rock = Asteroid::new(Vec2::new(100.0, 100.0), Vec2::new(10.0, 0.0), 20.0);
        assert!(rock.split(&tuning, &mut rng).is_none());
    }

    #[test]
    fn test_below_minimum_has_no_children() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let rock = Asteroid::new(Vec2::ZERO, Vec2::X, 7.5);
        assert!(rock.split(&tuning, &mut rng).is_none());
    }

    #[test]
    fn test_large_splits_into_two_mediums() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let parent = Asteroid::new(Vec2::new(300.0, 200.0), Vec2::new(0.0, 80.0), 60.0);

        let children = parent.split(&tuning, &mut rng).unwrap();
        for child in &children {
            assert_eq!(child.radius(), 40.0);
            assert_eq!(child.body.pos, parent.body.pos);
            assert_eq!(child.tier(&tuning), Tier::Medium);
        }
    }

    #[test]
    fn test_split_velocity_asymmetry() {
        let tuning = Tuning::default();
        let parent = Asteroid::new(Vec2::ZERO, Vec2::new(100.0, 0.0), 40.0);
        let [a, b] = parent.split_at_angle(30.0, &tuning);

        assert!((a.body.vel.length() - 120.0).abs() < 1e-3);
        assert!((b.body.vel.length() - 100.0).abs() < 1e-3);

        // +30 degrees turns counter-clockwise, -30 clockwise
        let a_angle = a.body.vel.y.atan2(a.body.vel.x).to_degrees();
        let b_angle = b.body.vel.y.atan2(b.body.vel.x).to_degrees();
        assert!((a_angle - 30.0).abs() < 1e-3);
        assert!((b_angle + 30.0).abs() < 1e-3);
    }

    #[test]
    fn test_subdivision_depth_is_bounded() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(99);
        let mut frontier = vec![Asteroid::new(Vec2::ZERO, Vec2::new(50.0, 50.0), 60.0)];
        let mut destroyed = 0;
        let mut depth = 0;

        while !frontier.is_empty() {
            let mut next = Vec::new();
            for rock in frontier {
                destroyed += 1;
                if let Some(children) = rock.split(&tuning, &mut rng) {
                    next.extend(children);
                }
            }
            if !next.is_empty() {
                depth += 1;
            }
            frontier = next;
        }

        // 60 -> 40 -> 20: two generations of splits, 1 + 2 + 4 rocks in total
        assert_eq!(depth, 2);
        assert_eq!(destroyed, 7);
    }

    proptest! {
        #[test]
        fn prop_split_angle_in_range(seed in any::<u64>(), vx in -200.0f32..200.0, vy in -200.0f32..200.0) {
            prop_assume!(vx.abs() > 1.0 || vy.abs() > 1.0);
            let tuning = Tuning::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let parent = Asteroid::new(Vec2::ZERO, Vec2::new(vx, vy), 60.0);
            let [a, b] = parent.split(&tuning, &mut rng).unwrap();

            let turn = parent.body.vel.angle_to(b.body.vel).to_degrees().abs();
            prop_assert!(turn >= 20.0 - 1e-2 && turn <= 50.0 + 1e-2);
            let ratio = a.body.vel.length() / parent.body.vel.length();
            prop_assert!((ratio - 1.2).abs() < 1e-3);
        }
    }
}
