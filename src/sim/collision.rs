//! Circle-circle overlap tests
//!
//! Every collidable entity is a circle, so a single distance test covers
//! asteroid/player and asteroid/shot pairs. Resolution runs brute force over
//! all pairs, which is O(asteroids × shots) per frame. That is fine for a
//! screenful of rocks; a spatial grid would be the first thing to add if
//! entity counts grow by orders of magnitude.

use glam::Vec2;

use super::entity::Body;

/// True when the two circles touch or overlap
#[inline]
pub fn overlaps(a: &Body, b: &Body) -> bool {
    circles_overlap(a.pos, a.radius(), b.pos, b.radius())
}

/// Raw form of [`overlaps`]: `|a - b| <= ra + rb`
#[inline]
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    a_pos.distance(b_pos) <= a_radius + b_radius
}
