//! Per-frame simulation step
//!
//! One call to [`tick`] runs a full frame in a fixed order: ship input,
//! field spawns, integration, culling, combo decay, collision resolution, then
//! compaction. Entities killed during resolution stay in their arena (dead)
//! until the frame ends, and split children only join at that point.

use serde::{Deserialize, Serialize};

use super::collision::overlaps;
use super::entity::EntityKind;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust_forward: bool,
    pub thrust_backward: bool,
    pub fire: bool,
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::GameOver {
        return events;
    }

    let dt = dt.max(0.0);
    state.frame += 1;

    // Ship
    if let Some(shot) = state.player.control(input, dt, &state.tuning) {
        let id = state.spawn_shot(shot);
        events.push(GameEvent::ShotFired { id });
    }

    // Field
    if let Some(rock) = state.field.update(dt, &state.tuning, &mut state.rng) {
        let radius = rock.radius();
        let id = state.spawn_asteroid(rock);
        log::debug!("Asteroid {} spawned (r={radius})", id.0);
        events.push(GameEvent::AsteroidSpawned { id, radius });
    }

    // Integrate
    if EntityKind::Asteroid.capabilities().movable {
        for (_, asteroid) in state.asteroids.iter_mut() {
            asteroid.body.advance(dt);
        }
    }
    if EntityKind::Shot.capabilities().movable {
        for (_, shot) in state.shots.iter_mut() {
            shot.body.advance(dt);
        }
    }

    // Shots that left the screen
    let gone: Vec<_> = state
        .shots
        .iter()
        .filter(|(_, shot)| state.is_out_of_bounds(shot))
        .map(|(id, _)| id)
        .collect();
    for id in gone {
        state.shots.kill(id);
    }

    // Asteroids that drifted away for good
    let adrift: Vec<_> = state
        .asteroids
        .iter()
        .filter(|(_, rock)| state.is_adrift(rock))
        .map(|(id, _)| id)
        .collect();
    for id in adrift {
        log::trace!("Asteroid {} left the field", id.0);
        state.asteroids.kill(id);
    }

    state.score.update(dt);

    resolve_collisions(state, &mut events);

    state.end_frame();
    events
}

/// Test every live asteroid against the ship and every live shot
fn resolve_collisions(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for asteroid_id in state.asteroids.ids() {
        let Some(&asteroid) = state.asteroids.get(asteroid_id) else {
            continue;
        };

        if overlaps(&asteroid.body, &state.player.body) && state.player.is_vulnerable() {
            player_hit(state, events);
            if state.phase == GamePhase::GameOver {
                return;
            }
        }

        let hit_shot = state
            .shots
            .iter()
            .find(|(_, shot)| overlaps(&asteroid.body, &shot.body))
            .map(|(id, _)| id);

        if let Some(shot_id) = hit_shot {
            state.shots.kill(shot_id);
            let points = state.score.add_score(asteroid.radius());
            if let Some(outcome) = state.split_asteroid(asteroid_id) {
                events.push(GameEvent::AsteroidDestroyed {
                    id: asteroid_id,
                    radius: outcome.radius,
                    children: outcome.children,
                    points,
                });
            }
        }
    }
}

fn player_hit(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.lives = state.lives.saturating_sub(1);
    events.push(GameEvent::PlayerHit {
        lives_left: state.lives,
    });

    if state.lives > 0 {
        let center = state.center();
        state.player.respawn(center, &state.tuning);
        log::debug!("Player respawned, {} lives left", state.lives);
        events.push(GameEvent::PlayerRespawned);
        return;
    }

    state.phase = GamePhase::GameOver;
    let score = state.score.current_score();
    let new_high_score = state.score.check_and_save_high_score();
    log::info!("Game over: score {score}, new high score: {new_high_score}");
    events.push(GameEvent::GameOver {
        score,
        new_high_score,
    });
}
