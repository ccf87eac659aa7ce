//! Game state and core simulation types
//!
//! Everything one session needs lives in [`GameState`]: the ship, one arena
//! per entity kind, the score engine and the seeded RNG.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::{Arena, EntityId};
use super::asteroid::Asteroid;
use super::player::{Player, Shot};
use super::score::{ScoreManager, ScoreRules};
use super::spawner::AsteroidField;
use crate::highscores::HighScoreStore;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Out of lives; ticks are ignored until restart
    GameOver,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ShotFired { id: EntityId },
    AsteroidSpawned { id: EntityId, radius: f32 },
    AsteroidDestroyed {
        id: EntityId,
        radius: f32,
        children: usize,
        points: u64,
    },
    PlayerHit { lives_left: u8 },
    PlayerRespawned,
    GameOver { score: u64, new_high_score: bool },
}

/// Result of destroying one asteroid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitOutcome {
    pub radius: f32,
    /// Children staged for the end of the frame (0 or 2)
    pub children: usize,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub lives: u8,
    /// Frames simulated since the run started
    pub frame: u64,
    pub player: Player,
    pub asteroids: Arena<Asteroid>,
    pub shots: Arena<Shot>,
    pub field: AsteroidField,
    pub score: ScoreManager,
    /// Split children waiting to join `asteroids` at frame end
    pending_asteroids: Vec<Asteroid>,
    next_id: u32,
}

impl GameState {
    /// Create a new session with the given seed.
    ///
    /// Out-of-range tuning values are replaced with their defaults.
    pub fn new(seed: u64, tuning: Tuning, high_scores: HighScoreStore) -> Self {
        let tuning = tuning.validated();
        let score = ScoreManager::new(ScoreRules::from(&tuning), high_scores);
        let player = Player::new(Self::center_of(&tuning), &tuning);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            lives: tuning.player_lives,
            tuning,
            phase: GamePhase::Playing,
            frame: 0,
            player,
            asteroids: Arena::new(),
            shots: Arena::new(),
            field: AsteroidField::new(),
            score,
            pending_asteroids: Vec::new(),
            next_id: 1,
        }
    }

    fn center_of(tuning: &Tuning) -> Vec2 {
        Vec2::new(tuning.screen_width / 2.0, tuning.screen_height / 2.0)
    }

    /// Middle of the play area, where the ship (re)spawns
    pub fn center(&self) -> Vec2 {
        Self::center_of(&self.tuning)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add an asteroid to the active set immediately
    pub fn spawn_asteroid(&mut self, asteroid: Asteroid) -> EntityId {
        let id = self.next_entity_id();
        self.asteroids.insert(id, asteroid);
        id
    }

    pub fn spawn_shot(&mut self, shot: Shot) -> EntityId {
        let id = self.next_entity_id();
        self.shots.insert(id, shot);
        id
    }

    /// Destroy an asteroid and stage its children.
    ///
    /// Children are not visible to collision checks until [`Self::end_frame`].
    pub fn split_asteroid(&mut self, id: EntityId) -> Option<SplitOutcome> {
        let asteroid = *self.asteroids.get(id)?;
        self.asteroids.kill(id);

        let children = match asteroid.split(&self.tuning, &mut self.rng) {
            Some(pair) => {
                self.pending_asteroids.extend(pair);
                pair.len()
            }
            None => 0,
        };
        log::debug!(
            "Asteroid {} (r={}) destroyed, {} children",
            id.0,
            asteroid.radius(),
            children
        );

        Some(SplitOutcome {
            radius: asteroid.radius(),
            children,
        })
    }

    /// Drop dead entities and admit staged children
    pub fn end_frame(&mut self) {
        self.asteroids.compact();
        self.shots.compact();
        for child in std::mem::take(&mut self.pending_asteroids) {
            self.spawn_asteroid(child);
        }
    }

    /// Children staged this frame
    pub fn pending_asteroids(&self) -> &[Asteroid] {
        &self.pending_asteroids
    }

    /// True if a shot lies fully outside the play area
    pub fn is_out_of_bounds(&self, shot: &Shot) -> bool {
        let r = shot.body.radius();
        let p = shot.body.pos;
        p.x < -r
            || p.y < -r
            || p.x > self.tuning.screen_width + r
            || p.y > self.tuning.screen_height + r
    }

    /// True once an asteroid has drifted past the play area plus the
    /// largest asteroid radius and is not heading back in
    pub fn is_adrift(&self, asteroid: &Asteroid) -> bool {
        let margin = self.tuning.asteroid_max_radius();
        let p = asteroid.body.pos;
        let v = asteroid.body.vel;
        (p.x < -margin && v.x <= 0.0)
            || (p.y < -margin && v.y <= 0.0)
            || (p.x > self.tuning.screen_width + margin && v.x >= 0.0)
            || (p.y > self.tuning.screen_height + margin && v.y >= 0.0)
    }

    /// Start a new run, keeping tuning and the high score
    pub fn restart(&mut self) {
        self.score.reset();
        self.asteroids.clear();
        self.shots.clear();
        self.pending_asteroids.clear();
        self.field.reset();
        self.lives = self.tuning.player_lives;
        self.frame = 0;
        self.player = Player::new(self.center(), &self.tuning);
        self.phase = GamePhase::Playing;
        log::info!("Run restarted (high score {})", self.score.high_score());
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
