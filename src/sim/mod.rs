//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module stays free of rendering and
//! platform concerns:
//! - `dt` supplied by the caller is the only time source
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)

pub mod arena;
pub mod asteroid;
pub mod collision;
pub mod entity;
pub mod player;
pub mod score;
pub mod spawner;
pub mod state;
pub mod tick;

pub use arena::{Arena, EntityId};
pub use asteroid::Asteroid;
pub use collision::{circles_overlap, overlaps};
pub use entity::{Body, Capabilities, EntityKind};
pub use player::{Player, Shot};
pub use score::{ScoreManager, ScoreRules, ScoreState};
pub use spawner::{AsteroidField, Edge};
pub use state::{GameEvent, GamePhase, GameState, SplitOutcome};
pub use tick::{TickInput, tick};
