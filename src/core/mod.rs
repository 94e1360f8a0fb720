//! Core engine types: players, RNG, configuration, errors.
//!
//! These are the building blocks every other module leans on.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{EngineConfig, PendingTurnEnd};
pub use error::{GameError, GameResult};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
