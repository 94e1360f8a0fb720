//! # rust-dominion
//!
//! A rules engine for a Dominion-style deck-building card game.
//!
//! ## Design Principles
//!
//! 1. **One entry point**: every player intent arrives as a line of text
//!    through `CommandParser::eval`, which either applies it in full or
//!    rejects it with a `GameError` and leaves the game untouched.
//!
//! 2. **Explicit suspension**: a card that needs a choice records the
//!    player it is waiting on and its own progress (`Step`). The engine is
//!    resumed by that player's next response, never by a blocked call.
//!
//! 3. **Open card set**: cards are `CardEffect` implementations registered
//!    in a `CardCatalog`; the engine knows nothing about individual cards.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: zones and supply use `im-rs`, so
//!   cloning a `Game` for a snapshot is cheap.
//!
//! - **Deterministic shuffles**: each player owns a `GameRng` forked from
//!   the session seed.
//!
//! ## Modules
//!
//! - `core`: Player ids, errors, RNG, engine configuration
//! - `cards`: Card definitions and the catalog
//! - `effects`: The `CardEffect` contract and resolution state
//! - `zones`: Per-player card zones
//! - `rules`: The `Game` state machine
//! - `command`: Text command parsing
//! - `games`: Card sets (currently the base set)

pub mod core;
pub mod cards;
pub mod effects;
pub mod zones;
pub mod rules;
pub mod command;
pub mod games;

// Re-export commonly used types
pub use crate::core::{EngineConfig, GameError, GameResult, GameRng, PendingTurnEnd, PlayerId, PlayerMap};

pub use crate::cards::{CardCatalog, CardDefinition, CardId, CardType, CardTypes, PileSize};

pub use crate::effects::{ActiveCard, CardEffect, Step};

pub use crate::zones::{Player, TrashSource};

pub use crate::rules::{Game, Pending, Phase};

pub use crate::command::{Command, CommandParser};
