//! Player zones: hand, draw pile, discard pile, in-play.
//!
//! Each `Player` owns its zones outright; the session trash pile and the
//! supply live on `Game`.

pub mod player;

pub use player::Player;

use serde::{Deserialize, Serialize};

/// Zone a card is trashed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrashSource {
    Hand,
    InPlay,
}
