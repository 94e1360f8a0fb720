//! Turn phase and the pending-wait slot.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::PlayerId;

/// Per-turn sub-state gating which cards may be played.
///
/// Phases only move forward within a turn: Action → Treasure → Buy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Action and Treasure cards may be played.
    #[default]
    Action,
    /// A Treasure has been played: only Treasures from here on.
    Treasure,
    /// A card has been bought: nothing more may be played.
    Buy,
}

/// A card waiting on one player's response.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pending {
    pub player: PlayerId,
    pub card: CardId,
}

impl Pending {
    #[must_use]
    pub fn new(player: PlayerId, card: impl Into<CardId>) -> Self {
        Self {
            player,
            card: card.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_order() {
        assert!(Phase::Action < Phase::Treasure);
        assert!(Phase::Treasure < Phase::Buy);
        assert_eq!(Phase::default(), Phase::Action);
    }

    #[test]
    fn test_pending_serialization() {
        let pending = Pending::new(PlayerId::new(1), "bureaucrat");
        let json = serde_json::to_string(&pending).unwrap();
        let back: Pending = serde_json::from_str(&json).unwrap();
        assert_eq!(pending, back);
    }
}
