//! Session configuration.
//!
//! `EngineConfig` carries everything a host can tune when opening a
//! session: hand size, starting deck, seat limits, RNG seed, and the
//! policy for ending a turn while another player still owes a response.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// What `done` does while a card is waiting on a response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingTurnEnd {
    /// Refuse to end the turn until the wait is resolved.
    #[default]
    Reject,
    /// End the turn anyway. A wait on the turn owner is dropped; a wait
    /// on another player stays outstanding into the next turn.
    Discard,
}

/// Configuration for a single session.
///
/// ## Example
///
/// ```
/// use rust_dominion::core::{EngineConfig, PendingTurnEnd};
///
/// let config = EngineConfig::default()
///     .with_seed(7)
///     .with_pending_turn_end(PendingTurnEnd::Discard);
///
/// assert_eq!(config.hand_size, 5);
/// assert_eq!(config.starting_deck_size(), 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Cards drawn at setup and at every cleanup.
    pub hand_size: usize,

    /// Cards each player starts with, as (card, copies).
    pub starting_deck: Vec<(CardId, usize)>,

    /// Fewest players a session accepts.
    pub min_players: usize,

    /// Seed for every shuffle in the session.
    pub seed: u64,

    /// Behaviour of `done` while a response is pending.
    pub pending_turn_end: PendingTurnEnd,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hand_size: 5,
            starting_deck: vec![(CardId::new("estate"), 3), (CardId::new("copper"), 7)],
            min_players: 2,
            seed: 0,
            pending_turn_end: PendingTurnEnd::default(),
        }
    }
}

impl EngineConfig {
    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Replace the starting deck.
    #[must_use]
    pub fn with_starting_deck(mut self, deck: Vec<(CardId, usize)>) -> Self {
        self.starting_deck = deck;
        self
    }

    /// Set the minimum player count.
    #[must_use]
    pub fn with_min_players(mut self, min_players: usize) -> Self {
        self.min_players = min_players;
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the pending-wait turn end policy.
    #[must_use]
    pub fn with_pending_turn_end(mut self, policy: PendingTurnEnd) -> Self {
        self.pending_turn_end = policy;
        self
    }

    /// Expand the starting deck into individual cards.
    #[must_use]
    pub fn starting_cards(&self) -> Vec<CardId> {
        self.starting_deck
            .iter()
            .flat_map(|(card, copies)| std::iter::repeat(card.clone()).take(*copies))
            .collect()
    }

    /// Total number of cards in the starting deck.
    #[must_use]
    pub fn starting_deck_size(&self) -> usize {
        self.starting_deck.iter().map(|(_, copies)| copies).sum()
    }
}
