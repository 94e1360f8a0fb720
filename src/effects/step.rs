//! Resolution state of the card currently being played.
//!
//! Multi-step cards keep their progress in an explicit `Step` rather than
//! in a suspended call stack, so the engine can always report exactly who
//! it is waiting on. Positions count seats clockwise from the player who
//! played the card, so a wait still names the right player after the turn
//! has moved on.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::CardId;
use crate::core::PlayerId;
use crate::rules::Game;

/// Progress of an active card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// Played, nothing resolved yet.
    Created,
    /// Waiting on the seat this many places after the owner (0 is the
    /// owner).
    AwaitingPlayer(usize),
    /// Resolution finished.
    Done,
}

/// The card being resolved and its progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveCard {
    pub card: CardId,
    /// Player who played the card.
    pub owner: PlayerId,
    pub step: Step,
}

impl ActiveCard {
    #[must_use]
    pub fn new(card: CardId, owner: PlayerId) -> Self {
        Self {
            card,
            owner,
            step: Step::Created,
        }
    }

    /// Check whether resolution has finished.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.step == Step::Done
    }

    /// Player the card is waiting on, if any.
    #[must_use]
    pub fn target(&self, game: &Game) -> Option<PlayerId> {
        match self.step {
            Step::AwaitingPlayer(offset) => Some(self.owner.after(offset, game.player_count())),
            _ => None,
        }
    }

    /// Wait on the seat `offset` places after the owner, or finish once
    /// every seat has been addressed.
    ///
    /// Returns `true` when a new wait was set.
    pub fn await_position(&mut self, game: &mut Game, offset: usize) -> bool {
        let count = game.player_count();
        if offset >= count {
            debug!(card = %self.card, "no players left to address");
            self.step = Step::Done;
            return false;
        }

        self.step = Step::AwaitingPlayer(offset);
        game.wait_for(self.owner.after(offset, count), self.card.clone());
        true
    }

    /// Wait on the owner.
    pub fn await_owner(&mut self, game: &mut Game) -> bool {
        self.await_position(game, 0)
    }

    /// Move the wait on to the next seat.
    pub fn advance(&mut self, game: &mut Game) -> bool {
        let next = match self.step {
            Step::Created => 1,
            Step::AwaitingPlayer(offset) => offset + 1,
            Step::Done => return false,
        };
        self.await_position(game, next)
    }
}
