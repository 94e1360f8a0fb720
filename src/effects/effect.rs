//! The capability contract every card kind implements.
//!
//! Yield accessors default to the card's static `CardDefinition`; a kind
//! overrides them only when the value depends on the session. `play`
//! starts resolution, and interactive kinds add `respond`/`resume` to
//! drive the wait protocol:
//!
//! 1. `play` may call `Game::wait_for` and return, suspending the engine.
//! 2. `Game::respond` forwards the target's reply to `respond`, which must
//!    validate everything before mutating anything.
//! 3. `Game::respond` then calls `resume`: `true` keeps the engine
//!    suspended (usually re-targeted at the next player), `false` ends
//!    resolution and clears the wait.

use std::fmt;

use super::step::{ActiveCard, Step};
use crate::cards::{CardDefinition, CardId};
use crate::core::{GameError, GameResult, PlayerId};
use crate::rules::Game;

/// Behaviour bound to a card kind.
///
/// Implemented once per kind and shared through the `CardCatalog`; any
/// per-resolution state belongs in the `ActiveCard` passed to each call.
pub trait CardEffect: fmt::Debug + Send + Sync {
    /// Static data for this kind.
    fn definition(&self) -> &CardDefinition;

    fn id(&self) -> &CardId {
        &self.definition().id
    }

    fn gold(&self, _game: &Game) -> i64 {
        self.definition().gold
    }

    fn actions(&self, _game: &Game) -> i64 {
        self.definition().actions
    }

    fn buys(&self, _game: &Game) -> i64 {
        self.definition().buys
    }

    fn cost(&self, _game: &Game) -> i64 {
        self.definition().cost
    }

    fn victory(&self, _game: &Game) -> i64 {
        self.definition().victory
    }

    /// Supply pile size for this session.
    fn size(&self, game: &Game) -> usize {
        self.definition().pile.resolve(game.player_count())
    }

    /// Begin resolution. The default draws the definition's `cards` for
    /// the owner and completes immediately.
    fn play(&self, game: &mut Game, active: &mut ActiveCard) -> GameResult<()> {
        let cards = self.definition().cards;
        if cards > 0 {
            game.player_mut(active.owner).draw(cards);
        }
        active.step = Step::Done;
        Ok(())
    }

    /// Apply `player`'s reply to the pending wait.
    fn respond(
        &self,
        _game: &mut Game,
        _active: &mut ActiveCard,
        _commands: &[String],
        _player: PlayerId,
    ) -> GameResult<()> {
        Err(GameError::InvalidActivity(format!("{} does not take responses", self.id())))
    }

    /// Advance to the next step. Returns `true` while another reply is
    /// still needed.
    fn resume(&self, _game: &mut Game, active: &mut ActiveCard) -> bool {
        active.step = Step::Done;
        false
    }
}
