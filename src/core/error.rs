//! Rule violations surfaced to callers.
//!
//! Every variant is recoverable: validation runs before any mutation, so a
//! rejected command leaves the session exactly as it was.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::CardId;
use crate::rules::Phase;

/// Result alias used throughout the engine.
pub type GameResult<T> = Result<T, GameError>;

/// Errors raised by the engine and the command parser.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Command names a player outside the session.
    #[error("{0} is not playing this game")]
    InvalidPlayer(String),

    /// Unrecognized verb while no wait is pending.
    #[error("{0} is not a recognized verb")]
    InvalidCommand(String),

    /// A response violates a card-specific rule.
    #[error("invalid activity: {0}")]
    InvalidActivity(String),

    /// Input from a player other than the one currently authorized.
    #[error("it is not {0}'s turn to act")]
    NotYourTurn(PlayerId),

    /// An Action card was played with zero actions left.
    #[error("no remaining actions")]
    NoRemainingActions,

    /// A referenced card is absent from the expected zone.
    #[error("{0} is not in your current hand")]
    CardNotInHand(CardId),

    /// Input other than a response while a card waits on `player`.
    #[error("{card} is waiting for a response from {player}")]
    AwaitingResponse { player: PlayerId, card: CardId },

    /// The card's type may not be played in the current phase.
    #[error("{card} cannot be played during the {phase:?} phase")]
    WrongPhase { card: CardId, phase: Phase },

    /// The card id is not registered in the catalog.
    #[error("unknown card {0}")]
    UnknownCard(CardId),

    /// A buy was attempted with zero buys left.
    #[error("no remaining buys")]
    NoRemainingBuys,

    /// A buy costs more than the gold available.
    #[error("needs {needed} gold, only {available} available")]
    InsufficientGold { needed: i64, available: i64 },

    /// The card is not part of this session's supply.
    #[error("{0} is not in the supply")]
    NotInSupply(CardId),

    /// The card's supply pile is empty.
    #[error("the {0} pile is empty")]
    PileEmpty(CardId),

    /// The session could not be constructed.
    #[error("invalid setup: {0}")]
    InvalidSetup(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            GameError::InvalidPlayer("patten".into()).to_string(),
            "patten is not playing this game"
        );
        assert_eq!(
            GameError::CardNotInHand(CardId::new("gold")).to_string(),
            "gold is not in your current hand"
        );
        assert_eq!(
            GameError::NotYourTurn(PlayerId::new(2)).to_string(),
            "it is not Player 2's turn to act"
        );
        assert_eq!(
            GameError::InsufficientGold { needed: 6, available: 4 }.to_string(),
            "needs 6 gold, only 4 available"
        );
    }

    #[test]
    fn test_awaiting_response_message() {
        let err = GameError::AwaitingResponse {
            player: PlayerId::new(1),
            card: CardId::new("bureaucrat"),
        };
        assert_eq!(err.to_string(), "bureaucrat is waiting for a response from Player 1");
    }
}
