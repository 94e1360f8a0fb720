//! The single external entry point.
//!
//! The parser only resolves the player name and the verb; every game rule
//! is checked by `Game`.

use tracing::debug;

use super::Command;
use crate::core::{GameError, GameResult};
use crate::rules::Game;

/// Routes text commands from named players into a `Game`.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use rust_dominion::cards::{CardCatalog, CardId};
/// use rust_dominion::command::CommandParser;
/// use rust_dominion::core::{EngineConfig, GameError};
/// use rust_dominion::rules::Game;
///
/// let game = Game::new(
///     Arc::new(CardCatalog::base()),
///     &["mrkill", "jacob"],
///     &[CardId::new("copper"), CardId::new("estate")],
///     EngineConfig::default(),
/// ).unwrap();
/// let mut parser = CommandParser::new(game);
///
/// assert!(matches!(parser.eval("patten", "done"), Err(GameError::InvalidPlayer(_))));
/// parser.eval("mrkill", "done").unwrap();
/// assert_eq!(parser.game().player_name(), "jacob");
/// ```
#[derive(Clone, Debug)]
pub struct CommandParser {
    game: Game,
}

impl CommandParser {
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    #[must_use]
    pub fn into_game(self) -> Game {
        self.game
    }

    /// Evaluate one command from `player`.
    pub fn eval(&mut self, player: &str, text: &str) -> GameResult<()> {
        let id = self
            .game
            .player_id(player)
            .ok_or_else(|| GameError::InvalidPlayer(player.to_string()))?;

        let command = Command::parse(text)?;
        debug!(player, verb = command.verb(), "command");

        match command {
            Command::Play(card) => self.game.play(&card, id),
            Command::Buy(card) => self.game.buy(&card, id),
            Command::Done => self.game.end_turn(id),
            Command::Response(words) if self.game.pending().is_some() => self.game.respond(&words, id),
            Command::Response(words) => Err(GameError::InvalidCommand(
                words.into_iter().next().unwrap_or_default(),
            )),
        }
    }
}
