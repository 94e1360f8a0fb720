//! Text command interface.
//!
//! ## Grammar
//!
//! Space-delimited tokens:
//! - `play <card-id>`: play a card from hand
//! - `buy <card-id>`: buy a card from the supply
//! - `done`: end your turn
//! - anything else: a response to the pending wait (`select ...`,
//!   `reveal`, `yes`, `no`), interpreted by the active card. Malformed
//!   `play`/`buy`/`done` lines such as `done now` are responses too.

mod parser;

pub use parser::CommandParser;

use crate::cards::CardId;
use crate::core::{GameError, GameResult};

/// A tokenized command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Play(CardId),
    Buy(CardId),
    Done,
    /// Raw tokens for the active card's `respond`.
    Response(Vec<String>),
}

impl Command {
    /// Tokenize a command line.
    ///
    /// ```
    /// use rust_dominion::command::Command;
    /// use rust_dominion::cards::CardId;
    ///
    /// assert_eq!(Command::parse("play copper").unwrap(), Command::Play(CardId::new("copper")));
    /// assert_eq!(Command::parse("  done ").unwrap(), Command::Done);
    /// assert_eq!(
    ///     Command::parse("select estate estate").unwrap(),
    ///     Command::Response(vec!["select".into(), "estate".into(), "estate".into()])
    /// );
    /// ```
    pub fn parse(text: &str) -> GameResult<Self> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        match tokens.as_slice() {
            [] => Err(GameError::InvalidCommand(String::new())),
            ["play", card] => Ok(Command::Play(CardId::new(*card))),
            ["buy", card] => Ok(Command::Buy(CardId::new(*card))),
            ["done"] => Ok(Command::Done),
            words => Ok(Command::Response(words.iter().map(|w| w.to_string()).collect())),
        }
    }

    /// The verb this command starts with.
    #[must_use]
    pub fn verb(&self) -> &str {
        match self {
            Command::Play(_) => "play",
            Command::Buy(_) => "buy",
            Command::Done => "done",
            Command::Response(words) => words.first().map_or("", String::as_str),
        }
    }
}
