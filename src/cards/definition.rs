//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card kind:
//! its type tags, cost, yields, victory points, and supply pile size.
//! Behaviour lives in the `CardEffect` bound to the definition.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Unique identifier for a card kind, e.g. `"council-room"`.
///
/// Zones hold `CardId`s directly: two Coppers in a hand are two equal ids.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for CardId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CardId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Card type tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Treasure,
    Action,
    Attack,
    Victory,
    Curse,
    Reaction,
    Duration,
    Unique,
}

/// Type tags of a card. Most cards carry one or two.
pub type CardTypes = SmallVec<[CardType; 2]>;

/// Supply pile size, fixed or scaled by player count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PileSize {
    /// Same size regardless of player count.
    Fixed(usize),
    /// `max(min, per_player * player_count)`.
    PerPlayer { min: usize, per_player: usize },
    /// `per_opponent * (player_count - 1)`.
    PerOpponent(usize),
}

impl PileSize {
    /// Resolve the pile size for a session.
    #[must_use]
    pub fn resolve(self, player_count: usize) -> usize {
        match self {
            PileSize::Fixed(n) => n,
            PileSize::PerPlayer { min, per_player } => min.max(per_player * player_count),
            PileSize::PerOpponent(n) => n * player_count.saturating_sub(1),
        }
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use rust_dominion::cards::{CardDefinition, CardType, PileSize};
///
/// let market = CardDefinition::new("market", &[CardType::Action], 5)
///     .with_cards(1)
///     .with_actions(1)
///     .with_buys(1)
///     .with_gold(1);
///
/// assert!(market.is_action());
/// assert_eq!(market.pile, PileSize::Fixed(10));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub id: CardId,
    pub types: CardTypes,
    pub cost: i64,
    /// Gold added to the player's counter when played.
    pub gold: i64,
    /// Actions added when played.
    pub actions: i64,
    /// Buys added when played.
    pub buys: i64,
    /// Cards the player draws when played.
    pub cards: usize,
    pub victory: i64,
    pub pile: PileSize,
}

impl CardDefinition {
    /// Create a definition with zero yields and a pile of 10.
    #[must_use]
    pub fn new(id: impl Into<CardId>, types: &[CardType], cost: i64) -> Self {
        Self {
            id: id.into(),
            types: types.iter().copied().collect(),
            cost,
            gold: 0,
            actions: 0,
            buys: 0,
            cards: 0,
            victory: 0,
            pile: PileSize::Fixed(10),
        }
    }

    #[must_use]
    pub fn with_gold(mut self, gold: i64) -> Self {
        self.gold = gold;
        self
    }

    #[must_use]
    pub fn with_actions(mut self, actions: i64) -> Self {
        self.actions = actions;
        self
    }

    #[must_use]
    pub fn with_buys(mut self, buys: i64) -> Self {
        self.buys = buys;
        self
    }

    #[must_use]
    pub fn with_cards(mut self, cards: usize) -> Self {
        self.cards = cards;
        self
    }

    #[must_use]
    pub fn with_victory(mut self, victory: i64) -> Self {
        self.victory = victory;
        self
    }

    #[must_use]
    pub fn with_pile(mut self, pile: PileSize) -> Self {
        self.pile = pile;
        self
    }

    /// Check whether the card carries a type tag.
    #[must_use]
    pub fn has_type(&self, card_type: CardType) -> bool {
        self.types.contains(&card_type)
    }

    #[must_use]
    pub fn is_action(&self) -> bool {
        self.has_type(CardType::Action)
    }

    #[must_use]
    pub fn is_treasure(&self) -> bool {
        self.has_type(CardType::Treasure)
    }

    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.has_type(CardType::Victory)
    }
}
