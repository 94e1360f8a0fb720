//! The base card set.
//!
//! Treasures, Victory cards and the simpler Actions are `Plain` cards:
//! their whole effect is the yields in their definition. The rest have a
//! dedicated `CardEffect`:
//!
//! - `CouncilRoom`, `Adventurer`: resolve immediately
//! - `Bureaucrat`: attack, waits on every other player in turn order
//! - `Cellar`, `Chapel`, `Chancellor`, `GainUpTo` (Feast, Workshop):
//!   wait on the player who played them

mod attack;
mod choice;
mod plain;

pub use attack::Bureaucrat;
pub use choice::{Cellar, Chancellor, Chapel, GainUpTo};
pub use plain::{Adventurer, CouncilRoom, Plain};

use crate::cards::{CardCatalog, CardDefinition, CardId, CardType, PileSize};
use crate::core::{GameError, GameResult};

/// Build the catalog of every card in the set.
#[must_use]
pub fn catalog() -> CardCatalog {
    let mut catalog = CardCatalog::new();

    for definition in plain_definitions() {
        catalog.register(Plain::new(definition));
    }

    catalog.register(Adventurer::new());
    catalog.register(Bureaucrat::new());
    catalog.register(Cellar::new());
    catalog.register(Chancellor::new());
    catalog.register(Chapel::new());
    catalog.register(CouncilRoom::new());
    catalog.register(GainUpTo::feast());
    catalog.register(GainUpTo::workshop());

    catalog
}

fn treasure(id: &str, cost: i64, gold: i64, pile: usize) -> CardDefinition {
    CardDefinition::new(id, &[CardType::Treasure], cost)
        .with_gold(gold)
        .with_pile(PileSize::Fixed(pile))
}

fn victory(id: &str, cost: i64, points: i64, pile: PileSize) -> CardDefinition {
    CardDefinition::new(id, &[CardType::Victory], cost)
        .with_victory(points)
        .with_pile(pile)
}

fn action(id: &str, cost: i64) -> CardDefinition {
    CardDefinition::new(id, &[CardType::Action], cost)
}

fn plain_definitions() -> Vec<CardDefinition> {
    vec![
        treasure("copper", 0, 1, 60),
        treasure("silver", 3, 2, 40),
        treasure("gold", 6, 3, 30),
        victory("estate", 2, 1, PileSize::Fixed(24)),
        victory("duchy", 5, 3, PileSize::Fixed(12)),
        victory("province", 8, 6, PileSize::PerPlayer { min: 12, per_player: 3 }),
        CardDefinition::new("curse", &[CardType::Curse], 0)
            .with_victory(-1)
            .with_pile(PileSize::PerOpponent(10)),
        action("village", 3).with_cards(1).with_actions(2),
        action("woodcutter", 3).with_buys(1).with_gold(2),
        action("smithy", 4).with_cards(3),
        action("festival", 5).with_actions(2).with_buys(1).with_gold(2),
        action("laboratory", 5).with_cards(2).with_actions(1),
        action("market", 5).with_cards(1).with_actions(1).with_buys(1).with_gold(1),
        CardDefinition::new("moat", &[CardType::Action, CardType::Reaction], 2).with_cards(2),
    ]
}

/// Parse a `select <card> ...` response into card ids.
fn selection(card: &CardId, commands: &[String]) -> GameResult<Vec<CardId>> {
    match commands.split_first() {
        Some((verb, cards)) if verb == "select" => {
            Ok(cards.iter().map(|c| CardId::new(c.as_str())).collect())
        }
        _ => Err(GameError::InvalidActivity(format!(
            "{} expects `select <card> ...`",
            card
        ))),
    }
}
