//! Cards that resolve as soon as they are played.

use crate::cards::{CardDefinition, CardType};
use crate::core::GameResult;
use crate::effects::{ActiveCard, CardEffect, Step};
use crate::rules::Game;

/// A card whose effect is entirely its definition's yields.
#[derive(Clone, Debug)]
pub struct Plain {
    definition: CardDefinition,
}

impl Plain {
    #[must_use]
    pub fn new(definition: CardDefinition) -> Self {
        Self { definition }
    }
}

impl CardEffect for Plain {
    fn definition(&self) -> &CardDefinition {
        &self.definition
    }
}

/// +4 cards, +1 buy; every other player draws a card.
#[derive(Clone, Debug)]
pub struct CouncilRoom {
    definition: CardDefinition,
}

impl CouncilRoom {
    #[must_use]
    pub fn new() -> Self {
        Self {
            definition: CardDefinition::new("council-room", &[CardType::Action], 5)
                .with_cards(4)
                .with_buys(1),
        }
    }
}

impl Default for CouncilRoom {
    fn default() -> Self {
        Self::new()
    }
}

impl CardEffect for CouncilRoom {
    fn definition(&self) -> &CardDefinition {
        &self.definition
    }

    fn play(&self, game: &mut Game, active: &mut ActiveCard) -> GameResult<()> {
        game.player_mut(active.owner).draw(self.definition.cards);
        for other in game.player_turns().into_iter().skip(1) {
            game.player_mut(other).draw(1);
        }
        active.step = Step::Done;
        Ok(())
    }
}

/// Reveal cards until two Treasures turn up; keep the Treasures, discard
/// the rest.
#[derive(Clone, Debug)]
pub struct Adventurer {
    definition: CardDefinition,
}

impl Adventurer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            definition: CardDefinition::new("adventurer", &[CardType::Action], 6),
        }
    }
}

impl Default for Adventurer {
    fn default() -> Self {
        Self::new()
    }
}

impl CardEffect for Adventurer {
    fn definition(&self) -> &CardDefinition {
        &self.definition
    }

    fn play(&self, game: &mut Game, active: &mut ActiveCard) -> GameResult<()> {
        let mut treasures = Vec::with_capacity(2);
        let mut others = Vec::new();

        while treasures.len() < 2 {
            let Some(card) = game.player_mut(active.owner).reveal() else {
                break;
            };
            let is_treasure = game
                .catalog()
                .definition(&card)
                .is_some_and(|d| d.is_treasure());
            if is_treasure {
                treasures.push(card);
            } else {
                others.push(card);
            }
        }

        // Set-aside cards go down only after revealing stops, so they are
        // never reshuffled into the pile being revealed from.
        let player = game.player_mut(active.owner);
        for card in treasures {
            player.add_to_hand(card);
        }
        for card in others {
            player.add_to_discard(card);
        }

        active.step = Step::Done;
        Ok(())
    }
}
