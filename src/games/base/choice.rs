//! Cards that wait on a choice from the player who played them.

use super::selection;
use crate::cards::{CardDefinition, CardId, CardType};
use crate::core::{GameError, GameResult, PlayerId};
use crate::effects::{ActiveCard, CardEffect};
use crate::rules::Game;
use crate::zones::TrashSource;

/// +1 action. Discard any number of cards, then draw that many.
#[derive(Clone, Debug)]
pub struct Cellar {
    definition: CardDefinition,
}

impl Cellar {
    #[must_use]
    pub fn new() -> Self {
        Self {
            definition: CardDefinition::new("cellar", &[CardType::Action], 2).with_actions(1),
        }
    }
}

impl Default for Cellar {
    fn default() -> Self {
        Self::new()
    }
}

impl CardEffect for Cellar {
    fn definition(&self) -> &CardDefinition {
        &self.definition
    }

    fn play(&self, game: &mut Game, active: &mut ActiveCard) -> GameResult<()> {
        active.await_owner(game);
        Ok(())
    }

    fn respond(
        &self,
        game: &mut Game,
        _active: &mut ActiveCard,
        commands: &[String],
        player: PlayerId,
    ) -> GameResult<()> {
        let cards = selection(&self.definition.id, commands)?;
        game.player(player).check_hand_contains(&cards)?;

        let hand = game.player_mut(player);
        for card in &cards {
            hand.discard(card)?;
        }
        hand.draw(cards.len());
        Ok(())
    }
}

/// Trash up to four cards from your hand.
#[derive(Clone, Debug)]
pub struct Chapel {
    definition: CardDefinition,
}

impl Chapel {
    const MAX_TRASHED: usize = 4;

    #[must_use]
    pub fn new() -> Self {
        Self {
            definition: CardDefinition::new("chapel", &[CardType::Action], 2),
        }
    }
}

impl Default for Chapel {
    fn default() -> Self {
        Self::new()
    }
}

impl CardEffect for Chapel {
    fn definition(&self) -> &CardDefinition {
        &self.definition
    }

    fn play(&self, game: &mut Game, active: &mut ActiveCard) -> GameResult<()> {
        active.await_owner(game);
        Ok(())
    }

    fn respond(
        &self,
        game: &mut Game,
        _active: &mut ActiveCard,
        commands: &[String],
        player: PlayerId,
    ) -> GameResult<()> {
        let cards = selection(&self.definition.id, commands)?;
        if cards.len() > Self::MAX_TRASHED {
            return Err(GameError::InvalidActivity(format!(
                "chapel trashes at most {} cards",
                Self::MAX_TRASHED
            )));
        }
        game.player(player).check_hand_contains(&cards)?;

        for card in &cards {
            game.trash_card(player, card, TrashSource::Hand)?;
        }
        Ok(())
    }
}

/// +2 gold. You may put your whole draw pile into your discard pile.
///
/// Responses: `yes` or `no`.
#[derive(Clone, Debug)]
pub struct Chancellor {
    definition: CardDefinition,
}

impl Chancellor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            definition: CardDefinition::new("chancellor", &[CardType::Action], 3).with_gold(2),
        }
    }
}

impl Default for Chancellor {
    fn default() -> Self {
        Self::new()
    }
}

impl CardEffect for Chancellor {
    fn definition(&self) -> &CardDefinition {
        &self.definition
    }

    fn play(&self, game: &mut Game, active: &mut ActiveCard) -> GameResult<()> {
        active.await_owner(game);
        Ok(())
    }

    fn respond(
        &self,
        game: &mut Game,
        _active: &mut ActiveCard,
        commands: &[String],
        player: PlayerId,
    ) -> GameResult<()> {
        match commands {
            [answer] if answer == "yes" => {
                game.player_mut(player).discard_draw_pile();
                Ok(())
            }
            [answer] if answer == "no" => Ok(()),
            _ => Err(GameError::InvalidActivity("chancellor expects `yes` or `no`".to_string())),
        }
    }
}

/// Gain a supply card costing at most `max_cost`, optionally trashing the
/// played card first (Feast).
///
/// An empty `select` gains nothing, for when no pile is affordable.
#[derive(Clone, Debug)]
pub struct GainUpTo {
    definition: CardDefinition,
    max_cost: i64,
    trash_self: bool,
}

impl GainUpTo {
    /// Trash this card. Gain a card costing up to 5.
    #[must_use]
    pub fn feast() -> Self {
        Self {
            definition: CardDefinition::new("feast", &[CardType::Action], 4),
            max_cost: 5,
            trash_self: true,
        }
    }

    /// Gain a card costing up to 4.
    #[must_use]
    pub fn workshop() -> Self {
        Self {
            definition: CardDefinition::new("workshop", &[CardType::Action], 3),
            max_cost: 4,
            trash_self: false,
        }
    }
}

impl CardEffect for GainUpTo {
    fn definition(&self) -> &CardDefinition {
        &self.definition
    }

    fn play(&self, game: &mut Game, active: &mut ActiveCard) -> GameResult<()> {
        if self.trash_self {
            game.trash_card(active.owner, &self.definition.id, TrashSource::InPlay)?;
        }
        active.await_owner(game);
        Ok(())
    }

    fn respond(
        &self,
        game: &mut Game,
        _active: &mut ActiveCard,
        commands: &[String],
        player: PlayerId,
    ) -> GameResult<()> {
        let cards = selection(&self.definition.id, commands)?;
        let card: &CardId = match cards.as_slice() {
            [] => return Ok(()),
            [card] => card,
            _ => {
                return Err(GameError::InvalidActivity(format!(
                    "{} gains a single card",
                    self.definition.id
                )))
            }
        };

        let cost = game.catalog().effect(card)?.cost(game);
        game.check_supply(card)?;
        if cost > self.max_cost {
            return Err(GameError::InvalidActivity(format!(
                "{} costs {}, more than {}",
                card, cost, self.max_cost
            )));
        }
        game.gain(player, card)
    }
}
