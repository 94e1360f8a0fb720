//! Attack cards.

use tracing::debug;

use crate::cards::{CardDefinition, CardId, CardType};
use crate::core::{GameError, GameResult, PlayerId};
use crate::effects::{ActiveCard, CardEffect};
use crate::rules::Game;

/// Gain a Silver onto your deck. Each other player, in turn order, puts a
/// Victory card from hand onto their deck, or reveals a hand without one.
///
/// Responses:
/// - `select <victory-card>`
/// - `reveal` when the hand holds no Victory card
/// - `reveal <reaction>` to shrug off the attack, e.g. `reveal moat`
#[derive(Clone, Debug)]
pub struct Bureaucrat {
    definition: CardDefinition,
    silver: CardId,
}

impl Bureaucrat {
    #[must_use]
    pub fn new() -> Self {
        Self {
            definition: CardDefinition::new("bureaucrat", &[CardType::Action, CardType::Attack], 4),
            silver: CardId::new("silver"),
        }
    }

    fn is_type(game: &Game, card: &CardId, card_type: CardType) -> bool {
        game.catalog()
            .definition(card)
            .is_some_and(|d| d.has_type(card_type))
    }
}

impl Default for Bureaucrat {
    fn default() -> Self {
        Self::new()
    }
}

impl CardEffect for Bureaucrat {
    fn definition(&self) -> &CardDefinition {
        &self.definition
    }

    fn play(&self, game: &mut Game, active: &mut ActiveCard) -> GameResult<()> {
        if game.check_supply(&self.silver).is_ok() {
            game.gain_onto_deck(active.owner, &self.silver)?;
        }
        active.advance(game);
        Ok(())
    }

    fn respond(
        &self,
        game: &mut Game,
        _active: &mut ActiveCard,
        commands: &[String],
        player: PlayerId,
    ) -> GameResult<()> {
        let words: Vec<&str> = commands.iter().map(String::as_str).collect();
        match words.as_slice() {
            ["select", card] => {
                let card = CardId::new(*card);
                if !game.player(player).has_in_hand(&card) {
                    return Err(GameError::CardNotInHand(card));
                }
                if !Self::is_type(game, &card, CardType::Victory) {
                    return Err(GameError::InvalidActivity(format!("{} is not a Victory card", card)));
                }
                game.player_mut(player).place_on_top(&card)
            }
            ["reveal"] => {
                let holds_victory = game
                    .player(player)
                    .hand()
                    .iter()
                    .any(|card| Self::is_type(game, card, CardType::Victory));
                if holds_victory {
                    return Err(GameError::InvalidActivity(
                        "hand holds a Victory card".to_string(),
                    ));
                }
                Ok(())
            }
            ["reveal", card] => {
                let card = CardId::new(*card);
                if !game.player(player).has_in_hand(&card) {
                    return Err(GameError::CardNotInHand(card));
                }
                if !Self::is_type(game, &card, CardType::Reaction) {
                    return Err(GameError::InvalidActivity(format!("{} is not a Reaction card", card)));
                }
                debug!(player = %game.name_of(player), card = %card, "attack blocked");
                Ok(())
            }
            _ => Err(GameError::InvalidActivity(format!(
                "{} expects `select <victory-card>` or `reveal`",
                self.definition.id
            ))),
        }
    }

    fn resume(&self, game: &mut Game, active: &mut ActiveCard) -> bool {
        active.advance(game)
    }
}
