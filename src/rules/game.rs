//! Session orchestrator.
//!
//! `Game` owns every player, the supply and the trash pile, and runs the
//! turn state machine:
//!
//! - **AwaitingAction**: phase is `Action`, no wait pending
//! - **AwaitingTreasure**: phase is `Treasure` (or `Buy`), no wait pending
//! - **AwaitingResponse**: a card is waiting on one player's reply
//!
//! All rule checks happen before any state is touched, so a rejected
//! command never leaves a partial mutation behind.

use std::sync::Arc;

use im::{OrdMap, Vector};
use tracing::{debug, info, warn};

use super::phase::{Pending, Phase};
use crate::cards::{CardCatalog, CardId};
use crate::core::{EngineConfig, GameError, GameResult, GameRng, PendingTurnEnd, PlayerId, PlayerMap};
use crate::effects::ActiveCard;
use crate::zones::{Player, TrashSource};

/// A running session.
///
/// Cloning is cheap: zones are persistent vectors and the catalog is
/// shared.
#[derive(Clone, Debug)]
pub struct Game {
    catalog: Arc<CardCatalog>,
    config: EngineConfig,
    names: Vec<String>,
    players: PlayerMap<Player>,
    turn_index: usize,
    phase: Phase,
    active: Option<ActiveCard>,
    pending: Option<Pending>,
    supply: OrdMap<CardId, usize>,
    trash: Vector<CardId>,
}

impl Game {
    /// Open a session for `players` (in turn order) with the given supply.
    ///
    /// Each player starts with the configured deck and draws an opening
    /// hand. Supply piles are sized by each card's `size`.
    pub fn new<S: AsRef<str>>(
        catalog: Arc<CardCatalog>,
        players: &[S],
        supply: &[CardId],
        config: EngineConfig,
    ) -> GameResult<Self> {
        let names: Vec<String> = players.iter().map(|p| p.as_ref().to_string()).collect();

        if names.len() < config.min_players.max(1) {
            return Err(GameError::InvalidSetup(format!(
                "at least {} players are required, got {}",
                config.min_players,
                names.len()
            )));
        }
        if names.len() > 255 {
            return Err(GameError::InvalidSetup("at most 255 players supported".to_string()));
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(GameError::InvalidSetup(format!("{} is seated twice", name)));
            }
        }
        if let Some(unknown) = supply.iter().find(|card| !catalog.contains(card)) {
            return Err(GameError::UnknownCard(unknown.clone()));
        }

        let mut rng = GameRng::new(config.seed);
        let starting_cards = config.starting_cards();
        let players = PlayerMap::new(names.len(), |_| {
            Player::new(starting_cards.clone(), config.hand_size, rng.fork())
        });

        let mut game = Self {
            catalog,
            config,
            names,
            players,
            turn_index: 0,
            phase: Phase::Action,
            active: None,
            pending: None,
            supply: OrdMap::new(),
            trash: Vector::new(),
        };

        let piles = supply
            .iter()
            .map(|card| {
                let effect = game.catalog.effect(card)?;
                Ok((card.clone(), effect.size(&game)))
            })
            .collect::<GameResult<OrdMap<_, _>>>()?;
        game.supply = piles;

        info!(players = game.player_count(), piles = game.supply.len(), "session opened");
        Ok(game)
    }

    // === Queries ===

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.names.len()
    }

    /// Player names in turn order.
    #[must_use]
    pub fn player_names(&self) -> &[String] {
        &self.names
    }

    /// Look up a seat by player name.
    #[must_use]
    pub fn player_id(&self, name: &str) -> Option<PlayerId> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| PlayerId::new(i as u8))
    }

    /// Name of a seat.
    #[must_use]
    pub fn name_of(&self, player: PlayerId) -> &str {
        &self.names[player.index()]
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    pub fn player_mut(&mut self, player: PlayerId) -> &mut Player {
        &mut self.players[player]
    }

    /// Number of turns started since the session opened.
    #[must_use]
    pub fn turn_index(&self) -> usize {
        self.turn_index
    }

    /// Seat index of the turn owner.
    #[must_use]
    pub fn player_index(&self) -> usize {
        self.turn_index % self.player_count()
    }

    /// Seat of the turn owner.
    #[must_use]
    pub fn current(&self) -> PlayerId {
        PlayerId::new(self.player_index() as u8)
    }

    /// Name of the turn owner.
    #[must_use]
    pub fn player_name(&self) -> &str {
        self.name_of(self.current())
    }

    /// The turn owner's zones and counters.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current()]
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The wait currently suspending the engine, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&Pending> {
        self.pending.as_ref()
    }

    /// The most recently played card of this turn.
    #[must_use]
    pub fn active_card(&self) -> Option<&ActiveCard> {
        self.active.as_ref()
    }

    /// Turn order rotated so the turn owner comes first.
    #[must_use]
    pub fn player_turns(&self) -> Vec<PlayerId> {
        let count = self.player_count();
        let current = self.current();
        (0..count).map(|offset| current.after(offset, count)).collect()
    }

    /// Cards left in a supply pile, or `None` if the card is not in the
    /// supply.
    #[must_use]
    pub fn supply_count(&self, card: &CardId) -> Option<usize> {
        self.supply.get(card).copied()
    }

    /// All supply piles, ordered by card id.
    pub fn supply(&self) -> impl Iterator<Item = (&CardId, usize)> {
        self.supply.iter().map(|(card, count)| (card, *count))
    }

    /// Cards permanently removed from the session.
    #[must_use]
    pub fn trash(&self) -> &Vector<CardId> {
        &self.trash
    }

    /// Victory points across all of a player's cards.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> i64 {
        self.players[player]
            .all_cards()
            .filter_map(|card| self.catalog.get(card))
            .map(|effect| effect.victory(self))
            .sum()
    }

    // === Operations for card effects ===

    /// Suspend the engine until `player` responds to `card`.
    pub fn wait_for(&mut self, player: PlayerId, card: CardId) {
        debug!(player = %self.name_of(player), card = %card, "waiting for response");
        self.pending = Some(Pending { player, card });
    }

    /// Check that a supply pile exists and is not empty.
    pub fn check_supply(&self, card: &CardId) -> GameResult<()> {
        match self.supply.get(card) {
            None => Err(GameError::NotInSupply(card.clone())),
            Some(0) => Err(GameError::PileEmpty(card.clone())),
            Some(_) => Ok(()),
        }
    }

    fn take_from_supply(&mut self, card: &CardId) -> GameResult<()> {
        self.check_supply(card)?;
        if let Some(count) = self.supply.get_mut(card) {
            *count -= 1;
        }
        Ok(())
    }

    /// Move one card from the supply into a player's discard pile.
    pub fn gain(&mut self, player: PlayerId, card: &CardId) -> GameResult<()> {
        self.take_from_supply(card)?;
        self.players[player].add_to_discard(card.clone());
        debug!(player = %self.name_of(player), card = %card, "gained");
        Ok(())
    }

    /// Move one card from the supply onto a player's draw pile.
    pub fn gain_onto_deck(&mut self, player: PlayerId, card: &CardId) -> GameResult<()> {
        self.take_from_supply(card)?;
        self.players[player].add_to_draw_pile(card.clone());
        debug!(player = %self.name_of(player), card = %card, "gained onto deck");
        Ok(())
    }

    /// Remove a card from a player and record it in the trash pile.
    pub fn trash_card(&mut self, player: PlayerId, card: &CardId, source: TrashSource) -> GameResult<()> {
        let trashed = self.players[player].trash(card, source)?;
        debug!(player = %self.name_of(player), card = %trashed, "trashed");
        self.trash.push_back(trashed);
        Ok(())
    }

    // === Transitions ===

    fn check_seat(&self, player: PlayerId) -> GameResult<()> {
        if self.players.contains(player) {
            Ok(())
        } else {
            Err(GameError::InvalidPlayer(player.to_string()))
        }
    }

    /// Only the turn owner may act, and only while nothing is pending.
    fn authorize(&self, player: PlayerId) -> GameResult<()> {
        self.check_seat(player)?;
        if let Some(pending) = &self.pending {
            if pending.player != player {
                return Err(GameError::NotYourTurn(player));
            }
            return Err(GameError::AwaitingResponse {
                player,
                card: pending.card.clone(),
            });
        }
        if player != self.current() {
            return Err(GameError::NotYourTurn(player));
        }
        Ok(())
    }

    /// Play a card from `player`'s hand.
    ///
    /// Action cards need the Action phase and a remaining action, and
    /// consume one. Treasures move the turn into the Treasure phase for
    /// good. The card's yields are added to the player's counters before
    /// its effect runs; the effect may leave a new wait pending.
    pub fn play(&mut self, card: &CardId, player: PlayerId) -> GameResult<()> {
        self.authorize(player)?;
        if !self.players[player].has_in_hand(card) {
            return Err(GameError::CardNotInHand(card.clone()));
        }

        let effect = self.catalog.effect(card)?;
        let definition = effect.definition();
        let is_action = definition.is_action();
        if is_action {
            if self.phase != Phase::Action {
                return Err(GameError::WrongPhase { card: card.clone(), phase: self.phase });
            }
            if self.players[player].actions <= 0 {
                return Err(GameError::NoRemainingActions);
            }
        } else if definition.is_treasure() {
            if self.phase == Phase::Buy {
                return Err(GameError::WrongPhase { card: card.clone(), phase: self.phase });
            }
        } else {
            return Err(GameError::InvalidActivity(format!("{} cannot be played", card)));
        }

        let gold = effect.gold(self);
        let actions = effect.actions(self);
        let buys = effect.buys(self);

        let acting = &mut self.players[player];
        acting.play(card)?;
        if is_action {
            acting.actions -= 1;
        } else {
            self.phase = Phase::Treasure;
        }
        acting.gold += gold;
        acting.actions += actions;
        acting.buys += buys;

        debug!(player = %self.name_of(player), card = %card, "played");

        let mut active = ActiveCard::new(card.clone(), player);
        let result = effect.play(self, &mut active);
        self.active = Some(active);
        result
    }

    /// Deliver `player`'s response to the pending wait.
    pub fn respond(&mut self, commands: &[String], player: PlayerId) -> GameResult<()> {
        self.check_seat(player)?;
        match &self.pending {
            Some(pending) if pending.player == player => {}
            _ => return Err(GameError::NotYourTurn(player)),
        }

        let Some(mut active) = self.active.take() else {
            return Err(GameError::InvalidActivity("no card is resolving".to_string()));
        };
        let effect = match self.catalog.effect(&active.card) {
            Ok(effect) => effect,
            Err(err) => {
                self.active = Some(active);
                return Err(err);
            }
        };

        if let Err(err) = effect.respond(self, &mut active, commands, player) {
            self.active = Some(active);
            return Err(err);
        }
        debug!(player = %self.name_of(player), card = %active.card, "response accepted");

        if !effect.resume(self, &mut active) {
            debug!(card = %active.card, "resolution complete");
            self.pending = None;
        }
        self.active = Some(active);
        Ok(())
    }

    /// Buy a card from the supply into `player`'s discard pile.
    ///
    /// Moves the turn into the Buy phase.
    pub fn buy(&mut self, card: &CardId, player: PlayerId) -> GameResult<()> {
        self.authorize(player)?;
        let effect = self.catalog.effect(card)?;
        self.check_supply(card)?;

        let cost = effect.cost(self);
        let buyer = &self.players[player];
        if buyer.buys <= 0 {
            return Err(GameError::NoRemainingBuys);
        }
        if buyer.gold < cost {
            return Err(GameError::InsufficientGold { needed: cost, available: buyer.gold });
        }

        self.take_from_supply(card)?;
        let buyer = &mut self.players[player];
        buyer.buys -= 1;
        buyer.gold -= cost;
        buyer.add_to_discard(card.clone());
        self.phase = Phase::Buy;

        debug!(player = %self.name_of(player), card = %card, cost, "bought");
        Ok(())
    }

    /// End the current turn: clean up the turn owner, advance to the next
    /// seat and reset the phase.
    ///
    /// A wait on the outgoing turn owner is dropped with the active card. A
    /// wait on any other player stays outstanding, and its active card
    /// keeps resolving into the next turn.
    pub fn next(&mut self) {
        let current = self.current();
        self.players[current].cleanup();

        match self.pending.take() {
            Some(pending) if pending.player != current => {
                warn!(
                    player = %self.name_of(pending.player),
                    card = %pending.card,
                    "turn ended with another player's response outstanding"
                );
                self.pending = Some(pending);
            }
            Some(pending) => {
                warn!(
                    player = %self.name_of(pending.player),
                    card = %pending.card,
                    "turn ended, dropping the owner's pending response"
                );
                self.active = None;
            }
            None => self.active = None,
        }
        self.phase = Phase::Action;
        self.turn_index += 1;

        info!(turn = self.turn_index, player = %self.player_name(), "turn started");
    }

    /// End `player`'s own turn.
    ///
    /// With a wait pending, `PendingTurnEnd::Reject` refuses and
    /// `PendingTurnEnd::Discard` ends the turn anyway, with `next`
    /// deciding whether the wait survives.
    pub fn end_turn(&mut self, player: PlayerId) -> GameResult<()> {
        self.check_seat(player)?;
        if player != self.current() {
            return Err(GameError::NotYourTurn(player));
        }
        if let Some(pending) = &self.pending {
            if self.config.pending_turn_end == PendingTurnEnd::Reject {
                return Err(GameError::AwaitingResponse {
                    player: pending.player,
                    card: pending.card.clone(),
                });
            }
        }
        self.next();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(players: &[&str]) -> Game {
        Game::new(
            Arc::new(CardCatalog::base()),
            players,
            &[CardId::new("copper"), CardId::new("province"), CardId::new("curse")],
            EngineConfig::default().with_seed(42),
        )
        .unwrap()
    }

    #[test]
    fn test_setup() {
        let game = game(&["mrkill", "jacob", "matt"]);

        assert_eq!(game.player_count(), 3);
        assert_eq!(game.turn_index(), 0);
        assert_eq!(game.player_name(), "mrkill");
        assert_eq!(game.phase(), Phase::Action);
        assert!(game.pending().is_none());
        for player in PlayerId::all(3) {
            assert_eq!(game.player(player).hand().len(), 5);
            assert_eq!(game.player(player).card_count(), 10);
        }
    }

    #[test]
    fn test_supply_sizes_read_player_count() {
        let two = game(&["a", "b"]);
        assert_eq!(two.supply_count(&CardId::new("province")), Some(12));
        assert_eq!(two.supply_count(&CardId::new("curse")), Some(10));
        assert_eq!(two.supply_count(&CardId::new("copper")), Some(60));
        assert_eq!(two.supply_count(&CardId::new("gold")), None);
        assert_eq!(
            two.supply().map(|(card, count)| (card.as_str(), count)).collect::<Vec<_>>(),
            vec![("copper", 60), ("curse", 10), ("province", 12)]
        );

        let five = game(&["a", "b", "c", "d", "e"]);
        assert_eq!(five.supply_count(&CardId::new("province")), Some(15));
        assert_eq!(five.supply_count(&CardId::new("curse")), Some(40));
    }

    #[test]
    fn test_setup_errors() {
        let catalog = Arc::new(CardCatalog::base());

        let err = Game::new(catalog.clone(), &["solo"], &[], EngineConfig::default()).unwrap_err();
        assert!(matches!(err, GameError::InvalidSetup(_)));

        let err = Game::new(catalog.clone(), &["a", "a"], &[], EngineConfig::default()).unwrap_err();
        assert!(matches!(err, GameError::InvalidSetup(_)));

        let err = Game::new(catalog, &["a", "b"], &[CardId::new("poop")], EngineConfig::default())
            .unwrap_err();
        assert_eq!(err, GameError::UnknownCard(CardId::new("poop")));
    }

    #[test]
    fn test_player_turns_rotate() {
        let mut game = game(&["a", "b", "c"]);

        assert_eq!(game.player_turns(), vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
        game.next();
        assert_eq!(game.player_turns(), vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(0)]);
    }

    #[test]
    fn test_score_counts_starting_estates() {
        let game = game(&["a", "b"]);
        assert_eq!(game.score(PlayerId::new(0)), 3);
    }

    #[test]
    fn test_gain_and_trash() {
        let mut game = game(&["a", "b"]);
        let b = PlayerId::new(1);

        game.gain(b, &CardId::new("curse")).unwrap();
        assert_eq!(game.supply_count(&CardId::new("curse")), Some(9));
        assert_eq!(game.player(b).card_count(), 11);
        assert_eq!(game.score(b), 2);

        assert_eq!(
            game.gain(b, &CardId::new("gold")),
            Err(GameError::NotInSupply(CardId::new("gold")))
        );

        game.player_mut(b).set_hand(vec![CardId::new("estate")]);
        game.trash_card(b, &CardId::new("estate"), TrashSource::Hand).unwrap();
        assert_eq!(game.trash().len(), 1);
        assert!(game.player(b).hand().is_empty());
    }

    #[test]
    fn test_game_clone_is_independent() {
        let mut game = game(&["a", "b"]);
        let snapshot = game.clone();

        game.next();

        assert_eq!(snapshot.turn_index(), 0);
        assert_eq!(game.turn_index(), 1);
    }
}
