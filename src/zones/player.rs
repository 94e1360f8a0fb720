//! Per-player zones and turn counters.
//!
//! A `Player` owns four zones:
//! - `hand`: unordered for gameplay purposes
//! - `draw_pile`: ordered, the back of the vector is the top card
//! - `discard_pile`: unordered
//! - `in_play`: cards played this turn
//!
//! Card instances only leave these zones through `trash` and `reveal`, and
//! only enter through the `add_to_*` operations; every other operation
//! moves cards between zones and conserves the total.

use im::Vector;
use tracing::debug;

use super::TrashSource;
use crate::cards::CardId;
use crate::core::{GameError, GameResult, GameRng};

/// A seat's cards and resource counters.
#[derive(Clone, Debug)]
pub struct Player {
    hand: Vector<CardId>,
    draw_pile: Vector<CardId>,
    discard_pile: Vector<CardId>,
    in_play: Vector<CardId>,
    hand_size: usize,
    rng: GameRng,

    /// Actions left this turn.
    pub actions: i64,
    /// Buys left this turn.
    pub buys: i64,
    /// Gold available this turn.
    pub gold: i64,
}

impl Player {
    /// Create a player whose starting cards sit in the discard pile, then
    /// draw the opening hand (which shuffles them into the draw pile).
    #[must_use]
    pub fn new(starting_cards: Vec<CardId>, hand_size: usize, rng: GameRng) -> Self {
        let mut player = Self {
            hand: Vector::new(),
            draw_pile: Vector::new(),
            discard_pile: starting_cards.into_iter().collect(),
            in_play: Vector::new(),
            hand_size,
            rng,
            actions: 1,
            buys: 1,
            gold: 0,
        };
        player.draw(hand_size);
        player
    }

    // === Zones ===

    #[must_use]
    pub fn hand(&self) -> &Vector<CardId> {
        &self.hand
    }

    /// Draw pile, bottom first: `last()` is the next card drawn.
    #[must_use]
    pub fn draw_pile(&self) -> &Vector<CardId> {
        &self.draw_pile
    }

    #[must_use]
    pub fn discard_pile(&self) -> &Vector<CardId> {
        &self.discard_pile
    }

    #[must_use]
    pub fn in_play(&self) -> &Vector<CardId> {
        &self.in_play
    }

    /// Check whether the hand holds at least one copy of `card`.
    #[must_use]
    pub fn has_in_hand(&self, card: &CardId) -> bool {
        self.hand.contains(card)
    }

    /// Number of copies of `card` in hand.
    #[must_use]
    pub fn count_in_hand(&self, card: &CardId) -> usize {
        self.hand.iter().filter(|c| *c == card).count()
    }

    /// Check that the hand holds every card in `cards`, counting duplicates.
    ///
    /// Returns the first card that is missing.
    pub fn check_hand_contains(&self, cards: &[CardId]) -> GameResult<()> {
        let mut remaining = self.hand.clone();
        for card in cards {
            match remaining.index_of(card) {
                Some(i) => {
                    remaining.remove(i);
                }
                None => return Err(GameError::CardNotInHand(card.clone())),
            }
        }
        Ok(())
    }

    /// Every card the player owns, across all four zones.
    pub fn all_cards(&self) -> impl Iterator<Item = &CardId> {
        self.hand
            .iter()
            .chain(self.draw_pile.iter())
            .chain(self.discard_pile.iter())
            .chain(self.in_play.iter())
    }

    /// Total card instances across all four zones.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.draw_pile.len() + self.discard_pile.len() + self.in_play.len()
    }

    // === Movement ===

    /// Move up to `n` cards from the draw pile into the hand.
    ///
    /// An exhausted draw pile is refilled by shuffling the discard pile.
    /// Returns how many cards were actually drawn, which is fewer than `n`
    /// only when the player has run out of cards.
    pub fn draw(&mut self, n: usize) -> usize {
        let mut drawn = 0;
        while drawn < n {
            match self.reveal() {
                Some(card) => {
                    self.hand.push_back(card);
                    drawn += 1;
                }
                None => break,
            }
        }
        drawn
    }

    /// Take the top card of the draw pile without putting it in hand.
    ///
    /// Reshuffles the discard pile first if the draw pile is empty. The
    /// caller decides where the card ends up.
    pub fn reveal(&mut self) -> Option<CardId> {
        if self.draw_pile.is_empty() {
            self.reshuffle();
        }
        self.draw_pile.pop_back()
    }

    fn reshuffle(&mut self) {
        if self.discard_pile.is_empty() {
            return;
        }

        let mut cards: Vec<CardId> = std::mem::take(&mut self.discard_pile).into_iter().collect();
        self.rng.shuffle(&mut cards);
        debug!(cards = cards.len(), "reshuffled discard pile into draw pile");
        self.draw_pile.extend(cards);
    }

    fn take_from_hand(&mut self, card: &CardId) -> GameResult<CardId> {
        let index = self
            .hand
            .index_of(card)
            .ok_or_else(|| GameError::CardNotInHand(card.clone()))?;
        Ok(self.hand.remove(index))
    }

    /// Move a card from hand to the discard pile.
    pub fn discard(&mut self, card: &CardId) -> GameResult<()> {
        let card = self.take_from_hand(card)?;
        self.discard_pile.push_back(card);
        Ok(())
    }

    /// Move a card from hand to the in-play area.
    pub fn play(&mut self, card: &CardId) -> GameResult<()> {
        let card = self.take_from_hand(card)?;
        self.in_play.push_back(card);
        Ok(())
    }

    /// Move a card from hand straight onto the top of the draw pile.
    pub fn place_on_top(&mut self, card: &CardId) -> GameResult<()> {
        let card = self.take_from_hand(card)?;
        self.draw_pile.push_back(card);
        Ok(())
    }

    /// Remove a card permanently from hand or in-play.
    ///
    /// The caller records it in the session trash pile.
    pub fn trash(&mut self, card: &CardId, source: TrashSource) -> GameResult<CardId> {
        match source {
            TrashSource::Hand => self.take_from_hand(card),
            TrashSource::InPlay => {
                let index = self
                    .in_play
                    .index_of(card)
                    .ok_or_else(|| GameError::CardNotInHand(card.clone()))?;
                Ok(self.in_play.remove(index))
            }
        }
    }

    /// Put a card that is in no zone (gained, or revealed off the draw
    /// pile) into the hand.
    pub fn add_to_hand(&mut self, card: CardId) {
        self.hand.push_back(card);
    }

    /// Put a card that is in no zone into the discard pile.
    pub fn add_to_discard(&mut self, card: CardId) {
        self.discard_pile.push_back(card);
    }

    /// Put a card that is in no zone on top of the draw pile.
    pub fn add_to_draw_pile(&mut self, card: CardId) {
        self.draw_pile.push_back(card);
    }

    /// Move the whole draw pile into the discard pile.
    pub fn discard_draw_pile(&mut self) {
        let pile = std::mem::take(&mut self.draw_pile);
        self.discard_pile.append(pile);
    }

    /// End-of-turn cleanup: discard hand and in-play, draw a fresh hand,
    /// reset the turn counters.
    pub fn cleanup(&mut self) {
        let hand = std::mem::take(&mut self.hand);
        let in_play = std::mem::take(&mut self.in_play);
        self.discard_pile.append(hand);
        self.discard_pile.append(in_play);

        self.draw(self.hand_size);

        self.actions = 1;
        self.buys = 1;
        self.gold = 0;
    }

    // === Setup ===

    /// Replace the hand outright. Setup helper for scenarios and tests;
    /// the replaced cards are dropped, so conservation does not hold
    /// across this call.
    pub fn set_hand(&mut self, cards: impl IntoIterator<Item = CardId>) {
        self.hand = cards.into_iter().collect();
    }

    /// Replace the draw pile outright, bottom first. Setup helper like
    /// `set_hand`.
    pub fn set_draw_pile(&mut self, cards: impl IntoIterator<Item = CardId>) {
        self.draw_pile = cards.into_iter().collect();
    }
}
