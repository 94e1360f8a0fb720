//! Seats at the table.
//!
//! A session seats its players in a fixed turn order; the first named
//! player is `PlayerId(0)`. `PlayerMap` stores one value per seat.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Seat identifier. Sessions hold at most 255 players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(seat: u8) -> Self {
        Self(seat)
    }

    /// Seat position in turn order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat `offset` places after this one, wrapping around a table of
    /// `player_count`.
    ///
    /// ```
    /// use rust_dominion::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(1).after(1, 3), PlayerId::new(2));
    /// assert_eq!(PlayerId::new(2).after(2, 3), PlayerId::new(1));
    /// ```
    #[must_use]
    pub fn after(self, offset: usize, player_count: usize) -> Self {
        Self(((self.index() + offset) % player_count) as u8)
    }

    /// Every seat of a table with `player_count` players, in turn order.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count).map(|seat| PlayerId(seat as u8))
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One value per seat, indexed by `PlayerId`.
///
/// ```
/// use rust_dominion::core::{PlayerId, PlayerMap};
///
/// let mut buys: PlayerMap<i64> = PlayerMap::new(3, |_| 1);
/// buys[PlayerId::new(1)] += 1;
///
/// assert_eq!(buys.iter().map(|(_, b)| *b).collect::<Vec<_>>(), vec![1, 2, 1]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    seats: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Fill every seat from `factory`, in turn order.
    ///
    /// Panics on an empty table or more than 255 seats; `Game::new`
    /// rejects both before building one.
    pub fn new(player_count: usize, factory: impl FnMut(PlayerId) -> T) -> Self {
        assert!(
            (1..=255).contains(&player_count),
            "player count {} out of range",
            player_count
        );
        Self {
            seats: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// Check whether `player` has a seat here.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.seats.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all(self.seats.len()).zip(self.seats.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        &self.seats[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.seats[player.index()]
    }
}
