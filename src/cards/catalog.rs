//! Card catalog for rule lookup.
//!
//! The `CardCatalog` maps every card id to the `CardEffect` implementing
//! it. It is built once at startup, wrapped in an `Arc`, and shared with
//! each `Game`; nothing mutates it afterwards.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId, CardType};
use crate::core::{GameError, GameResult};
use crate::effects::CardEffect;

/// Registry of card kinds.
///
/// ## Example
///
/// ```
/// use rust_dominion::cards::{CardCatalog, CardId, CardType};
///
/// let catalog = CardCatalog::base();
///
/// let silver = catalog.definition(&CardId::new("silver")).unwrap();
/// assert_eq!(silver.gold, 2);
/// assert!(catalog.find_by_type(CardType::Victory).any(|c| c.id == "estate"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, Arc<dyn CardEffect>>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the base card set.
    #[must_use]
    pub fn base() -> Self {
        crate::games::base::catalog()
    }

    /// Register a card kind.
    ///
    /// Panics if a card with the same id already exists.
    pub fn register(&mut self, effect: impl CardEffect + 'static) {
        let id = effect.id().clone();
        if self.cards.contains_key(&id) {
            panic!("Card {} already registered", id);
        }
        self.cards.insert(id, Arc::new(effect));
    }

    /// Get a card's behaviour by id.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Arc<dyn CardEffect>> {
        self.cards.get(id)
    }

    /// Get a shared handle to a card's behaviour, or `UnknownCard`.
    pub fn effect(&self, id: &CardId) -> GameResult<Arc<dyn CardEffect>> {
        self.cards
            .get(id)
            .cloned()
            .ok_or_else(|| GameError::UnknownCard(id.clone()))
    }

    /// Get a card's static definition.
    #[must_use]
    pub fn definition(&self, id: &CardId) -> Option<&CardDefinition> {
        self.cards.get(id).map(|effect| effect.definition())
    }

    /// Check if a card id is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values().map(|effect| effect.definition())
    }

    /// Find cards carrying a type tag.
    pub fn find_by_type(&self, card_type: CardType) -> impl Iterator<Item = &CardDefinition> {
        self.iter().filter(move |c| c.has_type(card_type))
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardDefinition>
    where
        F: Fn(&CardDefinition) -> bool,
    {
        self.iter().filter(move |c| predicate(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::base::Plain;

    fn plain(id: &str, types: &[CardType], cost: i64) -> Plain {
        Plain::new(CardDefinition::new(id, types, cost))
    }

    #[test]
    fn test_register_and_get() {
        let mut catalog = CardCatalog::new();
        catalog.register(plain("copper", &[CardType::Treasure], 0));

        assert!(catalog.get(&CardId::new("copper")).is_some());
        assert!(catalog.get(&CardId::new("poop")).is_none());
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_effect_unknown_card() {
        let catalog = CardCatalog::new();

        let err = catalog.effect(&CardId::new("poop")).unwrap_err();
        assert_eq!(err, GameError::UnknownCard(CardId::new("poop")));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut catalog = CardCatalog::new();

        catalog.register(plain("copper", &[CardType::Treasure], 0));
        catalog.register(plain("copper", &[CardType::Treasure], 1));
    }

    #[test]
    fn test_find_by_type() {
        let mut catalog = CardCatalog::new();
        catalog.register(plain("estate", &[CardType::Victory], 2));
        catalog.register(plain("copper", &[CardType::Treasure], 0));
        catalog.register(plain("harem", &[CardType::Treasure, CardType::Victory], 6));

        assert_eq!(catalog.find_by_type(CardType::Victory).count(), 2);
        assert_eq!(catalog.find_by_type(CardType::Treasure).count(), 2);
        assert_eq!(catalog.find_by_type(CardType::Attack).count(), 0);
    }

    #[test]
    fn test_find_with_predicate() {
        let catalog = CardCatalog::base();

        let cheap: Vec<_> = catalog.find(|c| c.cost <= 2).map(|c| c.id.clone()).collect();
        assert!(cheap.contains(&CardId::new("chapel")));
        assert!(!cheap.contains(&CardId::new("gold")));
    }
}
