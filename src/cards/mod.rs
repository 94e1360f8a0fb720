//! Card system: identifiers, definitions, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for a card kind (`"copper"`, `"council-room"`)
//! - `CardType`: Type tags (Treasure, Action, Attack, Victory, ...)
//! - `CardDefinition`: Static card data (cost, yields, pile size)
//! - `CardCatalog`: Immutable lookup from id to behaviour

pub mod catalog;
pub mod definition;

pub use catalog::CardCatalog;
pub use definition::{CardDefinition, CardId, CardType, CardTypes, PileSize};
