//! Card effects and their resolution state.
//!
//! ## Key Types
//!
//! - `CardEffect`: capability interface implemented once per card kind
//! - `ActiveCard`: the card being resolved, with its `Step`
//! - `Step`: explicit `Created | AwaitingPlayer(i) | Done` state machine

mod effect;
mod step;

pub use effect::CardEffect;
pub use step::{ActiveCard, Step};
