//! Turn rules: the `Game` orchestrator and its phase/wait state.

mod game;
mod phase;

pub use game::Game;
pub use phase::{Pending, Phase};
