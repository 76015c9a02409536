//! Hangman game state machine.

mod error;
mod rules;
mod types;

pub use error::GameError;
pub use rules::{Guess, normalize_guess};
pub use types::GameState;
