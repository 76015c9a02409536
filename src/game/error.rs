//! Error taxonomy for the game core.
//!
//! Every variant is recoverable: operations convert these into
//! structured error results at the boundary instead of raising past it.

use derive_more::{Display, Error};

/// Expected game failures.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Requested word category is not defined.
    #[display("Invalid category: '{category}'.")]
    UnknownCategory {
        /// The category that was requested.
        category: String,
    },
    /// The word list for the category has no entries.
    #[display("Unable to retrieve a secret word: the word list is empty.")]
    EmptyWordList,
    /// Guess attempted with no game for the session.
    #[display("No active game found. Start a new game first.")]
    NoActiveGame,
    /// Guess attempted after the game was already won or lost.
    #[display("Game is already over. Start a new game.")]
    GameAlreadyOver,
    /// Guess input was not exactly one letter after normalization.
    #[display("Please provide exactly one letter.")]
    InvalidGuess,
    /// Letter was already guessed in this game.
    #[display("You've already guessed '{letter}'. Try a different letter.")]
    DuplicateGuess {
        /// The letter, normalized to uppercase.
        letter: char,
    },
    /// No session exists under the given id.
    #[display("No game session found.")]
    NoSession,
}
