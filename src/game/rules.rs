//! Guess validation and state transitions.

use super::error::GameError;
use super::types::GameState;
use tracing::{debug, instrument};

/// Outcome of a single accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guess {
    /// The guessed letter, normalized to uppercase.
    pub letter: char,
    /// Whether the letter appears in the secret word.
    pub correct: bool,
}

/// Normalizes a raw guess into a single uppercase letter.
///
/// Trims whitespace and uppercases; anything other than exactly one
/// alphabetic character fails with [`GameError::InvalidGuess`].
pub fn normalize_guess(raw: &str) -> Result<char, GameError> {
    let mut chars = raw.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_uppercase()),
        _ => Err(GameError::InvalidGuess),
    }
}

impl GameState {
    /// Applies one guess to an active game.
    ///
    /// Checks run in order: the game must still be active, the input
    /// must normalize to a single letter, and the letter must not have
    /// been guessed before. Win is evaluated before loss; reaching
    /// either deactivates the game.
    #[instrument(skip(self), fields(player = %self.player_name()))]
    pub fn apply_guess(&mut self, raw: &str) -> Result<Guess, GameError> {
        if !self.is_active() {
            return Err(GameError::GameAlreadyOver);
        }

        let letter = normalize_guess(raw)?;

        if self.has_guessed(letter) {
            return Err(GameError::DuplicateGuess { letter });
        }

        let correct = self.secret_word().contains(letter);
        self.record_guess(letter, correct);

        if self.is_won() || self.is_lost() {
            debug!(won = self.is_won(), "Game over");
            self.deactivate();
        }

        Ok(Guess { letter, correct })
    }
}
