//! Core state for a single hangman game.

use crate::gallows::MAX_MISSES;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Complete state of one game.
///
/// The secret word and player name are fixed at creation. Guessed
/// letters and the reveal mask only grow; the miss count only climbs.
/// Once the game is won or lost it deactivates and stops accepting
/// guesses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Display name supplied at game start.
    player_name: String,
    /// The target word, uppercase.
    secret_word: String,
    /// Letters guessed so far, uppercase. Ordered for deterministic output.
    guessed_letters: BTreeSet<char>,
    /// Per-position record of which letters a correct guess has revealed.
    revealed: Vec<bool>,
    /// Number of incorrect guesses, bounded by [`MAX_MISSES`].
    miss_count: usize,
    /// True from creation until a win or loss.
    is_active: bool,
}

impl GameState {
    /// Creates a fresh game for the given player and secret word.
    ///
    /// The word is uppercase-normalized; the reveal mask starts all-false.
    pub fn new(player_name: impl Into<String>, secret_word: &str) -> Self {
        let secret_word = secret_word.to_uppercase();
        let revealed = vec![false; secret_word.chars().count()];
        Self {
            player_name: player_name.into(),
            secret_word,
            guessed_letters: BTreeSet::new(),
            revealed,
            miss_count: 0,
            is_active: true,
        }
    }

    /// Returns the player's display name.
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Returns the secret word.
    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    /// Returns the word length in letters.
    pub fn word_length(&self) -> usize {
        self.revealed.len()
    }

    /// Returns the guessed letters in alphabetical order.
    pub fn guessed_letters(&self) -> Vec<char> {
        self.guessed_letters.iter().copied().collect()
    }

    /// Returns how many letters have been guessed.
    pub fn guess_count(&self) -> usize {
        self.guessed_letters.len()
    }

    /// Checks whether a letter has already been guessed.
    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed_letters.contains(&letter)
    }

    /// Returns the number of incorrect guesses so far.
    pub fn miss_count(&self) -> usize {
        self.miss_count
    }

    /// Returns how many incorrect guesses remain before the game is lost.
    pub fn guesses_remaining(&self) -> usize {
        MAX_MISSES - self.miss_count
    }

    /// Returns the drawing stage index for the current miss count.
    pub fn drawing_stage(&self) -> usize {
        self.miss_count.min(MAX_MISSES)
    }

    /// True until the game is won or lost.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Checks whether every position of the word has been revealed.
    pub fn is_won(&self) -> bool {
        self.revealed.iter().all(|&r| r)
    }

    /// Checks whether the miss limit has been reached.
    pub fn is_lost(&self) -> bool {
        self.miss_count >= MAX_MISSES
    }

    /// Checks whether the game ended in either a win or a loss.
    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    /// Formats the word with revealed letters shown and the rest masked.
    ///
    /// Derived from the word and the reveal mask: one character or `_`
    /// per position, single-space separated.
    pub fn display_word(&self) -> String {
        self.secret_word
            .chars()
            .zip(&self.revealed)
            .map(|(c, &shown)| if shown { c } else { '_' })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Records an accepted guess (validated by the rules layer).
    ///
    /// A correct letter reveals every matching position; an incorrect
    /// one costs a miss. Exactly one of the two happens.
    pub(super) fn record_guess(&mut self, letter: char, correct: bool) {
        self.guessed_letters.insert(letter);
        if correct {
            for (i, c) in self.secret_word.chars().enumerate() {
                if c == letter {
                    self.revealed[i] = true;
                }
            }
        } else {
            self.miss_count += 1;
        }
    }

    /// Freezes the game after a win or loss.
    pub(super) fn deactivate(&mut self) {
        self.is_active = false;
    }
}
