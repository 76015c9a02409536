//! Word source for new games.

use crate::game::GameError;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// The category used when a game does not request one.
pub const DEFAULT_CATEGORY: &str = "animals";

/// Candidate words for the animals category.
const ANIMAL_WORDS: &[&str] = &[
    "DOG", "CAT", "ELEPHANT", "LION", "TIGER", "GIRAFFE", "ZEBRA", "BEAR", "KOALA", "PANDA",
    "KANGAROO", "PENGUIN", "DOLPHIN", "EAGLE", "OWL", "FOX", "WOLF", "CHEETAH", "LEOPARD",
    "JAGUAR", "HORSE", "COW", "PIG", "SHEEP", "GOAT", "CHICKEN", "DUCK", "GOOSE", "SWAN",
    "OCTOPUS", "SHARK", "WHALE", "PLATYPUS", "CHIMPANZEE", "GORILLA", "ORANGUTAN", "BABOON",
    "RACCOON", "SQUIRREL", "BAT", "HEDGEHOG", "ARMADILLO", "SLOTH", "PORCUPINE", "ANTEATER",
    "CAMEL", "DINGO", "LEMUR", "MEERKAT", "OCELOT", "PARROT", "QUOKKA", "VULTURE", "WOMBAT",
    "YAK", "IGUANA", "KAKAPO", "LEMMING", "MANATEE", "NUTRIA", "OSTRICH", "PANGOLIN", "QUAIL",
    "RHINOCEROS", "SERVAL", "WALLABY", "COYPU", "TAPIR", "PHEASANT",
];

/// Returns the ordered candidate words for a category.
///
/// Category lookup is case-insensitive. Only the animals category is
/// defined; anything else fails with [`GameError::UnknownCategory`].
#[instrument]
pub fn list_words(category: &str) -> Result<&'static [&'static str], GameError> {
    match category.to_lowercase().as_str() {
        "animals" => Ok(ANIMAL_WORDS),
        _ => Err(GameError::UnknownCategory {
            category: category.to_string(),
        }),
    }
}

/// Picks one secret word uniformly at random from the default category.
///
/// Fails with [`GameError::EmptyWordList`] if the category has no entries.
/// That cannot happen with the built-in table, but the error is surfaced
/// rather than defaulted so a misconfigured table fails the game start.
#[instrument]
pub fn pick_secret_word() -> Result<String, GameError> {
    let words = list_words(DEFAULT_CATEGORY)?;
    let word = words
        .choose(&mut rand::thread_rng())
        .ok_or(GameError::EmptyWordList)?;
    debug!(length = word.len(), "Picked secret word");
    Ok((*word).to_string())
}
