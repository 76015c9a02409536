//! Tests for the hangman state machine.

use hangman_games::{GameError, GameState, MAX_MISSES, normalize_guess};

#[test]
fn test_new_game_is_masked_and_active() {
    let state = GameState::new("Alice", "cat");

    assert_eq!(state.secret_word(), "CAT");
    assert_eq!(state.word_length(), 3);
    assert_eq!(state.display_word(), "_ _ _");
    assert_eq!(state.miss_count(), 0);
    assert_eq!(state.guesses_remaining(), MAX_MISSES);
    assert_eq!(state.drawing_stage(), 0);
    assert!(state.is_active());
    assert!(!state.is_over());
}

#[test]
fn test_correct_guess_reveals_every_matching_position() {
    let mut state = GameState::new("Alice", "ALPACA");

    let guess = state.apply_guess("a").unwrap();
    assert_eq!(guess.letter, 'A');
    assert!(guess.correct);
    assert_eq!(state.display_word(), "A _ _ A _ A");
    assert_eq!(state.miss_count(), 0);
}

#[test]
fn test_incorrect_guess_costs_one_miss() {
    let mut state = GameState::new("Alice", "CAT");

    let guess = state.apply_guess("z").unwrap();
    assert!(!guess.correct);
    assert_eq!(state.miss_count(), 1);
    assert_eq!(state.drawing_stage(), 1);
    assert_eq!(state.guesses_remaining(), MAX_MISSES - 1);
    assert_eq!(state.display_word(), "_ _ _"); // Nothing revealed
}

#[test]
fn test_each_guess_has_exactly_one_effect() {
    // A fresh valid guess either reveals positions or costs a miss,
    // never both and never neither.
    let mut state = GameState::new("Alice", "CAT");

    for letter in ["C", "Z", "A", "Q"] {
        let before_misses = state.miss_count();
        let before_display = state.display_word();

        let guess = state.apply_guess(letter).unwrap();
        if guess.correct {
            assert_eq!(state.miss_count(), before_misses);
            assert_ne!(state.display_word(), before_display);
        } else {
            assert_eq!(state.miss_count(), before_misses + 1);
            assert_eq!(state.display_word(), before_display);
        }
    }
}

#[test]
fn test_win_flow() {
    let mut state = GameState::new("Alice", "CAT");

    let guess = state.apply_guess("C").unwrap();
    assert!(guess.correct);
    assert_eq!(state.display_word(), "C _ _");
    assert_eq!(state.guesses_remaining(), 9);
    assert!(!state.is_over());

    let guess = state.apply_guess("A").unwrap();
    assert!(guess.correct);
    assert_eq!(state.display_word(), "C A _");

    let guess = state.apply_guess("T").unwrap();
    assert!(guess.correct);
    assert_eq!(state.display_word(), "C A T");
    assert!(state.is_won());
    assert!(!state.is_lost());
    assert!(state.is_over());
    assert!(!state.is_active());

    // Frozen after the win
    assert_eq!(state.apply_guess("Z"), Err(GameError::GameAlreadyOver));
}

#[test]
fn test_loss_flow() {
    let mut state = GameState::new("Bob", "CAT");
    let wrong = ["B", "D", "E", "F", "G", "H", "I", "J", "K"];

    for (i, letter) in wrong.iter().enumerate() {
        assert!(state.is_active(), "still active before miss {}", i + 1);
        let guess = state.apply_guess(letter).unwrap();
        assert!(!guess.correct);
    }

    assert_eq!(state.miss_count(), MAX_MISSES);
    assert_eq!(state.drawing_stage(), 9);
    assert!(state.is_lost());
    assert!(!state.is_won());
    assert!(!state.is_active());

    assert_eq!(state.apply_guess("C"), Err(GameError::GameAlreadyOver));
}

#[test]
fn test_duplicate_guess_rejected_without_state_change() {
    let mut state = GameState::new("Alice", "CAT");

    state.apply_guess("C").unwrap();
    let misses = state.miss_count();
    let display = state.display_word();

    assert_eq!(
        state.apply_guess("C"),
        Err(GameError::DuplicateGuess { letter: 'C' })
    );
    assert_eq!(state.miss_count(), misses);
    assert_eq!(state.display_word(), display);
    assert_eq!(state.guess_count(), 1);
}

#[test]
fn test_case_variant_is_a_duplicate() {
    let mut state = GameState::new("Alice", "CAT");

    state.apply_guess("A").unwrap();
    assert_eq!(
        state.apply_guess("a"),
        Err(GameError::DuplicateGuess { letter: 'A' })
    );
}

#[test]
fn test_invalid_guesses_rejected() {
    let mut state = GameState::new("Alice", "CAT");

    for raw in ["", "  ", "ab", "1", "!", "c a"] {
        assert_eq!(state.apply_guess(raw), Err(GameError::InvalidGuess));
    }

    // Rejections leave no trace
    assert_eq!(state.guess_count(), 0);
    assert_eq!(state.miss_count(), 0);
}

#[test]
fn test_guess_normalization() {
    assert_eq!(normalize_guess("a").unwrap(), 'A');
    assert_eq!(normalize_guess(" x ").unwrap(), 'X');
    assert_eq!(normalize_guess("Q").unwrap(), 'Q');
    assert_eq!(normalize_guess("7"), Err(GameError::InvalidGuess));
    assert_eq!(normalize_guess("xy"), Err(GameError::InvalidGuess));
    assert_eq!(normalize_guess(""), Err(GameError::InvalidGuess));
}

#[test]
fn test_display_length_invariant() {
    // Letters and placeholders separated by single spaces: 2n - 1 chars.
    let mut state = GameState::new("Alice", "PENGUIN");
    assert_eq!(state.display_word().len(), 2 * state.word_length() - 1);

    state.apply_guess("N").unwrap();
    assert_eq!(state.display_word(), "_ _ N _ _ _ N");
    assert_eq!(state.display_word().len(), 2 * state.word_length() - 1);
}

#[test]
fn test_guessed_letters_sorted() {
    let mut state = GameState::new("Alice", "ZEBRA");

    for letter in ["z", "q", "a", "m"] {
        state.apply_guess(letter).unwrap();
    }
    assert_eq!(state.guessed_letters(), vec!['A', 'M', 'Q', 'Z']);
}
