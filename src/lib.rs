//! Hangman Games library - session-based word guessing.
//!
//! Independent hangman games are kept in a [`SessionRegistry`], keyed
//! by an opaque session id. Five operations cover the whole lifecycle:
//! start a game, guess a letter, query status, list sessions, and end
//! a game. Each returns a structured result; expected failures come
//! back as error-shaped results instead of raised errors, so any
//! transport can expose the operations directly. [`HangmanServer`]
//! does exactly that over MCP.
//!
//! # Example
//!
//! ```
//! use hangman_games::SessionRegistry;
//!
//! let registry = SessionRegistry::new();
//! registry.start_with_word("table", "Alice", "CAT");
//! let result = registry.guess("table", "c").unwrap();
//! assert!(result.correct);
//! assert_eq!(result.display_word, "C _ _");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod gallows;
mod game;
mod response;
mod server;
mod session;
mod words;

// Crate-level exports - Game state machine
pub use game::{GameError, GameState, Guess, normalize_guess};

// Crate-level exports - Drawing stages
pub use gallows::{GALLOWS_STAGES, MAX_MISSES, drawing_stage};

// Crate-level exports - Operation results
pub use response::{
    EndGameResponse, ErrorResponse, GuessResponse, ListSessionsResponse, OpStatus, SessionStatus,
    SessionSummary, StartGameResponse, StatusResponse,
};

// Crate-level exports - Server types
pub use server::{GuessRequest, HangmanServer, SessionRequest, StartGameRequest};

// Crate-level exports - Session management
pub use session::{DEFAULT_SESSION, SessionId, SessionRegistry};

// Crate-level exports - Word source
pub use words::{DEFAULT_CATEGORY, list_words, pick_secret_word};
