//! Structured results for the five game operations.
//!
//! These are the transport-independent contract: each operation returns
//! one of these shapes, and expected failures are reported through
//! [`ErrorResponse`] rather than raised past the operation boundary.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Overall outcome marker carried by mutating operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OpStatus {
    /// Operation completed.
    Success,
    /// Operation failed in an expected, recoverable way.
    Error,
}

/// Session lifecycle classification reported by the status operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Game exists and is accepting guesses.
    Active,
    /// Game exists and has been won or lost.
    Finished,
    /// No session under this id.
    NoGame,
    /// Session exists but was never activated.
    NoActiveGame,
}

/// Error-shaped result used when an operation fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorResponse {
    /// Always [`OpStatus::Error`].
    pub status: OpStatus,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ErrorResponse {
    /// Creates an error result with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: OpStatus::Error,
            message: message.into(),
        }
    }
}

/// Result of starting (or restarting) a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StartGameResponse {
    /// Operation outcome.
    pub status: OpStatus,
    /// Greeting naming the player.
    pub message: String,
    /// Length of the secret word in letters.
    pub word_length: usize,
    /// Fully masked display of the word.
    pub display_word: String,
    /// Drawing stage index, always 0 for a fresh game.
    pub drawing_stage: usize,
    /// Rendered gallows drawing for the current stage.
    pub drawing: String,
    /// Incorrect guesses allowed before the game is lost.
    pub guesses_remaining: usize,
    /// The session the game was started under.
    pub session_id: String,
}

/// Result of a single accepted guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GuessResponse {
    /// Operation outcome.
    pub status: OpStatus,
    /// The guessed letter, normalized to uppercase.
    pub letter: char,
    /// Whether the letter appears in the secret word.
    pub correct: bool,
    /// Current display of the word with revealed letters shown.
    pub display_word: String,
    /// Drawing stage index (equal to the miss count).
    pub drawing_stage: usize,
    /// Rendered gallows drawing for the current stage.
    pub drawing: String,
    /// All letters guessed so far, sorted alphabetically.
    pub guesses_made: Vec<char>,
    /// Incorrect guesses remaining before the game is lost.
    pub guesses_remaining: usize,
    /// Whether the game ended on this guess (or earlier).
    pub game_over: bool,
    /// Set when the game is over: true for a win, false for a loss.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub won: Option<bool>,
    /// Human-readable outcome, naming the secret word when the game ends.
    pub message: String,
}

/// Read-only snapshot of a session.
///
/// Snapshot fields are populated only when a game exists; absence is
/// reported through [`SessionStatus`] rather than a hard failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StatusResponse {
    /// Lifecycle classification of the session.
    pub status: SessionStatus,
    /// Guidance message when no game snapshot is available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Player display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
    /// Length of the secret word in letters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_length: Option<usize>,
    /// Current display of the word.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_word: Option<String>,
    /// Drawing stage index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawing_stage: Option<usize>,
    /// Rendered gallows drawing for the current stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawing: Option<String>,
    /// All letters guessed so far, sorted alphabetically.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guesses_made: Option<Vec<char>>,
    /// Incorrect guesses remaining before the game is lost.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guesses_remaining: Option<usize>,
    /// Whether the game has ended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_over: Option<bool>,
    /// Set when the game is over: true for a win, false for a loss.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub won: Option<bool>,
    /// The session the snapshot describes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl StatusResponse {
    /// Snapshot for an id with no session behind it.
    pub fn no_game() -> Self {
        Self {
            status: SessionStatus::NoGame,
            message: Some("No game session found. Start a new game first.".to_string()),
            ..Self::empty()
        }
    }

    /// Snapshot for a session that exists but was never activated.
    pub fn no_active_game() -> Self {
        Self {
            status: SessionStatus::NoActiveGame,
            message: Some("No active game. Start a new game first.".to_string()),
            ..Self::empty()
        }
    }

    fn empty() -> Self {
        Self {
            status: SessionStatus::NoGame,
            message: None,
            player_name: None,
            word_length: None,
            display_word: None,
            drawing_stage: None,
            drawing: None,
            guesses_made: None,
            guesses_remaining: None,
            game_over: None,
            won: None,
            session_id: None,
        }
    }
}

/// One entry in the session listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SessionSummary {
    /// Session identifier.
    pub session_id: String,
    /// Player display name.
    pub player_name: String,
    /// Whether the game is still accepting guesses.
    pub active: bool,
    /// Length of the secret word in letters.
    pub word_length: usize,
    /// Number of letters guessed so far.
    pub guesses_made: usize,
    /// Whether the game has ended.
    pub game_over: bool,
}

/// Result of listing every held session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ListSessionsResponse {
    /// Operation outcome.
    pub status: OpStatus,
    /// Per-session summaries, in arbitrary order.
    pub sessions: Vec<SessionSummary>,
    /// Number of sessions held.
    pub total_sessions: usize,
}

/// Result of ending a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EndGameResponse {
    /// Operation outcome.
    pub status: OpStatus,
    /// Farewell naming the player and revealing the word.
    pub message: String,
}
