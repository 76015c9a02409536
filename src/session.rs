//! Session registry: independent games keyed by an opaque string id.

use crate::game::{GameError, GameState};
use crate::gallows::{MAX_MISSES, drawing_stage};
use crate::response::{
    EndGameResponse, GuessResponse, ListSessionsResponse, OpStatus, SessionStatus, SessionSummary,
    StartGameResponse, StatusResponse,
};
use crate::words;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// Well-known session id used when a caller does not supply one.
pub const DEFAULT_SESSION: &str = "default";

/// Owns every live game, keyed by session id.
///
/// A single lock guards the map and is held for the full duration of
/// each operation. Operations are short and never block, so this
/// serializes calls against the same session without starving callers
/// on other sessions. The registry is a value owned by the host, not a
/// process-wide singleton; tests create their own.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<Mutex<HashMap<SessionId, GameState>>>,
}

impl SessionRegistry {
    /// Creates an empty registry.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session registry");
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Returns a copy of the game state for a session, if present.
    pub fn get(&self, session_id: &str) -> Option<GameState> {
        self.sessions.lock().unwrap().get(session_id).cloned()
    }

    /// Starts a new game for the session, picking a random secret word.
    ///
    /// Creates the session if the id is new and resets it otherwise.
    /// The only failure mode is the word source, surfaced as an error
    /// result at the boundary.
    #[instrument(skip(self))]
    pub fn start_game(
        &self,
        session_id: &str,
        player_name: &str,
    ) -> Result<StartGameResponse, GameError> {
        let word = words::pick_secret_word()?;
        Ok(self.start_with_word(session_id, player_name, &word))
    }

    /// Starts a new game with a caller-supplied secret word.
    ///
    /// [`start_game`](Self::start_game) delegates here after picking a
    /// word; calling it directly gives deterministic games.
    #[instrument(skip(self, word))]
    pub fn start_with_word(
        &self,
        session_id: &str,
        player_name: &str,
        word: &str,
    ) -> StartGameResponse {
        let state = GameState::new(player_name, word);
        let response = StartGameResponse {
            status: OpStatus::Success,
            message: format!("New game started for {player_name}!"),
            word_length: state.word_length(),
            display_word: state.display_word(),
            drawing_stage: 0,
            drawing: drawing_stage(0).to_string(),
            guesses_remaining: MAX_MISSES,
            session_id: session_id.to_string(),
        };

        let mut sessions = self.sessions.lock().unwrap();
        let replaced = sessions.insert(session_id.to_string(), state).is_some();
        info!(session_id, replaced, "Started new game");
        response
    }

    /// Applies one guess to the session's game.
    ///
    /// Fails with [`GameError::NoActiveGame`] when the session has no
    /// game; the remaining checks live in the rules layer.
    #[instrument(skip(self))]
    pub fn guess(&self, session_id: &str, raw_letter: &str) -> Result<GuessResponse, GameError> {
        let mut sessions = self.sessions.lock().unwrap();
        let state = sessions.get_mut(session_id).ok_or_else(|| {
            warn!(session_id, "Guess against unknown session");
            GameError::NoActiveGame
        })?;

        let guess = state.apply_guess(raw_letter)?;

        let game_over = state.is_over();
        // Win takes priority over loss when classifying the outcome.
        let won = game_over.then(|| state.is_won());
        let message = match won {
            Some(true) => format!(
                "Congratulations {}! You won! The word was '{}'.",
                state.player_name(),
                state.secret_word()
            ),
            Some(false) => format!(
                "Game over {}! The word was '{}'. Better luck next time!",
                state.player_name(),
                state.secret_word()
            ),
            None if guess.correct => format!("Good guess! '{}' is in the word.", guess.letter),
            None => format!("Sorry, '{}' is not in the word.", guess.letter),
        };

        info!(
            session_id,
            letter = %guess.letter,
            correct = guess.correct,
            misses = state.miss_count(),
            game_over,
            "Guess processed"
        );

        Ok(GuessResponse {
            status: OpStatus::Success,
            letter: guess.letter,
            correct: guess.correct,
            display_word: state.display_word(),
            drawing_stage: state.drawing_stage(),
            drawing: drawing_stage(state.drawing_stage()).to_string(),
            guesses_made: state.guessed_letters(),
            guesses_remaining: state.guesses_remaining(),
            game_over,
            won,
            message,
        })
    }

    /// Returns a read-only snapshot of the session.
    ///
    /// Never hard-fails: an unknown id reports `no_game`, and a session
    /// that exists but was never activated reports `no_active_game`.
    #[instrument(skip(self))]
    pub fn status(&self, session_id: &str) -> StatusResponse {
        let sessions = self.sessions.lock().unwrap();
        let Some(state) = sessions.get(session_id) else {
            debug!(session_id, "Status requested for unknown session");
            return StatusResponse::no_game();
        };

        if !state.is_active() && !state.is_over() {
            return StatusResponse::no_active_game();
        }

        let status = if state.is_active() {
            SessionStatus::Active
        } else {
            SessionStatus::Finished
        };

        StatusResponse {
            status,
            message: None,
            player_name: Some(state.player_name().to_string()),
            word_length: Some(state.word_length()),
            display_word: Some(state.display_word()),
            drawing_stage: Some(state.drawing_stage()),
            drawing: Some(drawing_stage(state.drawing_stage()).to_string()),
            guesses_made: Some(state.guessed_letters()),
            guesses_remaining: Some(state.guesses_remaining()),
            game_over: Some(state.is_over()),
            won: state.is_over().then(|| state.is_won()),
            session_id: Some(session_id.to_string()),
        }
    }

    /// Summarizes every held session, in arbitrary order.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> ListSessionsResponse {
        let sessions = self.sessions.lock().unwrap();
        let summaries: Vec<SessionSummary> = sessions
            .iter()
            .map(|(id, state)| SessionSummary {
                session_id: id.clone(),
                player_name: state.player_name().to_string(),
                active: state.is_active(),
                word_length: state.word_length(),
                guesses_made: state.guess_count(),
                game_over: state.is_over(),
            })
            .collect();

        info!(count = summaries.len(), "Listed sessions");
        ListSessionsResponse {
            status: OpStatus::Success,
            total_sessions: summaries.len(),
            sessions: summaries,
        }
    }

    /// Removes the session, revealing the word in a farewell message.
    ///
    /// Fails with [`GameError::NoSession`] when the id is unknown.
    #[instrument(skip(self))]
    pub fn end_game(&self, session_id: &str) -> Result<EndGameResponse, GameError> {
        let mut sessions = self.sessions.lock().unwrap();
        let state = sessions.remove(session_id).ok_or_else(|| {
            warn!(session_id, "End requested for unknown session");
            GameError::NoSession
        })?;

        info!(session_id, player = %state.player_name(), "Session ended");
        Ok(EndGameResponse {
            status: OpStatus::Success,
            message: format!(
                "Game ended for {}. The word was '{}'. Thanks for playing!",
                state.player_name(),
                state.secret_word()
            ),
        })
    }
}
