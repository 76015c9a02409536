//! MCP server exposing the game operations as tools.

use crate::response::ErrorResponse;
use crate::session::{DEFAULT_SESSION, SessionRegistry};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

fn default_session_id() -> String {
    DEFAULT_SESSION.to_string()
}

/// Request for starting a new game.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StartGameRequest {
    /// Player display name.
    pub player_name: String,
    /// Session identifier; distinct ids hold independent games.
    #[serde(default = "default_session_id")]
    pub session_id: String,
}

/// Request for guessing a letter.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GuessRequest {
    /// The letter to guess (a single character).
    pub letter: String,
    /// Session identifier.
    #[serde(default = "default_session_id")]
    pub session_id: String,
}

/// Request addressing a single session.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SessionRequest {
    /// Session identifier.
    #[serde(default = "default_session_id")]
    pub session_id: String,
}

/// Serializes an operation result into MCP text content.
///
/// Expected game failures are already shaped as results by the caller,
/// so the only protocol-level error here is a serialization fault.
fn respond<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Main server handler.
pub struct HangmanServer {
    sessions: SessionRegistry,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl HangmanServer {
    /// Creates a server over a shared session registry.
    #[instrument]
    pub fn with_sessions(sessions: SessionRegistry) -> Self {
        info!("Creating hangman server with shared session registry");
        Self {
            sessions,
            tool_router: Self::tool_router(),
        }
    }

    /// Creates a server with a fresh registry.
    pub fn new() -> Self {
        Self::with_sessions(SessionRegistry::new())
    }

    /// Starts a new game, creating or resetting the session.
    #[instrument(skip(self, req), fields(session_id = %req.session_id, player_name = %req.player_name))]
    #[tool(
        description = "Start a new hangman game. Creates the session if needed and resets it otherwise."
    )]
    pub async fn start_game(
        &self,
        Parameters(req): Parameters<StartGameRequest>,
    ) -> Result<CallToolResult, McpError> {
        match self.sessions.start_game(&req.session_id, &req.player_name) {
            Ok(response) => respond(&response),
            Err(e) => respond(&ErrorResponse::new(format!("Failed to start game: {e}"))),
        }
    }

    /// Guesses a letter in the session's game.
    #[instrument(skip(self, req), fields(session_id = %req.session_id))]
    #[tool(description = "Guess a single letter in the hangman game.")]
    pub async fn guess(
        &self,
        Parameters(req): Parameters<GuessRequest>,
    ) -> Result<CallToolResult, McpError> {
        match self.sessions.guess(&req.session_id, &req.letter) {
            Ok(response) => respond(&response),
            Err(e) => respond(&ErrorResponse::new(e.to_string())),
        }
    }

    /// Reports the current state of the session's game.
    #[instrument(skip(self, req), fields(session_id = %req.session_id))]
    #[tool(
        description = "Get the current status of the hangman game: revealed letters, guesses, and drawing."
    )]
    pub async fn status(
        &self,
        Parameters(req): Parameters<SessionRequest>,
    ) -> Result<CallToolResult, McpError> {
        debug!(session_id = %req.session_id, "Status requested");
        respond(&self.sessions.status(&req.session_id))
    }

    /// Lists every game session currently held.
    #[instrument(skip(self))]
    #[tool(description = "List all hangman game sessions.")]
    pub async fn list_sessions(&self) -> Result<CallToolResult, McpError> {
        respond(&self.sessions.list_sessions())
    }

    /// Ends the session and reveals the word.
    #[instrument(skip(self, req), fields(session_id = %req.session_id))]
    #[tool(description = "End the hangman game session and reveal the word.")]
    pub async fn end_game(
        &self,
        Parameters(req): Parameters<SessionRequest>,
    ) -> Result<CallToolResult, McpError> {
        match self.sessions.end_game(&req.session_id) {
            Ok(response) => respond(&response),
            Err(e) => respond(&ErrorResponse::new(e.to_string())),
        }
    }
}

impl Default for HangmanServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for HangmanServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.instructions = Some("Session-based hangman word-guessing game server".into());
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info
    }
}
