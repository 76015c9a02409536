//! Hangman Games - server entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use hangman_games::{HangmanServer, SessionRegistry};
use rmcp::ServiceExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Server => run_mcp_server().await,
        Command::Http { port, host } => run_http_server(host, port).await,
    }
}

/// Run the MCP game server (stdio mode)
async fn run_mcp_server() -> Result<()> {
    // Stdout carries the MCP stream; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    info!("Starting hangman MCP server");

    let server = HangmanServer::new();

    info!("Server ready - connect via MCP protocol");
    let service = server.serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;

    Ok(())
}

/// Run the HTTP game server
async fn run_http_server(host: String, port: u16) -> Result<()> {
    use axum::{Router, body::Body, http::Request};
    use rmcp::transport::streamable_http_server::{
        session::local::LocalSessionManager,
        tower::{StreamableHttpServerConfig, StreamableHttpService},
    };
    use std::sync::Arc;
    use tower::ServiceBuilder;
    use tracing::debug;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,rmcp=debug")),
        )
        .init();

    info!(%host, port, "Starting hangman MCP server on HTTP");

    let session_manager = Arc::new(LocalSessionManager::default());

    // One registry shared by every connection; servers are cheap wrappers.
    let game_sessions = SessionRegistry::new();

    let http_service = StreamableHttpService::new(
        move || Ok(HangmanServer::with_sessions(game_sessions.clone())),
        session_manager,
        StreamableHttpServerConfig::default(),
    );

    let app = Router::new().fallback_service(
        ServiceBuilder::new()
            .map_request(|req: Request<Body>| {
                debug!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
                req
            })
            .service(http_service),
    );

    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;
    info!("Server ready at http://{host}:{port}/");
    info!("Tools: start_game, guess, status, list_sessions, end_game");

    axum::serve(listener, app).await?;

    Ok(())
}
