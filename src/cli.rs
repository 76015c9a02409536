//! Command-line interface for hangman_games.

use clap::{Parser, Subcommand};

/// Hangman Games - session-based word-guessing server with MCP interface
#[derive(Parser, Debug)]
#[command(name = "hangman_games")]
#[command(about = "Hangman game server for MCP clients", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the MCP game server (stdio mode)
    Server,

    /// Run the HTTP game server
    Http {
        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}
