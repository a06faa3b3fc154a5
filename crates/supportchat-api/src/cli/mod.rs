//! CLI command definitions for the `supportchat` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod chat;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Customer-support chat backend.
#[derive(Parser)]
#[command(name = "supportchat", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a TOML config file (default: `~/.supportchat/supportchat.toml`).
    #[arg(long, global = true, env = "SUPPORTCHAT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on (default: $PORT or 3000).
        #[arg(long)]
        port: Option<u16>,

        /// Host to bind to (default: 0.0.0.0).
        #[arg(long)]
        host: Option<String>,
    },

    /// Send one message and print the assistant's reply.
    Send {
        /// The customer message.
        message: String,

        /// Continue an existing conversation.
        #[arg(long, short)]
        session: Option<String>,
    },

    /// Print the message history of a conversation.
    History {
        /// Conversation (session) id.
        session_id: String,
    },
}
