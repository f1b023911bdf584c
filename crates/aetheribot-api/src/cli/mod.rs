//! CLI command definitions and dispatch for the `aetheribot` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod ask;
pub mod moods;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use aetheribot_types::mood::Mood;

/// Chat with AetheriBot about GitHub repositories.
#[derive(Parser)]
#[command(name = "aetheribot", version, about, long_about = None)]
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

    /// Export tracing spans via OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server.
    Serve {
        /// Port to listen on (overrides `server.port`).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides `server.host`).
        #[arg(long)]
        host: Option<String>,
    },

    /// Answer a single query and print the reply.
    Ask {
        /// The query, e.g. `vercel/next.js` or `best todo app`.
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },

    /// List the persona moods, or show one.
    Moods {
        /// Mood to show, e.g. `dreamy-poet` or "Dreamy Poet".
        mood: Option<Mood>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
