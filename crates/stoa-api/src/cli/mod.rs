//! CLI command definitions for the `stoa` binary.
//!
//! Uses clap derive macros for argument parsing. Commands are single verbs
//! (e.g., `stoa serve`, `stoa ask Socrates "..."`).

pub mod persona;
pub mod quote;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Philosopher personas over a chat-completion API.
#[derive(Parser)]
#[command(name = "stoa", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the service configuration file.
    #[arg(long, global = true, env = "STOA_CONFIG", default_value = "stoa.toml")]
    pub config: PathBuf,

    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server.
    Serve {
        /// Host to bind to (overrides the config file).
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides the config file).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Fetch a Stoic quote and print it.
    Quote {
        /// Quote endpoint (overrides the config file).
        #[arg(long)]
        url: Option<String>,
    },

    /// List personas and their conversation starters.
    #[command(alias = "ls")]
    Personas,

    /// Ask a persona one question.
    Ask {
        /// Persona key, e.g. "Socrates" or "Marcus Aurelius".
        persona: String,

        /// The message to send.
        message: String,

        /// Prior turn, prefixed "Human: " or "<persona>: ". Repeatable, oldest first.
        #[arg(long = "history", value_name = "TURN")]
        history: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn ask_collects_repeated_history() {
        let cli = Cli::parse_from([
            "stoa",
            "ask",
            "Socrates",
            "What is virtue?",
            "--history",
            "Human: Hello",
            "--history",
            "Socrates: Greetings",
        ]);
        match cli.command {
            Commands::Ask {
                persona,
                message,
                history,
            } => {
                assert_eq!(persona, "Socrates");
                assert_eq!(message, "What is virtue?");
                assert_eq!(history, vec!["Human: Hello", "Socrates: Greetings"]);
            }
            _ => panic!("expected ask"),
        }
    }

    #[test]
    fn serve_overrides_are_optional() {
        let cli = Cli::parse_from(["stoa", "serve", "--port", "8080", "-v"]);
        assert_eq!(cli.verbose, 1);
        assert!(matches!(
            cli.command,
            Commands::Serve {
                host: None,
                port: Some(8080)
            }
        ));
    }
}
