// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Helpdesk - keyword-routed customer support dispatcher.
//!
//! This is the binary entry point: an interactive `ask` command and a batch
//! `eval` command that prints both offline reports.

mod ask;
mod eval;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use helpdesk_config::HelpdeskConfig;

/// Helpdesk - keyword-routed customer support dispatcher.
#[derive(Parser, Debug)]
#[command(name = "helpdesk", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Answer one message (prompts for it when omitted).
    Ask {
        /// The user message.
        message: Option<String>,
    },
    /// Summarize the interaction log and evaluate the router.
    Eval,
}

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => helpdesk_config::load_and_validate_path(path),
        None => helpdesk_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            helpdesk_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config);
    tracing::debug!(agent = %config.agent.name, "configuration loaded");

    let result = match cli.command.unwrap_or(Commands::Ask { message: None }) {
        Commands::Ask { message } => ask::run_ask(&config, message),
        Commands::Eval => eval::run_eval(&config),
    };

    if let Err(e) = result {
        eprintln!("{}: {e}", "error".red());
        std::process::exit(1);
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over `agent.log_level`.
fn init_tracing(config: &HelpdeskConfig) {
    use tracing_subscriber::EnvFilter;

    let log_level = config.agent.log_level.to_lowercase();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("helpdesk={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
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
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["helpdesk"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn ask_with_message() {
        let cli = Cli::try_parse_from(["helpdesk", "ask", "refund please"]).unwrap();
        match cli.command {
            Some(Commands::Ask { message }) => assert_eq!(message.as_deref(), Some("refund please")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_config_flag() {
        let cli = Cli::try_parse_from(["helpdesk", "eval", "--config", "custom.toml"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Eval)));
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }
}
