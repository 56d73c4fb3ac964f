// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `helpdesk ask` command implementation.
//!
//! Answers a single message given on the command line, or reads one line from
//! an interactive `User: ` prompt. Answers go to stdout; the interaction is
//! appended to the configured JSON Lines log.

use std::path::Path;
use std::sync::Arc;

use colored::Colorize;
use helpdesk_agent::Dispatcher;
use helpdesk_config::HelpdeskConfig;
use helpdesk_core::HelpdeskError;
use helpdesk_ledger::JsonlInteractionLog;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Run the `helpdesk ask` command.
pub fn run_ask(config: &HelpdeskConfig, message: Option<String>) -> Result<(), HelpdeskError> {
    let message = match message {
        Some(message) => message,
        None => match prompt()? {
            Some(line) => line,
            None => return Ok(()),
        },
    };

    let sink = Arc::new(JsonlInteractionLog::new(Path::new(
        &config.logging.interactions_path,
    )));
    let dispatcher = Dispatcher::from_config(config, sink);
    let outcome = dispatcher.handle(&message)?;

    if outcome.record.fallback {
        eprintln!(
            "{}",
            format!("escalated: {}", describe_reason(&outcome.record)).yellow()
        );
    }
    println!("\n{}", outcome.answer);
    Ok(())
}

/// Read one line. `None` on Ctrl+C or Ctrl+D.
fn prompt() -> Result<Option<String>, HelpdeskError> {
    let mut rl = DefaultEditor::new()
        .map_err(|e| HelpdeskError::Internal(format!("failed to initialize readline: {e}")))?;

    match rl.readline("User: ") {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(e) => Err(HelpdeskError::Internal(format!("failed to read input: {e}"))),
    }
}

fn describe_reason(record: &helpdesk_core::InteractionRecord) -> String {
    match record.fallback_reason {
        Some(reason) => format!(
            "{reason} (router said {}, {:.2})",
            record.router_intent, record.confidence
        ),
        None => "unspecified".to_string(),
    }
}
