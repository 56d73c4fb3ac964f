// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `helpdesk eval` command implementation.

use helpdesk_config::HelpdeskConfig;
use helpdesk_core::HelpdeskError;

/// Print the interaction summary followed by the router evaluation.
///
/// The summary is printed before the dataset is read, so a broken dataset
/// still leaves the summary on stdout.
pub fn run_eval(config: &HelpdeskConfig) -> Result<(), HelpdeskError> {
    let summary = helpdesk_eval::summarize_configured_log(config)?;
    print!("{summary}");
    println!();

    let eval = helpdesk_eval::evaluate_configured_dataset(config)?;
    print!("{eval}");
    Ok(())
}
