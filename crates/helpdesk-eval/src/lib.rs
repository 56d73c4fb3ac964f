// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Offline evaluation for the Helpdesk dispatcher.
//!
//! Two independent batch reports:
//! - [`SummaryReport`] aggregates the interaction log by effective intent.
//! - [`EvalReport`] measures router accuracy against a labeled dataset.
//!
//! Missing inputs produce informational report states rather than errors.

pub mod router_eval;
pub mod summary;

use std::path::Path;

use helpdesk_config::HelpdeskConfig;
use helpdesk_core::HelpdeskError;
use helpdesk_ledger::read_interactions;
use helpdesk_router::QueryRouter;

pub use router_eval::{
    DatasetLoad, EvalExample, EvalReport, ExpectedLabel, IntentAccuracy, RouterEvaluation,
    load_dataset,
};
pub use summary::{IntentStats, LogSummary, SummaryReport};

/// Summarize the interaction log at `path`.
pub fn summarize_log(path: &Path) -> Result<SummaryReport, HelpdeskError> {
    let load = read_interactions(path)?;
    Ok(SummaryReport::from_load(&load))
}

/// Evaluate `router` against the dataset at `path`.
pub fn evaluate_router(router: &QueryRouter, path: &Path) -> Result<EvalReport, HelpdeskError> {
    let load = load_dataset(path)?;
    Ok(EvalReport::from_load(router, &load))
}

/// Summarize the interaction log configured in `config.logging`.
pub fn summarize_configured_log(config: &HelpdeskConfig) -> Result<SummaryReport, HelpdeskError> {
    summarize_log(Path::new(&config.logging.interactions_path))
}

/// Evaluate the default router against the dataset configured in `config.eval`.
pub fn evaluate_configured_dataset(config: &HelpdeskConfig) -> Result<EvalReport, HelpdeskError> {
    evaluate_router(&QueryRouter::new(), Path::new(&config.eval.dataset_path))
}
