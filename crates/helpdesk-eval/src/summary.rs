// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Aggregate statistics over logged interactions.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use helpdesk_core::{Intent, InteractionRecord};
use helpdesk_ledger::LogLoad;

/// Running totals for one effective intent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IntentStats {
    pub count: usize,
    pub confidence_sum: f64,
    pub latency_ms_sum: u64,
    pub response_length_sum: usize,
}

impl IntentStats {
    fn add(&mut self, record: &InteractionRecord) {
        self.count += 1;
        self.confidence_sum += record.confidence;
        self.latency_ms_sum = self.latency_ms_sum.saturating_add(record.latency_ms);
        self.response_length_sum = self
            .response_length_sum
            .saturating_add(record.response_length);
    }

    fn mean(&self, sum: f64) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            sum / self.count as f64
        }
    }

    pub fn avg_confidence(&self) -> f64 {
        self.mean(self.confidence_sum)
    }

    pub fn avg_latency_ms(&self) -> f64 {
        self.mean(self.latency_ms_sum as f64)
    }

    pub fn avg_response_length(&self) -> f64 {
        self.mean(self.response_length_sum as f64)
    }
}

/// Summary of a non-empty set of interactions.
#[derive(Debug, Clone, PartialEq)]
pub struct LogSummary {
    pub total: usize,
    /// Keyed by effective intent, in declaration order.
    pub by_intent: BTreeMap<Intent, IntentStats>,
    pub fallback_count: usize,
}

impl LogSummary {
    /// Summarize `records`. Returns `None` for an empty slice.
    pub fn from_records(records: &[InteractionRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let mut by_intent: BTreeMap<Intent, IntentStats> = BTreeMap::new();
        let mut fallback_count = 0;
        for record in records {
            by_intent.entry(record.intent).or_default().add(record);
            if record.fallback {
                fallback_count += 1;
            }
        }

        Some(Self {
            total: records.len(),
            by_intent,
            fallback_count,
        })
    }

    /// Percentage of interactions that were escalated.
    pub fn fallback_rate(&self) -> f64 {
        self.fallback_count as f64 / self.total as f64 * 100.0
    }
}

/// Result of summarizing an interaction log.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryReport {
    /// No log file exists yet.
    MissingLog(PathBuf),
    /// The log exists but holds no parsable records.
    NoRecords { skipped: usize },
    Summary { summary: LogSummary, skipped: usize },
}

impl SummaryReport {
    pub fn from_load(load: &LogLoad) -> Self {
        match load {
            LogLoad::Missing(path) => SummaryReport::MissingLog(path.clone()),
            LogLoad::Loaded { skipped, .. } => {
                let records = load.records();
                match LogSummary::from_records(&records) {
                    Some(summary) => SummaryReport::Summary {
                        summary,
                        skipped: *skipped,
                    },
                    None => SummaryReport::NoRecords { skipped: *skipped },
                }
            }
        }
    }
}

fn write_skipped(f: &mut fmt::Formatter<'_>, skipped: usize) -> fmt::Result {
    if skipped > 0 {
        writeln!(f, "Skipped malformed lines: {skipped}")?;
    }
    Ok(())
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryReport::MissingLog(path) => {
                writeln!(f, "No log file found at {}", path.display())
            }
            SummaryReport::NoRecords { skipped } => {
                writeln!(f, "No records to summarize.")?;
                write_skipped(f, *skipped)
            }
            SummaryReport::Summary { summary, skipped } => {
                writeln!(f, "=== Interaction Summary ===")?;
                writeln!(f, "Total interactions: {}", summary.total)?;
                write_skipped(f, *skipped)?;

                writeln!(f, "\nCounts by intent:")?;
                for (intent, stats) in &summary.by_intent {
                    writeln!(f, "  {intent}: {}", stats.count)?;
                }

                writeln!(f, "\nAverage confidence by intent:")?;
                for (intent, stats) in &summary.by_intent {
                    writeln!(f, "  {intent}: {:.2}", stats.avg_confidence())?;
                }

                writeln!(f, "\nAverage latency (ms) by intent:")?;
                for (intent, stats) in &summary.by_intent {
                    writeln!(f, "  {intent}: {:.1} ms", stats.avg_latency_ms())?;
                }

                writeln!(f, "\nAverage response length by intent:")?;
                for (intent, stats) in &summary.by_intent {
                    writeln!(f, "  {intent}: {:.1} chars", stats.avg_response_length())?;
                }

                writeln!(
                    f,
                    "\nFallbacks: {} ({:.1}% of interactions)",
                    summary.fallback_count,
                    summary.fallback_rate()
                )
            }
        }
    }
}
