// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Router accuracy against a labeled dataset.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use helpdesk_core::{HelpdeskError, Intent};
use helpdesk_router::QueryRouter;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, warn};

/// The `expected_intent` of a dataset example.
///
/// Labels outside the intent vocabulary are kept verbatim so the example is
/// still scored; the router can never predict them, so they always count as
/// misclassified.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExpectedLabel {
    Known(Intent),
    Unknown(String),
}

impl ExpectedLabel {
    pub fn parse(label: &str) -> Self {
        match Intent::from_str(label) {
            Ok(intent) => ExpectedLabel::Known(intent),
            Err(_) => ExpectedLabel::Unknown(label.to_string()),
        }
    }

    /// Whether the router's `predicted` intent matches this label.
    pub fn matches(&self, predicted: Intent) -> bool {
        matches!(self, ExpectedLabel::Known(intent) if *intent == predicted)
    }
}

impl From<Intent> for ExpectedLabel {
    fn from(intent: Intent) -> Self {
        ExpectedLabel::Known(intent)
    }
}

impl fmt::Display for ExpectedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedLabel::Known(intent) => write!(f, "{intent}"),
            ExpectedLabel::Unknown(label) => f.write_str(label),
        }
    }
}

impl Serialize for ExpectedLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ExpectedLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(ExpectedLabel::parse(&label))
    }
}

/// One labeled evaluation message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalExample {
    pub text: String,
    pub expected_intent: ExpectedLabel,
}

/// Outcome of loading an evaluation dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetLoad {
    Missing(PathBuf),
    Empty,
    Loaded(Vec<EvalExample>),
}

/// Load a dataset: one JSON array of `{text, expected_intent}` objects.
///
/// A missing file and an empty array are distinct, non-error states. A file
/// that is not a JSON array of such objects is an error; an unrecognized
/// `expected_intent` label is not.
pub fn load_dataset(path: &Path) -> Result<DatasetLoad, HelpdeskError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "no router eval dataset found");
            return Ok(DatasetLoad::Missing(path.to_path_buf()));
        }
        Err(e) => {
            return Err(HelpdeskError::Dataset {
                message: format!("cannot read {}", path.display()),
                source: Some(Box::new(e)),
            });
        }
    };

    let examples: Vec<EvalExample> =
        serde_json::from_slice(&bytes).map_err(|e| HelpdeskError::Dataset {
            message: format!("invalid dataset {}: {e}", path.display()),
            source: Some(Box::new(e)),
        })?;

    for example in &examples {
        if let ExpectedLabel::Unknown(label) = &example.expected_intent {
            warn!(label = %label, "unrecognized expected intent in router eval dataset");
        }
    }
    debug!(path = %path.display(), examples = examples.len(), "dataset loaded");
    if examples.is_empty() {
        Ok(DatasetLoad::Empty)
    } else {
        Ok(DatasetLoad::Loaded(examples))
    }
}

/// Correct and total counts for one expected intent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntentAccuracy {
    pub total: usize,
    pub correct: usize,
}

impl IntentAccuracy {
    /// `correct / total`, or 0.0 when there were no examples.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}

/// Router accuracy over a non-empty dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouterEvaluation {
    pub total: usize,
    pub correct: usize,
    /// Keyed by expected label.
    pub per_intent: BTreeMap<ExpectedLabel, IntentAccuracy>,
    /// `(expected, predicted)` pairs that disagreed, with their counts.
    pub confusions: BTreeMap<(ExpectedLabel, Intent), usize>,
}

impl RouterEvaluation {
    /// Route every example and tally the results.
    pub fn run(router: &QueryRouter, examples: &[EvalExample]) -> Self {
        let mut eval = Self::default();
        for example in examples {
            let predicted = router.route(&example.text).intent;
            eval.record(example.expected_intent.clone(), predicted);
        }
        eval
    }

    /// Add one `(expected, predicted)` observation.
    pub fn record(&mut self, expected: impl Into<ExpectedLabel>, predicted: Intent) {
        let expected = expected.into();
        self.total += 1;
        let hit = expected.matches(predicted);
        let slot = self.per_intent.entry(expected.clone()).or_default();
        slot.total += 1;
        if hit {
            self.correct += 1;
            slot.correct += 1;
        } else {
            *self.confusions.entry((expected, predicted)).or_default() += 1;
        }
    }

    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}

/// Result of evaluating the router against a dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalReport {
    MissingDataset(PathBuf),
    EmptyDataset,
    Evaluated(RouterEvaluation),
}

impl EvalReport {
    pub fn from_load(router: &QueryRouter, load: &DatasetLoad) -> Self {
        match load {
            DatasetLoad::Missing(path) => EvalReport::MissingDataset(path.clone()),
            DatasetLoad::Empty => EvalReport::EmptyDataset,
            DatasetLoad::Loaded(examples) => {
                EvalReport::Evaluated(RouterEvaluation::run(router, examples))
            }
        }
    }
}

impl fmt::Display for EvalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalReport::MissingDataset(path) => {
                writeln!(f, "No router eval file found at {}", path.display())
            }
            EvalReport::EmptyDataset => writeln!(f, "Router eval set is empty."),
            EvalReport::Evaluated(eval) => {
                writeln!(f, "=== Router Evaluation ===")?;
                writeln!(f, "Total eval examples: {}", eval.total)?;
                writeln!(f, "Overall accuracy: {:.2}", eval.accuracy())?;

                writeln!(f, "\nPer-intent accuracy:")?;
                for (intent, acc) in &eval.per_intent {
                    writeln!(
                        f,
                        "  {intent}: {:.2} ({}/{})",
                        acc.accuracy(),
                        acc.correct,
                        acc.total
                    )?;
                }

                if !eval.confusions.is_empty() {
                    writeln!(f, "\nMisclassifications:")?;
                    for ((expected, predicted), n) in &eval.confusions {
                        writeln!(f, "  expected={expected}, predicted={predicted}: {n}")?;
                    }
                }
                Ok(())
            }
        }
    }
}
