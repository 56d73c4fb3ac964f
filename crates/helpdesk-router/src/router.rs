// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query routing: message in, [`RoutedQuery`] out.

use helpdesk_core::Intent;
use tracing::debug;

use crate::classifier::IntentClassifier;

/// A classified message, created once per incoming message.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedQuery {
    /// The original, unmodified message.
    pub user_message: String,
    /// Classifier output (never [`Intent::Escalation`] with the default table).
    pub intent: Intent,
    /// Classifier confidence (0.0-1.0).
    pub confidence: f64,
}

/// Wraps an [`IntentClassifier`] and packages its output with the message.
#[derive(Debug, Clone, Default)]
pub struct QueryRouter {
    classifier: IntentClassifier,
}

impl QueryRouter {
    /// Create a router over the default keyword table.
    pub fn new() -> Self {
        Self::with_classifier(IntentClassifier::new())
    }

    /// Create a router over a specific classifier.
    pub fn with_classifier(classifier: IntentClassifier) -> Self {
        Self { classifier }
    }

    /// The underlying classifier.
    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    /// Route a message. Never fails.
    pub fn route(&self, message: &str) -> RoutedQuery {
        let classification = self.classifier.classify(message);

        debug!(
            intent = %classification.intent,
            confidence = classification.confidence,
            hits = classification.hits,
            matched = ?classification.matched,
            "routed query"
        );

        RoutedQuery {
            user_message: message.to_string(),
            intent: classification.intent,
            confidence: classification.confidence,
        }
    }
}
