// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword-count intent classification.
//!
//! Counts literal substring hits of each intent's keywords in the lowercased
//! message. Phrases such as "how do i" are matched as-is, so a keyword
//! embedded in an unrelated word ("use" in "because") still counts.

use helpdesk_core::Intent;

/// Ordered intent -> keyword mapping. Iteration order is the tie-break order.
pub type KeywordTable = &'static [(Intent, &'static [&'static str])];

/// The production keyword table, in [`Intent::ROUTABLE`] order.
pub const DEFAULT_KEYWORDS: KeywordTable = &[
    (
        Intent::Billing,
        &["refund", "invoice", "billing", "payment", "price", "charge"],
    ),
    (
        Intent::TechnicalIssue,
        &["error", "bug", "issue", "crash", "slow", "loading"],
    ),
    (
        Intent::AccountSubscription,
        &["login", "password", "account", "subscription", "plan", "cancel"],
    ),
    (
        Intent::ProductUsage,
        &["how do i", "where can i", "feature", "use", "tutorial"],
    ),
    (
        Intent::GeneralFaq,
        &["what is acmecloud", "support hours", "contact", "help"],
    ),
];

/// Hit count at which confidence saturates at 1.0.
const SATURATION_HITS: f64 = 3.0;

/// Result of classifying one message.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Best-scoring intent, or [`Intent::DEFAULT`] when nothing matched.
    pub intent: Intent,
    /// `min(1.0, hits / 3.0)`; 0.0 when nothing matched.
    pub confidence: f64,
    /// Number of the winning intent's keywords found in the message.
    pub hits: usize,
    /// The winning intent's keywords that matched, in table order.
    pub matched: Vec<&'static str>,
}

/// Keyword intent classifier.
///
/// Not a calibrated model: confidence is a linear function of the hit count.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    table: KeywordTable,
}

impl IntentClassifier {
    /// Create a classifier over [`DEFAULT_KEYWORDS`].
    pub fn new() -> Self {
        Self {
            table: DEFAULT_KEYWORDS,
        }
    }

    /// Create a classifier over a custom keyword table.
    ///
    /// Keywords must be lowercase; they are compared against the lowercased
    /// message.
    pub fn with_table(table: KeywordTable) -> Self {
        Self { table }
    }

    /// The keyword table in use.
    pub fn table(&self) -> KeywordTable {
        self.table
    }

    /// Classify a message. Total over all inputs, including the empty string.
    pub fn classify(&self, message: &str) -> Classification {
        let text = message.to_lowercase();

        let mut best = Classification {
            intent: Intent::DEFAULT,
            confidence: 0.0,
            hits: 0,
            matched: Vec::new(),
        };

        for &(intent, keywords) in self.table {
            let matched: Vec<&'static str> = keywords
                .iter()
                .copied()
                .filter(|kw| text.contains(kw))
                .collect();
            // Strictly greater: ties keep the earlier intent.
            if matched.len() > best.hits {
                best = Classification {
                    intent,
                    confidence: 0.0,
                    hits: matched.len(),
                    matched,
                };
            }
        }

        best.confidence = Self::confidence_for_hits(best.hits);
        best
    }

    /// Map a keyword hit count to a confidence in `[0.0, 1.0]`.
    pub fn confidence_for_hits(hits: usize) -> f64 {
        (hits as f64 / SATURATION_HITS).min(1.0)
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_charge_is_billing_with_full_confidence() {
        let c = IntentClassifier::new();
        let result = c.classify("I was charged twice on my invoice, can I get a refund?");
        assert_eq!(result.intent, Intent::Billing);
        assert_eq!(result.hits, 3);
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.matched, vec!["refund", "invoice", "charge"]);
    }

    #[test]
    fn greeting_falls_back_to_default() {
        let c = IntentClassifier::new();
        let result = c.classify("hello");
        assert_eq!(result.intent, Intent::GeneralFaq);
        assert_eq!(result.confidence, 0.0);
        assert!(result.matched.is_empty());
    }

    #[test]
    fn empty_message_is_default_with_zero_confidence() {
        let c = IntentClassifier::new();
        let result = c.classify("");
        assert_eq!(result.intent, Intent::DEFAULT);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.hits, 0);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let c = IntentClassifier::new();
        let result = c.classify("LOGIN fails and my PASSWORD reset is broken");
        assert_eq!(result.intent, Intent::AccountSubscription);
        assert_eq!(result.hits, 2);
    }

    #[test]
    fn phrases_match_as_literal_substrings() {
        let c = IntentClassifier::new();
        let result = c.classify("How do I export a report? Where can I find the tutorial?");
        assert_eq!(result.intent, Intent::ProductUsage);
        assert_eq!(result.matched, vec!["how do i", "where can i", "tutorial"]);
    }

    #[test]
    fn embedded_keyword_still_counts() {
        // "use" inside "because" is an accepted false positive.
        let c = IntentClassifier::new();
        let result = c.classify("because");
        assert_eq!(result.intent, Intent::ProductUsage);
        assert_eq!(result.hits, 1);
    }

    #[test]
    fn ties_go_to_the_earlier_intent() {
        let c = IntentClassifier::new();
        // Technical Issue ("issue") and Account ("password") both hit once.
        let result = c.classify("issue with my password");
        assert_eq!(result.intent, Intent::TechnicalIssue);

        // Billing ("refund") beats Technical Issue ("error") on a tie.
        let result = c.classify("refund error");
        assert_eq!(result.intent, Intent::Billing);
    }

    #[test]
    fn custom_table_order_controls_tie_break() {
        const SWAPPED: KeywordTable = &[
            (Intent::AccountSubscription, &["password"]),
            (Intent::TechnicalIssue, &["issue"]),
        ];
        let c = IntentClassifier::with_table(SWAPPED);
        let result = c.classify("issue with my password");
        assert_eq!(result.intent, Intent::AccountSubscription);
    }

    #[test]
    fn higher_count_beats_earlier_intent() {
        let c = IntentClassifier::new();
        let result = c.classify("the app has a bug and keeps loading, billing is fine");
        assert_eq!(result.intent, Intent::TechnicalIssue);
        assert_eq!(result.hits, 2);
    }

    #[test]
    fn confidence_scale() {
        assert_eq!(IntentClassifier::confidence_for_hits(0), 0.0);
        assert!((IntentClassifier::confidence_for_hits(1) - 1.0 / 3.0).abs() < 1e-12);
        assert!((IntentClassifier::confidence_for_hits(2) - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(IntentClassifier::confidence_for_hits(3), 1.0);
        assert_eq!(IntentClassifier::confidence_for_hits(6), 1.0);
    }

    #[test]
    fn default_table_covers_routable_intents_in_order() {
        let table = IntentClassifier::new().table();
        let intents: Vec<Intent> = table.iter().map(|(i, _)| *i).collect();
        assert_eq!(intents, Intent::ROUTABLE.to_vec());
        for (_, keywords) in table {
            assert!(keywords.iter().all(|k| *k == k.to_lowercase()));
        }
    }

    #[test]
    fn custom_table_replaces_defaults() {
        const ONLY_BILLING: KeywordTable = &[(Intent::Billing, &["invoice"])];
        let classifier = IntentClassifier::with_table(ONLY_BILLING);
        assert_eq!(classifier.table().len(), 1);
        assert_eq!(classifier.classify("the app crashed").intent, Intent::DEFAULT);
        assert_eq!(classifier.classify("my invoice").intent, Intent::Billing);
    }
}
