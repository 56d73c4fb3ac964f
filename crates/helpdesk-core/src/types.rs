// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the router, the dispatcher and the evaluation harness.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Support intent labels.
///
/// Declaration order is significant: it is the classifier's iteration order
/// (and therefore its tie-break order) and the order reports are printed in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum Intent {
    #[strum(serialize = "Billing")]
    #[serde(rename = "Billing")]
    Billing,
    #[strum(serialize = "Technical Issue")]
    #[serde(rename = "Technical Issue")]
    TechnicalIssue,
    #[strum(serialize = "Account & Subscription")]
    #[serde(rename = "Account & Subscription")]
    AccountSubscription,
    #[strum(serialize = "Product Usage")]
    #[serde(rename = "Product Usage")]
    ProductUsage,
    #[strum(serialize = "General FAQ")]
    #[serde(rename = "General FAQ")]
    GeneralFaq,
    /// Synthetic label assigned by the dispatcher, never by the classifier.
    #[strum(serialize = "Escalation")]
    #[serde(rename = "Escalation")]
    Escalation,
}

impl Intent {
    /// Intents the classifier can produce, in tie-break order.
    pub const ROUTABLE: [Intent; 5] = [
        Intent::Billing,
        Intent::TechnicalIssue,
        Intent::AccountSubscription,
        Intent::ProductUsage,
        Intent::GeneralFaq,
    ];

    /// Label returned by the classifier when no keyword matches.
    pub const DEFAULT: Intent = Intent::GeneralFaq;

    /// Whether the classifier can emit this label.
    pub fn is_routable(self) -> bool {
        self != Intent::Escalation
    }
}

/// Why a message was handed to the escalation responder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// Classifier confidence fell below the routing threshold.
    LowConfidence,
    /// No topic responder is registered for the routed intent.
    UnknownIntent,
}

/// One dispatched message, as written to the interaction log.
///
/// Numeric and flag fields default when absent so that older or partial log
/// lines still contribute to summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    /// The raw user message.
    #[serde(default)]
    pub user_message: String,
    /// Effective intent after escalation.
    pub intent: Intent,
    /// Intent the router produced before any escalation.
    pub router_intent: Intent,
    /// Router confidence (0.0-1.0).
    #[serde(default)]
    pub confidence: f64,
    /// True iff the effective intent is [`Intent::Escalation`].
    #[serde(default)]
    pub fallback: bool,
    /// Set iff `fallback` is true.
    #[serde(default)]
    pub fallback_reason: Option<FallbackReason>,
    /// Responder wall time in whole milliseconds.
    #[serde(default)]
    pub latency_ms: u64,
    /// Answer length in characters.
    #[serde(default)]
    pub response_length: usize,
    /// First 200 characters of the answer.
    #[serde(default)]
    pub answer_preview: String,
}

/// An [`InteractionRecord`] stamped by the sink at append time.
///
/// Serializes as a single flat JSON object with `timestamp` first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedInteraction {
    /// ISO 8601 UTC timestamp with a `Z` suffix.
    #[serde(default)]
    pub timestamp: String,
    #[serde(flatten)]
    pub record: InteractionRecord,
}
