// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in topic responders.
//!
//! Billing and Technical Issue answers quote the best-matching entry of their
//! knowledge document. The remaining topics answer with fixed guidance, and
//! escalation hands the conversation to a human.

use std::sync::Arc;

use helpdesk_core::{FallbackReason, HelpdeskError, Responder};
use helpdesk_knowledge::KnowledgeBase;

/// Quoted in place of an FAQ entry when the document has no overlapping entry.
pub const NO_MATCH_TEXT: &str = "No exact FAQ match was found.";

/// Answers by quoting the top entries of one knowledge document.
#[derive(Debug, Clone)]
pub struct KnowledgeResponder {
    name: &'static str,
    topic: &'static str,
    document: &'static str,
    kb: Arc<KnowledgeBase>,
    top_k: usize,
}

impl KnowledgeResponder {
    /// Billing answers backed by `billing.md`.
    pub fn billing(kb: Arc<KnowledgeBase>, top_k: usize) -> Self {
        Self {
            name: "Billing Agent",
            topic: "billing",
            document: "billing.md",
            kb,
            top_k,
        }
    }

    /// Technical answers backed by `technical.md`.
    pub fn technical(kb: Arc<KnowledgeBase>, top_k: usize) -> Self {
        Self {
            name: "Technical Support Agent",
            topic: "technical",
            document: "technical.md",
            kb,
            top_k,
        }
    }

    /// Knowledge document this responder searches.
    pub fn document(&self) -> &str {
        self.document
    }
}

impl Responder for KnowledgeResponder {
    fn name(&self) -> &str {
        self.name
    }

    fn respond(&self, message: &str) -> Result<String, HelpdeskError> {
        let matches = self.kb.search(self.document, message, self.top_k);
        let quoted = if matches.is_empty() {
            NO_MATCH_TEXT.to_string()
        } else {
            matches
                .iter()
                .map(|m| m.text.as_str())
                .collect::<Vec<_>>()
                .join("\n\n")
        };

        Ok(format!(
            "{} (KB-backed):\nUser question: {message}\n\nMost relevant {} FAQ:\n{quoted}\n",
            self.name, self.topic
        ))
    }
}

/// Answers every message in a topic with the same guidance.
#[derive(Debug, Clone)]
pub struct CannedResponder {
    name: &'static str,
    body: &'static str,
}

impl CannedResponder {
    pub fn new(name: &'static str, body: &'static str) -> Self {
        Self { name, body }
    }

    pub fn account() -> Self {
        Self::new(
            "Account Agent",
            "I see an account or subscription question.\n\
             Plans, passwords and cancellations can be managed under Settings > Account in AcmeCloud.\n\
             If this were production, I would look up your account and open a ticket for anything you cannot change yourself.",
        )
    }

    pub fn product() -> Self {
        Self::new(
            "Product Guide",
            "I see a question about using AcmeCloud.\n\
             Step-by-step tutorials for every feature are in the AcmeCloud Help Center under Guides.\n\
             If this were production, I would link the guide that matches the feature you asked about.",
        )
    }

    pub fn general() -> Self {
        Self::new(
            "General Support",
            "AcmeCloud is a cloud workspace for teams.\n\
             Support is available 24/7 through in-app chat and by email.\n\
             If this were production, I would point you to the relevant page of our FAQ.",
        )
    }
}

impl Responder for CannedResponder {
    fn name(&self) -> &str {
        self.name
    }

    fn respond(&self, _message: &str) -> Result<String, HelpdeskError> {
        Ok(format!("{}:\n{}", self.name, self.body))
    }
}

/// Hands a conversation over to a human agent.
///
/// Not registered against any intent; the dispatcher calls it directly.
#[derive(Debug, Clone, Default)]
pub struct EscalationResponder;

impl EscalationResponder {
    pub const NAME: &'static str = "Escalation Agent";

    /// Produce the handover answer. Never empty.
    pub fn escalate(&self, _message: &str, reason: FallbackReason) -> String {
        format!(
            "{}:\nThis conversation is being handed to a human agent (reason: {reason}).\n\
             A human support specialist would review the full context and respond.",
            Self::NAME
        )
    }
}
