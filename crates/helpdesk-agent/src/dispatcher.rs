// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Confidence-gated dispatch with escalation.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use helpdesk_config::HelpdeskConfig;
use helpdesk_core::{
    FallbackReason, HelpdeskError, Intent, InteractionRecord, InteractionSink, Responder,
};
use helpdesk_knowledge::KnowledgeBase;
use helpdesk_router::{QueryRouter, RoutedQuery};
use tracing::{debug, info};

use crate::registry::ResponderRegistry;
use crate::responders::EscalationResponder;

/// Confidence below which a message is escalated.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.6;

/// Characters of the answer kept in `answer_preview`.
pub const PREVIEW_CHARS: usize = 200;

/// The answer for one message together with the record that was logged for it.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchOutcome {
    pub answer: String,
    pub record: InteractionRecord,
}

/// Routes messages to topic responders and logs every interaction.
///
/// Messages whose router confidence is strictly below the threshold, and
/// messages routed to an intent with no registered responder, go to the
/// [`EscalationResponder`]. Responder errors propagate and nothing is logged
/// for that message.
pub struct Dispatcher {
    router: QueryRouter,
    registry: ResponderRegistry,
    escalation: EscalationResponder,
    sink: Arc<dyn InteractionSink>,
    threshold: f64,
}

impl Dispatcher {
    /// Creates a dispatcher with the default router and threshold.
    pub fn new(registry: ResponderRegistry, sink: Arc<dyn InteractionSink>) -> Self {
        Self {
            router: QueryRouter::new(),
            registry,
            escalation: EscalationResponder,
            sink,
            threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }

    /// Assemble the production dispatcher from configuration.
    pub fn from_config(config: &HelpdeskConfig, sink: Arc<dyn InteractionSink>) -> Self {
        let kb = Arc::new(KnowledgeBase::new(Path::new(&config.knowledge.kb_dir)));
        let registry = ResponderRegistry::standard(kb, config.knowledge.top_k);
        Self::new(registry, sink).with_threshold(config.routing.confidence_threshold)
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_router(mut self, router: QueryRouter) -> Self {
        self.router = router;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn router(&self) -> &QueryRouter {
        &self.router
    }

    pub fn registry(&self) -> &ResponderRegistry {
        &self.registry
    }

    /// Answer a message, logging exactly one interaction record.
    pub fn dispatch(&self, message: &str) -> Result<String, HelpdeskError> {
        Ok(self.handle(message)?.answer)
    }

    /// Like [`dispatch`](Self::dispatch) but also returns the logged record.
    pub fn handle(&self, message: &str) -> Result<DispatchOutcome, HelpdeskError> {
        let routed = self.router.route(message);
        self.dispatch_routed(routed)
    }

    /// Dispatch an already-routed message.
    pub fn dispatch_routed(&self, routed: RoutedQuery) -> Result<DispatchOutcome, HelpdeskError> {
        let started = Instant::now();

        let (answer, intent, fallback_reason) = if routed.confidence < self.threshold {
            self.escalate(&routed, FallbackReason::LowConfidence)
        } else {
            match self.responder_for(routed.intent) {
                Some(responder) => {
                    debug!(
                        intent = %routed.intent,
                        responder = responder.name(),
                        "dispatching to topic responder"
                    );
                    let answer = responder.respond(&routed.user_message)?;
                    (answer, routed.intent, None)
                }
                None => self.escalate(&routed, FallbackReason::UnknownIntent),
            }
        };

        let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let record = InteractionRecord {
            user_message: routed.user_message,
            intent,
            router_intent: routed.intent,
            confidence: routed.confidence,
            fallback: fallback_reason.is_some(),
            fallback_reason,
            latency_ms,
            response_length: answer.chars().count(),
            answer_preview: answer.chars().take(PREVIEW_CHARS).collect(),
        };
        self.sink.append(&record)?;

        Ok(DispatchOutcome { answer, record })
    }

    /// The escalation intent never has a topic responder, even if one was registered.
    fn responder_for(&self, intent: Intent) -> Option<Arc<dyn Responder>> {
        if intent.is_routable() {
            self.registry.get(intent)
        } else {
            None
        }
    }

    fn escalate(
        &self,
        routed: &RoutedQuery,
        reason: FallbackReason,
    ) -> (String, Intent, Option<FallbackReason>) {
        info!(
            router_intent = %routed.intent,
            confidence = routed.confidence,
            threshold = self.threshold,
            reason = %reason,
            "escalating to human agent"
        );
        let answer = self.escalation.escalate(&routed.user_message, reason);
        (answer, Intent::Escalation, Some(reason))
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("registry", &self.registry)
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}
