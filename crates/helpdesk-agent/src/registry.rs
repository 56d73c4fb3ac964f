// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Intent to responder mapping.

use std::collections::HashMap;
use std::sync::Arc;

use helpdesk_core::{Intent, Responder};
use helpdesk_knowledge::KnowledgeBase;

use crate::responders::{CannedResponder, KnowledgeResponder};

/// Registry of topic responders, indexed by intent.
///
/// Lookups for an intent without an entry return `None`; the dispatcher
/// escalates those messages instead of failing.
#[derive(Clone, Default)]
pub struct ResponderRegistry {
    responders: HashMap<Intent, Arc<dyn Responder>>,
}

impl ResponderRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The production registry: one responder per routable intent.
    pub fn standard(kb: Arc<KnowledgeBase>, top_k: usize) -> Self {
        let mut registry = Self::new();
        registry.register(
            Intent::Billing,
            Arc::new(KnowledgeResponder::billing(Arc::clone(&kb), top_k)),
        );
        registry.register(
            Intent::TechnicalIssue,
            Arc::new(KnowledgeResponder::technical(kb, top_k)),
        );
        registry.register(
            Intent::AccountSubscription,
            Arc::new(CannedResponder::account()),
        );
        registry.register(Intent::ProductUsage, Arc::new(CannedResponder::product()));
        registry.register(Intent::GeneralFaq, Arc::new(CannedResponder::general()));
        registry
    }

    /// Registers `responder` for `intent`, replacing any previous entry.
    pub fn register(&mut self, intent: Intent, responder: Arc<dyn Responder>) {
        self.responders.insert(intent, responder);
    }

    /// Removes and returns the responder for `intent`.
    pub fn remove(&mut self, intent: Intent) -> Option<Arc<dyn Responder>> {
        self.responders.remove(&intent)
    }

    /// Looks up the responder for `intent`.
    pub fn get(&self, intent: Intent) -> Option<Arc<dyn Responder>> {
        self.responders.get(&intent).cloned()
    }

    pub fn contains(&self, intent: Intent) -> bool {
        self.responders.contains_key(&intent)
    }

    /// Registered intents in declaration order.
    pub fn intents(&self) -> Vec<Intent> {
        let mut intents: Vec<Intent> = self.responders.keys().copied().collect();
        intents.sort();
        intents
    }

    pub fn len(&self) -> usize {
        self.responders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responders.is_empty()
    }
}

impl std::fmt::Debug for ResponderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries: Vec<(Intent, &str)> = self
            .intents()
            .into_iter()
            .filter_map(|i| self.responders.get(&i).map(|r| (i, r.name())))
            .collect();
        f.debug_struct("ResponderRegistry")
            .field("responders", &entries)
            .finish()
    }
}
