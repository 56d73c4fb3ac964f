// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end dispatch testing.
//!
//! `DispatchHarness` assembles the production responder registry over a
//! temporary knowledge base and an in-memory sink, with optional per-intent
//! overrides. `send()` drives the full route, respond and log pipeline.

use std::path::Path;
use std::sync::Arc;

use helpdesk_agent::{Dispatcher, ResponderRegistry};
use helpdesk_core::{HelpdeskError, Intent, InteractionRecord, Responder};
use helpdesk_knowledge::KnowledgeBase;
use helpdesk_ledger::MemorySink;
use helpdesk_router::QueryRouter;

use crate::fixtures::write_standard_kb;

enum Override {
    Replace(Intent, Arc<dyn Responder>),
    Remove(Intent),
}

/// Builder for [`DispatchHarness`].
pub struct DispatchHarnessBuilder {
    threshold: Option<f64>,
    top_k: usize,
    router: Option<QueryRouter>,
    overrides: Vec<Override>,
}

impl DispatchHarnessBuilder {
    fn new() -> Self {
        Self {
            threshold: None,
            top_k: 1,
            router: None,
            overrides: Vec::new(),
        }
    }

    /// Override the confidence threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Number of FAQ entries quoted by knowledge-backed responders.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Use a custom router (for example one over a custom keyword table).
    pub fn with_router(mut self, router: QueryRouter) -> Self {
        self.router = Some(router);
        self
    }

    /// Replace the responder registered for `intent`.
    pub fn with_responder(mut self, intent: Intent, responder: Arc<dyn Responder>) -> Self {
        self.overrides.push(Override::Replace(intent, responder));
        self
    }

    /// Leave `intent` without a responder.
    pub fn without_responder(mut self, intent: Intent) -> Self {
        self.overrides.push(Override::Remove(intent));
        self
    }

    /// Write the knowledge fixtures and assemble the dispatcher.
    pub fn build(self) -> Result<DispatchHarness, HelpdeskError> {
        let kb_dir = tempfile::TempDir::new()?;
        write_standard_kb(kb_dir.path())?;

        let kb = Arc::new(KnowledgeBase::new(kb_dir.path()));
        let mut registry = ResponderRegistry::standard(kb, self.top_k);
        for o in self.overrides {
            match o {
                Override::Replace(intent, responder) => registry.register(intent, responder),
                Override::Remove(intent) => {
                    registry.remove(intent);
                }
            }
        }

        let sink = Arc::new(MemorySink::new());
        let mut dispatcher = Dispatcher::new(registry, sink.clone());
        if let Some(threshold) = self.threshold {
            dispatcher = dispatcher.with_threshold(threshold);
        }
        if let Some(router) = self.router {
            dispatcher = dispatcher.with_router(router);
        }

        Ok(DispatchHarness {
            dispatcher,
            sink,
            kb_dir,
        })
    }
}

/// A dispatcher wired to an in-memory sink and a temp knowledge base.
pub struct DispatchHarness {
    /// The dispatcher under test.
    pub dispatcher: Dispatcher,
    /// Everything the dispatcher logged.
    pub sink: Arc<MemorySink>,
    /// Temp directory kept alive for cleanup on drop.
    kb_dir: tempfile::TempDir,
}

impl DispatchHarness {
    pub fn builder() -> DispatchHarnessBuilder {
        DispatchHarnessBuilder::new()
    }

    /// Harness with the production registry and default threshold.
    pub fn standard() -> Result<Self, HelpdeskError> {
        Self::builder().build()
    }

    /// Dispatch one message and return the answer.
    pub fn send(&self, message: &str) -> Result<String, HelpdeskError> {
        self.dispatcher.dispatch(message)
    }

    /// Records logged so far, oldest first.
    pub fn records(&self) -> Vec<InteractionRecord> {
        self.sink.records()
    }

    /// The most recently logged record.
    pub fn last_record(&self) -> Option<InteractionRecord> {
        self.sink.records().pop()
    }

    pub fn kb_dir(&self) -> &Path {
        self.kb_dir.path()
    }
}
