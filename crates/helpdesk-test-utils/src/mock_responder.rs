// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic responders for dispatcher tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use helpdesk_core::{HelpdeskError, Responder};

/// Returns the same answer for every message and records what it was asked.
pub struct StubResponder {
    name: String,
    answer: String,
    calls: AtomicUsize,
    seen: Mutex<Vec<String>>,
}

impl StubResponder {
    pub fn new(name: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            answer: answer.into(),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Number of times `respond` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Messages received, oldest first.
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Responder for StubResponder {
    fn name(&self) -> &str {
        &self.name
    }

    fn respond(&self, message: &str) -> Result<String, HelpdeskError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap_or_else(PoisonError::into_inner).push(message.to_string());
        Ok(self.answer.clone())
    }
}

/// Fails every call with [`HelpdeskError::Responder`].
pub struct FailingResponder {
    name: String,
}

impl FailingResponder {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Responder for FailingResponder {
    fn name(&self) -> &str {
        &self.name
    }

    fn respond(&self, _message: &str) -> Result<String, HelpdeskError> {
        Err(HelpdeskError::Responder {
            responder: self.name.clone(),
            message: "stub failure".to_string(),
        })
    }
}
