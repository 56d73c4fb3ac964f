// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory interaction sink.

use std::sync::Mutex;

use helpdesk_core::{HelpdeskError, InteractionRecord, InteractionSink, LoggedInteraction};

use crate::jsonl::timestamp_now;

/// Collects appended records in memory, stamped like the file log.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<LoggedInteraction>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything appended so far, oldest first.
    pub fn entries(&self) -> Vec<LoggedInteraction> {
        match self.entries.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// The appended records without their timestamps.
    pub fn records(&self) -> Vec<InteractionRecord> {
        self.entries().into_iter().map(|e| e.record).collect()
    }

    pub fn len(&self) -> usize {
        match self.entries.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl InteractionSink for MemorySink {
    fn append(&self, record: &InteractionRecord) -> Result<(), HelpdeskError> {
        let entry = LoggedInteraction {
            timestamp: timestamp_now(),
            record: record.clone(),
        };
        let mut guard = self
            .entries
            .lock()
            .map_err(|_| HelpdeskError::Internal("memory sink lock poisoned".into()))?;
        guard.push(entry);
        Ok(())
    }
}
