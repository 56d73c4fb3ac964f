// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interaction log sink trait.

use crate::error::HelpdeskError;
use crate::types::InteractionRecord;

/// Append-only destination for interaction records.
///
/// Sinks stamp each record with its append time. Records are never read back
/// through this trait; readers go through the log file directly.
pub trait InteractionSink: Send + Sync {
    /// Appends one record.
    fn append(&self, record: &InteractionRecord) -> Result<(), HelpdeskError>;
}
