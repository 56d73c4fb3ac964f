// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Topic responder trait.

use crate::error::HelpdeskError;

/// A topic-specific answer generator.
///
/// The dispatcher holds one responder per routable intent. Implementations
/// are plain `text -> text` functions; an `Err` is treated as fatal by the
/// dispatcher and returned to its caller unchanged.
pub trait Responder: Send + Sync {
    /// Returns the responder's display name (used in logs and errors).
    fn name(&self) -> &str;

    /// Produces the answer for a user message.
    fn respond(&self, message: &str) -> Result<String, HelpdeskError>;
}
