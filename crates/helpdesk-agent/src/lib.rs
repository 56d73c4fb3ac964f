// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message dispatch for the Helpdesk support assistant.
//!
//! The [`Dispatcher`] is the central coordinator that:
//! - Routes each message through the keyword [`QueryRouter`](helpdesk_router::QueryRouter)
//! - Escalates low-confidence messages and intents with no registered responder
//! - Calls the topic [`Responder`](helpdesk_core::Responder) otherwise
//! - Appends exactly one interaction record per message to the injected sink

pub mod dispatcher;
pub mod registry;
pub mod responders;

pub use dispatcher::{DEFAULT_CONFIDENCE_THRESHOLD, DispatchOutcome, Dispatcher, PREVIEW_CHARS};
pub use registry::ResponderRegistry;
pub use responders::{CannedResponder, EscalationResponder, KnowledgeResponder};
