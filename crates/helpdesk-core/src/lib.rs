// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Helpdesk dispatcher.
//!
//! This crate provides the intent labels, the interaction record shape, the
//! shared error type, and the two capability traits ([`Responder`] and
//! [`InteractionSink`]) that the dispatcher is assembled from.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::HelpdeskError;
pub use traits::{InteractionSink, Responder};
pub use types::{FallbackReason, Intent, InteractionRecord, LoggedInteraction};
