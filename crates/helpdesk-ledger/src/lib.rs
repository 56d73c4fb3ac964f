// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interaction log persistence for the Helpdesk dispatcher.
//!
//! Every dispatched message produces one [`InteractionRecord`](helpdesk_core::InteractionRecord).
//! [`JsonlInteractionLog`] appends records to a JSON Lines file stamped with a
//! UTC timestamp; [`MemorySink`] keeps them in memory for tests and embedding.
//! [`read_interactions`] loads a log back for the evaluation harness.

pub mod jsonl;
pub mod memory;

pub use jsonl::{JsonlInteractionLog, LogLoad, read_interactions, timestamp_now};
pub use memory::MemorySink;
