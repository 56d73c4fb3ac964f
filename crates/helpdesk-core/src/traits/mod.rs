// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability traits injected into the dispatcher.
//!
//! Both traits are synchronous: the dispatcher handles one message at a time
//! and never suspends.

pub mod responder;
pub mod sink;

pub use responder::Responder;
pub use sink::InteractionSink;
