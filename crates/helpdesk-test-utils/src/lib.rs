// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Helpdesk integration tests.
//!
//! Provides stub responders, on-disk fixtures and a dispatch harness for fast,
//! deterministic tests that never touch the real `data/` or `logs/` folders.
//!
//! # Components
//!
//! - [`StubResponder`] - Responder with a fixed answer that counts its calls
//! - [`FailingResponder`] - Responder that always errors
//! - [`DispatchHarness`] - Dispatcher over an in-memory sink and a temp knowledge base
//! - [`fixtures`] - Writers for knowledge documents, datasets and log files

pub mod fixtures;
pub mod harness;
pub mod mock_responder;

pub use harness::{DispatchHarness, DispatchHarnessBuilder};
pub use mock_responder::{FailingResponder, StubResponder};
