// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Intent classification and query routing for the Helpdesk dispatcher.
//!
//! This crate provides:
//! - [`IntentClassifier`]: Keyword-count intent classification (no model, no I/O)
//! - [`QueryRouter`]: Packages a classification with its message as a [`RoutedQuery`]
//!
//! Both the live dispatcher and the offline evaluation harness route through
//! [`QueryRouter`], so the two always agree on what a message classifies as.

pub mod classifier;
pub mod router;

pub use classifier::{Classification, DEFAULT_KEYWORDS, IntentClassifier, KeywordTable};
pub use router::{QueryRouter, RoutedQuery};
