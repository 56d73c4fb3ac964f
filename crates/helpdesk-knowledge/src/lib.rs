// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! FAQ document lookup for knowledge-backed responders.
//!
//! A knowledge document is plain text where each entry starts with a `## `
//! heading line. [`KnowledgeBase::search`] scores every entry by how many of
//! the query's longer words (more than three characters) appear as whole
//! words in the entry, and returns the best non-zero entries.

pub mod base;
pub mod document;

pub use base::KnowledgeBase;
pub use document::{FaqEntry, FaqMatch, query_terms, score_entry, split_entries};
