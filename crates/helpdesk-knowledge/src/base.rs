// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Directory of FAQ documents with a per-process parse cache.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::document::{FaqEntry, FaqMatch, query_terms, score_entry, split_entries};

/// A directory of topic documents (`billing.md`, `technical.md`, ...).
///
/// Each document is read and parsed on first use and cached for the life of
/// the process. A missing or unreadable document behaves as an empty one.
#[derive(Debug)]
pub struct KnowledgeBase {
    dir: PathBuf,
    cache: Mutex<HashMap<String, Arc<Vec<FaqEntry>>>>,
}

impl KnowledgeBase {
    /// Create a knowledge base rooted at `dir`. Nothing is read yet.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// The directory documents are read from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Parsed entries of `document`, loading it on first access.
    pub fn entries(&self, document: &str) -> Arc<Vec<FaqEntry>> {
        let mut cache = match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(entries) = cache.get(document) {
            return Arc::clone(entries);
        }

        let entries = Arc::new(self.load(document));
        cache.insert(document.to_string(), Arc::clone(&entries));
        entries
    }

    /// Return up to `top_k` entries of `document` with a non-zero overlap
    /// score, best first. Equal scores keep document order.
    pub fn search(&self, document: &str, query: &str, top_k: usize) -> Vec<FaqMatch> {
        let entries = self.entries(document);
        let terms = query_terms(query);

        let mut scored: Vec<FaqMatch> = entries
            .iter()
            .map(|entry| FaqMatch {
                score: score_entry(&terms, entry),
                text: entry.text.clone(),
            })
            .filter(|m| m.score > 0)
            .collect();
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(top_k);

        debug!(
            document,
            terms = terms.len(),
            hits = scored.len(),
            "knowledge search"
        );
        scored
    }

    fn load(&self, document: &str) -> Vec<FaqEntry> {
        let path = self.dir.join(document);
        match std::fs::read_to_string(&path) {
            Ok(text) => {
                let entries = split_entries(&text);
                debug!(path = %path.display(), entries = entries.len(), "loaded knowledge document");
                entries
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "knowledge document unavailable, answering without it"
                );
                Vec::new()
            }
        }
    }
}
