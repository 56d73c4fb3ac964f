// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parsing and scoring of FAQ documents.

use std::collections::HashSet;

/// Heading prefix that starts a new FAQ entry.
const ENTRY_PREFIX: &str = "## ";

/// Query words of this many characters or fewer are ignored.
const MIN_TERM_CHARS: usize = 3;

/// One FAQ entry: its heading line and the full entry text (heading included).
#[derive(Debug, Clone, PartialEq)]
pub struct FaqEntry {
    /// First line of the entry.
    pub heading: String,
    /// Entry text, trimmed, heading included.
    pub text: String,
    words: HashSet<String>,
}

impl FaqEntry {
    fn new(text: String) -> Self {
        let heading = text.lines().next().unwrap_or_default().to_string();
        let words = words(&text).collect();
        Self {
            heading,
            text,
            words,
        }
    }

    /// Whether `word` (already lowercased) appears in the entry as a whole word.
    pub fn contains_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

/// A scored search hit.
#[derive(Debug, Clone, PartialEq)]
pub struct FaqMatch {
    /// Number of query terms found in the entry.
    pub score: usize,
    /// The entry text.
    pub text: String,
}

/// Split a document into entries at each `## ` heading line.
///
/// Text before the first heading forms its own entry. Blank entries are dropped.
pub fn split_entries(document: &str) -> Vec<FaqEntry> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in document.lines() {
        if line.starts_with(ENTRY_PREFIX) && !current.is_empty() {
            blocks.push(std::mem::take(&mut current));
        }
        current.push(line);
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
        .into_iter()
        .map(|lines| lines.join("\n").trim().to_string())
        .filter(|text| !text.is_empty())
        .map(FaqEntry::new)
        .collect()
}

/// Lowercased query words longer than three characters, punctuation stripped.
///
/// Repeated words are kept, so a word asked about twice counts twice.
pub fn query_terms(query: &str) -> Vec<String> {
    words(query)
        .filter(|w| w.chars().count() > MIN_TERM_CHARS)
        .collect()
}

/// Count how many query terms occur as whole words in the entry.
pub fn score_entry(terms: &[String], entry: &FaqEntry) -> usize {
    terms.iter().filter(|t| entry.contains_word(t)).count()
}

/// Lowercased words, split on anything that is not alphanumeric or an apostrophe.
fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|w| w.trim_matches('\'').to_lowercase())
        .filter(|w| !w.is_empty())
}
