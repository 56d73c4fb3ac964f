// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! On-disk fixtures for knowledge documents, evaluation datasets and logs.

use std::io::Write;
use std::path::{Path, PathBuf};

/// A small billing FAQ in the `## ` heading format.
pub const BILLING_FAQ: &str = "\
# Billing FAQ

## Why was I charged twice?
Duplicate charges are usually a pending authorization. They are reversed or refunded within 5-7 business days.

## How do I get a refund?
Open Settings > Billing > Refunds and submit a request against the invoice.

## Where can I download my invoice?
Invoices are listed under Settings > Billing > Invoices as PDF files.
";

/// A small technical FAQ in the `## ` heading format.
pub const TECHNICAL_FAQ: &str = "\
# Technical FAQ

## The dashboard is slow or stuck loading
Clear the browser cache and reload. Check the status page for ongoing incidents.

## The app shows an error after login
Sign out, clear cookies and sign in again. Contact support with the error code if it persists.
";

/// Write `content` to `dir/document`, creating `dir` if needed.
pub fn write_kb(dir: &Path, document: &str, content: &str) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(document);
    std::fs::write(&path, content)?;
    Ok(path)
}

/// Write `billing.md` and `technical.md` into `dir`.
pub fn write_standard_kb(dir: &Path) -> std::io::Result<()> {
    write_kb(dir, "billing.md", BILLING_FAQ)?;
    write_kb(dir, "technical.md", TECHNICAL_FAQ)?;
    Ok(())
}

/// Write an evaluation dataset of `(text, expected_intent)` pairs.
///
/// Labels are written verbatim so tests can include unknown ones.
pub fn write_dataset(path: &Path, examples: &[(&str, &str)]) -> std::io::Result<()> {
    let items: Vec<serde_json::Value> = examples
        .iter()
        .map(|(text, expected)| serde_json::json!({ "text": text, "expected_intent": expected }))
        .collect();
    let body = serde_json::to_string_pretty(&items).map_err(std::io::Error::other)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, body)
}

/// Append raw lines to a log file, one per line.
pub fn write_log_lines(path: &Path, lines: &[&str]) -> std::io::Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    for line in lines {
        writeln!(file, "{line}")?;
    }
    Ok(())
}
