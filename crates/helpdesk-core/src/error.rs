// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Helpdesk dispatcher.

use thiserror::Error;

/// The primary error type shared by the dispatcher, the interaction log and
/// the evaluation harness.
#[derive(Debug, Error)]
pub enum HelpdeskError {
    /// Interaction log I/O errors (open, append, read).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The evaluation dataset exists but could not be read or parsed.
    #[error("dataset error: {message}")]
    Dataset {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A topic responder failed while producing an answer.
    #[error("responder `{responder}` failed: {message}")]
    Responder { responder: String, message: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for HelpdeskError {
    fn from(e: std::io::Error) -> Self {
        HelpdeskError::Storage {
            source: Box::new(e),
        }
    }
}
