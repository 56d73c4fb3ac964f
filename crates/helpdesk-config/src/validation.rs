// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that serde cannot express: threshold range,
//! non-empty paths, a positive `top_k`, and a recognised log level.

use crate::diagnostic::ConfigError;
use crate::model::HelpdeskConfig;

/// Log levels accepted by `agent.log_level`.
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &HelpdeskConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let threshold = config.routing.confidence_threshold;
    if !(0.0..=1.0).contains(&threshold) {
        errors.push(ConfigError::Validation {
            message: format!(
                "routing.confidence_threshold must be within 0.0..=1.0, got {threshold}"
            ),
        });
    }

    let paths = [
        ("logging.interactions_path", &config.logging.interactions_path),
        ("knowledge.kb_dir", &config.knowledge.kb_dir),
        ("eval.dataset_path", &config.eval.dataset_path),
    ];
    for (key, value) in paths {
        if value.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("{key} must not be empty"),
            });
        }
    }

    if config.knowledge.top_k == 0 {
        errors.push(ConfigError::Validation {
            message: "knowledge.top_k must be at least 1".to_string(),
        });
    }

    let level = config.agent.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.log_level `{}` is not one of {}",
                config.agent.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
