// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Helpdesk dispatcher.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Helpdesk configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HelpdeskConfig {
    /// Process identity and log verbosity.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Dispatch policy settings.
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Interaction log settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// FAQ document lookup settings.
    #[serde(default)]
    pub knowledge: KnowledgeConfig,

    /// Offline evaluation settings.
    #[serde(default)]
    pub eval: EvalConfig,
}

/// Process identity and log verbosity.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name used in startup logs.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "helpdesk".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Dispatch policy configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingConfig {
    /// Messages routed with confidence strictly below this value are escalated.
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: default_confidence_threshold(),
        }
    }
}

fn default_confidence_threshold() -> f64 {
    0.6
}

/// Interaction log configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Path of the JSON Lines interaction log.
    #[serde(default = "default_interactions_path")]
    pub interactions_path: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            interactions_path: default_interactions_path(),
        }
    }
}

fn default_interactions_path() -> String {
    "logs/interactions.jsonl".to_string()
}

/// FAQ document lookup configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct KnowledgeConfig {
    /// Directory holding the topic FAQ documents (`billing.md`, `technical.md`).
    #[serde(default = "default_kb_dir")]
    pub kb_dir: String,

    /// Number of FAQ entries quoted per answer.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            kb_dir: default_kb_dir(),
            top_k: default_top_k(),
        }
    }
}

fn default_kb_dir() -> String {
    "data/kb".to_string()
}

fn default_top_k() -> usize {
    1
}

/// Offline evaluation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EvalConfig {
    /// Path of the labeled router evaluation set (JSON array).
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
        }
    }
}

fn default_dataset_path() -> String {
    "data/eval/router_eval.json".to_string()
}
