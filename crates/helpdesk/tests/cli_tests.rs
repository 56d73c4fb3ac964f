// SPDX-FileCopyrightText: 2026 Helpdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests driving the `helpdesk` binary in a scratch directory.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use helpdesk_test_utils::fixtures::{write_dataset, write_standard_kb};

const CONFIG: &str = r#"
[logging]
interactions_path = "logs/interactions.jsonl"

[knowledge]
kb_dir = "kb"

[eval]
dataset_path = "eval/router_eval.json"
"#;

fn workspace() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("helpdesk.toml"), CONFIG).unwrap();
    write_standard_kb(&dir.path().join("kb")).unwrap();
    dir
}

fn helpdesk(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_helpdesk"));
    cmd.current_dir(dir)
        .env("RUST_LOG", "off")
        .env("NO_COLOR", "1")
        .stdin(Stdio::null());
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn log_lines(dir: &Path) -> Vec<serde_json::Value> {
    let text = std::fs::read_to_string(dir.join("logs/interactions.jsonl")).unwrap();
    text.lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn ask_billing_question() {
    let dir = workspace();
    let output = helpdesk(dir.path())
        .args(["ask", "I was charged twice on my invoice, can I get a refund?"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Billing Agent (KB-backed):"));
    assert!(out.contains("## Why was I charged twice?"));

    let lines = log_lines(dir.path());
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["intent"], "Billing");
    assert_eq!(lines[0]["fallback"], false);
    assert!(lines[0]["fallback_reason"].is_null());
}

#[test]
fn ask_greeting_escalates() {
    let dir = workspace();
    let output = helpdesk(dir.path()).args(["ask", "hello"]).output().unwrap();

    assert!(output.status.success());
    assert!(stdout(&output).contains("Escalation Agent:"));

    let lines = log_lines(dir.path());
    assert_eq!(lines[0]["intent"], "Escalation");
    assert_eq!(lines[0]["router_intent"], "General FAQ");
    assert_eq!(lines[0]["fallback_reason"], "low_confidence");
}

#[test]
fn ask_reads_message_from_stdin() {
    let dir = workspace();
    let mut child = helpdesk(dir.path())
        .arg("ask")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"my login password for my account is not working\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert!(stdout(&output).contains("Account Agent:"));
    assert_eq!(log_lines(dir.path())[0]["intent"], "Account & Subscription");
}

#[test]
fn eval_without_inputs_reports_missing_files() {
    let dir = workspace();
    let output = helpdesk(dir.path()).arg("eval").output().unwrap();

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("No log file found at logs/interactions.jsonl"));
    assert!(out.contains("No router eval file found at eval/router_eval.json"));
}

#[test]
fn eval_after_dispatching() {
    let dir = workspace();
    for message in ["hello", "refund my invoice payment"] {
        let status = helpdesk(dir.path())
            .args(["ask", message])
            .status()
            .unwrap();
        assert!(status.success());
    }
    write_dataset(
        &dir.path().join("eval/router_eval.json"),
        &[
            ("refund my invoice", "Billing"),
            ("the app crashed with an error", "Technical Issue"),
        ],
    )
    .unwrap();

    let output = helpdesk(dir.path()).arg("eval").output().unwrap();
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("=== Interaction Summary ==="));
    assert!(out.contains("Total interactions: 2"));
    assert!(out.contains("Fallbacks: 1 (50.0% of interactions)"));
    assert!(out.contains("=== Router Evaluation ==="));
    assert!(out.contains("Overall accuracy: 1.00"));
}

#[test]
fn eval_scores_unknown_dataset_label_as_wrong() {
    let dir = workspace();
    let status = helpdesk(dir.path()).args(["ask", "hello"]).status().unwrap();
    assert!(status.success());
    write_dataset(
        &dir.path().join("eval/router_eval.json"),
        &[("ship it", "Shipping")],
    )
    .unwrap();

    let output = helpdesk(dir.path()).arg("eval").output().unwrap();
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("=== Interaction Summary ==="));
    assert!(out.contains("Total interactions: 1"));
    assert!(out.contains("=== Router Evaluation ==="));
    assert!(out.contains("Overall accuracy: 0.00"));
    assert!(out.contains("expected=Shipping, predicted=General FAQ: 1"));
}

#[test]
fn eval_prints_summary_before_dataset_error() {
    let dir = workspace();
    let status = helpdesk(dir.path()).args(["ask", "hello"]).status().unwrap();
    assert!(status.success());
    std::fs::create_dir_all(dir.path().join("eval")).unwrap();
    std::fs::write(dir.path().join("eval/router_eval.json"), "{not json").unwrap();

    let output = helpdesk(dir.path()).arg("eval").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("=== Interaction Summary ==="));
    assert!(!out.contains("=== Router Evaluation ==="));
}

#[test]
fn invalid_config_exits_with_status_one() {
    let dir = workspace();
    std::fs::write(
        dir.path().join("helpdesk.toml"),
        "[routing]\nconfidence_threshold = 1.5\n",
    )
    .unwrap();

    let output = helpdesk(dir.path()).args(["ask", "hello"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("logs").exists());
}

#[test]
fn explicit_config_flag() {
    let dir = workspace();
    std::fs::write(
        dir.path().join("strict.toml"),
        "[routing]\nconfidence_threshold = 1.0\n[logging]\ninteractions_path = \"strict.jsonl\"\n",
    )
    .unwrap();

    let output = helpdesk(dir.path())
        .args(["--config", "strict.toml", "ask", "there is a bug and an error"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).contains("Escalation Agent:"));
    assert!(dir.path().join("strict.jsonl").exists());
}
