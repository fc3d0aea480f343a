// Dweve perfcmp - Benchmark comparison reports
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI integration tests

use assert_cmd::Command;
use perfcmp_test::fixtures::scenarios;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use tempfile::NamedTempFile;

fn perfcmp_cmd() -> Command {
    Command::cargo_bin("perfcmp").expect("Failed to find perfcmp binary")
}

fn write_document(doc: &Value) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), doc.to_string()).expect("Failed to write temp file");
    file
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("command runs");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    perfcmp_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Benchmark comparison reports"))
        .stdout(predicate::str::contains("report"));
}

#[test]
fn test_no_subcommand_fails() {
    perfcmp_cmd().assert().failure();
}

// ===== Report Command Tests =====

#[test]
fn test_report_json() {
    let file = write_document(&scenarios::two_job_improvement().document());
    let report = stdout_json(perfcmp_cmd().arg("report").arg(file.path()));

    assert_eq!(report["jobs"][0]["title"], "baseline");
    let section = &report["groups"][0]["sections"][0];
    assert_eq!(section["chart_type"], "NO_CHART");
    assert_eq!(section["rows"][0][2], "int");
    assert_eq!(section["rows"][0][7], "20 1");
}

#[test]
fn test_report_respects_job_order() {
    let mut doc = scenarios::two_job_improvement().document();
    doc["comparison"]["jobs"] = json!(["2", 1]);
    let file = write_document(&doc);
    let report = stdout_json(perfcmp_cmd().arg("report").arg(file.path()));

    assert_eq!(report["jobs"][0]["id"], 2);
    assert_eq!(report["groups"][0]["sections"][0]["series"][0]["name"], "candidate");
}

#[test]
fn test_report_csv_to_file() {
    let file = write_document(&scenarios::thread_scaling(3).document());
    let out = NamedTempFile::new().expect("Failed to create temp file");

    perfcmp_cmd()
        .args(["report", "--format", "csv", "--output"])
        .arg(out.path())
        .arg(file.path())
        .assert()
        .success();

    let csv = fs::read_to_string(out.path()).expect("output written");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].ends_with("xfs score,xfs dev%,xfs vs ext4"));
    assert!(lines[1].starts_with("io,read,"));
}

#[test]
fn test_report_yaml() {
    let file = write_document(&scenarios::with_failures().document());
    perfcmp_cmd()
        .args(["report", "-f", "yaml"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("chart_type: BAR"))
        .stdout(predicate::str::contains("formatter: fail"));
}

#[test]
fn test_report_from_stdin() {
    let doc = scenarios::mixed_tags(&["a", "b"]).document();
    perfcmp_cmd()
        .args(["report", "-"])
        .write_stdin(doc.to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"comparison_id\":1"));
}

#[test]
fn test_report_strict_passes_clean_report() {
    let mut doc = scenarios::two_job_improvement().document();
    doc["comparison"]["charts_type"] = json!("Bar + trend");
    let file = write_document(&doc);
    let report = stdout_json(perfcmp_cmd().args(["report", "--strict"]).arg(file.path()));
    assert_eq!(report["groups"][0]["sections"][0]["trend_line"], true);
    assert_eq!(report["diagnostics"], json!([]));
}

// ===== Validation Failures =====

#[test]
fn test_unknown_chart_type() {
    let mut doc = scenarios::two_job_improvement().document();
    doc["comparison"]["charts_type"] = json!("Pie");
    let file = write_document(&doc);

    perfcmp_cmd()
        .arg("report")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown charts type: 'Pie'"))
        .stderr(predicate::str::contains("XY-line + trend"));
}

#[test]
fn test_unknown_job() {
    let mut doc = scenarios::two_job_improvement().document();
    doc["comparison"]["jobs"] = json!([1, 2, 42]);
    let file = write_document(&doc);

    perfcmp_cmd()
        .arg("report")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Job with id = '42' doesn't exist"));
}

#[test]
fn test_missing_title() {
    let mut doc = scenarios::two_job_improvement().document();
    doc["comparison"]
        .as_object_mut()
        .expect("comparison is an object")
        .remove("title");
    let file = write_document(&doc);

    perfcmp_cmd()
        .args(["validate"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("title is not specified"));
}

#[test]
fn test_malformed_job_id() {
    let mut doc = scenarios::two_job_improvement().document();
    doc["comparison"]["jobs"] = json!([1, "two"]);
    let file = write_document(&doc);

    perfcmp_cmd()
        .arg("report")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed job id 'two'"));
}

#[test]
fn test_missing_file() {
    perfcmp_cmd()
        .args(["report", "/nonexistent/perfcmp.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

// ===== Summary and Validate =====

#[test]
fn test_summary_json() {
    let file = write_document(&scenarios::two_job_improvement().document());
    let summary = stdout_json(perfcmp_cmd().arg("summary").arg(file.path()));

    assert_eq!(summary["jobs"], json!([1, 2]));
    assert_eq!(summary["suite_ver"], "1.0, 1.1");
    assert_eq!(summary["tests_total"], 4);
    assert_eq!(summary["env_node"][0]["name"], "host-a");
}

#[test]
fn test_summary_rejects_csv() {
    let file = write_document(&scenarios::two_job_improvement().document());
    perfcmp_cmd()
        .args(["summary", "--format", "csv"])
        .arg(file.path())
        .assert()
        .failure();
}

#[test]
fn test_validate_prints_settings() {
    let file = write_document(&scenarios::two_job_improvement().document());
    perfcmp_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Jobs:   1,2"))
        .stdout(predicate::str::contains("Charts: Auto"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let file = write_document(&scenarios::two_job_improvement().document());
    perfcmp_cmd()
        .args(["-v", "report"])
        .arg(file.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("section finalized"));
}
