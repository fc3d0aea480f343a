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

//! Job and test records consumed by the engine.
//!
//! These are materialized by a [`JobSource`](crate::store::JobSource) and are
//! read-only to the engine.

use crate::stats::ScoreSummary;
use serde::{Deserialize, Serialize};

/// Job identifier.
pub type JobId = u64;

/// Outcome of a single test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestStatus {
    /// Not run.
    NotTested,
    /// Skipped by the suite.
    Skipped,
    /// Still running when the job was uploaded.
    InProgress,
    /// Finished.
    #[default]
    Completed,
    /// Finished with a failure.
    Failed,
}

/// Test counters of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobStats {
    /// Tests in the job.
    pub tests_total: u64,
    /// Tests that completed.
    pub tests_completed: u64,
    /// Tests that failed.
    pub tests_failed: u64,
    /// Tests that reported errors.
    pub tests_errors: u64,
    /// Tests that reported warnings.
    pub tests_warnings: u64,
}

impl std::ops::AddAssign for JobStats {
    fn add_assign(&mut self, other: Self) {
        self.tests_total += other.tests_total;
        self.tests_completed += other.tests_completed;
        self.tests_failed += other.tests_failed;
        self.tests_errors += other.tests_errors;
        self.tests_warnings += other.tests_warnings;
    }
}

/// A node of the environment a job ran on (host, VM, container...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvNode {
    /// Node name.
    pub name: String,
    /// Node type, e.g. `"host"`.
    #[serde(default)]
    pub node_type: String,
    /// Name of the parent node; `None` for top-level nodes.
    #[serde(default)]
    pub parent: Option<String>,
}

/// One complete benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Job identifier.
    pub id: JobId,
    /// Display title.
    pub title: String,
    /// Benchmark suite name.
    #[serde(default)]
    pub suite_name: String,
    /// Benchmark suite version.
    #[serde(default)]
    pub suite_ver: String,
    /// Test counters.
    #[serde(default)]
    pub stats: JobStats,
    /// Environment the job ran on.
    #[serde(default)]
    pub env_nodes: Vec<EnvNode>,
}

impl Job {
    /// Creates a job with the given id and title.
    pub fn new(id: JobId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            suite_name: String::new(),
            suite_ver: String::new(),
            stats: JobStats::default(),
            env_nodes: Vec::new(),
        }
    }
}

/// What a failed chart point reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePayload {
    /// Number of errors the test reported.
    Errors(u64),
    /// Iteration count of a failed test without errors.
    Loops(u64),
    /// The whole test failed.
    All,
}

impl Serialize for FailurePayload {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FailurePayload::Errors(n) | FailurePayload::Loops(n) => serializer.serialize_u64(*n),
            FailurePayload::All => serializer.serialize_str("all"),
        }
    }
}

/// One measured benchmark result within a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Test {
    /// Test identifier.
    #[serde(default)]
    pub id: u64,
    /// Position of the test within its job.
    #[serde(default)]
    pub seq_num: u64,
    /// Logical test identity shared across jobs.
    pub tag: String,
    /// Sub-axis value, e.g. thread count; empty means standalone.
    #[serde(default)]
    pub category: String,
    /// Top-level classification.
    #[serde(default)]
    pub group: String,
    /// Unit name, e.g. `"ops/sec"`.
    #[serde(default)]
    pub metrics: String,
    /// Average score; `None` or zero means no valid score.
    #[serde(default)]
    pub avg_score: Option<f64>,
    /// Standard deviation of the score.
    #[serde(default)]
    pub avg_dev: f64,
    /// Number of samples behind the average.
    #[serde(default)]
    pub samples: u64,
    /// Outcome.
    #[serde(default)]
    pub status: TestStatus,
    /// Error count.
    #[serde(default)]
    pub errors: u64,
    /// Iteration count, if the suite reports one.
    #[serde(default)]
    pub loops: Option<u64>,
    /// Lower scores are better.
    #[serde(default)]
    pub less_better: bool,
}

impl Test {
    /// Score with absent treated as zero.
    pub fn score(&self) -> f64 {
        self.avg_score.unwrap_or(0.0)
    }

    /// Row title: `"tag {category}"`, or the bare tag.
    pub fn title(&self) -> String {
        if self.category.is_empty() {
            self.tag.clone()
        } else {
            format!("{} {{{}}}", self.tag, self.category)
        }
    }

    /// Whether the test failed or reported errors.
    pub fn is_failed(&self) -> bool {
        self.status == TestStatus::Failed || self.errors > 0
    }

    /// Failure marker payload, `None` for a clean test.
    pub fn failure(&self) -> Option<FailurePayload> {
        if self.errors > 0 {
            return Some(FailurePayload::Errors(self.errors));
        }
        if self.status != TestStatus::Failed {
            return None;
        }
        match self.loops {
            Some(loops) if loops > 0 => Some(FailurePayload::Loops(loops)),
            _ => Some(FailurePayload::All),
        }
    }

    /// Summary statistics for significance testing.
    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary::new(self.score(), self.avg_dev, self.samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test(status: TestStatus, errors: u64, loops: Option<u64>) -> Test {
        Test {
            id: 1,
            seq_num: 1,
            tag: "read".to_string(),
            category: String::new(),
            group: String::new(),
            metrics: String::new(),
            avg_score: Some(1.0),
            avg_dev: 0.0,
            samples: 1,
            status,
            errors,
            loops,
            less_better: false,
        }
    }

    #[test]
    fn test_title() {
        let mut t = test(TestStatus::Completed, 0, None);
        assert_eq!(t.title(), "read");
        t.category = "4 threads".to_string();
        assert_eq!(t.title(), "read {4 threads}");
    }

    #[test]
    fn test_failure_payload_precedence() {
        assert_eq!(
            test(TestStatus::Failed, 3, Some(10)).failure(),
            Some(FailurePayload::Errors(3))
        );
        assert_eq!(
            test(TestStatus::Failed, 0, Some(10)).failure(),
            Some(FailurePayload::Loops(10))
        );
        assert_eq!(
            test(TestStatus::Failed, 0, None).failure(),
            Some(FailurePayload::All)
        );
        assert_eq!(
            test(TestStatus::Completed, 2, None).failure(),
            Some(FailurePayload::Errors(2))
        );
        assert_eq!(test(TestStatus::Completed, 0, Some(10)).failure(), None);
    }

    #[test]
    fn test_failure_payload_serialization() {
        assert_eq!(serde_json::to_string(&FailurePayload::Errors(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&FailurePayload::All).unwrap(), "\"all\"");
    }

    #[test]
    fn test_stats_add() {
        let mut total = JobStats::default();
        total += JobStats {
            tests_total: 4,
            tests_failed: 1,
            ..Default::default()
        };
        total += JobStats {
            tests_total: 6,
            tests_warnings: 2,
            ..Default::default()
        };
        assert_eq!(total.tests_total, 10);
        assert_eq!(total.tests_failed, 1);
        assert_eq!(total.tests_warnings, 2);
    }

    #[test]
    fn test_deserialize_defaults() {
        let t: Test = serde_json::from_str(r#"{"tag": "write", "avg_score": 12.5}"#).unwrap();
        assert_eq!(t.status, TestStatus::Completed);
        assert_eq!(t.category, "");
        assert_eq!(t.score(), 12.5);
        assert!(!t.less_better);
    }
}
