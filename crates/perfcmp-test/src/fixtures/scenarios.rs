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

//! Canned comparison scenarios.
//!
//! Each scenario carries the stored jobs, an [`InMemoryStore`] over them and
//! a validated [`Comparison`]. [`Scenario::document`] renders the same data
//! as the JSON input document read by the `perfcmp` binary.

use super::builders::{JobBuilder, TestBuilder};
use perfcmp_core::{
    CatalogType, Comparison, ComparisonConfig, InMemoryStore, JobId, JobStats, StoredJob,
};
use serde_json::{json, Value};

/// Jobs, store and comparison ready to build a report from.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Stored jobs in insertion order.
    pub jobs: Vec<StoredJob>,
    /// Store over `jobs`.
    pub store: InMemoryStore,
    /// Comparison over `jobs`.
    pub comparison: Comparison,
}

impl Scenario {
    /// Builds a scenario with columns in `order`.
    ///
    /// # Panics
    ///
    /// Panics when `order` repeats a job id.
    pub fn new(jobs: Vec<StoredJob>, order: &[JobId], config: ComparisonConfig) -> Self {
        let store = jobs.iter().cloned().collect();
        let comparison = Comparison::new(1, "scenario", config, order)
            .expect("scenario job order must not repeat ids");
        Self {
            jobs,
            store,
            comparison,
        }
    }

    /// Replaces the presentation settings.
    pub fn with_config(mut self, config: ComparisonConfig) -> Self {
        self.comparison.config = config;
        self
    }

    /// Input document for the command-line tool.
    pub fn document(&self) -> Value {
        let order: Vec<Value> = self
            .comparison
            .job_ids()
            .split(',')
            .filter_map(|id| id.parse::<JobId>().ok())
            .map(Value::from)
            .collect();
        let config = &self.comparison.config;
        json!({
            "id": self.comparison.id,
            "comparison": {
                "title": self.comparison.title,
                "jobs": order,
                "charts_type": config.charts_type.label(),
                "tables_type": config.tables_type.label(),
                "tests_type": config.tests_type.label(),
                "values_type": config.values_type.label(),
            },
            "jobs": self.jobs,
        })
    }
}

/// Two jobs, one higher-is-better and one lower-is-better tag, both improved.
///
/// Group `cpu`: `int` goes 100 → 120 ops/sec, `latency` goes 50 → 40 usec.
pub fn two_job_improvement() -> Scenario {
    let baseline = JobBuilder::new(1, "baseline")
        .suite("cpu-suite", "1.0")
        .env_node("host-a")
        .stats(stats(2, 2, 0))
        .test(TestBuilder::new("int").group("cpu").score(100.0, 1.0, 10).build())
        .test(
            TestBuilder::new("latency")
                .group("cpu")
                .metrics("usec")
                .score(50.0, 0.5, 10)
                .less_better(true)
                .build(),
        )
        .build();
    let candidate = JobBuilder::new(2, "candidate")
        .suite("cpu-suite", "1.1")
        .env_node("host-a")
        .stats(stats(2, 2, 0))
        .test(TestBuilder::new("int").group("cpu").score(120.0, 1.0, 10).build())
        .test(
            TestBuilder::new("latency")
                .group("cpu")
                .metrics("usec")
                .score(40.0, 0.5, 10)
                .less_better(true)
                .build(),
        )
        .build();
    Scenario::new(vec![baseline, candidate], &[1, 2], ComparisonConfig::default())
}

/// A single `read` tag measured at `1..=points` threads by two jobs.
///
/// The second job scores 10% higher everywhere.
pub fn thread_scaling(points: usize) -> Scenario {
    let job = |id: JobId, title: &str, factor: f64| {
        JobBuilder::new(id, title)
            .tests((1..=points).map(|n| {
                TestBuilder::new("read")
                    .group("io")
                    .category(format!("{} threads", n))
                    .metrics("MB/s")
                    .score(100.0 * n as f64 * factor, 2.0, 5)
                    .build()
            }))
            .build()
    };
    Scenario::new(
        vec![job(1, "ext4", 1.0), job(2, "xfs", 1.1)],
        &[1, 2],
        ComparisonConfig::default(),
    )
}

/// One group holding several tags without categories.
pub fn mixed_tags(tags: &[&str]) -> Scenario {
    let job = |id: JobId, title: &str| {
        JobBuilder::new(id, title)
            .tests(
                tags.iter()
                    .map(|tag| TestBuilder::new(*tag).group("misc").build()),
            )
            .build()
    };
    Scenario::new(
        vec![job(1, "left"), job(2, "right")],
        &[1, 2],
        ComparisonConfig::default(),
    )
}

/// Two jobs where the second fails one test and errors on another.
pub fn with_failures() -> Scenario {
    let ok = JobBuilder::new(1, "stable")
        .stats(stats(2, 2, 0))
        .test(TestBuilder::new("net").group("net").category("a").build())
        .test(TestBuilder::new("net").group("net").category("b").build())
        .build();
    let broken = JobBuilder::new(2, "broken")
        .stats(stats(2, 0, 2))
        .test(
            TestBuilder::new("net")
                .group("net")
                .category("a")
                .failed()
                .loops(10)
                .build(),
        )
        .test(
            TestBuilder::new("net")
                .group("net")
                .category("b")
                .errors(3)
                .build(),
        )
        .build();
    Scenario::new(vec![ok, broken], &[1, 2], ComparisonConfig::default())
}

fn stats(total: u64, completed: u64, failed: u64) -> JobStats {
    JobStats {
        tests_total: total,
        tests_completed: completed,
        tests_failed: failed,
        ..JobStats::default()
    }
}
