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

//! Builder pattern for creating customizable jobs and tests.

use perfcmp_core::{EnvNode, Job, JobId, JobStats, StoredJob, Test, TestStatus};

/// Builder for [`Test`] records.
///
/// # Examples
///
/// ```
/// use perfcmp_test::TestBuilder;
///
/// let test = TestBuilder::new("latency")
///     .category("8 threads")
///     .group("net")
///     .score(120.0, 4.0, 10)
///     .less_better(true)
///     .build();
///
/// assert_eq!(test.title(), "latency {8 threads}");
/// assert!(test.less_better);
/// ```
#[derive(Debug, Clone)]
pub struct TestBuilder {
    test: Test,
}

impl TestBuilder {
    /// Starts a completed test with the given tag and a 100 ± 1 (n = 5) score.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            test: Test {
                id: 0,
                seq_num: 0,
                tag: tag.into(),
                category: String::new(),
                group: "default".to_string(),
                metrics: "ops/sec".to_string(),
                avg_score: Some(100.0),
                avg_dev: 1.0,
                samples: 5,
                status: TestStatus::Completed,
                errors: 0,
                loops: None,
                less_better: false,
            },
        }
    }

    /// Sets the test id.
    pub fn id(mut self, id: u64) -> Self {
        self.test.id = id;
        self
    }

    /// Sets the sequence number.
    pub fn seq_num(mut self, seq_num: u64) -> Self {
        self.test.seq_num = seq_num;
        self
    }

    /// Sets the category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.test.category = category.into();
        self
    }

    /// Sets the group.
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.test.group = group.into();
        self
    }

    /// Sets the metrics label.
    pub fn metrics(mut self, metrics: impl Into<String>) -> Self {
        self.test.metrics = metrics.into();
        self
    }

    /// Sets mean, deviation and sample count.
    pub fn score(mut self, mean: f64, dev: f64, samples: u64) -> Self {
        self.test.avg_score = Some(mean);
        self.test.avg_dev = dev;
        self.test.samples = samples;
        self
    }

    /// Removes the score.
    pub fn no_score(mut self) -> Self {
        self.test.avg_score = None;
        self
    }

    /// Sets the lower-is-better flag.
    pub fn less_better(mut self, less_better: bool) -> Self {
        self.test.less_better = less_better;
        self
    }

    /// Sets the status.
    pub fn status(mut self, status: TestStatus) -> Self {
        self.test.status = status;
        self
    }

    /// Marks the test failed.
    pub fn failed(self) -> Self {
        self.status(TestStatus::Failed)
    }

    /// Sets the error count.
    pub fn errors(mut self, errors: u64) -> Self {
        self.test.errors = errors;
        self
    }

    /// Sets the loop count.
    pub fn loops(mut self, loops: u64) -> Self {
        self.test.loops = Some(loops);
        self
    }

    /// Builds the test.
    pub fn build(self) -> Test {
        self.test
    }
}

/// Builder for jobs with their tests.
///
/// Tests added without a sequence number get consecutive ones.
#[derive(Debug, Clone)]
pub struct JobBuilder {
    job: Job,
    tests: Vec<Test>,
}

impl JobBuilder {
    /// Starts a job.
    pub fn new(id: JobId, title: impl Into<String>) -> Self {
        Self {
            job: Job::new(id, title),
            tests: Vec::new(),
        }
    }

    /// Sets suite name and version.
    pub fn suite(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.job.suite_name = name.into();
        self.job.suite_ver = version.into();
        self
    }

    /// Sets the test counters.
    pub fn stats(mut self, stats: JobStats) -> Self {
        self.job.stats = stats;
        self
    }

    /// Adds a top-level environment node.
    pub fn env_node(mut self, name: impl Into<String>) -> Self {
        self.job.env_nodes.push(EnvNode {
            name: name.into(),
            node_type: "host".to_string(),
            parent: None,
        });
        self
    }

    /// Adds a test.
    pub fn test(mut self, mut test: Test) -> Self {
        if test.seq_num == 0 {
            test.seq_num = self.tests.len() as u64 + 1;
        }
        if test.id == 0 {
            test.id = self.job.id * 1000 + test.seq_num;
        }
        self.tests.push(test);
        self
    }

    /// Adds several tests.
    pub fn tests(self, tests: impl IntoIterator<Item = Test>) -> Self {
        tests.into_iter().fold(self, JobBuilder::test)
    }

    /// Builds the stored job.
    pub fn build(self) -> StoredJob {
        StoredJob {
            job: self.job,
            tests: self.tests,
        }
    }
}
