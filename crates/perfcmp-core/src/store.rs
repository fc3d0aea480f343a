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

//! Job and test collaborators.
//!
//! The engine performs no I/O; it pulls jobs and tests through [`JobSource`].
//! [`InMemoryStore`] is the implementation used by the command-line tool and
//! the tests.

use crate::comparison::{Comparison, JobLookup};
use crate::error::{CmpError, Result};
use crate::model::{Job, JobId, Test};
use crate::ordering::OrderedJobs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Supplies the jobs of a comparison and the tests of a job.
pub trait JobSource {
    /// Member jobs of a comparison, in storage order.
    fn member_jobs(&self, comparison: &Comparison) -> Result<Vec<Job>>;

    /// Tests of a job ordered by `seq_num`.
    fn tests(&self, job: &Job) -> Result<Vec<Test>>;

    /// Member jobs in the comparison's column order.
    ///
    /// Falls back to storage order when the stored order is unusable; the
    /// fallback is logged and reported in [`OrderedJobs::degraded`].
    fn ordered_jobs(&self, comparison: &Comparison) -> Result<OrderedJobs> {
        let members = self.member_jobs(comparison)?;
        Ok(comparison.job_order().arrange(members))
    }
}

/// A job together with its tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredJob {
    /// The job.
    #[serde(flatten)]
    pub job: Job,
    /// Its tests, in any order.
    #[serde(default)]
    pub tests: Vec<Test>,
}

/// Jobs held in memory, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    jobs: BTreeMap<JobId, StoredJob>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a job with its tests, replacing any job with the same id.
    pub fn insert(&mut self, job: Job, tests: Vec<Test>) {
        self.jobs.insert(job.id, StoredJob { job, tests });
    }

    /// Number of stored jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

impl FromIterator<StoredJob> for InMemoryStore {
    fn from_iter<I: IntoIterator<Item = StoredJob>>(iter: I) -> Self {
        let mut store = Self::new();
        for stored in iter {
            store.insert(stored.job, stored.tests);
        }
        store
    }
}

impl JobLookup for InMemoryStore {
    fn find_job(&self, id: JobId) -> Option<&Job> {
        self.jobs.get(&id).map(|s| &s.job)
    }
}

impl JobSource for InMemoryStore {
    fn member_jobs(&self, comparison: &Comparison) -> Result<Vec<Job>> {
        comparison
            .members()
            .iter()
            .map(|&id| {
                self.find_job(id)
                    .cloned()
                    .ok_or(CmpError::UnknownJob(id))
            })
            .collect()
    }

    fn tests(&self, job: &Job) -> Result<Vec<Test>> {
        let stored = self.jobs.get(&job.id).ok_or(CmpError::UnknownJob(job.id))?;
        let mut tests = stored.tests.clone();
        tests.sort_by_key(|t| t.seq_num);
        Ok(tests)
    }
}
