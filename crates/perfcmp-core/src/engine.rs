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

//! Report building.
//!
//! Building happens in two phases. [`ReportBuilder::add_test`] routes every
//! (job, test) pair into the Group → Section → Row/Series tree in job order
//! then `seq_num` order; [`ReportBuilder::finish`] consumes the builder and
//! finalizes every section exactly once.

use crate::comparison::Comparison;
use crate::config::ComparisonConfig;
use crate::diagnostics::Diagnostic;
use crate::error::{CmpError, Result};
use crate::model::{Job, JobId, Test};
use crate::ordered::OrderedMap;
use crate::store::JobSource;
use crate::summary::ComparisonSummary;
use crate::view::{Group, GroupView, Section};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info};

/// A job column of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobColumn {
    /// Job identifier.
    pub id: JobId,
    /// Job title.
    pub title: String,
    /// Legend name used by every series of this column.
    pub legend: String,
}

/// The finished view model of one comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Comparison identifier.
    pub comparison_id: u64,
    /// Comparison title.
    pub title: String,
    /// Settings the report was built with.
    pub config: ComparisonConfig,
    /// Job columns in display order.
    pub jobs: Vec<JobColumn>,
    /// Groups in first-seen order.
    pub groups: Vec<Group>,
    /// Every non-fatal problem met while building.
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    /// Every section of every group, in display order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.groups.iter().flat_map(|g| g.sections.iter())
    }

    /// Group by key.
    pub fn group(&self, key: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.title == key)
    }
}

/// Legend names of job columns: titles, or `"<id> - <title>"` when titles clash.
pub fn legends_for(jobs: &[Job]) -> Vec<String> {
    let distinct: HashSet<&str> = jobs.iter().map(|j| j.title.as_str()).collect();
    if distinct.len() == jobs.len() {
        jobs.iter().map(|j| j.title.clone()).collect()
    } else {
        jobs.iter()
            .map(|j| format!("{} - {}", j.id, j.title))
            .collect()
    }
}

/// Ingestion phase of a report.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    comparison_id: u64,
    title: String,
    config: ComparisonConfig,
    columns: Vec<JobColumn>,
    legends: Vec<String>,
    groups: OrderedMap<String, GroupView>,
    diagnostics: Vec<Diagnostic>,
    tests_seen: usize,
}

impl ReportBuilder {
    /// Starts a report over `jobs`, which must be in column order.
    pub fn new(comparison: &Comparison, jobs: &[Job]) -> Self {
        let legends = legends_for(jobs);
        let columns = jobs
            .iter()
            .zip(&legends)
            .map(|(job, legend)| JobColumn {
                id: job.id,
                title: job.title.clone(),
                legend: legend.clone(),
            })
            .collect();
        Self {
            comparison_id: comparison.id,
            title: comparison.title.clone(),
            config: comparison.config,
            columns,
            legends,
            groups: OrderedMap::new(),
            diagnostics: Vec::new(),
            tests_seen: 0,
        }
    }

    /// Records a report-level diagnostic.
    pub fn note(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Routes one test of `job`, the job in column `column`.
    pub fn add_test(&mut self, job: &Job, column: usize, test: &Test) -> Result<()> {
        let expected = self.columns.get(column).ok_or(CmpError::ColumnOutOfRange {
            index: column,
            columns: self.columns.len(),
        })?;
        if expected.id != job.id {
            return Err(CmpError::invalid(
                "job_index",
                format!(
                    "column {} belongs to job {}, not job {}",
                    column, expected.id, job.id
                ),
            ));
        }

        let legends = &self.legends;
        self.groups
            .get_or_insert_with(test.group.clone(), |id| {
                GroupView::new(id, test.group.clone(), legends)
            })
            .add_test(column, test);
        self.tests_seen += 1;
        Ok(())
    }

    /// Groups accumulated so far.
    pub fn groups(&self) -> impl Iterator<Item = &GroupView> {
        self.groups.values()
    }

    /// Number of tests routed so far.
    pub fn tests_seen(&self) -> usize {
        self.tests_seen
    }

    /// Finalizes every group and section.
    pub fn finish(self) -> Report {
        let groups: Vec<Group> = self
            .groups
            .values()
            .map(|g| g.finalize(&self.config))
            .collect();

        let mut diagnostics = self.diagnostics;
        for group in &groups {
            for section in &group.sections {
                diagnostics.extend(section.diagnostics.iter().cloned());
            }
        }

        info!(
            comparison = self.comparison_id,
            jobs = self.columns.len(),
            tests = self.tests_seen,
            groups = groups.len(),
            diagnostics = diagnostics.len(),
            "comparison report built"
        );

        Report {
            comparison_id: self.comparison_id,
            title: self.title,
            config: self.config,
            jobs: self.columns,
            groups,
            diagnostics,
        }
    }
}

/// Builds comparison reports from a [`JobSource`].
///
/// # Example
///
/// ```
/// use perfcmp_core::{Comparison, ComparisonConfig, ComparisonEngine, InMemoryStore, Job, Test};
///
/// let test: Test = serde_json::from_str(r#"{"tag": "boot", "avg_score": 12.0}"#).unwrap();
/// let mut store = InMemoryStore::new();
/// store.insert(Job::new(1, "before"), vec![test.clone()]);
/// store.insert(Job::new(2, "after"), vec![test]);
///
/// let comparison = Comparison::new(1, "boot time", ComparisonConfig::default(), &[2, 1]).unwrap();
/// let report = ComparisonEngine::new(&store).build(&comparison).unwrap();
/// assert_eq!(report.jobs[0].title, "after");
/// assert_eq!(report.groups.len(), 1);
/// ```
pub struct ComparisonEngine<'a, S: JobSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: JobSource + ?Sized> ComparisonEngine<'a, S> {
    /// Creates an engine reading from `source`.
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Builds the report of `comparison`.
    ///
    /// Any source failure aborts the build; no partial report is returned.
    pub fn build(&self, comparison: &Comparison) -> Result<Report> {
        let ordered = self.source.ordered_jobs(comparison)?;
        let mut builder = ReportBuilder::new(comparison, &ordered.jobs);
        if let Some(reason) = ordered.degraded {
            builder.note(Diagnostic::DegradedJobOrder { reason });
        }

        for (column, job) in ordered.jobs.iter().enumerate() {
            let mut tests = self.source.tests(job)?;
            tests.sort_by_key(|t| t.seq_num);
            debug!(job = job.id, column, tests = tests.len(), "ingesting job");
            for test in &tests {
                builder.add_test(job, column, test)?;
            }
        }

        Ok(builder.finish())
    }

    /// Summarizes `comparison` over its ordered jobs.
    pub fn summarize(&self, comparison: &Comparison) -> Result<ComparisonSummary> {
        let ordered = self.source.ordered_jobs(comparison)?;
        Ok(ComparisonSummary::collect(comparison, &ordered.jobs))
    }
}
