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

//! Comparison summary: totals and environment across member jobs.

use crate::comparison::Comparison;
use crate::model::{EnvNode, Job, JobId, JobStats};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// Summary of a comparison over its ordered jobs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonSummary {
    /// Comparison identifier.
    pub id: u64,
    /// Comparison title.
    pub title: String,
    /// Job ids in column order.
    pub jobs: Vec<JobId>,
    /// Distinct suite names, sorted and comma-joined.
    pub suite_name: String,
    /// Distinct suite versions, sorted and comma-joined.
    pub suite_ver: String,
    /// Summed test counters.
    #[serde(flatten)]
    pub totals: JobStats,
    /// Top-level environment nodes, first occurrence per name.
    pub env_node: Vec<EnvNode>,
}

impl ComparisonSummary {
    /// Summarizes `jobs`, which must already be in column order.
    pub fn collect(comparison: &Comparison, jobs: &[Job]) -> Self {
        let mut totals = JobStats::default();
        for job in jobs {
            totals += job.stats;
        }

        Self {
            id: comparison.id,
            title: comparison.title.clone(),
            jobs: jobs.iter().map(|j| j.id).collect(),
            suite_name: distinct_joined(jobs.iter().map(|j| j.suite_name.as_str())),
            suite_ver: distinct_joined(jobs.iter().map(|j| j.suite_ver.as_str())),
            totals,
            env_node: top_level_nodes(jobs),
        }
    }
}

fn distinct_joined<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>()
        .join(", ")
}

fn top_level_nodes(jobs: &[Job]) -> Vec<EnvNode> {
    let mut seen = HashSet::new();
    jobs.iter()
        .flat_map(|job| job.env_nodes.iter())
        .filter(|node| node.parent.is_none())
        .filter(|node| seen.insert(node.name.clone()))
        .cloned()
        .collect()
}
