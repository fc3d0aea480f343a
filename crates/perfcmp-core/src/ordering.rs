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

//! Job column ordering.
//!
//! Job membership is stored as an unordered set alongside a comma-separated
//! id list recording the order the user asked for. Column order in every
//! row and series comes from that list.

use crate::model::{Job, JobId};
use tracing::warn;

/// Parsed job order of a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOrder {
    /// Well-formed explicit order.
    Explicit(Vec<JobId>),
    /// The stored list is unusable.
    Degraded(String),
}

/// Jobs arranged for column order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedJobs {
    /// Jobs in column order.
    pub jobs: Vec<Job>,
    /// Why the explicit order was not applied, if it was not.
    pub degraded: Option<String>,
}

impl JobOrder {
    /// Parses a stored id list such as `"3,1,2"`.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return JobOrder::Degraded("job id list is empty".to_string());
        }
        let mut ids = Vec::new();
        for token in raw.split(',') {
            match token.trim().parse::<JobId>() {
                Ok(id) => ids.push(id),
                Err(_) => {
                    return JobOrder::Degraded(format!("non-integer job id '{}'", token.trim()))
                }
            }
        }
        JobOrder::Explicit(ids)
    }

    /// Renders an id list in its stored form.
    pub fn format(ids: &[JobId]) -> String {
        ids.iter()
            .map(JobId::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Arranges member jobs by their position in the explicit order.
    ///
    /// Falls back to the given storage order, logging a warning, when the
    /// order is degraded or does not mention every member.
    pub fn arrange(&self, members: Vec<Job>) -> OrderedJobs {
        let ids = match self {
            JobOrder::Explicit(ids) => ids,
            JobOrder::Degraded(reason) => return degraded(members, reason.clone()),
        };

        let positions: Result<Vec<usize>, JobId> = members
            .iter()
            .map(|job| ids.iter().position(|&id| id == job.id).ok_or(job.id))
            .collect();
        let keyed = match positions {
            Ok(keyed) => keyed,
            Err(missing) => {
                let reason = format!("job {} is missing from the job id list", missing);
                return degraded(members, reason);
            }
        };

        let mut jobs: Vec<(usize, Job)> = keyed.into_iter().zip(members).collect();
        jobs.sort_by_key(|(position, _)| *position);
        OrderedJobs {
            jobs: jobs.into_iter().map(|(_, job)| job).collect(),
            degraded: None,
        }
    }
}

fn degraded(members: Vec<Job>, reason: String) -> OrderedJobs {
    warn!(reason = %reason, jobs = members.len(), "using storage order for job columns");
    OrderedJobs {
        jobs: members,
        degraded: Some(reason),
    }
}
