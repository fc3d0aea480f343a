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

//! Comparison definitions and request validation.
//!
//! A comparison is validated completely before any report is built: unknown
//! type labels, malformed or duplicate job ids and references to missing
//! jobs are all rejected here.

use crate::config::ComparisonConfig;
use crate::error::{CmpError, Result};
use crate::model::{Job, JobId};
use crate::ordering::JobOrder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// Create/update payload of a comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRequest {
    /// Comparison title.
    #[serde(default)]
    pub title: Option<String>,
    /// Job ids in display order; integers or integer strings.
    #[serde(default)]
    pub jobs: Option<Value>,
    /// Chart type label.
    #[serde(default)]
    pub charts_type: Option<String>,
    /// Table type label.
    #[serde(default)]
    pub tables_type: Option<String>,
    /// Tests type label.
    #[serde(default)]
    pub tests_type: Option<String>,
    /// Values type label.
    #[serde(default)]
    pub values_type: Option<String>,
}

/// Finds jobs by id.
pub trait JobLookup {
    /// Returns the job with `id`, if it exists.
    fn find_job(&self, id: JobId) -> Option<&Job>;
}

/// A validated comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// Comparison identifier.
    pub id: u64,
    /// Comparison title.
    pub title: String,
    /// Presentation settings.
    pub config: ComparisonConfig,
    members: Vec<JobId>,
    job_ids: String,
}

impl Comparison {
    /// Creates a comparison over `job_ids`, in that display order.
    pub fn new(
        id: u64,
        title: impl Into<String>,
        config: ComparisonConfig,
        job_ids: &[JobId],
    ) -> Result<Self> {
        let mut seen = HashSet::with_capacity(job_ids.len());
        for &job_id in job_ids {
            if !seen.insert(job_id) {
                return Err(CmpError::DuplicateJob(job_id));
            }
        }
        let mut members = job_ids.to_vec();
        members.sort_unstable();
        Ok(Self {
            id,
            title: title.into(),
            config,
            members,
            job_ids: JobOrder::format(job_ids),
        })
    }

    /// Restores a comparison as persisted: member set plus raw id-order list.
    ///
    /// The order list is not validated here; a bad list degrades column
    /// order when the jobs are fetched.
    pub fn from_stored(
        id: u64,
        title: impl Into<String>,
        config: ComparisonConfig,
        members: Vec<JobId>,
        job_ids: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            config,
            members,
            job_ids: job_ids.into(),
        }
    }

    /// Validates a request against known jobs.
    pub fn from_request<L: JobLookup + ?Sized>(
        id: u64,
        request: &ComparisonRequest,
        lookup: &L,
    ) -> Result<Self> {
        let title = request.title.as_deref().ok_or(CmpError::MissingField {
            field: "title",
            hint: "'title': '...'",
        })?;
        let jobs = request.jobs.as_ref().ok_or(CmpError::MissingField {
            field: "jobs",
            hint: "'jobs': [1, 3, ...]",
        })?;
        let jobs = jobs
            .as_array()
            .ok_or_else(|| CmpError::invalid("jobs", "must be a list: 'jobs': [1, 3, ...]"))?;

        let config = ComparisonConfig::from_labels(
            request.charts_type.as_deref(),
            request.tables_type.as_deref(),
            request.tests_type.as_deref(),
            request.values_type.as_deref(),
        )?;

        let job_ids = jobs.iter().map(parse_job_id).collect::<Result<Vec<_>>>()?;
        for &job_id in &job_ids {
            if lookup.find_job(job_id).is_none() {
                return Err(CmpError::UnknownJob(job_id));
            }
        }

        Self::new(id, title, config, &job_ids)
    }

    /// Member job ids in storage order.
    pub fn members(&self) -> &[JobId] {
        &self.members
    }

    /// Stored id-order list, e.g. `"3,1,2"`.
    pub fn job_ids(&self) -> &str {
        &self.job_ids
    }

    /// Parsed job order.
    pub fn job_order(&self) -> JobOrder {
        JobOrder::parse(&self.job_ids)
    }
}

fn parse_job_id(value: &Value) -> Result<JobId> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| CmpError::MalformedJobId(n.to_string())),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| CmpError::MalformedJobId(s.clone())),
        other => Err(CmpError::MalformedJobId(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ChartType, TableType};
    use serde_json::json;
    use std::collections::HashMap;

    struct Jobs(HashMap<JobId, Job>);

    impl JobLookup for Jobs {
        fn find_job(&self, id: JobId) -> Option<&Job> {
            self.0.get(&id)
        }
    }

    fn lookup() -> Jobs {
        Jobs((1..=3).map(|id| (id, Job::new(id, format!("job {}", id)))).collect())
    }

    fn request(value: Value) -> ComparisonRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_request() {
        let req = request(json!({
            "title": "nightly",
            "jobs": [3, "1", 2],
            "charts_type": "XY-line",
            "tables_type": "Show all tables"
        }));
        let cmp = Comparison::from_request(10, &req, &lookup()).unwrap();
        assert_eq!(cmp.title, "nightly");
        assert_eq!(cmp.job_ids(), "3,1,2");
        assert_eq!(cmp.members(), [1, 2, 3]);
        assert_eq!(cmp.config.charts_type, ChartType::XyLine);
        assert_eq!(cmp.config.tables_type, TableType::Show);
        assert_eq!(cmp.job_order(), JobOrder::Explicit(vec![3, 1, 2]));
    }

    #[test]
    fn test_missing_title() {
        let err = Comparison::from_request(1, &request(json!({"jobs": [1]})), &lookup()).unwrap_err();
        assert!(matches!(err, CmpError::MissingField { field: "title", .. }));
    }

    #[test]
    fn test_missing_jobs() {
        let err = Comparison::from_request(1, &request(json!({"title": "t"})), &lookup()).unwrap_err();
        assert!(matches!(err, CmpError::MissingField { field: "jobs", .. }));
    }

    #[test]
    fn test_jobs_not_a_list() {
        let req = request(json!({"title": "t", "jobs": "1,2"}));
        let err = Comparison::from_request(1, &req, &lookup()).unwrap_err();
        assert!(matches!(err, CmpError::InvalidField { field: "jobs", .. }));
    }

    #[test]
    fn test_unknown_type_label() {
        let req = request(json!({"title": "t", "jobs": [1], "charts_type": "Pie"}));
        let err = Comparison::from_request(1, &req, &lookup()).unwrap_err();
        assert!(matches!(err, CmpError::UnknownType { kind: "charts", .. }));
    }

    #[test]
    fn test_malformed_job_id() {
        let req = request(json!({"title": "t", "jobs": [1, "two"]}));
        let err = Comparison::from_request(1, &req, &lookup()).unwrap_err();
        assert_eq!(err, CmpError::MalformedJobId("two".to_string()));

        let req = request(json!({"title": "t", "jobs": [-4]}));
        assert!(Comparison::from_request(1, &req, &lookup()).is_err());
    }

    #[test]
    fn test_unknown_job() {
        let req = request(json!({"title": "t", "jobs": [1, 99]}));
        let err = Comparison::from_request(1, &req, &lookup()).unwrap_err();
        assert_eq!(err, CmpError::UnknownJob(99));
    }

    #[test]
    fn test_duplicate_job() {
        let req = request(json!({"title": "t", "jobs": [2, 2]}));
        let err = Comparison::from_request(1, &req, &lookup()).unwrap_err();
        assert_eq!(err, CmpError::DuplicateJob(2));
    }

    #[test]
    fn test_from_stored_keeps_raw_order() {
        let cmp = Comparison::from_stored(1, "t", ComparisonConfig::default(), vec![1, 2], "2,x");
        assert_eq!(cmp.job_ids(), "2,x");
        assert!(matches!(cmp.job_order(), JobOrder::Degraded(_)));
    }
}
