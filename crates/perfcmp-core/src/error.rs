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

//! Error types for comparison configuration and report building.
//!
//! Every variant here is fatal: it is raised before ingestion starts, or it
//! aborts the report being built. Recoverable data problems are reported as
//! [`Diagnostic`](crate::Diagnostic)s on the finished report instead.

use crate::model::JobId;
use thiserror::Error;

/// Result type for comparison operations.
pub type Result<T> = std::result::Result<T, CmpError>;

/// Errors that can occur while configuring or building a comparison report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CmpError {
    /// A required field of the comparison request is absent.
    #[error("Comparison {field} is not specified: it must be {hint}")]
    MissingField {
        /// Field name
        field: &'static str,
        /// Expected shape, shown to the user
        hint: &'static str,
    },

    /// A field is present but has the wrong shape.
    #[error("Invalid comparison {field}: {reason}")]
    InvalidField {
        /// Field name
        field: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// A chart/table/tests/values type label is not one of the known labels.
    #[error("Unknown {kind} type: '{value}', acceptable types are: {accepted}")]
    UnknownType {
        /// Which type family was being parsed
        kind: &'static str,
        /// The rejected value
        value: String,
        /// Comma-separated list of accepted labels
        accepted: String,
    },

    /// A job id is not an integer.
    #[error("Malformed job id '{0}'")]
    MalformedJobId(String),

    /// A job id does not refer to a known job.
    #[error("Job with id = '{0}' doesn't exist")]
    UnknownJob(JobId),

    /// A job id appears more than once in the comparison.
    #[error("Job with id = '{0}' is listed more than once")]
    DuplicateJob(JobId),

    /// A test was routed to a job column the report does not have.
    #[error("Job column {index} is out of range (report has {columns} columns)")]
    ColumnOutOfRange {
        /// Requested column
        index: usize,
        /// Number of job columns
        columns: usize,
    },

    /// The job/test collaborator failed.
    #[error("Data source error: {0}")]
    Source(String),
}

impl CmpError {
    /// Create an invalid-field error.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type_display() {
        let err = CmpError::UnknownType {
            kind: "charts",
            value: "Pie".to_string(),
            accepted: "Auto,No charts".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Pie"));
        assert!(msg.contains("Auto,No charts"));
    }

    #[test]
    fn test_unknown_job_display() {
        assert_eq!(
            CmpError::UnknownJob(42).to_string(),
            "Job with id = '42' doesn't exist"
        );
    }

    #[test]
    fn test_invalid_helper() {
        let err = CmpError::invalid("jobs", "must be a list");
        assert_eq!(
            err,
            CmpError::InvalidField {
                field: "jobs",
                reason: "must be a list".to_string()
            }
        );
    }
}
