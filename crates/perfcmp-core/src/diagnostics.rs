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

//! Non-fatal problems found while building a report.
//!
//! Diagnostics travel with the report so callers and tests can inspect them;
//! each one is also logged with `tracing` where it is raised.

use serde::Serialize;

/// A recoverable data problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A test category has no slot on its section axis; the point was skipped.
    MissingCategory {
        /// Group key.
        group: String,
        /// Section key.
        section: String,
        /// Series (job legend) the test belongs to.
        series: String,
        /// The unmapped category.
        category: String,
    },
    /// The explicit job order could not be applied; storage order was used.
    DegradedJobOrder {
        /// Why the explicit order was unusable.
        reason: String,
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::MissingCategory {
                group,
                section,
                series,
                category,
            } => write!(
                f,
                "test category '{}' of series '{}' is not on the axis of section '{}' in group '{}'",
                category, series, section, group
            ),
            Diagnostic::DegradedJobOrder { reason } => {
                write!(f, "job order degraded to storage order: {}", reason)
            }
        }
    }
}
