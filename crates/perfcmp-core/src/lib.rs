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

//! perfcmp core
//!
//! Builds render-ready comparison reports from benchmark jobs.
//!
//! ## Overview
//!
//! Given a comparison (an ordered list of jobs plus presentation settings),
//! the engine walks every job's tests in order and builds a
//! Group → Section → Row/Series tree:
//!
//! - **Rows** align one test identity (tag + category) across job columns and
//!   carry significance-gated percent deltas between every pair of columns.
//! - **Series** lay each job's scores out on the section's category axis,
//!   marking failed tests.
//! - **Sections** pick a chart type, axis setup and table visibility.
//!
//! ## Usage
//!
//! ```
//! use perfcmp_core::{Comparison, ComparisonConfig, ComparisonEngine, InMemoryStore, Job, Test};
//!
//! let mut store = InMemoryStore::new();
//! let t: Test = serde_json::from_str(r#"{"tag": "read", "category": "4 threads", "avg_score": 10.0}"#).unwrap();
//! store.insert(Job::new(1, "baseline"), vec![t]);
//!
//! let comparison = Comparison::new(1, "io", ComparisonConfig::default(), &[1]).unwrap();
//! let report = ComparisonEngine::new(&store).build(&comparison).unwrap();
//! assert_eq!(report.sections().count(), 1);
//! ```

pub mod axis;
pub mod comparison;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod humanize;
pub mod model;
pub mod ordered;
pub mod ordering;
pub mod stats;
pub mod store;
pub mod summary;
pub mod view;

pub use comparison::{Comparison, ComparisonRequest, JobLookup};
pub use config::{CatalogType, ChartType, ComparisonConfig, TableType, TestsType, ValuesType};
pub use diagnostics::Diagnostic;
pub use engine::{legends_for, ComparisonEngine, JobColumn, Report, ReportBuilder};
pub use error::{CmpError, Result};
pub use model::{EnvNode, FailurePayload, Job, JobId, JobStats, Test, TestStatus};
pub use ordering::{JobOrder, OrderedJobs};
pub use stats::{is_significant, welch_p_value, ScoreSummary};
pub use store::{InMemoryStore, JobSource, StoredJob};
pub use summary::ComparisonSummary;
pub use view::{
    Axis, AxisKind, ChartPoint, ComparisonCell, Direction, Group, Legend, RowCell, Section,
    Series,
};
