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

//! Shared test fixtures and builders for perfcmp.
//!
//! # Quick Start
//!
//! ```rust
//! use perfcmp_test::fixtures::builders::{JobBuilder, TestBuilder};
//! use perfcmp_test::fixtures::scenarios;
//!
//! // Build custom data
//! let test = TestBuilder::new("read").category("4 threads").score(10.0, 0.5, 5).build();
//! let stored = JobBuilder::new(1, "baseline").test(test).build();
//!
//! // Or use a canned scenario
//! let scenario = scenarios::two_job_improvement();
//! assert_eq!(scenario.comparison.members().len(), 2);
//! ```

pub mod fixtures;

pub use fixtures::builders::{JobBuilder, TestBuilder};
pub use fixtures::scenarios::Scenario;
