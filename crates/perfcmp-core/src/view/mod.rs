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

//! Render-ready view model.
//!
//! The tree is Group → Section → (Row, Series). Each level has an
//! accumulating `*View` type filled during ingestion and a plain output type
//! produced by `finalize`.

pub mod group;
pub mod row;
pub mod section;
pub mod series;

pub use group::{Group, GroupView};
pub use row::{ComparisonCell, Direction, RowCell, TestRow};
pub use section::{
    decide_chart, decide_table, Axis, AxisKind, ChartDecision, Legend, Section, SectionView,
};
pub use series::{ChartPoint, Projection, Series, SeriesBuilder};
