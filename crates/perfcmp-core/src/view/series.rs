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

//! Chart series: the tests of one job column within a section.

use crate::axis::AxisCategories;
use crate::config::ChartType;
use crate::humanize::float2human;
use crate::model::{FailurePayload, Test};
use serde::Serialize;

/// Marker symbol of failed points on line charts.
pub const FAILED_SYMBOL: &str = "diamond";

const FAILED_SYMBOL_SIZE: u32 = 10;
const FAILED_SYMBOL_COLOR: &str = "#000";
const FAILED_LABEL: &str = "fail";

/// Label attached to failed bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FailLabel {
    /// Always shown.
    pub show: u8,
    /// Label text.
    pub formatter: &'static str,
}

/// Style of failed line points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemStyle {
    /// Marker color.
    pub color: &'static str,
}

/// One chart point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartPoint {
    /// Bar chart: bare score.
    Bar(Option<f64>),
    /// Bar chart: failed point.
    FailedBar {
        /// Score.
        value: Option<f64>,
        /// "fail" label.
        label: FailLabel,
        /// Failure payload.
        errors: FailurePayload,
    },
    /// Line chart: `[axis label, score]`.
    Line(String, Option<f64>),
    /// Line chart: failed point drawn as a diamond.
    FailedLine {
        /// `[axis label, score]`.
        value: (String, Option<f64>),
        /// Marker symbol.
        symbol: &'static str,
        /// Marker size.
        #[serde(rename = "symbolSize")]
        symbol_size: u32,
        /// Marker style.
        #[serde(rename = "itemStyle")]
        item_style: ItemStyle,
        /// Failure payload.
        errors: FailurePayload,
    },
}

impl ChartPoint {
    /// Failure payload of a failed point.
    pub fn failure(&self) -> Option<FailurePayload> {
        match self {
            ChartPoint::FailedBar { errors, .. } | ChartPoint::FailedLine { errors, .. } => {
                Some(*errors)
            }
            _ => None,
        }
    }
}

/// Rendered series of one job column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    /// Legend name.
    pub name: String,
    /// Points in axis order.
    pub data: Vec<ChartPoint>,
}

/// Scores and failures of a series laid out on the section axis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Projection {
    /// Display score per axis slot.
    pub scores: Vec<Option<f64>>,
    /// Failure payload per axis slot.
    pub failures: Vec<Option<FailurePayload>>,
    /// Categories that had no axis slot.
    pub unmapped: Vec<String>,
}

/// Accumulates the tests of one job column in encounter order.
#[derive(Debug, Clone)]
pub struct SeriesBuilder {
    legend: String,
    tests: Vec<Test>,
}

impl SeriesBuilder {
    /// Creates an empty series.
    pub fn new(legend: impl Into<String>) -> Self {
        Self {
            legend: legend.into(),
            tests: Vec::new(),
        }
    }

    /// Appends a test.
    pub fn add_test(&mut self, test: &Test) {
        self.tests.push(test.clone());
    }

    /// Legend name.
    pub fn legend(&self) -> &str {
        &self.legend
    }

    /// Number of accumulated tests.
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Whether no test was added.
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Whether any accumulated test failed or reported errors.
    pub fn has_failures(&self) -> bool {
        self.tests.iter().any(Test::is_failed)
    }

    /// Lays the tests out on `axis`, truncated after the last filled slot.
    pub fn project(&self, axis: &AxisCategories) -> Projection {
        let mut projection = Projection {
            scores: vec![None; axis.len()],
            failures: vec![None; axis.len()],
            unmapped: Vec::new(),
        };

        let mut last = 0;
        for test in &self.tests {
            let Some(i) = axis.index_of(&test.category) else {
                projection.unmapped.push(test.category.clone());
                continue;
            };
            last = last.max(i);
            projection.scores[i] = Some(float2human(test.score()));
            projection.failures[i] = test.failure();
        }

        let keep = projection.scores.len().min(last + 1);
        projection.scores.truncate(keep);
        projection.failures.truncate(keep);
        projection
    }

    /// Renders chart points for `chart_type`; bar charts get bar-shaped points
    /// and every other type gets `[label, score]` pairs.
    pub fn render(&self, axis: &AxisCategories, chart_type: ChartType) -> (Series, Vec<String>) {
        let projection = self.project(axis);
        let bar = chart_type == ChartType::Bar;

        let data = projection
            .scores
            .iter()
            .zip(&projection.failures)
            .enumerate()
            .map(|(i, (&score, failure))| match (bar, failure) {
                (true, None) => ChartPoint::Bar(score),
                (true, Some(errors)) => ChartPoint::FailedBar {
                    value: score,
                    label: FailLabel {
                        show: 1,
                        formatter: FAILED_LABEL,
                    },
                    errors: *errors,
                },
                (false, None) => ChartPoint::Line(axis.labels()[i].clone(), score),
                (false, Some(errors)) => ChartPoint::FailedLine {
                    value: (axis.labels()[i].clone(), score),
                    symbol: FAILED_SYMBOL,
                    symbol_size: FAILED_SYMBOL_SIZE,
                    item_style: ItemStyle {
                        color: FAILED_SYMBOL_COLOR,
                    },
                    errors: *errors,
                },
            })
            .collect();

        let series = Series {
            name: self.legend.clone(),
            data,
        };
        (series, projection.unmapped)
    }
}
