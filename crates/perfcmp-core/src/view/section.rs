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

//! Sections: the chart/table unit of a report.
//!
//! A section collects every row and series sharing a tag (or every
//! category-less test of a group). Presentation is decided once, in
//! [`SectionView::finalize`], from the accumulated data only.

use super::row::{RowCell, TestRow};
use super::series::{Series, SeriesBuilder, FAILED_SYMBOL};
use crate::axis::AxisCategories;
use crate::config::{
    ChartType, ComparisonConfig, TableType, CROWDED_AXIS_ROTATION, MAX_SMALL_SECTION_ROWS,
    MAX_TABLE_ROWS, MAX_UNROTATED_LABELS, PAGE_ROWS,
};
use crate::diagnostics::Diagnostic;
use crate::model::Test;
use crate::ordered::OrderedMap;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Legend entry name of the failed-test marker.
pub const FAILED_LEGEND: &str = "Failed test";

/// A chart legend entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Legend {
    /// Plain series name.
    Name(String),
    /// Marker description.
    Marker {
        /// Entry name.
        name: String,
        /// Marker icon.
        icon: String,
    },
}

/// Kind of x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    /// Discrete labels.
    #[default]
    Category,
    /// Numeric values.
    Value,
}

/// X axis of a section chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    /// Axis name (the trimmed common category suffix).
    pub name: String,
    /// Axis kind.
    pub kind: AxisKind,
    /// Label rotation in degrees.
    pub rotate: u16,
    /// Axis labels.
    pub categories: Vec<String>,
}

/// Chart decision of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartDecision {
    /// Base chart type: `NoChart`, `XyLine` or `Bar`.
    pub chart_type: ChartType,
    /// Whether trend lines are drawn.
    pub trend_line: bool,
    /// X axis kind.
    pub axis_kind: AxisKind,
    /// X axis label rotation.
    pub rotate: u16,
}

impl ChartDecision {
    fn plain(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            trend_line: false,
            axis_kind: AxisKind::Category,
            rotate: 0,
        }
    }
}

/// Decides the chart of a section.
///
/// Explicit settings win; under `Auto` mixed-tag sections get no chart, small
/// sections a bar chart, and larger sections an XY line when every axis label
/// is numeric.
pub fn decide_chart(
    requested: ChartType,
    tag_count: usize,
    row_count: usize,
    axis: &AxisCategories,
) -> ChartDecision {
    match requested {
        ChartType::XyLineWithTrend => ChartDecision {
            trend_line: true,
            ..ChartDecision::plain(ChartType::XyLine)
        },
        ChartType::BarWithTrend => ChartDecision {
            trend_line: true,
            ..ChartDecision::plain(ChartType::Bar)
        },
        ChartType::NoChart | ChartType::XyLine | ChartType::Bar => ChartDecision::plain(requested),
        ChartType::Auto => {
            if tag_count != 1 {
                return ChartDecision::plain(ChartType::NoChart);
            }
            if row_count <= MAX_SMALL_SECTION_ROWS {
                return ChartDecision::plain(ChartType::Bar);
            }
            if axis.all_numeric() {
                return ChartDecision {
                    axis_kind: AxisKind::Value,
                    ..ChartDecision::plain(ChartType::XyLine)
                };
            }
            let rotate = if row_count > MAX_UNROTATED_LABELS {
                CROWDED_AXIS_ROTATION
            } else {
                0
            };
            ChartDecision {
                rotate,
                ..ChartDecision::plain(ChartType::Bar)
            }
        }
    }
}

/// Decides whether a section shows its table.
pub fn decide_table(requested: TableType, tag_count: usize, row_count: usize) -> bool {
    match requested {
        TableType::Show => true,
        TableType::Hide => false,
        TableType::Auto if tag_count == 1 => row_count <= MAX_TABLE_ROWS,
        TableType::Auto => true,
    }
}

/// Finalized, render-ready section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    /// Position within the group.
    pub id: usize,
    /// Section title; blank only for the sole section of a group.
    pub title: String,
    /// Chart type.
    pub chart_type: ChartType,
    /// Whether trend lines are drawn.
    pub trend_line: bool,
    /// Whether the table is shown.
    pub table_visible: bool,
    /// Whether the table should be paged.
    pub pageable: bool,
    /// X axis.
    pub x_axis: Axis,
    /// Y axis name (metrics label).
    pub y_axis_name: String,
    /// Legend entries.
    pub legends: Vec<Legend>,
    /// One series per job column.
    pub series: Vec<Series>,
    /// Rendered table rows.
    pub rows: Vec<Vec<RowCell>>,
    /// Data problems found while finalizing.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

/// Accumulating state of one section.
#[derive(Debug, Clone)]
pub struct SectionView {
    id: usize,
    group: String,
    key: String,
    legends: Vec<String>,
    rows: OrderedMap<String, TestRow>,
    categories: Vec<String>,
    tags: HashSet<String>,
    y_axis_name: String,
    series: Vec<SeriesBuilder>,
}

impl SectionView {
    /// Creates a section with one series per legend (job column).
    pub fn new(
        id: usize,
        group: impl Into<String>,
        key: impl Into<String>,
        legends: &[String],
    ) -> Self {
        Self {
            id,
            group: group.into(),
            key: key.into(),
            legends: legends.to_vec(),
            rows: OrderedMap::new(),
            categories: Vec::new(),
            tags: HashSet::new(),
            y_axis_name: String::new(),
            series: legends.iter().map(SeriesBuilder::new).collect(),
        }
    }

    /// Routes a test of job `column` into its row and series.
    pub fn add_test(&mut self, column: usize, test: &Test) {
        let key = format!("{} {}", test.tag, test.category);
        let columns = self.legends.len();
        if self.rows.get(&key).is_none() {
            self.categories.push(test.category.clone());
            self.y_axis_name = test.metrics.clone();
        }
        self.rows
            .get_or_insert_with(key, |_| TestRow::new(columns))
            .add_test(column, test);
        if let Some(series) = self.series.get_mut(column) {
            series.add_test(test);
        }
        if !self.tags.contains(&test.tag) {
            self.tags.insert(test.tag.clone());
        }
    }

    /// Position within the group.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Section key: the tag, or empty for the ungrouped section.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Number of distinct rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of distinct tags.
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    /// Rows in first-seen order.
    pub fn rows(&self) -> impl Iterator<Item = &TestRow> {
        self.rows.values()
    }

    /// Whether any test of the section failed or reported errors.
    pub fn has_failures(&self) -> bool {
        self.series.iter().any(SeriesBuilder::has_failures)
    }

    /// Whether the renderer should page the table.
    pub fn pageable(&self) -> bool {
        self.rows.len() > PAGE_ROWS
    }

    /// Computes the render-ready section.
    ///
    /// Pure in the accumulated state: calling it again gives the same result.
    pub fn finalize(&self, config: &ComparisonConfig) -> Section {
        let axis = AxisCategories::normalize(&self.categories);
        let decision = decide_chart(config.charts_type, self.tag_count(), self.row_count(), &axis);
        let table_visible = decide_table(config.tables_type, self.tag_count(), self.row_count());

        let mut legends: Vec<Legend> = self.legends.iter().cloned().map(Legend::Name).collect();
        if config.charts_type == ChartType::XyLineWithTrend {
            legends.extend(
                self.legends
                    .iter()
                    .map(|l| Legend::Name(format!("{} (trend)", l))),
            );
        }
        if decision.chart_type == ChartType::XyLine && self.has_failures() {
            legends.push(Legend::Marker {
                name: FAILED_LEGEND.to_string(),
                icon: FAILED_SYMBOL.to_string(),
            });
        }

        let mut diagnostics = Vec::new();
        let mut series = Vec::with_capacity(self.series.len());
        for builder in &self.series {
            let (rendered, unmapped) = builder.render(&axis, decision.chart_type);
            for category in unmapped {
                warn!(
                    group = %self.group,
                    section = %self.key,
                    series = %builder.legend(),
                    category = %category,
                    "test category has no axis slot, point skipped"
                );
                diagnostics.push(Diagnostic::MissingCategory {
                    group: self.group.clone(),
                    section: self.key.clone(),
                    series: builder.legend().to_string(),
                    category,
                });
            }
            series.push(rendered);
        }

        debug!(
            group = %self.group,
            section = %self.key,
            rows = self.row_count(),
            tags = self.tag_count(),
            chart = ?decision.chart_type,
            table_visible,
            "section finalized"
        );

        Section {
            id: self.id,
            title: self.key.clone(),
            chart_type: decision.chart_type,
            trend_line: decision.trend_line,
            table_visible,
            pageable: self.pageable(),
            x_axis: Axis {
                name: axis.name().to_string(),
                kind: decision.axis_kind,
                rotate: decision.rotate,
                categories: axis.labels().to_vec(),
            },
            y_axis_name: self.y_axis_name.clone(),
            legends,
            series,
            rows: self.rows.values().map(TestRow::render).collect(),
            diagnostics,
        }
    }
}
