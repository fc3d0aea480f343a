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

//! Comparison presentation settings.
//!
//! Each setting is a small closed enum whose `Auto` value lets the section
//! heuristics decide. Labels and numeric codes match what comparisons have
//! always been stored with, so persisted settings keep their meaning.

use crate::error::{CmpError, Result};
use serde::{Deserialize, Serialize};

/// Two-sided p-value below which two score summaries count as different.
pub const SIGNIFICANCE_P_VALUE: f64 = 0.1;

/// Single-tag sections with at most this many rows always get a bar chart.
pub const MAX_SMALL_SECTION_ROWS: usize = 3;

/// Single-tag sections with more rows than this hide their table under `Auto`.
pub const MAX_TABLE_ROWS: usize = 10;

/// Sections with more rows than this are paged by the renderer.
pub const PAGE_ROWS: usize = 10;

/// Bar charts with more rows than this rotate their axis labels.
pub const MAX_UNROTATED_LABELS: usize = 10;

/// Axis label rotation, in degrees, for crowded bar charts.
pub const CROWDED_AXIS_ROTATION: u16 = 45;

/// Title given to blank-titled sections that share a group with others.
pub const DEFAULT_SECTION_TITLE: &str = "Tests results";

/// A setting with a fixed catalog of (value, code, label) entries.
pub trait CatalogType: Copy + Eq + Sized + 'static {
    /// Setting family name used in error messages.
    const KIND: &'static str;
    /// All values with their stored code and display label.
    const CATALOG: &'static [(Self, u8, &'static str)];

    /// Stored numeric code.
    fn code(self) -> u8 {
        Self::CATALOG
            .iter()
            .find(|(v, _, _)| *v == self)
            .map(|(_, c, _)| *c)
            .unwrap_or(0)
    }

    /// Display label.
    fn label(self) -> &'static str {
        Self::CATALOG
            .iter()
            .find(|(v, _, _)| *v == self)
            .map(|(_, _, l)| *l)
            .unwrap_or("Auto")
    }

    /// Parses a display label, e.g. `"XY-line + trend"`.
    fn from_label(label: &str) -> Result<Self> {
        Self::CATALOG
            .iter()
            .find(|(_, _, l)| *l == label)
            .map(|(v, _, _)| *v)
            .ok_or_else(|| Self::unknown(label))
    }

    /// Parses a stored numeric code.
    fn from_code(code: u8) -> Result<Self> {
        Self::CATALOG
            .iter()
            .find(|(_, c, _)| *c == code)
            .map(|(v, _, _)| *v)
            .ok_or_else(|| Self::unknown(&code.to_string()))
    }

    /// Builds the error for an unrecognized value.
    fn unknown(value: &str) -> CmpError {
        let accepted: Vec<&str> = Self::CATALOG.iter().map(|(_, _, l)| *l).collect();
        CmpError::UnknownType {
            kind: Self::KIND,
            value: value.to_string(),
            accepted: accepted.join(","),
        }
    }
}

/// Chart presentation for every section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChartType {
    /// Let the section heuristic decide.
    #[default]
    Auto,
    /// No chart.
    NoChart,
    /// XY line chart.
    XyLine,
    /// XY line chart with trend lines.
    XyLineWithTrend,
    /// Bar chart.
    Bar,
    /// Bar chart with trend lines.
    BarWithTrend,
}

impl CatalogType for ChartType {
    const KIND: &'static str = "charts";
    const CATALOG: &'static [(Self, u8, &'static str)] = &[
        (ChartType::Auto, 0, "Auto"),
        (ChartType::NoChart, 1, "No charts"),
        (ChartType::XyLine, 2, "XY-line"),
        (ChartType::XyLineWithTrend, 3, "XY-line + trend"),
        (ChartType::Bar, 4, "Bar charts"),
        (ChartType::BarWithTrend, 5, "Bar + trend"),
    ];
}

/// Table visibility for every section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableType {
    /// Let the section heuristic decide.
    #[default]
    Auto,
    /// Hide all tables.
    Hide,
    /// Show all tables.
    Show,
}

impl CatalogType for TableType {
    const KIND: &'static str = "tables";
    const CATALOG: &'static [(Self, u8, &'static str)] = &[
        (TableType::Auto, 0, "Auto"),
        (TableType::Hide, 1, "Hide all tables"),
        (TableType::Show, 2, "Show all tables"),
    ];
}

/// Which tests a comparison is meant to include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestsType {
    /// Default selection.
    #[default]
    Auto,
    /// Tests without warnings.
    TestsWoWarnings,
    /// Tests without errors.
    TestsWoErrors,
    /// Every test.
    AllTests,
}

impl CatalogType for TestsType {
    const KIND: &'static str = "tests";
    const CATALOG: &'static [(Self, u8, &'static str)] = &[
        (TestsType::Auto, 0, "Auto"),
        (TestsType::TestsWoWarnings, 1, "Tests w/o warnings"),
        (TestsType::TestsWoErrors, 2, "Tests w/o errors"),
        (TestsType::AllTests, 3, "All tests"),
    ];
}

/// Which score statistic a comparison is meant to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValuesType {
    /// Default statistic.
    #[default]
    Auto,
    /// Average values.
    Average,
    /// Minimum values.
    Min,
    /// Maximum values.
    Max,
}

impl CatalogType for ValuesType {
    const KIND: &'static str = "values";
    const CATALOG: &'static [(Self, u8, &'static str)] = &[
        (ValuesType::Auto, 0, "Auto"),
        (ValuesType::Average, 1, "Average values"),
        (ValuesType::Min, 2, "Min values"),
        (ValuesType::Max, 3, "Max values"),
    ];
}

/// Presentation settings of one comparison.
///
/// # Example
///
/// ```
/// use perfcmp_core::config::{ChartType, ComparisonConfig, TableType};
///
/// let config = ComparisonConfig::default()
///     .with_charts_type(ChartType::Bar)
///     .with_tables_type(TableType::Show);
/// assert_eq!(config.charts_type, ChartType::Bar);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComparisonConfig {
    /// Chart presentation.
    pub charts_type: ChartType,
    /// Table visibility.
    pub tables_type: TableType,
    /// Test selection (carried, not acted upon).
    pub tests_type: TestsType,
    /// Value statistic (carried, not acted upon).
    pub values_type: ValuesType,
}

impl ComparisonConfig {
    /// Sets the chart type.
    pub fn with_charts_type(mut self, charts_type: ChartType) -> Self {
        self.charts_type = charts_type;
        self
    }

    /// Sets the table type.
    pub fn with_tables_type(mut self, tables_type: TableType) -> Self {
        self.tables_type = tables_type;
        self
    }

    /// Sets the tests type.
    pub fn with_tests_type(mut self, tests_type: TestsType) -> Self {
        self.tests_type = tests_type;
        self
    }

    /// Sets the values type.
    pub fn with_values_type(mut self, values_type: ValuesType) -> Self {
        self.values_type = values_type;
        self
    }

    /// Builds a config from optional labels; absent labels mean `Auto`.
    pub fn from_labels(
        charts: Option<&str>,
        tables: Option<&str>,
        tests: Option<&str>,
        values: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            charts_type: parse_optional(charts)?,
            tables_type: parse_optional(tables)?,
            tests_type: parse_optional(tests)?,
            values_type: parse_optional(values)?,
        })
    }
}

fn parse_optional<T: CatalogType + Default>(label: Option<&str>) -> Result<T> {
    label.map_or_else(|| Ok(T::default()), T::from_label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_auto() {
        let config = ComparisonConfig::default();
        assert_eq!(config.charts_type, ChartType::Auto);
        assert_eq!(config.tables_type, TableType::Auto);
        assert_eq!(config.tests_type, TestsType::Auto);
        assert_eq!(config.values_type, ValuesType::Auto);
    }

    #[test]
    fn test_labels_and_codes() {
        assert_eq!(
            ChartType::from_label("XY-line + trend").unwrap(),
            ChartType::XyLineWithTrend
        );
        assert_eq!(ChartType::XyLineWithTrend.code(), 3);
        assert_eq!(TableType::from_code(2).unwrap(), TableType::Show);
        assert_eq!(ValuesType::Max.label(), "Max values");
        assert_eq!(
            TestsType::from_label("Tests w/o errors").unwrap(),
            TestsType::TestsWoErrors
        );
    }

    #[test]
    fn test_unknown_label_lists_accepted() {
        let err = TableType::from_label("Sometimes").unwrap_err();
        match err {
            CmpError::UnknownType {
                kind,
                value,
                accepted,
            } => {
                assert_eq!(kind, "tables");
                assert_eq!(value, "Sometimes");
                assert_eq!(accepted, "Auto,Hide all tables,Show all tables");
            }
            other => panic!("Expected UnknownType, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_code() {
        assert!(ChartType::from_code(9).is_err());
    }

    #[test]
    fn test_from_labels() {
        let config =
            ComparisonConfig::from_labels(Some("Bar + trend"), None, None, Some("Min values"))
                .unwrap();
        assert_eq!(config.charts_type, ChartType::BarWithTrend);
        assert_eq!(config.tables_type, TableType::Auto);
        assert_eq!(config.values_type, ValuesType::Min);

        assert!(ComparisonConfig::from_labels(None, Some("bogus"), None, None).is_err());
    }

    #[test]
    fn test_builder() {
        let config = ComparisonConfig::default()
            .with_tests_type(TestsType::AllTests)
            .with_values_type(ValuesType::Average);
        assert_eq!(config.tests_type, TestsType::AllTests);
        assert_eq!(config.values_type, ValuesType::Average);
    }
}
