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

//! Property-based tests for section decisions and row comparisons.
//!
//! # Properties Tested
//!
//! 1. **Mixed tags**: sections with several tags never get a chart under `Auto`
//! 2. **Small sections**: one tag and at most three rows always gives a bar chart
//! 3. **Numeric axes**: one tag, more rows, numeric categories gives an XY line
//! 4. **Rotation**: crowded non-numeric bar charts rotate their labels
//! 5. **Idempotence**: finalizing twice gives the same section
//! 6. **Significance gating**: identical summaries never show a direction
//! 7. **Lower is better**: flipping `less_better` flips the direction

use perfcmp_core::view::{SectionView, TestRow};
use perfcmp_core::{AxisKind, ChartType, ComparisonCell, ComparisonConfig, Direction};
use perfcmp_test::TestBuilder;
use proptest::prelude::*;

fn legends(columns: usize) -> Vec<String> {
    (0..columns).map(|c| format!("job {}", c)).collect()
}

/// Section of one tag measured at `categories` by every column.
fn single_tag_section(categories: &[String], columns: usize) -> SectionView {
    let mut section = SectionView::new(0, "g", "t", &legends(columns));
    for column in 0..columns {
        for (i, category) in categories.iter().enumerate() {
            let test = TestBuilder::new("t")
                .category(category.clone())
                .score(10.0 + i as f64, 1.0, 5)
                .build();
            section.add_test(column, &test);
        }
    }
    section
}

fn numeric_categories(count: usize) -> Vec<String> {
    (1..=count).map(|n| format!("{} threads", n * 2)).collect()
}

fn named_categories(count: usize) -> Vec<String> {
    (0..count).map(|n| format!("case-{} x", n)).collect()
}

fn row(prev: f64, next: f64, dev: f64, samples: u64, less_better: bool) -> TestRow {
    let mut row = TestRow::new(2);
    for (column, score) in [prev, next].into_iter().enumerate() {
        let test = TestBuilder::new("t")
            .score(score, dev, samples)
            .less_better(less_better)
            .build();
        row.add_test(column, &test);
    }
    row
}

fn direction(cell: ComparisonCell) -> Direction {
    match cell {
        ComparisonCell::Delta { direction, .. } => direction,
        ComparisonCell::Absent => panic!("both slots are filled"),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: more than one distinct tag means no chart.
    #[test]
    fn prop_mixed_tags_no_chart(
        tags in 2usize..6,
        rows_per_tag in 1usize..15,
        columns in 1usize..4,
    ) {
        let mut section = SectionView::new(0, "g", "", &legends(columns));
        for column in 0..columns {
            for t in 0..tags {
                for r in 0..rows_per_tag {
                    let test = TestBuilder::new(format!("tag{}", t))
                        .category(format!("{} units", r))
                        .build();
                    section.add_test(column, &test);
                }
            }
        }

        let finalized = section.finalize(&ComparisonConfig::default());
        prop_assert_eq!(finalized.chart_type, ChartType::NoChart);
        prop_assert!(finalized.table_visible);
    }

    /// Property: one tag with at most three rows is always a bar chart.
    #[test]
    fn prop_small_section_is_bar(
        count in 1usize..=3,
        numeric in any::<bool>(),
        columns in 1usize..4,
    ) {
        let categories = if numeric {
            numeric_categories(count)
        } else {
            named_categories(count)
        };
        let section = single_tag_section(&categories, columns);

        let finalized = section.finalize(&ComparisonConfig::default());
        prop_assert_eq!(finalized.chart_type, ChartType::Bar);
        prop_assert_eq!(finalized.x_axis.rotate, 0);
    }

    /// Property: one tag, more than three rows and numeric labels gives an XY line.
    #[test]
    fn prop_numeric_section_is_xy_line(count in 4usize..40, columns in 1usize..4) {
        let section = single_tag_section(&numeric_categories(count), columns);

        let finalized = section.finalize(&ComparisonConfig::default());
        prop_assert_eq!(finalized.chart_type, ChartType::XyLine);
        prop_assert_eq!(finalized.x_axis.kind, AxisKind::Value);
        prop_assert_eq!(finalized.x_axis.name.as_str(), "threads");
    }

    /// Property: non-numeric bar charts rotate labels only past ten rows.
    #[test]
    fn prop_rotation(count in 4usize..30) {
        let section = single_tag_section(&named_categories(count), 2);

        let finalized = section.finalize(&ComparisonConfig::default());
        prop_assert_eq!(finalized.chart_type, ChartType::Bar);
        let expected = if count > 10 { 45 } else { 0 };
        prop_assert_eq!(finalized.x_axis.rotate, expected);
    }

    /// Property: finalize is a pure function of the accumulated tests.
    #[test]
    fn prop_finalize_idempotent(count in 1usize..25, columns in 1usize..4) {
        let section = single_tag_section(&numeric_categories(count), columns);
        let config = ComparisonConfig::default();

        prop_assert_eq!(section.finalize(&config), section.finalize(&config));
    }

    /// Property: identical summaries never show a direction.
    #[test]
    fn prop_identical_summaries_not_significant(
        score in 0.001f64..1e6,
        dev in 0.0f64..1e3,
        samples in 0u64..50,
        less_better in any::<bool>(),
    ) {
        let row = row(score, score, dev, samples, less_better);
        let cell = row.compare(0, 1);
        prop_assert_eq!(cell, ComparisonCell::Delta { percent: 0, direction: Direction::Same });
    }

    /// Property: `less_better` flips the direction of the same change.
    #[test]
    fn prop_less_better_flips_direction(
        prev in 1.0f64..1e4,
        ratio in 1.05f64..5.0,
        spread in 0.0f64..0.01,
        samples in 2u64..30,
    ) {
        let next = prev * ratio;
        let dev = prev * spread;
        let higher = direction(row(prev, next, dev, samples, false).compare(0, 1));
        let lower = direction(row(prev, next, dev, samples, true).compare(0, 1));

        prop_assert_eq!(higher.code(), -lower.code());
        prop_assert_ne!(higher, Direction::Same);
    }
}
