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

//! Table rows: one test identity across every job column.

use crate::humanize::float2human;
use crate::model::Test;
use crate::stats::is_significant;
use serde::{Serialize, Serializer};

/// Rendered form of an absent score or deviation.
pub const ABSENT: &str = "-";

/// Significance-gated direction of a score change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Significantly worse.
    Worse,
    /// Not significant, or equal scores.
    Same,
    /// Significantly better.
    Better,
}

impl Direction {
    /// Direction of the change from `prev` to `next` for a significant result.
    ///
    /// Equal scores are never a change. `less_better` inverts the sign.
    pub fn between(prev: f64, next: f64, less_better: bool) -> Self {
        if prev < next {
            if less_better {
                Direction::Worse
            } else {
                Direction::Better
            }
        } else if prev > next {
            if less_better {
                Direction::Better
            } else {
                Direction::Worse
            }
        } else {
            Direction::Same
        }
    }

    /// Render code: -1, 0 or 1.
    pub fn code(self) -> i8 {
        match self {
            Direction::Worse => -1,
            Direction::Same => 0,
            Direction::Better => 1,
        }
    }
}

/// Comparison of one job column against an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonCell {
    /// One of the two columns has no test.
    Absent,
    /// Percent delta and direction.
    Delta {
        /// Rounded percent change.
        percent: i64,
        /// Direction, `Same` unless significant.
        direction: Direction,
    },
}

impl std::fmt::Display for ComparisonCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComparisonCell::Absent => write!(f, "{} 0", ABSENT),
            ComparisonCell::Delta { percent, direction } => {
                write!(f, "{} {}", percent, direction.code())
            }
        }
    }
}

/// One cell of a rendered row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowCell {
    /// Integer field (row id, sequence number, relative deviation).
    Int(i64),
    /// Text field (title).
    Text(String),
    /// Display-rounded score.
    Score(f64),
    /// Absent score or deviation.
    Absent,
    /// Comparison against an earlier column.
    Compare(ComparisonCell),
}

impl Serialize for RowCell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RowCell::Int(v) => serializer.serialize_i64(*v),
            RowCell::Text(s) => serializer.serialize_str(s),
            RowCell::Score(v) => serializer.serialize_f64(*v),
            RowCell::Absent => serializer.serialize_str(ABSENT),
            RowCell::Compare(cell) => serializer.collect_str(cell),
        }
    }
}

impl std::fmt::Display for RowCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowCell::Int(v) => write!(f, "{}", v),
            RowCell::Text(s) => f.write_str(s),
            RowCell::Score(v) => write!(f, "{}", v),
            RowCell::Absent => f.write_str(ABSENT),
            RowCell::Compare(cell) => write!(f, "{}", cell),
        }
    }
}

/// One test identity (tag + category) with a slot per job column.
#[derive(Debug, Clone)]
pub struct TestRow {
    id: u64,
    seq_num: u64,
    tag: String,
    category: String,
    title: String,
    slots: Vec<Option<Test>>,
}

impl TestRow {
    /// Creates an empty row for `columns` jobs.
    pub fn new(columns: usize) -> Self {
        Self {
            id: 0,
            seq_num: 0,
            tag: String::new(),
            category: String::new(),
            title: String::new(),
            slots: vec![None; columns],
        }
    }

    /// Fills the slot of `column`; the first test per column wins.
    ///
    /// Returns whether the test was stored.
    pub fn add_test(&mut self, column: usize, test: &Test) -> bool {
        let Some(slot) = self.slots.get_mut(column) else {
            return false;
        };
        if slot.is_some() {
            return false;
        }
        *slot = Some(test.clone());

        if self.title.is_empty() {
            self.id = test.id;
            self.seq_num = test.seq_num;
            self.tag = test.tag.clone();
            self.category = test.category.clone();
            self.title = test.title();
        }
        true
    }

    /// Id of the first test stored.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Sequence number of the first test stored.
    pub fn seq_num(&self) -> u64 {
        self.seq_num
    }

    /// Tag of the row.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Category of the row.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Row title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Test in `column`, if any.
    pub fn slot(&self, column: usize) -> Option<&Test> {
        self.slots.get(column).and_then(Option::as_ref)
    }

    /// Compares column `next` against the earlier column `prev`.
    pub fn compare(&self, prev: usize, next: usize) -> ComparisonCell {
        let (Some(p), Some(n)) = (self.slot(prev), self.slot(next)) else {
            return ComparisonCell::Absent;
        };
        let (ps, ns) = (p.score(), n.score());

        let delta = if ps == 0.0 || ns == 0.0 {
            0.0
        } else if ps < ns {
            100.0 * (ns / ps - 1.0)
        } else if ps > ns {
            -100.0 * (ps / ns - 1.0)
        } else {
            0.0
        };

        let direction = if is_significant(&p.summary(), &n.summary()) {
            Direction::between(ps, ns, p.less_better)
        } else {
            Direction::Same
        };

        ComparisonCell::Delta {
            percent: delta.round() as i64,
            direction,
        }
    }

    /// Renders the row: id, seq_num, title, then per column the score, the
    /// relative deviation and comparisons against every earlier column.
    pub fn render(&self) -> Vec<RowCell> {
        let columns = self.slots.len();
        let mut cells = Vec::with_capacity(3 + columns * (columns + 3) / 2);
        cells.push(RowCell::Int(self.id as i64));
        cells.push(RowCell::Int(self.seq_num as i64));
        cells.push(RowCell::Text(self.title.clone()));

        for n in 0..columns {
            match self.slot(n) {
                Some(test) => {
                    cells.push(RowCell::Score(float2human(test.score())));
                    cells.push(RowCell::Int(relative_deviation(test)));
                }
                None => {
                    cells.push(RowCell::Absent);
                    cells.push(RowCell::Absent);
                }
            }
            for prev in 0..n {
                cells.push(RowCell::Compare(self.compare(prev, n)));
            }
        }
        cells
    }
}

/// Deviation as a rounded percent of the score; zero without a score.
fn relative_deviation(test: &Test) -> i64 {
    let score = test.score();
    if score == 0.0 {
        return 0;
    }
    (100.0 * test.avg_dev / score).round() as i64
}
