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

//! Category axis normalization.
//!
//! Category labels of a section usually share a unit suffix (`"1 threads"`,
//! `"8 threads"`). The suffix becomes the axis name and the remaining
//! prefixes become the axis labels.

use std::collections::HashMap;

/// Normalized category axis of one section.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisCategories {
    name: String,
    labels: Vec<String>,
    index: HashMap<String, usize>,
}

impl AxisCategories {
    /// Builds the axis from category labels in first-seen order.
    ///
    /// Duplicate labels share one axis slot. The common suffix is only cut
    /// at a whitespace boundary and never when it would empty a label.
    ///
    /// ```
    /// use perfcmp_core::axis::AxisCategories;
    ///
    /// let axis = AxisCategories::normalize(&["1 threads", "16 threads", "1 threads"]);
    /// assert_eq!(axis.name(), "threads");
    /// assert_eq!(axis.labels(), ["1", "16"]);
    /// assert_eq!(axis.index_of("16 threads"), Some(1));
    /// ```
    pub fn normalize<S: AsRef<str>>(categories: &[S]) -> Self {
        let mut distinct: Vec<&str> = Vec::new();
        let mut index = HashMap::new();
        for category in categories {
            let category = category.as_ref();
            if !index.contains_key(category) {
                index.insert(category.to_string(), distinct.len());
                distinct.push(category);
            }
        }

        let suffix = trimmable_suffix(&distinct);
        let labels = distinct
            .iter()
            .map(|label| label[..label.len() - suffix.len()].trim_end().to_string())
            .collect();

        Self {
            name: suffix.trim().to_string(),
            labels,
            index,
        }
    }

    /// Axis name, the trimmed common suffix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Axis labels in slot order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Axis slot of an original (untrimmed) category label.
    pub fn index_of(&self, category: &str) -> Option<usize> {
        self.index.get(category).copied()
    }

    /// Number of axis slots.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the axis has no slots.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Whether every axis label parses as a number.
    pub fn all_numeric(&self) -> bool {
        self.labels.iter().all(|l| l.trim().parse::<f64>().is_ok())
    }
}

fn common_suffix_len(a: &str, b: &str) -> usize {
    a.chars()
        .rev()
        .zip(b.chars().rev())
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x.len_utf8())
        .sum()
}

fn trimmable_suffix<'a>(labels: &[&'a str]) -> &'a str {
    let Some(first) = labels.first() else {
        return "";
    };
    let mut len = first.len();
    for label in &labels[1..] {
        len = len.min(common_suffix_len(first, label));
    }
    let suffix = &first[first.len() - len..];

    let Some(start) = suffix.find(char::is_whitespace) else {
        return "";
    };
    let suffix = &suffix[start..];
    if labels.iter().any(|l| l[..l.len() - suffix.len()].trim().is_empty()) {
        return "";
    }
    suffix
}
