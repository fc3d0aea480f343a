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

//! Groups: top-level test classification buckets.

use super::section::{Section, SectionView};
use crate::config::{ComparisonConfig, DEFAULT_SECTION_TITLE};
use crate::model::Test;
use crate::ordered::OrderedMap;
use serde::Serialize;

/// Finalized, render-ready group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    /// Position within the report.
    pub id: usize,
    /// Group key.
    pub title: String,
    /// Sections in first-seen order.
    pub sections: Vec<Section>,
}

/// Accumulating state of one group.
#[derive(Debug, Clone)]
pub struct GroupView {
    id: usize,
    key: String,
    legends: Vec<String>,
    sections: OrderedMap<String, SectionView>,
}

impl GroupView {
    /// Creates an empty group.
    pub fn new(id: usize, key: impl Into<String>, legends: &[String]) -> Self {
        Self {
            id,
            key: key.into(),
            legends: legends.to_vec(),
            sections: OrderedMap::new(),
        }
    }

    /// Routes a test into the section of its tag, or into the shared
    /// ungrouped section when it has no category.
    pub fn add_test(&mut self, column: usize, test: &Test) {
        let key = if test.category.is_empty() {
            String::new()
        } else {
            test.tag.clone()
        };
        let group = &self.key;
        let legends = &self.legends;
        self.sections
            .get_or_insert_with(key.clone(), |id| {
                SectionView::new(id, group.clone(), key, legends)
            })
            .add_test(column, test);
    }

    /// Position within the report.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Group key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Sections in first-seen order.
    pub fn sections(&self) -> impl Iterator<Item = &SectionView> {
        self.sections.values()
    }

    /// Finalizes every section; blank titles are only kept by a sole section.
    pub fn finalize(&self, config: &ComparisonConfig) -> Group {
        let mut sections: Vec<Section> = self
            .sections
            .values()
            .map(|s| s.finalize(config))
            .collect();
        if sections.len() > 1 {
            for section in sections.iter_mut().filter(|s| s.title.is_empty()) {
                section.title = DEFAULT_SECTION_TITLE.to_string();
            }
        }
        Group {
            id: self.id,
            title: self.key.clone(),
            sections,
        }
    }
}
