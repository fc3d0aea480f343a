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

//! Validate command: check a comparison request without building a report.

use super::load_document;
use crate::error::CliError;
use colored::Colorize;
use perfcmp_core::CatalogType;

/// Validates the comparison request in `file` and prints its settings.
///
/// # Errors
///
/// Returns `Err` with the first validation failure: missing title or jobs,
/// unknown type label, malformed or unknown job id.
pub fn validate(file: &str) -> Result<(), CliError> {
    let (comparison, _) = load_document(file)?.into_parts()?;
    let config = comparison.config;

    println!("{} {}", "✓".green().bold(), file);
    println!("  Title:  {}", comparison.title);
    println!("  Jobs:   {}", comparison.job_ids());
    println!("  Charts: {}", config.charts_type.label());
    println!("  Tables: {}", config.tables_type.label());
    println!("  Tests:  {}", config.tests_type.label());
    println!("  Values: {}", config.values_type.label());
    Ok(())
}
