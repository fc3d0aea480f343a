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

//! Summary command: totals and environment of a comparison.

use super::{load_document, render, write_output, OutputFormat};
use crate::error::CliError;
use perfcmp_core::ComparisonEngine;

/// Summarizes the comparison in `file`.
///
/// # Errors
///
/// Returns `Err` if the input cannot be read, the comparison is invalid, or
/// `format` is CSV.
pub fn summary(
    file: &str,
    output: Option<&str>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    let (comparison, store) = load_document(file)?.into_parts()?;
    let summary = ComparisonEngine::new(&store).summarize(&comparison)?;
    write_output(&render(&summary, format, pretty)?, output)
}
