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

//! Report command: build the view model of a comparison.

use super::{load_document, render, write_output, OutputFormat};
use crate::error::CliError;
use perfcmp_core::{ComparisonEngine, JobColumn, Report};
use tracing::warn;

/// Builds the report of the comparison in `file` and writes it.
///
/// # Arguments
///
/// * `file` - Input document path, `-` for stdin
/// * `output` - Output path, stdout when `None`
/// * `format` - JSON, YAML or CSV rows
/// * `pretty` - Pretty-print JSON
/// * `strict` - Fail when the report carries diagnostics
///
/// # Errors
///
/// Returns `Err` if the input cannot be read or parsed, the comparison is
/// invalid, or the output cannot be written. With `strict`, a report with
/// diagnostics is written and then reported as an error.
pub fn report(
    file: &str,
    output: Option<&str>,
    format: OutputFormat,
    pretty: bool,
    strict: bool,
) -> Result<(), CliError> {
    let (comparison, store) = load_document(file)?.into_parts()?;
    let report = ComparisonEngine::new(&store).build(&comparison)?;

    for diagnostic in &report.diagnostics {
        warn!(%diagnostic, "report diagnostic");
    }

    let content = match format {
        OutputFormat::Csv => report_to_csv(&report)?,
        _ => render(&report, format, pretty)?,
    };
    write_output(&content, output)?;

    if strict && !report.diagnostics.is_empty() {
        return Err(CliError::Diagnostics(report.diagnostics.len()));
    }
    Ok(())
}

/// CSV header matching the rendered rows of a report over `jobs`.
///
/// ```
/// use perfcmp_cli::commands::csv_header;
/// use perfcmp_core::JobColumn;
///
/// let jobs = [
///     JobColumn { id: 1, title: "a".into(), legend: "a".into() },
///     JobColumn { id: 2, title: "b".into(), legend: "b".into() },
/// ];
/// assert_eq!(
///     csv_header(&jobs),
///     ["group", "section", "id", "seq_num", "title",
///      "a score", "a dev%", "b score", "b dev%", "b vs a"]
/// );
/// ```
pub fn csv_header(jobs: &[JobColumn]) -> Vec<String> {
    let mut header: Vec<String> = ["group", "section", "id", "seq_num", "title"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    for (n, job) in jobs.iter().enumerate() {
        header.push(format!("{} score", job.legend));
        header.push(format!("{} dev%", job.legend));
        for prev in &jobs[..n] {
            header.push(format!("{} vs {}", job.legend, prev.legend));
        }
    }
    header
}

/// Flattens every table row of `report` into CSV records.
pub fn report_to_csv(report: &Report) -> Result<String, CliError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(csv_header(&report.jobs))?;

    for group in &report.groups {
        for section in &group.sections {
            for row in &section.rows {
                let mut record = vec![group.title.clone(), section.title.clone()];
                record.extend(row.iter().map(ToString::to_string));
                writer.write_record(&record)?;
            }
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CliError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CliError::Csv(e.to_string()))
}
