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

//! CLI command implementations.

mod report;
mod summary;
mod validate;

pub use report::{csv_header, report, report_to_csv};
pub use summary::summary;
pub use validate::validate;

use crate::error::CliError;
use clap::ValueEnum;
use perfcmp_core::{Comparison, ComparisonRequest, InMemoryStore, StoredJob};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read, Write};
use tracing::debug;

/// Default maximum input size (256 MB).
/// Can be overridden via the `PERFCMP_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 256 * 1024 * 1024;

/// Path that selects stdin (input) or stdout (output).
pub const STDIO_PATH: &str = "-";

/// Output format of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// JSON document.
    #[default]
    Json,
    /// YAML document.
    Yaml,
    /// One CSV record per table row.
    Csv,
}

/// Input document: a comparison request and the jobs it refers to.
///
/// ```json
/// {
///   "id": 1,
///   "comparison": {"title": "nightly", "jobs": [2, 1], "charts_type": "Auto"},
///   "jobs": [{"id": 1, "title": "a", "tests": [{"tag": "boot", "avg_score": 3.2}]}]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputDocument {
    /// Comparison identifier.
    #[serde(default = "default_comparison_id")]
    pub id: u64,
    /// Comparison create/update payload.
    pub comparison: ComparisonRequest,
    /// Known jobs with their tests.
    #[serde(default)]
    pub jobs: Vec<StoredJob>,
}

fn default_comparison_id() -> u64 {
    1
}

impl InputDocument {
    /// Parses a document from JSON text.
    pub fn from_json(content: &str) -> Result<Self, CliError> {
        serde_json::from_str(content).map_err(|e| CliError::Input(e.to_string()))
    }

    /// Validates the comparison and loads the jobs into a store.
    pub fn into_parts(self) -> Result<(Comparison, InMemoryStore), CliError> {
        let store: InMemoryStore = self.jobs.into_iter().collect();
        let comparison = Comparison::from_request(self.id, &self.comparison, &store)?;
        debug!(
            comparison = comparison.id,
            jobs = comparison.members().len(),
            stored = store.len(),
            "comparison validated"
        );
        Ok((comparison, store))
    }
}

fn max_file_size() -> u64 {
    std::env::var("PERFCMP_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Reads an input file, or stdin for `-`, with size validation.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or is larger than the
/// configured maximum (`PERFCMP_MAX_FILE_SIZE`).
pub fn read_input(path: &str) -> Result<String, CliError> {
    if path == STDIO_PATH {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::io_error(path, e))?;
        return Ok(content);
    }

    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;
    let max = max_file_size();
    if metadata.len() > max {
        return Err(CliError::FileTooLarge {
            path: path.into(),
            actual: metadata.len(),
            max,
        });
    }
    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Reads and parses an input document.
pub fn load_document(path: &str) -> Result<InputDocument, CliError> {
    InputDocument::from_json(&read_input(path)?)
}

/// Writes content to a file or stdout.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) if p != STDIO_PATH => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        _ => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error(STDIO_PATH, e)),
    }
}

/// Serializes `value` as JSON or YAML.
pub fn render<T: Serialize>(
    value: &T,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, CliError> {
    let mut out = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Yaml => return Ok(serde_yaml::to_string(value)?),
        OutputFormat::Csv => {
            return Err(CliError::Input(
                "CSV output is only available for reports".to_string(),
            ))
        }
    };
    out.push('\n');
    Ok(out)
}
