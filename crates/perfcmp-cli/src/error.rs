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

//! Structured error types for the perfcmp CLI.
//!
//! All CLI operations return `Result<T, CliError>`; `main` prints the error
//! on a single line and exits non-zero.

use perfcmp_core::CmpError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while running a CLI command.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read or write).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Input file exceeds the maximum allowed size.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes")]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
    },

    /// The input document is not valid JSON or has the wrong shape.
    #[error("Invalid input document: {0}")]
    Input(String),

    /// The comparison is invalid or the report could not be built.
    #[error(transparent)]
    Comparison(#[from] CmpError),

    /// JSON serialization error.
    #[error("JSON format error: {0}")]
    Json(String),

    /// YAML serialization error.
    #[error("YAML format error: {0}")]
    Yaml(String),

    /// CSV serialization error.
    #[error("CSV format error: {0}")]
    Csv(String),

    /// The report was built but carries diagnostics and `--strict` was given.
    #[error("Report has {0} diagnostic(s)")]
    Diagnostics(usize),
}

impl CliError {
    /// Creates an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}
