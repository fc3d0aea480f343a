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

//! Command-line definitions.

use crate::commands::{self, OutputFormat};
use crate::error::CliError;
use clap::Subcommand;

/// perfcmp commands.
///
/// Every command reads an input document holding a comparison request and
/// the jobs it refers to; see [`InputDocument`](crate::commands::InputDocument).
#[derive(Subcommand)]
pub enum Commands {
    /// Build the comparison report
    ///
    /// Validates the comparison, arranges job columns in the requested order
    /// and prints the group/section view model.
    Report {
        /// Input document path (`-` for stdin)
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Fail when the report carries diagnostics
        #[arg(short, long)]
        strict: bool,
    },

    /// Print the comparison summary
    ///
    /// Job ids in column order, suite names and versions, summed test
    /// counters and top-level environment nodes.
    Summary {
        /// Input document path (`-` for stdin)
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format (json, yaml)
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Validate a comparison request
    Validate {
        /// Input document path (`-` for stdin)
        #[arg(value_name = "FILE")]
        file: String,
    },
}

impl Commands {
    /// Executes the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Report {
                file,
                output,
                format,
                pretty,
                strict,
            } => commands::report(&file, output.as_deref(), format, pretty, strict),
            Commands::Summary {
                file,
                output,
                format,
                pretty,
            } => commands::summary(&file, output.as_deref(), format, pretty),
            Commands::Validate { file } => commands::validate(&file),
        }
    }
}
