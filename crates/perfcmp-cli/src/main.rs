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

//! perfcmp Command Line Interface

use clap::Parser;
use perfcmp_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// perfcmp - Benchmark comparison reports
///
/// # Examples
///
/// ```bash
/// # Build a report as pretty JSON
/// perfcmp report nightly.json --pretty
///
/// # Flatten the report tables to CSV
/// perfcmp report nightly.json --format csv --output nightly.csv
///
/// # Show the comparison summary as YAML
/// perfcmp summary nightly.json --format yaml
/// ```
#[derive(Parser)]
#[command(name = "perfcmp")]
#[command(author, version, about = "perfcmp - Benchmark comparison reports", long_about = None)]
struct Cli {
    /// Log engine decisions at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    let directive = if verbose { "perfcmp=debug" } else { "perfcmp=info" };
    let filter = match directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
