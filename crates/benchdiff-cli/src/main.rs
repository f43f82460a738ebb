// Dweve BenchDiff - Benchmark Report Comparison
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

//! BenchDiff Command Line Interface

use clap::Parser;
use std::process::ExitCode;

/// BenchDiff - benchmark report comparison
///
/// Parses an etalon (reference) benchmark report and a candidate report,
/// matches benchmark configurations across the two, and prints the
/// percentage change of every latency percentile.
///
/// # Examples
///
/// ```bash
/// # Compare a candidate run against a reference run
/// benchdiff --etalon baseline.txt --input current.txt
///
/// # Short flags
/// benchdiff -e baseline.txt -i current.txt
/// ```
#[derive(Parser)]
#[command(name = "benchdiff")]
#[command(author, version, about = "Compare latency percentiles between two benchmark reports", long_about = None)]
struct Cli {
    /// Etalon (reference) report file
    #[arg(short, long, value_name = "FILE")]
    etalon: String,

    /// Candidate report file to compare against the etalon
    #[arg(short, long, value_name = "FILE")]
    input: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match benchdiff_cli::commands::compare(&cli.etalon, &cli.input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
