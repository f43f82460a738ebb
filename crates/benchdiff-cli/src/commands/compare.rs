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

//! Compare command - prints percentile deltas between two reports.

use super::read_file;
use crate::error::CliError;
use benchdiff_core::{parse, render, Report, TableOutcome};

/// Compare a candidate benchmark report against an etalon and print the
/// delta table to stdout.
///
/// Both files are read and parsed completely before any comparison starts;
/// the table is rendered in full before anything is written, so a failure
/// at any stage produces no partial output.
///
/// # Arguments
///
/// * `etalon_path` - Path to the reference report
/// * `input_path` - Path to the candidate report
///
/// # Errors
///
/// Returns `Err` if either file cannot be read, exceeds the size limit,
/// contains no table, fails to parse, or if a delta hits a zero candidate
/// denominator.
pub fn compare(etalon_path: &str, input_path: &str) -> Result<(), CliError> {
    let etalon = load_report(etalon_path)?;
    let candidate = load_report(input_path)?;

    let table = render(benchdiff_core::compare(&etalon, &candidate))?;
    print!("{}", table);
    Ok(())
}

/// Load and parse one report file.
fn load_report(path: &str) -> Result<Report, CliError> {
    let content = read_file(path)?;
    match parse(&content).map_err(|e| CliError::report(path, e))? {
        TableOutcome::Table(report) => Ok(report),
        TableOutcome::NoTable => Err(CliError::no_table(path)),
    }
}
