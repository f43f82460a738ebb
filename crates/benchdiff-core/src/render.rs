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

//! Fixed-width rendering of comparison rows.
//!
//! The column widths are the ones the benchmark harness itself uses, so a
//! comparison table lines up with the reports it was computed from.

use crate::diff::{ComparisonRow, RowOutcome, StatCell};
use crate::error::ReportResult;

/// Width of the separator lines framing the table.
const SEPARATOR_WIDTH: usize = 144;

/// Marker printed in place of the statistic cells when the etalon has no
/// matching benchmark.
const NOT_FOUND: &str = "not found";

/// Render comparison rows as a fixed-width text table.
///
/// Output is a separator line, the six-column header, another separator,
/// then one line per row: a right-aligned identity prefix followed by
/// either the literal `not found` or three right-aligned `value (delta%)`
/// cells with two decimal places each. No trailing summary.
///
/// # Errors
///
/// Propagates the first error produced by the row iterator; nothing is
/// returned in that case, so a failed comparison never yields a partial
/// table.
pub fn render<I>(rows: I) -> ReportResult<String>
where
    I: IntoIterator<Item = ReportResult<ComparisonRow>>,
{
    let separator = "-".repeat(SEPARATOR_WIDTH);
    let mut out = String::new();

    out.push_str(&separator);
    out.push('\n');
    out.push_str(&format!(
        "{:>26} | {:>20} | {:>8} | {:>25} | {:>24} | {:>24} |\n",
        "Group", "Benchmark", "Threads", "us/Iter P90", "P95", "P99"
    ));
    out.push_str(&separator);
    out.push('\n');

    for row in rows {
        let row = row?;
        out.push_str(&format!(
            "{:>26} | {:>20} | {:>8} | ",
            row.id.group, row.id.benchmark, row.id.threads
        ));
        match row.outcome {
            RowOutcome::NotFound => {
                out.push_str(NOT_FOUND);
                out.push('\n');
            }
            RowOutcome::Diff(diff) => {
                out.push_str(&format!(
                    " {:>24} | {:>24} | {:>24} |\n",
                    stat_cell(diff.p90),
                    stat_cell(diff.p95),
                    stat_cell(diff.p99)
                ));
            }
        }
    }

    Ok(out)
}

fn stat_cell(cell: StatCell) -> String {
    format!("{:.2} ({:.2}%)", cell.value, cell.delta_pct)
}
