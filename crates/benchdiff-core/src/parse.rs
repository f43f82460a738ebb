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

//! Parser for pipe-delimited benchmark report tables.
//!
//! The report format is what the benchmark harness writes to stdout: a
//! table framed by dash-run separator lines, a header row naming the
//! columns, then one pipe-delimited data row per benchmark configuration.
//! Columns beyond the three identity columns are located by name, so the
//! harness may add, drop, or reorder its extra columns (`Samples`,
//! `Iterations`, diagnostic ratios) without breaking the parser.

use crate::error::{ReportError, ReportResult};
use crate::report::{BenchmarkId, BenchmarkStat, Report};

/// Prefix that marks a separator line between table sections.
const SEPARATOR_PREFIX: &str = "----";

/// Identity columns, in the exact order the header must name them.
const IDENTITY_COLUMNS: [&str; 3] = ["Group", "Benchmark", "Threads"];

/// Header name of the 90th percentile column.
const COLUMN_P90: &str = "us/Iter P90";
/// Header name of the 95th percentile column.
const COLUMN_P95: &str = "P95";
/// Header name of the 99th percentile column.
const COLUMN_P99: &str = "P99";

/// Outcome of parsing one report file.
///
/// A file whose first line is not a separator carries no table at all; that
/// case is reported as [`TableOutcome::NoTable`] so callers can distinguish
/// it from both a successfully parsed (possibly empty) table and a fatal
/// format error.
#[derive(Debug, Clone, PartialEq)]
pub enum TableOutcome {
    /// The input contained a table.
    Table(Report),
    /// The input does not begin with a separator line; no table present.
    NoTable,
}

/// Column positions resolved by name from the header.
///
/// Resolution happens once, before any data row is parsed; a required
/// column missing from the header fails here rather than on first use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnLayout {
    group: usize,
    benchmark: usize,
    threads: usize,
    p90: usize,
    p95: usize,
    p99: usize,
}

impl ColumnLayout {
    fn resolve(fields: &[&str], line: usize) -> ReportResult<Self> {
        if fields.len() < IDENTITY_COLUMNS.len()
            || fields[..IDENTITY_COLUMNS.len()] != IDENTITY_COLUMNS
        {
            return Err(ReportError::format(
                format!(
                    "header must start with '{}', '{}', '{}'",
                    IDENTITY_COLUMNS[0], IDENTITY_COLUMNS[1], IDENTITY_COLUMNS[2]
                ),
                line,
            ));
        }

        let require = |name: &str| {
            fields.iter().position(|field| *field == name).ok_or_else(|| {
                ReportError::column(format!("column '{}' not found in header", name), line)
            })
        };

        Ok(Self {
            group: require(IDENTITY_COLUMNS[0])?,
            benchmark: require(IDENTITY_COLUMNS[1])?,
            threads: require(IDENTITY_COLUMNS[2])?,
            p90: require(COLUMN_P90)?,
            p95: require(COLUMN_P95)?,
            p99: require(COLUMN_P99)?,
        })
    }
}

/// Returns true for the dash-run lines that frame and section the table.
fn is_separator(line: &str) -> bool {
    line.starts_with(SEPARATOR_PREFIX)
}

/// Split a table line into trimmed cells.
fn split_row(line: &str) -> Vec<&str> {
    line.split('|').map(str::trim).collect()
}

/// Parse one benchmark report.
///
/// The input must begin with a separator line (a run of dashes); otherwise
/// [`TableOutcome::NoTable`] is returned. Separator lines anywhere else are
/// skipped. The first remaining line is the header: its first three columns
/// must be exactly `Group`, `Benchmark`, `Threads`, and it must name the
/// statistic columns `us/Iter P90`, `P95`, `P99` somewhere; unrecognized
/// column names are ignored. Every following line is a data row. Rows
/// sharing an identity keep the first row's position and the last row's
/// statistics.
///
/// # Errors
///
/// - [`Format`](crate::ReportErrorKind::Format): identity columns missing
///   or out of order.
/// - [`Column`](crate::ReportErrorKind::Column): a statistic column absent
///   from the header.
/// - [`Parse`](crate::ReportErrorKind::Parse): a statistic cell is not a
///   valid floating-point number.
/// - [`Shape`](crate::ReportErrorKind::Shape): a data row has fewer cells
///   than the resolved columns require.
///
/// All errors are fatal; no partial report is returned.
///
/// # Examples
///
/// ```
/// use benchdiff_core::{parse, TableOutcome};
///
/// let input = "\
/// ------------------------------------------------------------
///  Group | Benchmark | Threads | us/Iter P90 | P95 | P99 |
/// ------------------------------------------------------------
///  sort  | random    | 4       | 10.5        | 11.0 | 12.5 |
/// ";
/// match parse(input).unwrap() {
///     TableOutcome::Table(report) => assert_eq!(report.len(), 1),
///     TableOutcome::NoTable => unreachable!(),
/// }
/// ```
pub fn parse(input: &str) -> ReportResult<TableOutcome> {
    let mut lines = input.lines().enumerate();

    match lines.next() {
        Some((_, first)) if is_separator(first) => {}
        _ => return Ok(TableOutcome::NoTable),
    }

    let mut layout: Option<ColumnLayout> = None;
    let mut report = Report::new();

    for (index, line) in lines {
        if is_separator(line) {
            continue;
        }
        let lineno = index + 1;
        let fields = split_row(line);
        match layout {
            None => layout = Some(ColumnLayout::resolve(&fields, lineno)?),
            Some(columns) => {
                let (id, stat) = parse_row(&fields, columns, lineno)?;
                report.insert(id, stat);
            }
        }
    }

    Ok(TableOutcome::Table(report))
}

/// Parse one data row into an identity and its statistics.
fn parse_row(
    fields: &[&str],
    columns: ColumnLayout,
    line: usize,
) -> ReportResult<(BenchmarkId, BenchmarkStat)> {
    let cell = |index: usize| {
        fields.get(index).copied().ok_or_else(|| {
            ReportError::shape(
                format!(
                    "row has {} cells but column {} is required",
                    fields.len(),
                    index + 1
                ),
                line,
            )
        })
    };
    let number = |index: usize| -> ReportResult<f64> {
        let text = cell(index)?;
        text.parse().map_err(|_| {
            ReportError::parse(format!("'{}' is not a valid number", text), line)
        })
    };

    let id = BenchmarkId::new(
        cell(columns.group)?,
        cell(columns.benchmark)?,
        cell(columns.threads)?,
    );
    let stat = BenchmarkStat::new(
        number(columns.p90)?,
        number(columns.p95)?,
        number(columns.p99)?,
    );
    Ok((id, stat))
}
