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

//! Diff engine comparing a candidate report against an etalon.

use crate::error::{ReportError, ReportResult};
use crate::report::{BenchmarkId, BenchmarkStat, Report, ReportIter};

/// One statistic cell of a comparison row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatCell {
    /// The candidate value, microseconds per iteration.
    pub value: f64,
    /// Percentage change from the etalon, normalized by the candidate value.
    pub delta_pct: f64,
}

/// Percentile deltas for a benchmark present in both reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatDiff {
    /// 90th percentile cell.
    pub p90: StatCell,
    /// 95th percentile cell.
    pub p95: StatCell,
    /// 99th percentile cell.
    pub p99: StatCell,
}

/// Per-row outcome of a comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowOutcome {
    /// The identity has no counterpart in the etalon. Not an error; the
    /// row is still reported.
    NotFound,
    /// Candidate values with their percentage deltas.
    Diff(StatDiff),
}

/// One row of the comparison table.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    /// The benchmark configuration this row describes.
    pub id: BenchmarkId,
    /// What the comparison found for it.
    pub outcome: RowOutcome,
}

/// Compare a candidate report against an etalon.
///
/// The candidate drives both the row set and the order: rows come out in
/// the candidate's insertion order, and identities present only in the
/// etalon are omitted. For each percentile the delta is
/// `100 * (candidate - etalon) / candidate`, normalized by the candidate
/// value to match the upstream comparison tooling.
///
/// The returned iterator is lazy and one-shot; it borrows both reports and
/// is bounded by the size of the candidate.
///
/// # Errors
///
/// A candidate percentile of zero yields a
/// [`Numeric`](crate::ReportErrorKind::Numeric) error item naming the
/// benchmark, since the delta denominator would be zero.
///
/// # Examples
///
/// ```
/// use benchdiff_core::{compare, BenchmarkId, BenchmarkStat, Report, RowOutcome};
///
/// let mut etalon = Report::new();
/// etalon.insert(
///     BenchmarkId::new("sort", "random", "1"),
///     BenchmarkStat::new(10.0, 10.0, 10.0),
/// );
/// let mut candidate = Report::new();
/// candidate.insert(
///     BenchmarkId::new("sort", "random", "1"),
///     BenchmarkStat::new(12.5, 12.5, 12.5),
/// );
///
/// let rows: Vec<_> = compare(&etalon, &candidate)
///     .collect::<Result<_, _>>()
///     .unwrap();
/// match rows[0].outcome {
///     RowOutcome::Diff(diff) => assert_eq!(diff.p90.delta_pct, 20.0),
///     RowOutcome::NotFound => unreachable!(),
/// }
/// ```
pub fn compare<'a>(etalon: &'a Report, candidate: &'a Report) -> Comparisons<'a> {
    Comparisons {
        etalon,
        entries: candidate.iter(),
    }
}

/// Lazy, one-shot iterator over comparison rows.
///
/// Created by [`compare`]; yields rows in candidate insertion order.
pub struct Comparisons<'a> {
    etalon: &'a Report,
    entries: ReportIter<'a>,
}

impl Iterator for Comparisons<'_> {
    type Item = ReportResult<ComparisonRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let (id, candidate) = self.entries.next()?;
        let outcome = match self.etalon.get(id) {
            None => Ok(RowOutcome::NotFound),
            Some(etalon) => stat_diff(etalon, candidate, id).map(RowOutcome::Diff),
        };
        Some(outcome.map(|outcome| ComparisonRow {
            id: id.clone(),
            outcome,
        }))
    }
}

fn stat_diff(
    etalon: &BenchmarkStat,
    candidate: &BenchmarkStat,
    id: &BenchmarkId,
) -> ReportResult<StatDiff> {
    Ok(StatDiff {
        p90: delta_cell(etalon.p90, candidate.p90, id)?,
        p95: delta_cell(etalon.p95, candidate.p95, id)?,
        p99: delta_cell(etalon.p99, candidate.p99, id)?,
    })
}

fn delta_cell(etalon: f64, candidate: f64, id: &BenchmarkId) -> ReportResult<StatCell> {
    if candidate == 0.0 {
        return Err(ReportError::numeric(format!(
            "zero candidate value for '{}'",
            id
        )));
    }
    Ok(StatCell {
        value: candidate,
        delta_pct: 100.0 * (candidate - etalon) / candidate,
    })
}
