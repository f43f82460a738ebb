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

//! Benchmark identity, percentile statistics, and the report map.

use std::collections::HashMap;
use std::fmt;

/// Identity of one benchmark configuration across runs.
///
/// Equality, hashing, and ordering are structural: two identities match only
/// when all three fields match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BenchmarkId {
    /// Benchmark group name.
    pub group: String,
    /// Benchmark name within the group.
    pub benchmark: String,
    /// Thread count as it appeared in the table; carried as text, not
    /// validated as a number.
    pub threads: String,
}

impl BenchmarkId {
    /// Create a new identity.
    pub fn new(
        group: impl Into<String>,
        benchmark: impl Into<String>,
        threads: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            benchmark: benchmark.into(),
            threads: threads.into(),
        }
    }
}

impl fmt::Display for BenchmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.group, self.benchmark, self.threads)
    }
}

/// Latency percentiles for one benchmark run, in microseconds per iteration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BenchmarkStat {
    /// 90th percentile.
    pub p90: f64,
    /// 95th percentile.
    pub p95: f64,
    /// 99th percentile.
    pub p99: f64,
}

impl BenchmarkStat {
    /// Create a new statistic record.
    pub fn new(p90: f64, p95: f64, p99: f64) -> Self {
        Self { p90, p95, p99 }
    }
}

/// An insertion-order-preserving map from benchmark identity to statistics.
///
/// Iteration yields entries in first-seen order. Inserting an identity that
/// is already present replaces its statistics without moving it
/// (last-write-wins). Built as a parallel key vector plus a hash lookup so
/// that output ordering never depends on hash-map iteration order.
///
/// # Examples
///
/// ```
/// use benchdiff_core::{BenchmarkId, BenchmarkStat, Report};
///
/// let mut report = Report::new();
/// report.insert(
///     BenchmarkId::new("sort", "random", "1"),
///     BenchmarkStat::new(10.0, 11.0, 12.0),
/// );
/// assert_eq!(report.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    order: Vec<BenchmarkId>,
    stats: HashMap<BenchmarkId, BenchmarkStat>,
}

impl Report {
    /// Create a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the statistics for an identity.
    ///
    /// A new identity is appended to the iteration order; an existing one
    /// keeps its position and takes the new statistics.
    pub fn insert(&mut self, id: BenchmarkId, stat: BenchmarkStat) {
        if self.stats.insert(id.clone(), stat).is_none() {
            self.order.push(id);
        }
    }

    /// Look up the statistics for an identity.
    pub fn get(&self, id: &BenchmarkId) -> Option<&BenchmarkStat> {
        self.stats.get(id)
    }

    /// Number of distinct identities in the report.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the report holds no entries.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate entries in first-seen insertion order.
    pub fn iter(&self) -> ReportIter<'_> {
        ReportIter {
            order: self.order.iter(),
            stats: &self.stats,
        }
    }
}

/// Insertion-order iterator over report entries.
pub struct ReportIter<'a> {
    order: std::slice::Iter<'a, BenchmarkId>,
    stats: &'a HashMap<BenchmarkId, BenchmarkStat>,
}

impl<'a> Iterator for ReportIter<'a> {
    type Item = (&'a BenchmarkId, &'a BenchmarkStat);

    fn next(&mut self) -> Option<Self::Item> {
        // Invariant: every key in `order` has a matching entry in `stats`.
        for id in self.order.by_ref() {
            if let Some(stat) = self.stats.get(id) {
                return Some((id, stat));
            }
        }
        None
    }
}
