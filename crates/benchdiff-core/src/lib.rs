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

//! Core parser, diff engine, and renderer for benchmark reports.
//!
//! This crate implements the pipeline behind the `benchdiff` tool:
//!
//! 1. [`parse`] reads the pipe-delimited table a benchmark run prints and
//!    builds a [`Report`], an insertion-ordered map from [`BenchmarkId`]
//!    (group, benchmark, thread count) to [`BenchmarkStat`] (the P90/P95/P99
//!    latency percentiles).
//! 2. [`compare`] walks a candidate report against an etalon (reference)
//!    report and lazily yields one [`ComparisonRow`] per candidate
//!    benchmark: either the percentage change of each percentile, or a
//!    not-found marker when the etalon has no counterpart.
//! 3. [`render`] formats the rows as the fixed-width text table the
//!    benchmark harness family uses.
//!
//! All failures are fatal and surface as [`ReportError`]; the only
//! row-scoped outcome is the not-found marker, which is part of the report
//! rather than an error.

mod diff;
mod error;
mod parse;
mod render;
mod report;

pub use diff::{compare, ComparisonRow, Comparisons, RowOutcome, StatCell, StatDiff};
pub use error::{ReportError, ReportErrorKind, ReportResult};
pub use parse::{parse, TableOutcome};
pub use render::render;
pub use report::{BenchmarkId, BenchmarkStat, Report, ReportIter};
