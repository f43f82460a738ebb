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

//! End-to-end tests over the parse/compare/render pipeline.

use benchdiff_core::{compare, parse, render, Report, ReportErrorKind, TableOutcome};

/// Parse input that is known to contain a table.
fn load(input: &str) -> Report {
    match parse(input).expect("parse failed") {
        TableOutcome::Table(report) => report,
        TableOutcome::NoTable => panic!("expected a table"),
    }
}

fn run_pipeline(etalon: &str, candidate: &str) -> String {
    let etalon = load(etalon);
    let candidate = load(candidate);
    render(compare(&etalon, &candidate)).expect("render failed")
}

// ===== Full pipeline =====

#[test]
fn test_pipeline_with_harness_style_reports() {
    // Reports in the exact shape the benchmark harness writes, including
    // the columns the comparison does not use.
    let etalon = "\
------------------------------------------------------------------------------------------------------------------------------------
     Group |  Benchmark |  Threads |    Samples | Iterations |    us/Iter P90 |            P95 |            P99 |
------------------------------------------------------------------------------------------------------------------------------------
      sort |     random |        1 |        100 |       1000 |          10.00 |          11.00 |          14.00 |
      sort |     random |        4 |        100 |       1000 |           4.00 |           4.50 |           6.00 |
";
    let candidate = "\
------------------------------------------------------------------------------------------------------------------------------------
     Group |  Benchmark |  Threads |    Samples | Iterations |    us/Iter P90 |            P95 |            P99 |
------------------------------------------------------------------------------------------------------------------------------------
      sort |     random |        1 |        100 |       1000 |          12.50 |          11.00 |          12.00 |
      sort |     random |        4 |        100 |       1000 |           5.00 |           4.00 |           6.00 |
      sort |     merged |        4 |        100 |       1000 |           3.00 |           3.50 |           4.00 |
";

    let out = run_pipeline(etalon, candidate);
    let lines: Vec<&str> = out.lines().collect();

    // Two separators, a header, and one line per candidate row.
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "-".repeat(144));
    assert_eq!(lines[2], "-".repeat(144));
    assert!(lines[1].contains("us/Iter P90"));

    // (12.50 - 10.00) / 12.50 * 100 = 20.00
    assert!(lines[3].contains("12.50 (20.00%)"));
    // (11.00 - 11.00) / 11.00 * 100 = 0.00
    assert!(lines[3].contains("11.00 (0.00%)"));
    // (12.00 - 14.00) / 12.00 * 100 = -16.67
    assert!(lines[3].contains("12.00 (-16.67%)"));

    // (5.00 - 4.00) / 5.00 * 100 = 20.00
    assert!(lines[4].contains("5.00 (20.00%)"));

    // New benchmark has no etalon counterpart.
    assert!(lines[5].contains("merged"));
    assert!(lines[5].ends_with("not found"));
}

#[test]
fn test_output_order_follows_candidate_not_etalon() {
    let etalon = "\
----
 Group | Benchmark | Threads | us/Iter P90 | P95 | P99 |
 g | first | 1 | 1.0 | 1.0 | 1.0 |
 g | second | 1 | 1.0 | 1.0 | 1.0 |
";
    let candidate = "\
----
 Group | Benchmark | Threads | us/Iter P90 | P95 | P99 |
 g | second | 1 | 1.0 | 1.0 | 1.0 |
 g | first | 1 | 1.0 | 1.0 | 1.0 |
";

    let out = run_pipeline(etalon, candidate);
    let rows: Vec<&str> = out.lines().skip(3).collect();
    assert!(rows[0].contains("second"));
    assert!(rows[1].contains("first"));
}

#[test]
fn test_etalon_only_benchmarks_are_omitted() {
    let etalon = "\
----
 Group | Benchmark | Threads | us/Iter P90 | P95 | P99 |
 g | kept | 1 | 1.0 | 1.0 | 1.0 |
 g | dropped | 1 | 1.0 | 1.0 | 1.0 |
";
    let candidate = "\
----
 Group | Benchmark | Threads | us/Iter P90 | P95 | P99 |
 g | kept | 1 | 2.0 | 2.0 | 2.0 |
";

    let out = run_pipeline(etalon, candidate);
    assert!(out.contains("kept"));
    assert!(!out.contains("dropped"));
}

#[test]
fn test_duplicate_candidate_rows_render_once_with_last_values() {
    let etalon = "\
----
 Group | Benchmark | Threads | us/Iter P90 | P95 | P99 |
 g | b | 1 | 10.0 | 10.0 | 10.0 |
";
    let candidate = "\
----
 Group | Benchmark | Threads | us/Iter P90 | P95 | P99 |
 g | b | 1 | 11.0 | 11.0 | 11.0 |
 g | b | 1 | 12.5 | 12.5 | 12.5 |
";

    let out = run_pipeline(etalon, candidate);
    let rows: Vec<&str> = out.lines().skip(3).collect();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].contains("12.50 (20.00%)"));
    assert!(!rows[0].contains("11.00"));
}

// ===== Fatal pipeline failures =====

#[test]
fn test_zero_candidate_value_aborts_render() {
    let etalon = load(
        "----\n Group | Benchmark | Threads | us/Iter P90 | P95 | P99 |\n g | b | 1 | 1.0 | 1.0 | 1.0 |\n",
    );
    let candidate = load(
        "----\n Group | Benchmark | Threads | us/Iter P90 | P95 | P99 |\n g | b | 1 | 0.0 | 1.0 | 1.0 |\n",
    );

    let err = render(compare(&etalon, &candidate)).expect_err("expected numeric failure");
    assert_eq!(err.kind, ReportErrorKind::Numeric);
}

#[test]
fn test_no_table_input_is_distinct_from_errors() {
    assert_eq!(parse("benchmark results\n").unwrap(), TableOutcome::NoTable);
    assert!(parse("----\n bad | header | row |\n").is_err());
}
