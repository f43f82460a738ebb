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

//! BenchDiff CLI library for command-line parsing and execution.
//!
//! The binary compares two benchmark reports: an etalon (reference) run and
//! a candidate run. The pipeline is read → parse → diff → render, executed
//! strictly in that order with fail-fast error handling: any I/O, format,
//! or numeric failure aborts the run before the table is printed.
//!
//! # Examples
//!
//! ```no_run
//! use benchdiff_cli::commands::compare;
//!
//! # fn main() -> Result<(), benchdiff_cli::error::CliError> {
//! compare("baseline.txt", "current.txt")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Security
//!
//! Input files are size-checked before reading (default limit 1 GB,
//! configurable via the `BENCHDIFF_MAX_FILE_SIZE` environment variable) so
//! a stray path cannot exhaust memory.

pub mod commands;
pub mod error;
