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

//! Structured error types for the BenchDiff CLI.
//!
//! All CLI operations return `Result<T, CliError>`. The variants add file
//! path context to the core [`ReportError`] kinds, so a diagnostic always
//! names the report that failed.

use benchdiff_core::ReportError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for BenchDiff CLI operations.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the maximum allowed limit.
    ///
    /// The limit defaults to 1 GB and can be raised or lowered via the
    /// `BENCHDIFF_MAX_FILE_SIZE` environment variable.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
        /// The maximum allowed file size in MB (for display)
        max_mb: u64,
    },

    /// The file does not begin with a separator line, so it carries no
    /// benchmark table. Distinct from a malformed table.
    #[error("no benchmark table found in '{path}'")]
    NoTable {
        /// The file that contained no table
        path: PathBuf,
    },

    /// A report failed to parse.
    #[error("error in '{path}': {source}")]
    Report {
        /// The file that failed
        path: PathBuf,
        /// The underlying parse failure
        source: ReportError,
    },

    /// The comparison itself failed (e.g. a zero candidate denominator).
    #[error("comparison error: {0}")]
    Compare(#[from] ReportError),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Create a no-table outcome for a file without a leading separator.
    pub fn no_table(path: impl Into<PathBuf>) -> Self {
        Self::NoTable { path: path.into() }
    }

    /// Create a parse error with the failing file's path.
    pub fn report(path: impl Into<PathBuf>, source: ReportError) -> Self {
        Self::Report {
            path: path.into(),
            source,
        }
    }
}
