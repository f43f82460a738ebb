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

//! Error types for report parsing and comparison.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred while loading or comparing reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportErrorKind {
    /// I/O error (file operations).
    Io,
    /// Header's identity columns are missing or out of order.
    Format,
    /// Required statistic column not present in the header.
    Column,
    /// Statistic field is not a valid floating-point number.
    Parse,
    /// Data row has fewer cells than the resolved columns require.
    Shape,
    /// Division by a zero candidate value while computing a delta.
    Numeric,
}

impl fmt::Display for ReportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "IOError"),
            Self::Format => write!(f, "FormatError"),
            Self::Column => write!(f, "MissingColumnError"),
            Self::Parse => write!(f, "ParseError"),
            Self::Shape => write!(f, "ShapeError"),
            Self::Numeric => write!(f, "NumericError"),
        }
    }
}

/// An error that occurred while parsing or comparing benchmark reports.
#[derive(Debug, Clone, Error)]
#[error("{kind} at line {line}: {message}")]
pub struct ReportError {
    /// The kind of error.
    pub kind: ReportErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Line number (1-based; 0 when the error is not tied to a line).
    pub line: usize,
}

impl ReportError {
    /// Create a new error.
    pub fn new(kind: ReportErrorKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
        }
    }

    // Convenience constructors for each error kind
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ReportErrorKind::Io, message, 0)
    }

    pub fn format(message: impl Into<String>, line: usize) -> Self {
        Self::new(ReportErrorKind::Format, message, line)
    }

    pub fn column(message: impl Into<String>, line: usize) -> Self {
        Self::new(ReportErrorKind::Column, message, line)
    }

    pub fn parse(message: impl Into<String>, line: usize) -> Self {
        Self::new(ReportErrorKind::Parse, message, line)
    }

    pub fn shape(message: impl Into<String>, line: usize) -> Self {
        Self::new(ReportErrorKind::Shape, message, line)
    }

    pub fn numeric(message: impl Into<String>) -> Self {
        Self::new(ReportErrorKind::Numeric, message, 0)
    }
}

/// Result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== ReportErrorKind Display tests ====================

    #[test]
    fn test_error_kind_display_io() {
        assert_eq!(format!("{}", ReportErrorKind::Io), "IOError");
    }

    #[test]
    fn test_error_kind_display_format() {
        assert_eq!(format!("{}", ReportErrorKind::Format), "FormatError");
    }

    #[test]
    fn test_error_kind_display_column() {
        assert_eq!(format!("{}", ReportErrorKind::Column), "MissingColumnError");
    }

    #[test]
    fn test_error_kind_display_parse() {
        assert_eq!(format!("{}", ReportErrorKind::Parse), "ParseError");
    }

    #[test]
    fn test_error_kind_display_shape() {
        assert_eq!(format!("{}", ReportErrorKind::Shape), "ShapeError");
    }

    #[test]
    fn test_error_kind_display_numeric() {
        assert_eq!(format!("{}", ReportErrorKind::Numeric), "NumericError");
    }

    #[test]
    fn test_error_kind_equality() {
        assert_eq!(ReportErrorKind::Parse, ReportErrorKind::Parse);
        assert_ne!(ReportErrorKind::Parse, ReportErrorKind::Format);
    }

    // ==================== ReportError Display tests ====================

    #[test]
    fn test_error_display() {
        let err = ReportError::new(ReportErrorKind::Parse, "'abc' is not a valid number", 7);
        let msg = format!("{}", err);
        assert!(msg.contains("ParseError"));
        assert!(msg.contains("line 7"));
        assert!(msg.contains("'abc' is not a valid number"));
    }

    // ==================== Convenience constructor tests ====================

    #[test]
    fn test_error_io() {
        let err = ReportError::io("read failed");
        assert_eq!(err.kind, ReportErrorKind::Io);
        assert_eq!(err.line, 0);
    }

    #[test]
    fn test_error_format() {
        let err = ReportError::format("bad header", 2);
        assert_eq!(err.kind, ReportErrorKind::Format);
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_error_column() {
        let err = ReportError::column("missing P95", 2);
        assert_eq!(err.kind, ReportErrorKind::Column);
    }

    #[test]
    fn test_error_parse() {
        let err = ReportError::parse("not a number", 4);
        assert_eq!(err.kind, ReportErrorKind::Parse);
    }

    #[test]
    fn test_error_shape() {
        let err = ReportError::shape("row too short", 5);
        assert_eq!(err.kind, ReportErrorKind::Shape);
    }

    #[test]
    fn test_error_numeric() {
        let err = ReportError::numeric("zero candidate value");
        assert_eq!(err.kind, ReportErrorKind::Numeric);
        assert_eq!(err.line, 0);
    }

    // ==================== Error trait tests ====================

    #[test]
    fn test_error_is_std_error() {
        fn accepts_error<E: std::error::Error>(_: E) {}
        accepts_error(ReportError::parse("test", 1));
    }

    #[test]
    fn test_error_clone() {
        let original = ReportError::format("bad header", 2);
        let cloned = original.clone();
        assert_eq!(original.kind, cloned.kind);
        assert_eq!(original.message, cloned.message);
        assert_eq!(original.line, cloned.line);
    }
}
