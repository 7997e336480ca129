// KPLC - Symbol table and front-end core for the KPL teaching language
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Error types for the KPL compiler front-end.
//!
//! This module defines all error types used by the scanner and the
//! symbol table, together with a renderer that shows an error against
//! the source line it was reported on.

use std::fmt;
use thiserror::Error;

/// A 1-based line/column position in the source code.
///
/// Errors raised by the symbol table itself (caller contract violations)
/// carry the default position `0:0`, meaning "no source location".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Line number (1-indexed, 0 when unknown).
    pub line: usize,
    /// Column number (1-indexed, 0 when unknown).
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Whether this position points into real source text.
    pub fn is_known(&self) -> bool {
        self.line > 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.line, self.column)
    }
}

/// Error codes for the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Lexical errors (E001-E005)
    InvalidSymbol,
    EndOfComment,
    IdentTooLong,
    NumberTooBig,
    InvalidCharConstant,

    // Resolution errors (E200-E201)
    UndeclaredIdentifier,
    DuplicateIdentifier,

    // Symbol table contract violations (E300-E305)
    InvalidConstantKind,
    NoActiveScope,
    UnknownObject,
    WrongObjectKind,
    ParameterOutsideRoutine,
    InvalidArraySize,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl ErrorCode {
    /// Get the numeric code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            // Lexical errors
            ErrorCode::InvalidSymbol => "E001",
            ErrorCode::EndOfComment => "E002",
            ErrorCode::IdentTooLong => "E003",
            ErrorCode::NumberTooBig => "E004",
            ErrorCode::InvalidCharConstant => "E005",

            // Resolution errors
            ErrorCode::UndeclaredIdentifier => "E200",
            ErrorCode::DuplicateIdentifier => "E201",

            // Symbol table errors
            ErrorCode::InvalidConstantKind => "E300",
            ErrorCode::NoActiveScope => "E301",
            ErrorCode::UnknownObject => "E302",
            ErrorCode::WrongObjectKind => "E303",
            ErrorCode::ParameterOutsideRoutine => "E304",
            ErrorCode::InvalidArraySize => "E305",
        }
    }

    /// Whether this code signals a bug in the caller rather than in the
    /// program being compiled.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            ErrorCode::InvalidConstantKind
                | ErrorCode::NoActiveScope
                | ErrorCode::UnknownObject
                | ErrorCode::WrongObjectKind
        )
    }
}

/// A compiler error with source location.
#[derive(Debug, Clone, Error)]
#[error("[{code}] {message}")]
pub struct CompileError {
    /// The error code.
    pub code: ErrorCode,
    /// The error message.
    pub message: String,
    /// The source position where the error occurred.
    pub position: Position,
    /// Optional hint for fixing the error.
    pub hint: Option<String>,
}

impl CompileError {
    /// Create a new compile error.
    pub fn new(code: ErrorCode, message: impl Into<String>, position: Position) -> Self {
        Self {
            code,
            message: message.into(),
            position,
            hint: None,
        }
    }

    /// Create an error that has no source location.
    pub fn internal(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(code, message, Position::default())
    }

    /// Add a hint to this error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Get the error code string.
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, CompileError>;

/// Format an error with source context.
pub fn format_error(error: &CompileError, source: &str, filename: Option<&str>) -> String {
    let filename = filename.unwrap_or("<input>");
    let mut output = String::new();

    // Error header
    output.push_str(&format!("error[{}]: {}\n", error.code_str(), error.message));

    let pos = error.position;
    if pos.is_known() {
        // Location
        output.push_str(&format!("  --> {}:{}:{}\n", filename, pos.line, pos.column));

        // Source context
        let line_content = source.lines().nth(pos.line - 1).unwrap_or("");
        let line_num_width = pos.line.to_string().len();
        output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
        output.push_str(&format!(
            "{:>width$} | {}\n",
            pos.line,
            line_content,
            width = line_num_width
        ));
        output.push_str(&format!(
            "{:>width$} | {:>start$}^\n",
            "",
            "",
            width = line_num_width,
            start = pos.column.saturating_sub(1)
        ));
    }

    // Hint if available
    if let Some(hint) = &error.hint {
        output.push_str(&format!("   = hint: {}\n", hint));
    }

    output
}

/// A collection of compile errors.
#[derive(Debug, Default)]
pub struct Errors {
    errors: Vec<CompileError>,
}

impl Errors {
    /// Create a new empty error collection.
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Add an error to the collection.
    pub fn push(&mut self, error: CompileError) {
        self.errors.push(error);
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get the number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get an iterator over the errors.
    pub fn iter(&self) -> impl Iterator<Item = &CompileError> {
        self.errors.iter()
    }

    /// Convert into a vector of errors.
    pub fn into_vec(self) -> Vec<CompileError> {
        self.errors
    }
}

impl IntoIterator for Errors {
    type Item = CompileError;
    type IntoIter = std::vec::IntoIter<CompileError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
