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

//! Lexer module for the KPL compiler.
//!
//! This module turns KPL source text into the classified token stream
//! consumed by the parser. It handles:
//! - Keywords (case-insensitive) and identifiers
//! - Unsigned decimal numbers
//! - Character constants (`'a'`)
//! - Operators and punctuation, including `(.` and `.)` for indexing
//! - Comments (`(* ... *)`)
//!
//! The stream always ends with a [`TokenKind::Eof`] token.

mod tokens;

pub use tokens::{Token, TokenKind, MAX_IDENT_LEN};

use crate::error::{CompileError, ErrorCode, Position, Result};
use logos::Logos;
use tracing::trace;

/// Byte offset to line/column conversion for one source text.
struct LineIndex<'source> {
    source: &'source str,
    /// Byte offset of the first character of every line.
    line_starts: Vec<usize>,
}

impl<'source> LineIndex<'source> {
    fn new(source: &'source str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            source,
            line_starts,
        }
    }

    fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.source.len());
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        let column = self.source[line_start..offset].chars().count() + 1;
        Position::new(line, column)
    }
}

/// Tokenize KPL source code.
///
/// Stops at the first lexical error.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    let lines = LineIndex::new(source);
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let slice = lexer.slice();
        let position = lines.position(span.start);

        let kind = match result {
            Ok(kind) => kind,
            Err(()) if slice.starts_with("(*") => {
                return Err(CompileError::new(
                    ErrorCode::EndOfComment,
                    "End of comment expected",
                    lines.position(span.end),
                )
                .with_hint("close the comment with '*)'"));
            }
            Err(()) => {
                return Err(CompileError::new(
                    ErrorCode::InvalidSymbol,
                    format!("Invalid symbol '{}'", slice),
                    position,
                ));
            }
        };

        let token = match kind {
            TokenKind::Comment => continue,
            TokenKind::Ident => read_ident(slice, position)?,
            TokenKind::Number => read_number(slice, position)?,
            TokenKind::Char => read_char(slice, position)?,
            _ => Token::new(kind, slice, 0, position),
        };
        tokens.push(token);
    }

    tokens.push(Token::new(TokenKind::Eof, "", 0, lines.position(source.len())));
    trace!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}

fn read_ident(slice: &str, position: Position) -> Result<Token> {
    if slice.len() > MAX_IDENT_LEN {
        return Err(CompileError::new(
            ErrorCode::IdentTooLong,
            format!("Identifier '{}' is too long", slice),
            position,
        )
        .with_hint(format!(
            "identifiers may have at most {} characters",
            MAX_IDENT_LEN
        )));
    }
    Ok(Token::new(TokenKind::Ident, slice, 0, position))
}

fn read_number(slice: &str, position: Position) -> Result<Token> {
    let value = slice.parse::<i32>().map_err(|_| {
        CompileError::new(
            ErrorCode::NumberTooBig,
            format!("Number {} is too big", slice),
            position,
        )
    })?;
    Ok(Token::new(TokenKind::Number, slice, value, position))
}

fn read_char(slice: &str, position: Position) -> Result<Token> {
    let mut chars = slice.chars();
    match (chars.next(), chars.next(), chars.next(), chars.next()) {
        (Some('\''), Some(c), Some('\''), None) if c.is_ascii_alphabetic() => Ok(Token::new(
            TokenKind::Char,
            c.to_string(),
            c as i32,
            position,
        )),
        _ => Err(CompileError::new(
            ErrorCode::InvalidCharConstant,
            format!("Invalid character constant {}", slice),
            position,
        )
        .with_hint("a character constant is a single letter between quotes, like 'a'")),
    }
}
