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

//! Token definitions for the KPL language.

use crate::error::Position;
use logos::Logos;
use std::fmt;

/// Maximum length of an identifier.
pub const MAX_IDENT_LEN: usize = 15;

/// The classification of a token.
///
/// Keywords are case-insensitive. `Comment` is produced by the lexer
/// internally and never appears in the token stream.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    // Literals
    /// Identifier.
    #[regex("[a-zA-Z][a-zA-Z0-9]*")]
    Ident,
    /// Unsigned decimal number.
    #[regex("[0-9]+")]
    Number,
    /// Character constant such as `'a'`. Validated by the lexer.
    #[regex("'[^'\n]*'?")]
    Char,

    // Keywords
    #[token("program", ignore(ascii_case))]
    Program,
    #[token("const", ignore(ascii_case))]
    Const,
    #[token("type", ignore(ascii_case))]
    Type,
    #[token("var", ignore(ascii_case))]
    Var,
    #[token("integer", ignore(ascii_case))]
    Integer,
    #[token("char", ignore(ascii_case))]
    CharKw,
    #[token("array", ignore(ascii_case))]
    Array,
    #[token("of", ignore(ascii_case))]
    Of,
    #[token("function", ignore(ascii_case))]
    Function,
    #[token("procedure", ignore(ascii_case))]
    Procedure,
    #[token("begin", ignore(ascii_case))]
    Begin,
    #[token("end", ignore(ascii_case))]
    End,
    #[token("call", ignore(ascii_case))]
    Call,
    #[token("if", ignore(ascii_case))]
    If,
    #[token("then", ignore(ascii_case))]
    Then,
    #[token("else", ignore(ascii_case))]
    Else,
    #[token("while", ignore(ascii_case))]
    While,
    #[token("do", ignore(ascii_case))]
    Do,
    #[token("for", ignore(ascii_case))]
    For,
    #[token("to", ignore(ascii_case))]
    To,

    // Symbols
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(".")]
    Period,
    #[token(",")]
    Comma,
    #[token(":=")]
    Assign,
    #[token("=")]
    Eq,
    #[token("!=")]
    Neq,
    #[token("<")]
    Lt,
    #[token("<=")]
    Le,
    #[token(">")]
    Gt,
    #[token(">=")]
    Ge,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Times,
    #[token("/")]
    Slash,
    #[token("(")]
    LPar,
    #[token(")")]
    RPar,
    #[token("(.")]
    LSel,
    #[token(".)")]
    RSel,

    /// `(* ... *)`, skipped by the lexer.
    #[token("(*", skip_comment)]
    Comment,

    /// End of input.
    Eof,
}

/// Consume a comment body up to and including `*)`.
///
/// Returns `false` (an error) when the input ends first.
fn skip_comment(lex: &mut logos::Lexer<TokenKind>) -> bool {
    match lex.remainder().find("*)") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => {
            lex.bump(lex.remainder().len());
            false
        }
    }
}

impl TokenKind {
    /// The name used when printing tokens.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Ident => "TK_IDENT",
            TokenKind::Number => "TK_NUMBER",
            TokenKind::Char => "TK_CHAR",
            TokenKind::Eof => "TK_EOF",
            TokenKind::Comment => "TK_COMMENT",

            TokenKind::Program => "KW_PROGRAM",
            TokenKind::Const => "KW_CONST",
            TokenKind::Type => "KW_TYPE",
            TokenKind::Var => "KW_VAR",
            TokenKind::Integer => "KW_INTEGER",
            TokenKind::CharKw => "KW_CHAR",
            TokenKind::Array => "KW_ARRAY",
            TokenKind::Of => "KW_OF",
            TokenKind::Function => "KW_FUNCTION",
            TokenKind::Procedure => "KW_PROCEDURE",
            TokenKind::Begin => "KW_BEGIN",
            TokenKind::End => "KW_END",
            TokenKind::Call => "KW_CALL",
            TokenKind::If => "KW_IF",
            TokenKind::Then => "KW_THEN",
            TokenKind::Else => "KW_ELSE",
            TokenKind::While => "KW_WHILE",
            TokenKind::Do => "KW_DO",
            TokenKind::For => "KW_FOR",
            TokenKind::To => "KW_TO",

            TokenKind::Semicolon => "SB_SEMICOLON",
            TokenKind::Colon => "SB_COLON",
            TokenKind::Period => "SB_PERIOD",
            TokenKind::Comma => "SB_COMMA",
            TokenKind::Assign => "SB_ASSIGN",
            TokenKind::Eq => "SB_EQ",
            TokenKind::Neq => "SB_NEQ",
            TokenKind::Lt => "SB_LT",
            TokenKind::Le => "SB_LE",
            TokenKind::Gt => "SB_GT",
            TokenKind::Ge => "SB_GE",
            TokenKind::Plus => "SB_PLUS",
            TokenKind::Minus => "SB_MINUS",
            TokenKind::Times => "SB_TIMES",
            TokenKind::Slash => "SB_SLASH",
            TokenKind::LPar => "SB_LPAR",
            TokenKind::RPar => "SB_RPAR",
            TokenKind::LSel => "SB_LSEL",
            TokenKind::RSel => "SB_RSEL",
        }
    }

    /// Check if this is a keyword.
    pub fn is_keyword(&self) -> bool {
        self.name().starts_with("KW_")
    }
}

/// A classified token with its source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token classification.
    pub kind: TokenKind,
    /// The source text: identifier name, number digits or the character.
    pub lexeme: String,
    /// Numeric value of numbers and character constants, 0 otherwise.
    pub value: i32,
    /// Where the token starts (1-based).
    pub position: Position,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, value: i32, position: Position) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            value,
            position,
        }
    }

    /// The character of a character constant.
    pub fn char_value(&self) -> Option<char> {
        match self.kind {
            TokenKind::Char => u32::try_from(self.value).ok().and_then(char::from_u32),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.position)?;
        match self.kind {
            TokenKind::Ident | TokenKind::Number => {
                write!(f, "{}({})", self.kind.name(), self.lexeme)
            }
            TokenKind::Char => write!(f, "{}('{}')", self.kind.name(), self.lexeme),
            _ => f.write_str(self.kind.name()),
        }
    }
}
