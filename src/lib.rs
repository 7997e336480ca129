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

//! KPLC Compiler Library
//!
//! The front-end core of a compiler for KPL, a small Pascal-like teaching
//! language with integers, characters, fixed-size arrays, constants, type
//! aliases, functions and procedures.
//!
//! # Modules
//!
//! - [`error`] - Error types and error reporting
//! - [`lexer`] - Tokenization of source code
//! - [`symtab`] - Types, constants, objects, scopes and the symbol table
//!
//! # Example
//!
//! ```
//! use kplc::{lexer, symtab::SymTab};
//!
//! let tokens = lexer::tokenize("program DEMO; begin end.").unwrap();
//! assert_eq!(tokens.len(), 7);
//!
//! let symtab = SymTab::new();
//! assert!(symtab.lookup_object("WRITELN").is_some());
//! ```

pub mod error;
pub mod lexer;
pub mod symtab;

// Re-export commonly used types
pub use error::{format_error, CompileError, ErrorCode, Errors, Position, Result};
pub use lexer::{Token, TokenKind};
pub use symtab::{SymTab, Type};

use std::sync::Once;

/// The version of the KPLC compiler.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the compiler.
pub const NAME: &str = "KPLC";

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence. Without it the level is `warn`, or `debug`
/// when `verbose` is set. Log lines go to stderr. Only the first call has
/// an effect.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let default_level = if verbose { "debug" } else { "warn" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init();
    });
}
