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

//! KPLC Compiler CLI
//!
//! Front-end tools for the KPL teaching language.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

use kplc::error::format_error;
use kplc::lexer;
use kplc::symtab::SymTab;

/// KPLC - front-end tools for the KPL teaching language
#[derive(Parser, Debug)]
#[command(name = "kplc")]
#[command(author = "KPLC Team")]
#[command(version)]
#[command(about = "Front-end tools for the KPL teaching language")]
#[command(long_about = r#"
KPLC tokenizes KPL programs and shows the symbol table that the compiler
starts from.

Example usage:
  kplc scan example1.kpl
  kplc symtab

Set RUST_LOG (for example RUST_LOG=kplc=trace) for detailed logging.
"#)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Tokenize a source file and print one token per line
    Scan {
        /// Source file to tokenize (.kpl)
        file: PathBuf,
    },

    /// Print the built-in objects of a fresh symbol table
    Symtab,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    kplc::init_tracing(cli.verbose);
    debug!(version = kplc::VERSION, "{} starting", kplc::NAME);

    match &cli.command {
        Command::Scan { file } => scan(file),
        Command::Symtab => dump_symtab(),
    }
}

/// Print the token stream of `path`.
fn scan(path: &Path) -> ExitCode {
    let source = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: Cannot read {}: {}", path.display(), e);
            return ExitCode::from(3);
        }
    };

    let filename = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("<input>");

    match lexer::tokenize(&source) {
        Ok(tokens) => {
            for token in &tokens {
                println!("{}", token);
            }
            debug!(count = tokens.len(), file = filename, "scan finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprint!("{}", format_error(&e, &source, Some(filename)));
            ExitCode::from(1)
        }
    }
}

/// Print the global object list of a freshly initialized symbol table.
fn dump_symtab() -> ExitCode {
    let symtab = SymTab::new();
    print!("{}", symtab.dump_globals());
    let teardown = symtab.clean();
    debug!(?teardown, "symbol table released");
    ExitCode::SUCCESS
}
