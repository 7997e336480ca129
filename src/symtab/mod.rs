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

//! Symbol table module for the KPL compiler.
//!
//! This module tracks every declared program entity and the nested
//! lexical scopes that contain them:
//! - Type model (integer, character, fixed-size arrays)
//! - Constant values
//! - Objects (program, constant, type, variable, function, procedure, parameter)
//! - Scopes and the declaration protocol
//! - The registry driven by the parser, with the built-in I/O routines
//! - Identifier resolution helpers and a text dump
//!
//! # Example
//!
//! ```
//! use kplc::symtab::{Object, ObjectKind, ParamMode, SymTab, Type};
//!
//! let mut symtab = SymTab::new();
//! let program = symtab.create_program_object("EXAMPLE");
//! let scope = symtab.object(program).and_then(Object::scope).unwrap();
//! symtab.enter_block(scope);
//!
//! let proc_id = symtab.create_procedure_object("SHOW");
//! symtab.declare_object(proc_id).unwrap();
//! let body = symtab.object(proc_id).and_then(Object::scope).unwrap();
//! symtab.enter_block(body);
//! let n = symtab.create_parameter_object("n", ParamMode::ByValue, proc_id);
//! symtab.object_mut(n).unwrap().set_type(Type::int()).unwrap();
//! symtab.declare_object(n).unwrap();
//! symtab.exit_block().unwrap();
//!
//! assert_eq!(symtab.object(proc_id).unwrap().params(), Some(&[n][..]));
//! assert_eq!(symtab.object(proc_id).unwrap().kind(), ObjectKind::Procedure);
//! let teardown = symtab.clean();
//! assert_eq!(teardown.orphan_objects, 0);
//! ```

mod builtins;
mod constant;
mod dump;
mod lookup;
mod object;
mod scope;
mod symbol_table;
mod types;

pub use builtins::BuiltinRegistry;
pub use constant::ConstantValue;
pub use lookup::ScopeChain;
pub use object::{Object, ObjectAttrs, ObjectId, ObjectKind, ParamMode};
pub use scope::{Scope, ScopeId};
pub use symbol_table::{SymTab, Teardown};
pub use types::{Type, TypeClass};
