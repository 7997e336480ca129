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

//! Built-in routine registration for the symbol table.
//!
//! KPL predeclares five I/O routines. They live in the global object
//! list, outside the program scope, and are visible from every block.

use super::object::{ObjectId, ParamMode};
use super::symbol_table::SymTab;
use super::types::Type;
use tracing::trace;

/// Trait for registering built-in routines.
pub trait BuiltinRegistry {
    /// Register all built-in routines in the global object list.
    fn register_builtins(&mut self);

    /// Define a built-in function without parameters.
    fn define_builtin_function(&mut self, name: &str, return_type: Type) -> ObjectId;

    /// Define a built-in procedure taking by-value parameters.
    fn define_builtin_procedure(&mut self, name: &str, params: &[(&str, Type)]) -> ObjectId;
}

impl BuiltinRegistry for SymTab {
    fn register_builtins(&mut self) {
        // Input
        // READC: char - read one character
        self.define_builtin_function("READC", Type::char());

        // READI: integer - read one integer
        self.define_builtin_function("READI", Type::int());

        // Output
        // WRITEI(i: integer) - write an integer
        self.define_builtin_procedure("WRITEI", &[("i", Type::int())]);

        // WRITEC(ch: char) - write a character
        self.define_builtin_procedure("WRITEC", &[("ch", Type::char())]);

        // WRITELN - write a line break
        self.define_builtin_procedure("WRITELN", &[]);
    }

    fn define_builtin_function(&mut self, name: &str, return_type: Type) -> ObjectId {
        let function = self.create_function_object(name);
        if let Some(object) = self.object_mut(function) {
            let _ = object.set_type(return_type);
        }
        self.add_global(function);
        trace!(name, "registered built-in function");
        function
    }

    fn define_builtin_procedure(&mut self, name: &str, params: &[(&str, Type)]) -> ObjectId {
        let procedure = self.create_procedure_object(name);
        for (param_name, param_type) in params {
            let param = self.create_parameter_object(param_name, ParamMode::ByValue, procedure);
            if let Some(object) = self.object_mut(param) {
                let _ = object.set_type(param_type.clone());
            }
            // Built-in parameters live only in the parameter list.
            if let Some(list) = self.object_mut(procedure).and_then(|p| p.params_mut()) {
                list.push(param);
            }
        }
        self.add_global(procedure);
        trace!(name, params = params.len(), "registered built-in procedure");
        procedure
    }
}
