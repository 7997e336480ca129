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

//! Text rendering of the symbol table, used by `kplc symtab` and tests.

use super::object::{ObjectAttrs, ObjectId, ParamMode};
use super::scope::ScopeId;
use super::symbol_table::SymTab;
use std::fmt::Write;

const INDENT: usize = 4;

impl SymTab {
    /// Render one object and, for programs and routines, everything it owns.
    pub fn dump_object(&self, id: ObjectId) -> String {
        let mut out = String::new();
        self.write_object(&mut out, id, 0);
        out
    }

    /// Render the objects declared in a scope.
    pub fn dump_scope(&self, id: ScopeId) -> String {
        let mut out = String::new();
        self.write_scope(&mut out, id, &[], 0);
        out
    }

    /// Render the global object list.
    pub fn dump_globals(&self) -> String {
        let mut out = String::new();
        for &id in self.global_objects() {
            self.write_object(&mut out, id, 0);
        }
        out
    }

    fn write_object(&self, out: &mut String, id: ObjectId, indent: usize) {
        let Some(object) = self.object(id) else {
            let _ = writeln!(out, "{:indent$}<released #{}>", "", id.index());
            return;
        };
        let pad = "";
        let name = &object.name;
        let _ = match &object.attrs {
            ObjectAttrs::Program { .. } => writeln!(out, "{pad:indent$}Program {name}"),
            ObjectAttrs::Constant { value } => writeln!(out, "{pad:indent$}Const {name} = {value}"),
            ObjectAttrs::Type { actual_type } => {
                writeln!(out, "{pad:indent$}Type {name} = {actual_type}")
            }
            ObjectAttrs::Variable { ty, .. } => writeln!(out, "{pad:indent$}Var {name} : {ty}"),
            ObjectAttrs::Function { return_type, .. } => {
                writeln!(out, "{pad:indent$}Function {name} : {return_type}")
            }
            ObjectAttrs::Procedure { .. } => writeln!(out, "{pad:indent$}Procedure {name}"),
            ObjectAttrs::Parameter { ty, mode, .. } => match mode {
                ParamMode::ByValue => writeln!(out, "{pad:indent$}Param {name} : {ty}"),
                ParamMode::ByReference => writeln!(out, "{pad:indent$}Param VAR {name} : {ty}"),
            },
        };

        // Parameters first, then the body without repeating them.
        let params = object.params().unwrap_or_default();
        for &param in params {
            self.write_object(out, param, indent + INDENT);
        }
        if !matches!(object.attrs, ObjectAttrs::Variable { .. }) {
            if let Some(scope) = object.scope() {
                self.write_scope(out, scope, params, indent + INDENT);
            }
        }
    }

    fn write_scope(&self, out: &mut String, id: ScopeId, skip: &[ObjectId], indent: usize) {
        let Some(scope) = self.scope(id) else {
            return;
        };
        for &object in scope.objects.iter().filter(|id| !skip.contains(id)) {
            self.write_object(out, object, indent);
        }
    }
}
