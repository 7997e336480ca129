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

//! Identifier resolution on top of [`SymTab::find_object`].
//!
//! `find_object` only looks at one object list. The helpers here walk the
//! chain of enclosing scopes and then the global list, which is what the
//! semantic checks of a parser need.

use super::object::ObjectId;
use super::scope::ScopeId;
use super::symbol_table::SymTab;
use crate::error::{CompileError, ErrorCode, Position, Result};

/// Iterator over a scope and its enclosing scopes, innermost first.
pub struct ScopeChain<'a> {
    symtab: &'a SymTab,
    next: Option<ScopeId>,
}

impl Iterator for ScopeChain<'_> {
    type Item = ScopeId;

    fn next(&mut self) -> Option<ScopeId> {
        let current = self.next?;
        self.next = self.symtab.scope(current).and_then(|scope| scope.outer);
        Some(current)
    }
}

impl SymTab {
    /// Iterate from `start` outwards through the enclosing scopes.
    pub fn scope_chain(&self, start: Option<ScopeId>) -> ScopeChain<'_> {
        ScopeChain {
            symtab: self,
            next: start,
        }
    }

    /// Resolve a name from the current scope outwards, then in the global
    /// object list.
    pub fn lookup_object(&self, name: &str) -> Option<ObjectId> {
        self.scope_chain(self.current_scope())
            .filter_map(|id| self.scope(id))
            .find_map(|scope| self.find_object(&scope.objects, name))
            .or_else(|| self.find_object(self.global_objects(), name))
    }

    /// Check that `name` is not yet declared in the current scope.
    pub fn check_fresh_ident(&self, name: &str, position: Position) -> Result<()> {
        let existing = self
            .current_scope()
            .and_then(|id| self.scope(id))
            .and_then(|scope| self.find_object(&scope.objects, name));
        match existing {
            Some(_) => Err(CompileError::new(
                ErrorCode::DuplicateIdentifier,
                format!("Duplicate identifier '{}'", name),
                position,
            )),
            None => Ok(()),
        }
    }

    /// Resolve `name`, failing when it is not declared anywhere visible.
    pub fn check_declared_ident(&self, name: &str, position: Position) -> Result<ObjectId> {
        self.lookup_object(name).ok_or_else(|| {
            CompileError::new(
                ErrorCode::UndeclaredIdentifier,
                format!("Undeclared identifier '{}'", name),
                position,
            )
        })
    }
}
