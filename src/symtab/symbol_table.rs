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

//! The symbol table registry.
//!
//! [`SymTab`] is the single mutable context the parser drives while it
//! walks a KPL program. It owns every object and scope of one
//! compilation in two arenas and hands out copyable handles. The owning
//! edges of the graph (scope to objects, object to scope, routine to
//! parameters) are followed when objects are released; the back
//! references (outer scope, scope owner, parameter routine) never are.

use super::builtins::BuiltinRegistry;
use super::constant::ConstantValue;
use super::object::{Object, ObjectAttrs, ObjectId, ObjectKind, ParamMode};
use super::scope::{Scope, ScopeId};
use super::types::Type;
use crate::error::{CompileError, ErrorCode, Errors, Result};
use std::collections::HashSet;
use tracing::{debug, trace, warn};

/// Counters reported by [`SymTab::clean`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Teardown {
    /// Objects released by the teardown.
    pub objects_released: usize,
    /// Scopes released by the teardown.
    pub scopes_released: usize,
    /// Objects that were never attached to the program graph or the
    /// global list and were dropped with the arena.
    pub orphan_objects: usize,
    /// Scopes in the same situation.
    pub orphan_scopes: usize,
    /// Handles in the graph that pointed at already released slots and
    /// were skipped.
    pub stale_handles: usize,
}

/// The symbol table for one compilation.
#[derive(Debug)]
pub struct SymTab {
    /// Object arena. A `None` slot is a released object.
    objects: Vec<Option<Object>>,
    /// Scope arena. A `None` slot is a released scope.
    scopes: Vec<Option<Scope>>,
    /// The program object, once created.
    program: Option<ObjectId>,
    /// Built-in objects visible everywhere.
    globals: Vec<ObjectId>,
    /// Entered blocks (innermost last). The last entry is the current scope.
    blocks: Vec<ScopeId>,
    /// Canonical integer type.
    int_type: Type,
    /// Canonical character type.
    char_type: Type,
    /// Non-fatal diagnostics raised while declaring objects.
    warnings: Errors,
    objects_released: usize,
    scopes_released: usize,
}

impl SymTab {
    /// Create a symbol table with the built-in routines registered.
    pub fn new() -> Self {
        let mut symtab = Self::without_builtins();
        symtab.register_builtins();
        debug!(globals = symtab.globals.len(), "symbol table initialized");
        symtab
    }

    /// Create a symbol table with an empty global object list.
    pub fn without_builtins() -> Self {
        Self {
            objects: Vec::new(),
            scopes: Vec::new(),
            program: None,
            globals: Vec::new(),
            blocks: Vec::new(),
            int_type: Type::int(),
            char_type: Type::char(),
            warnings: Errors::new(),
            objects_released: 0,
            scopes_released: 0,
        }
    }

    // ------------------------------------------------------------------
    // Arena access
    // ------------------------------------------------------------------

    /// Get an object by handle. Released objects yield `None`.
    pub fn object(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(id.index()).and_then(Option::as_ref)
    }

    /// Get an object by handle for modification.
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.objects.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Get a scope by handle. Released scopes yield `None`.
    pub fn scope(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id.index()).and_then(Option::as_ref)
    }

    /// Get the name of an object.
    pub fn name_of(&self, id: ObjectId) -> Option<&str> {
        self.object(id).map(Object::name)
    }

    /// Get an object, failing with [`ErrorCode::UnknownObject`] for stale handles.
    pub fn expect_object(&self, id: ObjectId) -> Result<&Object> {
        self.object(id).ok_or_else(|| unknown_object(id))
    }

    fn expect_scope_mut(&mut self, id: ScopeId) -> Result<&mut Scope> {
        self.scopes
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or_else(|| unknown_scope(id))
    }

    fn next_object_id(&self) -> ObjectId {
        ObjectId(self.objects.len() as u32)
    }

    fn alloc_object(&mut self, object: Object) -> ObjectId {
        let id = self.next_object_id();
        trace!(name = %object.name, kind = %object.kind(), id = id.index(), "allocated object");
        self.objects.push(Some(object));
        id
    }

    /// Number of objects that have not been released.
    pub fn live_objects(&self) -> usize {
        self.objects.iter().filter(|slot| slot.is_some()).count()
    }

    /// Number of scopes that have not been released.
    pub fn live_scopes(&self) -> usize {
        self.scopes.iter().filter(|slot| slot.is_some()).count()
    }

    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create an empty scope.
    pub fn create_scope(&mut self, owner: Option<ObjectId>, outer: Option<ScopeId>) -> ScopeId {
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(Some(Scope::new(owner, outer)));
        id
    }

    /// Create the program object and make it the program of this table.
    ///
    /// Its scope is the outermost one. Creating a second program replaces
    /// the reference; the previous program stays allocated until it is
    /// released explicitly or the table is dropped.
    pub fn create_program_object(&mut self, name: &str) -> ObjectId {
        let id = self.next_object_id();
        let scope = self.create_scope(Some(id), None);
        let id = self.alloc_object(Object::new(name, ObjectAttrs::Program { scope }));
        if let Some(previous) = self.program.replace(id) {
            warn!(
                previous = self.name_of(previous).unwrap_or("<released>"),
                program = name,
                "program object replaced"
            );
        }
        id
    }

    /// Create a constant. Its value is `0` until set.
    pub fn create_constant_object(&mut self, name: &str) -> ObjectId {
        self.alloc_object(Object::new(
            name,
            ObjectAttrs::Constant {
                value: ConstantValue::default(),
            },
        ))
    }

    /// Create a type alias. Its actual type is `Int` until set.
    pub fn create_type_object(&mut self, name: &str) -> ObjectId {
        self.alloc_object(Object::new(
            name,
            ObjectAttrs::Type {
                actual_type: Type::default(),
            },
        ))
    }

    /// Create a variable. Its scope is a child of the current scope.
    pub fn create_variable_object(&mut self, name: &str) -> ObjectId {
        let id = self.next_object_id();
        let scope = self.create_scope(Some(id), self.current_scope());
        self.alloc_object(Object::new(
            name,
            ObjectAttrs::Variable {
                ty: Type::default(),
                scope,
            },
        ))
    }

    /// Create a function. Its body scope is a child of the current scope.
    pub fn create_function_object(&mut self, name: &str) -> ObjectId {
        let id = self.next_object_id();
        let scope = self.create_scope(Some(id), self.current_scope());
        self.alloc_object(Object::new(
            name,
            ObjectAttrs::Function {
                params: Vec::new(),
                return_type: Type::default(),
                scope,
            },
        ))
    }

    /// Create a procedure. Its body scope is a child of the current scope.
    pub fn create_procedure_object(&mut self, name: &str) -> ObjectId {
        let id = self.next_object_id();
        let scope = self.create_scope(Some(id), self.current_scope());
        self.alloc_object(Object::new(
            name,
            ObjectAttrs::Procedure {
                params: Vec::new(),
                scope,
            },
        ))
    }

    /// Create a parameter of `routine`.
    ///
    /// The parameter is not added to the routine's parameter list here;
    /// that happens when it is declared inside the routine's scope.
    pub fn create_parameter_object(
        &mut self,
        name: &str,
        mode: ParamMode,
        routine: ObjectId,
    ) -> ObjectId {
        self.alloc_object(Object::new(
            name,
            ObjectAttrs::Parameter {
                ty: Type::default(),
                mode,
                routine,
            },
        ))
    }

    // ------------------------------------------------------------------
    // Release
    // ------------------------------------------------------------------

    /// Release an object and everything it owns.
    ///
    /// Functions and procedures release their parameters, then their
    /// scope, then (functions) their return type. Variables release their
    /// type, then their scope. A program releases its scope.
    ///
    /// Stale handles inside the graph are logged and skipped, so the
    /// siblings are still released. The first one is returned as the error.
    pub fn free_object(&mut self, id: ObjectId) -> Result<()> {
        self.expect_object(id)?;
        let mut stale = Vec::new();
        self.release_object(id, &mut stale);
        first_stale(stale)
    }

    /// Release a scope together with every object it owns.
    ///
    /// Parameters that sit in the parameter list of the scope's owner
    /// belong to that routine and are left alone.
    pub fn free_scope(&mut self, id: ScopeId) -> Result<()> {
        let scope = self.scope(id).ok_or_else(|| unknown_scope(id))?;
        let skip = scope
            .owner
            .and_then(|owner| self.object(owner))
            .and_then(Object::params)
            .map(<[ObjectId]>::to_vec)
            .unwrap_or_default();
        let mut stale = Vec::new();
        self.release_scope(id, &skip, &mut stale);
        first_stale(stale)
    }

    fn release_object(&mut self, id: ObjectId, stale: &mut Vec<CompileError>) {
        let Some(object) = self.objects.get_mut(id.index()).and_then(Option::take) else {
            let err = unknown_object(id);
            warn!(error = %err, "skipping stale object handle");
            stale.push(err);
            return;
        };
        self.objects_released += 1;
        trace!(name = %object.name, kind = %object.kind(), "releasing object");

        match object.attrs {
            ObjectAttrs::Program { scope } => self.release_scope(scope, &[], stale),
            ObjectAttrs::Constant { .. } => {}
            ObjectAttrs::Type { actual_type } => actual_type.free(),
            ObjectAttrs::Variable { ty, scope } => {
                ty.free();
                self.release_scope(scope, &[], stale);
            }
            ObjectAttrs::Function {
                params,
                return_type,
                scope,
            } => {
                self.release_params(&params, stale);
                self.release_scope(scope, &params, stale);
                return_type.free();
            }
            ObjectAttrs::Procedure { params, scope } => {
                self.release_params(&params, stale);
                self.release_scope(scope, &params, stale);
            }
            ObjectAttrs::Parameter { ty, .. } => ty.free(),
        }
    }

    fn release_params(&mut self, params: &[ObjectId], stale: &mut Vec<CompileError>) {
        let mut seen = HashSet::new();
        for &param in params {
            if seen.insert(param) {
                self.release_object(param, stale);
            }
        }
    }

    fn release_scope(&mut self, id: ScopeId, skip: &[ObjectId], stale: &mut Vec<CompileError>) {
        let Some(scope) = self.scopes.get_mut(id.index()).and_then(Option::take) else {
            let err = unknown_scope(id);
            warn!(error = %err, "skipping stale scope handle");
            stale.push(err);
            return;
        };
        self.scopes_released += 1;

        let mut seen = HashSet::new();
        for object in scope.objects {
            if skip.contains(&object) || !seen.insert(object) {
                continue;
            }
            self.release_object(object, stale);
        }
    }

    // ------------------------------------------------------------------
    // Declaration and blocks
    // ------------------------------------------------------------------

    /// Declare an object in the current scope.
    ///
    /// A parameter is also appended to the parameter list of the scope's
    /// owner when that owner is a function or procedure. Otherwise a
    /// [`ErrorCode::ParameterOutsideRoutine`] warning is recorded.
    /// Redeclarations are not detected here.
    pub fn declare_object(&mut self, id: ObjectId) -> Result<()> {
        let current = self.current_scope().ok_or_else(|| {
            CompileError::internal(
                ErrorCode::NoActiveScope,
                format!(
                    "Cannot declare '{}' without an active scope",
                    self.name_of(id).unwrap_or("<released>")
                ),
            )
            .with_hint("enter a block before declaring objects")
        })?;
        let object = self.expect_object(id)?;
        let name = object.name.clone();
        let kind = object.kind();

        if kind == ObjectKind::Parameter {
            let owner = self.scope(current).and_then(|scope| scope.owner);
            match owner
                .and_then(|owner| self.object_mut(owner))
                .and_then(Object::params_mut)
            {
                Some(params) => params.push(id),
                None => {
                    let owner_kind = owner
                        .and_then(|owner| self.object(owner))
                        .map(|owner| owner.kind().name())
                        .unwrap_or("nothing");
                    warn!(parameter = %name, owner = owner_kind, "parameter declared outside a routine");
                    self.warnings.push(CompileError::internal(
                        ErrorCode::ParameterOutsideRoutine,
                        format!(
                            "Parameter '{}' declared in a scope owned by {}, not a function or procedure",
                            name, owner_kind
                        ),
                    ));
                }
            }
        }

        self.expect_scope_mut(current)?.add(id);
        debug!(name = %name, kind = %kind, scope = current.index(), "declared object");
        Ok(())
    }

    /// Find an object by exact name in one object list.
    ///
    /// The first match wins. Outer scopes are not searched.
    pub fn find_object(&self, objects: &[ObjectId], name: &str) -> Option<ObjectId> {
        objects
            .iter()
            .copied()
            .find(|&id| self.object(id).is_some_and(|object| object.name == name))
    }

    /// Enter a block: `scope` becomes the current scope.
    pub fn enter_block(&mut self, scope: ScopeId) {
        trace!(scope = scope.index(), depth = self.blocks.len() + 1, "enter block");
        self.blocks.push(scope);
    }

    /// Leave the current block and return to the enclosing one.
    ///
    /// Leaving the outermost block leaves no current scope. Leaving when no
    /// block is active is an error.
    pub fn exit_block(&mut self) -> Result<ScopeId> {
        let left = self.blocks.pop().ok_or_else(|| {
            CompileError::internal(ErrorCode::NoActiveScope, "No block to exit")
        })?;
        trace!(scope = left.index(), depth = self.blocks.len(), "exit block");
        Ok(left)
    }

    /// The scope that declarations currently go into.
    pub fn current_scope(&self) -> Option<ScopeId> {
        self.blocks.last().copied()
    }

    /// Number of entered blocks.
    pub fn depth(&self) -> usize {
        self.blocks.len()
    }

    // ------------------------------------------------------------------
    // Registry state
    // ------------------------------------------------------------------

    /// The program object, if one was created.
    pub fn program(&self) -> Option<ObjectId> {
        self.program
    }

    /// The global (built-in) object list.
    pub fn global_objects(&self) -> &[ObjectId] {
        &self.globals
    }

    pub(crate) fn add_global(&mut self, id: ObjectId) {
        self.globals.push(id);
    }

    /// The canonical integer type.
    pub fn int_type(&self) -> &Type {
        &self.int_type
    }

    /// The canonical character type.
    pub fn char_type(&self) -> &Type {
        &self.char_type
    }

    /// Warnings collected while declaring objects.
    pub fn warnings(&self) -> &Errors {
        &self.warnings
    }

    /// Tear the table down: release the program graph and the global
    /// objects, then the canonical types.
    ///
    /// Consuming `self` makes a second teardown impossible.
    pub fn clean(mut self) -> Teardown {
        let objects_before = self.objects_released;
        let scopes_before = self.scopes_released;

        // Stale handles are logged where they are met.
        let mut stale = Vec::new();
        if let Some(program) = self.program.take() {
            self.release_object(program, &mut stale);
        }
        for global in std::mem::take(&mut self.globals) {
            self.release_object(global, &mut stale);
        }

        let teardown = Teardown {
            objects_released: self.objects_released - objects_before,
            scopes_released: self.scopes_released - scopes_before,
            orphan_objects: self.live_objects(),
            orphan_scopes: self.live_scopes(),
            stale_handles: stale.len(),
        };
        debug!(?teardown, "symbol table cleaned");
        teardown
    }
}

impl Default for SymTab {
    fn default() -> Self {
        Self::new()
    }
}

fn first_stale(stale: Vec<CompileError>) -> Result<()> {
    stale.into_iter().next().map_or(Ok(()), Err)
}

fn unknown_object(id: ObjectId) -> CompileError {
    CompileError::internal(
        ErrorCode::UnknownObject,
        format!("Object #{} does not exist or was already released", id.index()),
    )
}

fn unknown_scope(id: ScopeId) -> CompileError {
    CompileError::internal(
        ErrorCode::UnknownObject,
        format!("Scope #{} does not exist or was already released", id.index()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// A table with a program whose block has been entered.
    fn with_program() -> (SymTab, ObjectId, ScopeId) {
        let mut symtab = SymTab::new();
        let program = symtab.create_program_object("PRG");
        let scope = symtab.object(program).and_then(Object::scope).unwrap();
        symtab.enter_block(scope);
        (symtab, program, scope)
    }

    #[test]
    fn test_program_object() {
        let (symtab, program, scope) = with_program();
        assert_eq!(symtab.program(), Some(program));
        let s = symtab.scope(scope).unwrap();
        assert_eq!(s.owner, Some(program));
        assert_eq!(s.outer, None);
        assert_eq!(symtab.current_scope(), Some(scope));
    }

    #[test]
    fn test_second_program_replaces_first() {
        let mut symtab = SymTab::new();
        let first = symtab.create_program_object("A");
        let second = symtab.create_program_object("B");
        assert_ne!(first, second);
        assert_eq!(symtab.program(), Some(second));
        assert!(symtab.object(first).is_some());
    }

    #[test]
    fn test_routine_scopes_are_children_of_current() {
        let (mut symtab, _, program_scope) = with_program();
        let f = symtab.create_function_object("F");
        let p = symtab.create_procedure_object("P");
        let v = symtab.create_variable_object("V");
        for id in [f, p, v] {
            let scope = symtab.object(id).and_then(Object::scope).unwrap();
            let scope = symtab.scope(scope).unwrap();
            assert_eq!(scope.owner, Some(id));
            assert_eq!(scope.outer, Some(program_scope));
        }
    }

    #[test]
    fn test_placeholders() {
        let mut symtab = SymTab::new();
        let c = symtab.create_constant_object("C");
        let t = symtab.create_type_object("T");
        assert_eq!(symtab.object(c).unwrap().value(), Some(&ConstantValue::Int(0)));
        assert_eq!(symtab.object(t).unwrap().ty(), Some(&Type::Int));
    }

    #[test]
    fn test_parameter_does_not_self_register() {
        let mut symtab = SymTab::new();
        let f = symtab.create_function_object("F");
        let x = symtab.create_parameter_object("x", ParamMode::ByReference, f);
        assert_eq!(symtab.object(f).unwrap().params(), Some(&[][..]));
        assert_eq!(symtab.object(x).unwrap().routine(), Some(f));
    }

    #[test]
    fn test_declare_parameter_in_procedure() {
        let (mut symtab, _, _) = with_program();
        let p = symtab.create_procedure_object("P");
        let p_scope = symtab.object(p).and_then(Object::scope).unwrap();
        symtab.enter_block(p_scope);

        let a = symtab.create_parameter_object("a", ParamMode::ByValue, p);
        let b = symtab.create_parameter_object("b", ParamMode::ByReference, p);
        symtab.declare_object(a).unwrap();
        symtab.declare_object(b).unwrap();

        assert_eq!(symtab.object(p).unwrap().params(), Some(&[a, b][..]));
        assert_eq!(symtab.scope(p_scope).unwrap().objects, vec![a, b]);
        assert!(symtab.warnings().is_empty());
    }

    #[test]
    fn test_declare_parameter_outside_routine_warns() {
        let (mut symtab, program, scope) = with_program();
        let x = symtab.create_parameter_object("x", ParamMode::ByValue, program);
        symtab.declare_object(x).unwrap();

        assert_eq!(symtab.scope(scope).unwrap().objects, vec![x]);
        assert_eq!(symtab.warnings().len(), 1);
        let warning = symtab.warnings().iter().next().unwrap();
        assert_eq!(warning.code, ErrorCode::ParameterOutsideRoutine);
    }

    #[test]
    fn test_declare_without_scope_fails() {
        let mut symtab = SymTab::new();
        let v = symtab.create_variable_object("v");
        let err = symtab.declare_object(v).unwrap_err();
        assert_eq!(err.code, ErrorCode::NoActiveScope);
    }

    #[test]
    fn test_find_object_first_match_wins() {
        let (mut symtab, _, scope) = with_program();
        let first = symtab.create_variable_object("x");
        let second = symtab.create_constant_object("x");
        symtab.declare_object(first).unwrap();
        symtab.declare_object(second).unwrap();

        let objects = symtab.scope(scope).unwrap().objects.clone();
        assert_eq!(symtab.find_object(&objects, "x"), Some(first));
        assert_eq!(symtab.find_object(&objects, "X"), None);
        assert_eq!(symtab.find_object(&[], "x"), None);
    }

    #[test]
    fn test_exit_block() {
        let (mut symtab, _, program_scope) = with_program();
        let f = symtab.create_function_object("F");
        let f_scope = symtab.object(f).and_then(Object::scope).unwrap();
        symtab.enter_block(f_scope);
        assert_eq!(symtab.depth(), 2);

        assert_eq!(symtab.exit_block().unwrap(), f_scope);
        assert_eq!(symtab.current_scope(), Some(program_scope));
        assert_eq!(symtab.exit_block().unwrap(), program_scope);
        assert_eq!(symtab.current_scope(), None);

        let err = symtab.exit_block().unwrap_err();
        assert_eq!(err.code, ErrorCode::NoActiveScope);
    }

    #[test]
    fn test_free_function_releases_everything() {
        let (mut symtab, _, _) = with_program();
        let live_before = symtab.live_objects();
        let f = symtab.create_function_object("F");
        let f_scope = symtab.object(f).and_then(Object::scope).unwrap();
        symtab.enter_block(f_scope);
        let n = symtab.create_parameter_object("n", ParamMode::ByValue, f);
        symtab.declare_object(n).unwrap();
        let local = symtab.create_variable_object("tmp");
        symtab.declare_object(local).unwrap();
        symtab.exit_block().unwrap();

        symtab.free_object(f).unwrap();
        assert_eq!(symtab.live_objects(), live_before);
        assert!(symtab.object(n).is_none());
        assert!(symtab.object(local).is_none());
        assert!(symtab.scope(f_scope).is_none());
    }

    #[test]
    fn test_double_free_is_reported() {
        let mut symtab = SymTab::new();
        let c = symtab.create_constant_object("C");
        symtab.free_object(c).unwrap();
        let err = symtab.free_object(c).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownObject);
    }

    #[test]
    fn test_free_scope_keeps_routine_parameters() {
        let (mut symtab, _, _) = with_program();
        let p = symtab.create_procedure_object("P");
        let p_scope = symtab.object(p).and_then(Object::scope).unwrap();
        symtab.enter_block(p_scope);
        let a = symtab.create_parameter_object("a", ParamMode::ByValue, p);
        symtab.declare_object(a).unwrap();
        let v = symtab.create_variable_object("v");
        symtab.declare_object(v).unwrap();
        symtab.exit_block().unwrap();

        symtab.free_scope(p_scope).unwrap();
        assert!(symtab.object(a).is_some());
        assert!(symtab.object(v).is_none());
    }

    #[test]
    fn test_clean_releases_whole_graph() {
        let (mut symtab, _, _) = with_program();
        let f = symtab.create_function_object("F");
        symtab.declare_object(f).unwrap();
        let f_scope = symtab.object(f).and_then(Object::scope).unwrap();
        symtab.enter_block(f_scope);
        let x = symtab.create_parameter_object("x", ParamMode::ByValue, f);
        symtab.declare_object(x).unwrap();
        symtab.exit_block().unwrap();

        let teardown = symtab.clean();
        assert_eq!(teardown.orphan_objects, 0);
        assert_eq!(teardown.orphan_scopes, 0);
        // program + F + x + 5 built-ins + 2 built-in parameters
        assert_eq!(teardown.objects_released, 10);
    }

    #[test]
    fn test_clean_skips_released_sibling() {
        let (mut symtab, _, _) = with_program();
        let vars: Vec<_> = ["a", "b", "c"]
            .into_iter()
            .map(|name| {
                let v = symtab.create_variable_object(name);
                symtab.declare_object(v).unwrap();
                v
            })
            .collect();
        symtab.free_object(vars[0]).unwrap();

        let teardown = symtab.clean();
        assert_eq!(teardown.stale_handles, 1);
        assert_eq!(teardown.orphan_objects, 0);
        assert_eq!(teardown.orphan_scopes, 0);
    }

    #[test]
    fn test_free_object_reports_stale_entry_after_releasing_siblings() {
        let (mut symtab, program, _) = with_program();
        let a = symtab.create_variable_object("a");
        symtab.declare_object(a).unwrap();
        let b = symtab.create_variable_object("b");
        symtab.declare_object(b).unwrap();
        symtab.free_object(a).unwrap();

        let err = symtab.free_object(program).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownObject);
        assert!(symtab.object(program).is_none());
        assert!(symtab.object(b).is_none());
    }

    #[test]
    fn test_free_routine_with_repeated_parameter() {
        let (mut symtab, _, _) = with_program();
        let f = symtab.create_function_object("F");
        symtab.declare_object(f).unwrap();
        let f_scope = symtab.object(f).and_then(Object::scope).unwrap();
        symtab.enter_block(f_scope);
        let x = symtab.create_parameter_object("x", ParamMode::ByValue, f);
        symtab.declare_object(x).unwrap();
        symtab.declare_object(x).unwrap();
        let local = symtab.create_variable_object("local");
        symtab.declare_object(local).unwrap();
        symtab.exit_block().unwrap();
        assert_eq!(symtab.object(f).and_then(Object::params).map(<[ObjectId]>::len), Some(2));

        symtab.free_object(f).unwrap();
        assert!(symtab.object(f).is_none());
        assert!(symtab.object(x).is_none());
        assert!(symtab.object(local).is_none());
        assert!(symtab.scope(f_scope).is_none());
    }
}
