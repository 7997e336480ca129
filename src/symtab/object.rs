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

//! Object definitions for the symbol table.
//!
//! An object is one declared name. Its kind decides which attributes it
//! carries; the attributes live in [`ObjectAttrs`], one variant per kind.
//! Objects are stored in the [`SymTab`](super::SymTab) arena and referred
//! to by [`ObjectId`].

use super::constant::ConstantValue;
use super::scope::ScopeId;
use super::types::Type;
use crate::error::{CompileError, ErrorCode, Result};
use std::fmt;

/// Handle to an object stored in the symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(pub(crate) u32);

impl ObjectId {
    /// The arena slot of this object.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// The kind of a declared object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Program,
    Constant,
    Type,
    Variable,
    Function,
    Procedure,
    Parameter,
}

impl ObjectKind {
    /// Whether objects of this kind have a parameter list.
    pub fn is_routine(self) -> bool {
        matches!(self, ObjectKind::Function | ObjectKind::Procedure)
    }

    /// Human-readable name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            ObjectKind::Program => "program",
            ObjectKind::Constant => "constant",
            ObjectKind::Type => "type",
            ObjectKind::Variable => "variable",
            ObjectKind::Function => "function",
            ObjectKind::Procedure => "procedure",
            ObjectKind::Parameter => "parameter",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How an argument is passed to a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamMode {
    /// The parameter receives a copy.
    ByValue,
    /// The parameter aliases the argument (`VAR` parameter).
    ByReference,
}

/// Kind-specific attributes of an object.
///
/// `scope` fields and `params` are owning edges. `routine` is a back
/// reference and is never followed when releasing objects.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectAttrs {
    Program {
        scope: ScopeId,
    },
    Constant {
        value: ConstantValue,
    },
    Type {
        actual_type: Type,
    },
    Variable {
        ty: Type,
        scope: ScopeId,
    },
    Function {
        params: Vec<ObjectId>,
        return_type: Type,
        scope: ScopeId,
    },
    Procedure {
        params: Vec<ObjectId>,
        scope: ScopeId,
    },
    Parameter {
        ty: Type,
        mode: ParamMode,
        routine: ObjectId,
    },
}

/// A declared program entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    /// The declared name.
    pub name: String,
    /// Kind-specific attributes.
    pub attrs: ObjectAttrs,
}

impl Object {
    pub(crate) fn new(name: impl Into<String>, attrs: ObjectAttrs) -> Self {
        Self {
            name: name.into(),
            attrs,
        }
    }

    /// The declared name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The kind tag of this object.
    pub fn kind(&self) -> ObjectKind {
        match self.attrs {
            ObjectAttrs::Program { .. } => ObjectKind::Program,
            ObjectAttrs::Constant { .. } => ObjectKind::Constant,
            ObjectAttrs::Type { .. } => ObjectKind::Type,
            ObjectAttrs::Variable { .. } => ObjectKind::Variable,
            ObjectAttrs::Function { .. } => ObjectKind::Function,
            ObjectAttrs::Procedure { .. } => ObjectKind::Procedure,
            ObjectAttrs::Parameter { .. } => ObjectKind::Parameter,
        }
    }

    /// The scope owned by this object (program, routine or variable).
    pub fn scope(&self) -> Option<ScopeId> {
        match self.attrs {
            ObjectAttrs::Program { scope }
            | ObjectAttrs::Variable { scope, .. }
            | ObjectAttrs::Function { scope, .. }
            | ObjectAttrs::Procedure { scope, .. } => Some(scope),
            _ => None,
        }
    }

    /// The type carried by this object.
    ///
    /// This is the declared type of a variable or parameter, the actual
    /// type of a type alias and the return type of a function.
    pub fn ty(&self) -> Option<&Type> {
        match &self.attrs {
            ObjectAttrs::Type { actual_type } => Some(actual_type),
            ObjectAttrs::Variable { ty, .. } | ObjectAttrs::Parameter { ty, .. } => Some(ty),
            ObjectAttrs::Function { return_type, .. } => Some(return_type),
            _ => None,
        }
    }

    /// Mutable access to the type carried by this object.
    pub fn ty_mut(&mut self) -> Option<&mut Type> {
        match &mut self.attrs {
            ObjectAttrs::Type { actual_type } => Some(actual_type),
            ObjectAttrs::Variable { ty, .. } | ObjectAttrs::Parameter { ty, .. } => Some(ty),
            ObjectAttrs::Function { return_type, .. } => Some(return_type),
            _ => None,
        }
    }

    /// Replace the type carried by this object.
    pub fn set_type(&mut self, new_type: Type) -> Result<()> {
        let kind = self.kind();
        match self.ty_mut() {
            Some(slot) => {
                *slot = new_type;
                Ok(())
            }
            None => Err(wrong_kind(&self.name, kind, "a type")),
        }
    }

    /// The value of a constant.
    pub fn value(&self) -> Option<&ConstantValue> {
        match &self.attrs {
            ObjectAttrs::Constant { value } => Some(value),
            _ => None,
        }
    }

    /// Replace the value of a constant.
    pub fn set_value(&mut self, new_value: ConstantValue) -> Result<()> {
        let kind = self.kind();
        match &mut self.attrs {
            ObjectAttrs::Constant { value } => {
                *value = new_value;
                Ok(())
            }
            _ => Err(wrong_kind(&self.name, kind, "a constant value")),
        }
    }

    /// The parameter list of a function or procedure, in declaration order.
    pub fn params(&self) -> Option<&[ObjectId]> {
        match &self.attrs {
            ObjectAttrs::Function { params, .. } | ObjectAttrs::Procedure { params, .. } => {
                Some(params)
            }
            _ => None,
        }
    }

    pub(crate) fn params_mut(&mut self) -> Option<&mut Vec<ObjectId>> {
        match &mut self.attrs {
            ObjectAttrs::Function { params, .. } | ObjectAttrs::Procedure { params, .. } => {
                Some(params)
            }
            _ => None,
        }
    }

    /// The passing mode of a parameter.
    pub fn param_mode(&self) -> Option<ParamMode> {
        match self.attrs {
            ObjectAttrs::Parameter { mode, .. } => Some(mode),
            _ => None,
        }
    }

    /// The function or procedure that declares a parameter.
    pub fn routine(&self) -> Option<ObjectId> {
        match self.attrs {
            ObjectAttrs::Parameter { routine, .. } => Some(routine),
            _ => None,
        }
    }
}

fn wrong_kind(name: &str, kind: ObjectKind, what: &str) -> CompileError {
    CompileError::internal(
        ErrorCode::WrongObjectKind,
        format!("{} '{}' does not carry {}", kind, name, what),
    )
}
