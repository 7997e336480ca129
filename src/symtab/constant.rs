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

//! Constant values attached to `CONST` declarations.

use super::types::TypeClass;
use crate::error::{CompileError, ErrorCode, Result};
use std::fmt;

/// A declared constant: either an integer or a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstantValue {
    Int(i32),
    Char(char),
}

impl ConstantValue {
    /// Create an integer constant.
    pub fn int(value: i32) -> Self {
        ConstantValue::Int(value)
    }

    /// Create a character constant.
    pub fn char(value: char) -> Self {
        ConstantValue::Char(value)
    }

    /// Build a constant from a type class tag and a raw payload.
    ///
    /// This is the entry point for tagged data coming from outside the
    /// symbol table (e.g. a folded token value). Only scalar classes carry
    /// constants; an array tag or a payload that is not a valid character
    /// is rejected with [`ErrorCode::InvalidConstantKind`].
    pub fn from_tagged(class: TypeClass, raw: i32) -> Result<Self> {
        match class {
            TypeClass::Int => Ok(ConstantValue::Int(raw)),
            TypeClass::Char => u32::try_from(raw)
                .ok()
                .and_then(char::from_u32)
                .map(ConstantValue::Char)
                .ok_or_else(|| {
                    CompileError::internal(
                        ErrorCode::InvalidConstantKind,
                        format!("Invalid character constant value {}", raw),
                    )
                }),
            TypeClass::Array => Err(CompileError::internal(
                ErrorCode::InvalidConstantKind,
                "Invalid constant value: arrays cannot be constants",
            )),
        }
    }

    /// Independent copy of this value.
    pub fn duplicate(&self) -> Self {
        match *self {
            ConstantValue::Int(i) => ConstantValue::Int(i),
            ConstantValue::Char(c) => ConstantValue::Char(c),
        }
    }

    /// The type class of this value.
    pub fn type_class(&self) -> TypeClass {
        match self {
            ConstantValue::Int(_) => TypeClass::Int,
            ConstantValue::Char(_) => TypeClass::Char,
        }
    }

    /// Get the integer payload, if this is an integer constant.
    pub fn as_int(&self) -> Option<i32> {
        match self {
            ConstantValue::Int(i) => Some(*i),
            ConstantValue::Char(_) => None,
        }
    }

    /// Get the character payload, if this is a character constant.
    pub fn as_char(&self) -> Option<char> {
        match self {
            ConstantValue::Char(c) => Some(*c),
            ConstantValue::Int(_) => None,
        }
    }
}

impl Default for ConstantValue {
    fn default() -> Self {
        ConstantValue::Int(0)
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Int(i) => write!(f, "{}", i),
            ConstantValue::Char(c) => write!(f, "'{}'", c),
        }
    }
}
