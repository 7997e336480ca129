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

//! Type definitions for KPL.
//!
//! A [`Type`] is a plain value: arrays own their element type, so
//! duplicating a type deep-copies the whole chain and dropping it
//! releases the chain innermost first.

use crate::error::{CompileError, ErrorCode, Result};
use std::fmt;

/// The class of a type, without any array payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeClass {
    Int,
    Char,
    Array,
}

/// A static type in the KPL language.
///
/// The default value is `Int`, used as a placeholder until the parser
/// fills in the declared type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Type {
    /// Integer.
    #[default]
    Int,
    /// Single character.
    Char,
    /// Fixed-size array. Arrays of different sizes are distinct types.
    Array {
        /// Number of elements (positive).
        size: usize,
        /// The owned element type.
        element: Box<Type>,
    },
}

impl Type {
    /// Create the integer type.
    pub fn int() -> Self {
        Type::Int
    }

    /// Create the character type.
    pub fn char() -> Self {
        Type::Char
    }

    /// Create an array type, taking ownership of `element`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero. Use [`Type::try_array`] for sizes that
    /// come from source text.
    pub fn array(size: usize, element: Type) -> Self {
        assert!(size > 0, "array size must be positive");
        Type::Array {
            size,
            element: Box::new(element),
        }
    }

    /// Create an array type, rejecting a zero size with
    /// [`ErrorCode::InvalidArraySize`].
    pub fn try_array(size: usize, element: Type) -> Result<Self> {
        if size == 0 {
            return Err(CompileError::internal(
                ErrorCode::InvalidArraySize,
                "Array size must be positive",
            )
            .with_hint("declare at least one element, like array(.1.) of integer"));
        }
        Ok(Type::Array {
            size,
            element: Box::new(element),
        })
    }

    /// Deep copy of this type. The copy shares nothing with `self`.
    pub fn duplicate(&self) -> Self {
        match self {
            Type::Int => Type::Int,
            Type::Char => Type::Char,
            Type::Array { size, element } => Type::Array {
                size: *size,
                element: Box::new(element.duplicate()),
            },
        }
    }

    /// Structural equality: same class, and for arrays the same size and
    /// recursively equal element types.
    pub fn compare(&self, other: &Type) -> bool {
        match (self, other) {
            (Type::Int, Type::Int) | (Type::Char, Type::Char) => true,
            (
                Type::Array {
                    size: s1,
                    element: e1,
                },
                Type::Array {
                    size: s2,
                    element: e2,
                },
            ) => s1 == s2 && e1.compare(e2),
            _ => false,
        }
    }

    /// Release this type. Element types go first, then the array itself.
    pub fn free(self) {
        if let Type::Array { element, .. } = self {
            (*element).free();
        }
    }

    /// Get the class of this type.
    pub fn class(&self) -> TypeClass {
        match self {
            Type::Int => TypeClass::Int,
            Type::Char => TypeClass::Char,
            Type::Array { .. } => TypeClass::Array,
        }
    }

    /// Check if this is an array type.
    pub fn is_array(&self) -> bool {
        matches!(self, Type::Array { .. })
    }

    /// Get the element type if this is an array.
    pub fn element_type(&self) -> Option<&Type> {
        match self {
            Type::Array { element, .. } => Some(element),
            _ => None,
        }
    }

    /// Get the element count if this is an array.
    pub fn array_size(&self) -> Option<usize> {
        match self {
            Type::Array { size, .. } => Some(*size),
            _ => None,
        }
    }

    /// Number of nested array levels (0 for scalars).
    pub fn depth(&self) -> usize {
        match self {
            Type::Array { element, .. } => 1 + element.depth(),
            _ => 0,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => write!(f, "Int"),
            Type::Char => write!(f, "Char"),
            Type::Array { size, element } => write!(f, "Arr({},{})", size, element),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "array size must be positive")]
    fn test_zero_sized_array_panics() {
        let _ = Type::array(0, Type::int());
    }

    #[test]
    fn test_try_array() {
        let err = Type::try_array(0, Type::char()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArraySize);
        assert!(!err.code.is_internal());
        assert_eq!(
            Type::try_array(4, Type::char()).unwrap(),
            Type::array(4, Type::char())
        );
    }

    #[test]
    fn test_leaf_types() {
        assert_eq!(Type::int().class(), TypeClass::Int);
        assert_eq!(Type::char().class(), TypeClass::Char);
        assert!(!Type::int().is_array());
        assert_eq!(Type::int().element_type(), None);
    }

    #[test]
    fn test_array_type() {
        let t = Type::array(10, Type::char());
        assert!(t.is_array());
        assert_eq!(t.array_size(), Some(10));
        assert_eq!(t.element_type(), Some(&Type::Char));
        assert_eq!(t.depth(), 1);
    }

    #[test]
    fn test_compare_scalars() {
        assert!(Type::int().compare(&Type::int()));
        assert!(Type::char().compare(&Type::char()));
        assert!(!Type::int().compare(&Type::char()));
        assert!(!Type::int().compare(&Type::array(1, Type::int())));
    }

    #[test]
    fn test_compare_arrays() {
        let a = Type::array(10, Type::array(5, Type::int()));
        let b = Type::array(10, Type::array(5, Type::int()));
        let c = Type::array(10, Type::array(6, Type::int()));
        let d = Type::array(11, Type::array(5, Type::int()));
        assert!(a.compare(&b));
        assert!(!a.compare(&c));
        assert!(!a.compare(&d));
    }

    #[test]
    fn test_duplicate_is_independent() {
        let original = Type::array(3, Type::array(2, Type::char()));
        let mut copy = original.duplicate();
        assert!(original.compare(&copy));

        if let Type::Array { size, .. } = &mut copy {
            *size = 4;
        }
        assert_eq!(original.array_size(), Some(3));
        assert!(!original.compare(&copy));
    }

    #[test]
    fn test_free_leaves_duplicate_intact() {
        let original = Type::array(10, Type::array(5, Type::int()));
        let copy = original.duplicate();
        original.free();
        assert!(copy.compare(&Type::array(10, Type::array(5, Type::int()))));
    }

    #[test]
    fn test_type_display() {
        assert_eq!(Type::int().to_string(), "Int");
        assert_eq!(Type::char().to_string(), "Char");
        assert_eq!(
            Type::array(10, Type::array(5, Type::int())).to_string(),
            "Arr(10,Arr(5,Int))"
        );
    }
}
