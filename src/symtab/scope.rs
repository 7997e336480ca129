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

//! Scope management for the symbol table.
//!
//! A scope holds the objects declared directly inside one lexical block,
//! in declaration order. It also remembers the object whose body it is
//! and the lexically enclosing scope. Both links are back references.

use super::object::ObjectId;

/// Handle to a scope stored in the symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScopeId(pub(crate) u32);

impl ScopeId {
    /// The arena slot of this scope.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A lexical block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    /// Objects declared in this scope (declaration order, duplicates kept).
    pub objects: Vec<ObjectId>,
    /// The object owning this scope, if any.
    pub owner: Option<ObjectId>,
    /// The enclosing scope, `None` for the outermost one.
    pub outer: Option<ScopeId>,
}

impl Scope {
    /// Create a new empty scope.
    pub fn new(owner: Option<ObjectId>, outer: Option<ScopeId>) -> Self {
        Self {
            objects: Vec::new(),
            owner,
            outer,
        }
    }

    /// Append an object to this scope.
    pub fn add(&mut self, object: ObjectId) {
        self.objects.push(object);
    }

    /// Check whether the object was declared directly in this scope.
    pub fn contains(&self, object: ObjectId) -> bool {
        self.objects.contains(&object)
    }

    /// Number of declarations in this scope.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if nothing has been declared in this scope.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_scope_is_empty() {
        let scope = Scope::new(Some(ObjectId(0)), None);
        assert!(scope.is_empty());
        assert_eq!(scope.owner, Some(ObjectId(0)));
        assert_eq!(scope.outer, None);
    }

    #[test]
    fn test_add_keeps_order_and_duplicates() {
        let mut scope = Scope::new(None, Some(ScopeId(1)));
        scope.add(ObjectId(4));
        scope.add(ObjectId(2));
        scope.add(ObjectId(4));
        assert_eq!(scope.objects, vec![ObjectId(4), ObjectId(2), ObjectId(4)]);
        assert_eq!(scope.len(), 3);
        assert!(scope.contains(ObjectId(2)));
        assert!(!scope.contains(ObjectId(9)));
    }
}
