//! Lexical scope chain for target type resolution.
//!
//! The walker opens a scope for each class, method, block and switch, and
//! declares fields, parameters and locals as it reaches them. A lookup is
//! made at a source position and only sees declarations that start before
//! it, searching the innermost scope first and, within a scope, the latest
//! declaration first.

use smallvec::SmallVec;
use unpack_ir::{Name, ParsedTypeId};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Declaration {
    name: Name,
    ty: ParsedTypeId,
    /// Start offset of the declaration.
    position: u32,
}

#[derive(Clone, Debug, Default)]
struct Scope {
    declarations: SmallVec<[Declaration; 8]>,
}

/// Stack of open scopes, innermost last.
#[derive(Clone, Debug, Default)]
pub struct ScopeChain {
    scopes: Vec<Scope>,
}

impl ScopeChain {
    pub fn new() -> Self {
        ScopeChain::default()
    }

    pub fn push(&mut self) {
        self.scopes.push(Scope::default());
    }

    pub fn pop(&mut self) {
        self.scopes.pop();
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Declare `name` in the innermost scope. Ignored when no scope is open.
    pub fn declare(&mut self, name: Name, ty: ParsedTypeId, position: u32) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.declarations.push(Declaration { name, ty, position });
        }
    }

    /// Declared type of `name` as seen from `at`.
    pub fn resolve(&self, name: Name, at: u32) -> Option<ParsedTypeId> {
        self.scopes.iter().rev().find_map(|scope| {
            scope
                .declarations
                .iter()
                .rev()
                .find(|decl| decl.name == name && decl.position < at)
                .map(|decl| decl.ty)
        })
    }
}
