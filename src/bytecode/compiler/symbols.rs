//! Lexically scoped symbol table.

use std::collections::HashMap;
use crate::{Level, StackOffset, CodeAddress};

/// What a name refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Declaration {
    /// A local variable at a non-negative offset from its frame base.
    Variable { level: Level, offset: StackOffset },
    /// A function parameter at a negative offset from its frame base.
    Parameter { level: Level, offset: StackOffset },
    /// A function whose first instruction is at `entry`.
    Function { level: Level, entry: CodeAddress, num_params: usize },
}

/// A stack of scopes, innermost last. Declarations shadow same-named ones in outer scopes
/// and replace same-named ones in the same scope.
#[derive(Debug)]
pub struct SymbolTable<'a> {
    scopes: Vec<HashMap<&'a str, Declaration>>,
}

impl<'a> SymbolTable<'a> {
    /// Creates a new symbol table containing the root scope.
    pub fn new() -> Self {
        SymbolTable {
            scopes: vec![ HashMap::new() ],
        }
    }
    /// Enters a new innermost scope.
    pub fn enter(self: &mut Self) {
        self.scopes.push(HashMap::new());
    }
    /// Leaves the innermost scope, discarding its declarations. The root scope is never discarded.
    pub fn leave(self: &mut Self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }
    /// Declares a name in the innermost scope.
    pub fn declare(self: &mut Self, name: &'a str, declaration: Declaration) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name, declaration);
        }
    }
    /// Resolves a name, searching from the innermost scope outward.
    pub fn resolve(self: &Self, name: &str) -> Option<Declaration> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name).copied())
    }
}
