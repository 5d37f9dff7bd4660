//! Compiler frontend. The AST consumed by the compiler.

pub mod ast;
