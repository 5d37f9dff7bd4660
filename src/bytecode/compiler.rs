//! Bytecode emitter. Compiles bytecode from AST.

#[allow(clippy::module_inception)]
mod compiler;
mod symbols;
mod stack_frame;
mod error;

pub use compiler::{compile, Compiler};
pub use symbols::{SymbolTable, Declaration};
pub use error::{CompileError, CompileErrorKind, CompileResult};
