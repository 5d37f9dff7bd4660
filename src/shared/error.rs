use thiserror::Error;
#[cfg(feature="compiler")]
use crate::bytecode::compiler::CompileError;
#[cfg(feature="runtime")]
use crate::bytecode::runtime::RuntimeError;

/// An error generated during program compilation or execution.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[cfg(feature="compiler")]
    #[error("compile error: {0}")]
    Compile(#[from] CompileError),
    #[cfg(feature="runtime")]
    #[error("runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}
