
pub use crate::shared::error::Error;

#[cfg(feature="compiler")]
pub mod ast {
    //! Abstract syntax tree representation.
    pub use crate::frontend::ast::*;
}

#[cfg(feature="compiler")]
pub mod compiler {
    //! Bytecode generation.
    pub use crate::bytecode::{Program, Instruction, Writer};
    pub use crate::bytecode::compiler::{compile, Compiler, CompileError, CompileErrorKind, CompileResult};
}

#[cfg(feature="runtime")]
pub mod runtime {
    //! Bytecode execution.
    pub use crate::bytecode::{Program, Instruction};
    pub use crate::bytecode::runtime::{VM, VMState, Output, Stack, Display, RuntimeError, RuntimeErrorKind, RuntimeResult};
}
