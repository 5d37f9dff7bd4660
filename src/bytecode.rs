//! Bytecode generation and execution.

#[macro_use]
mod macros;
mod opcodes;
mod program;
#[cfg(feature="compiler")]
mod writer;
#[cfg(feature="compiler")]
pub mod compiler;
#[cfg(feature="runtime")]
pub mod runtime;

pub use opcodes::Instruction;
pub use program::Program;
#[cfg(feature="compiler")]
pub use writer::Writer;
