//! Bytecode execution.

mod vm;
mod stack;
mod display;
mod traits;
mod error;

pub use vm::{VM, VMState};
pub use stack::Stack;
pub use display::Display;
pub use traits::Output;
pub use error::{RuntimeError, RuntimeErrorKind, RuntimeResult};
