use std::io;
use thiserror::Error;
use crate::{CodeAddress, StackOffset};

/// Represents the various possible runtime error-kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RuntimeErrorKind {
    /// A value was popped from an empty stack.
    #[error("stack underflow")]
    StackUnderflow,
    /// A load, store or frame access addressed a slot outside of the stack.
    #[error("invalid stack address {0}")]
    InvalidAddress(StackOffset),
    /// The divisor of a `div` was 0.
    #[error("division by zero")]
    DivisionByZero,
    /// Writing to the output sink failed.
    #[error("output failed: {0}")]
    Output(io::ErrorKind),
    /// The VM has already run and must be reset first.
    #[error("VM state is not ready")]
    NotReady,
}

/// An error reported by the runtime.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} at instruction {offset}")]
pub struct RuntimeError {
    kind: RuntimeErrorKind,
    offset: CodeAddress,
}

impl RuntimeError {
    pub(crate) fn new(offset: CodeAddress, kind: RuntimeErrorKind) -> RuntimeError {
        Self { kind, offset }
    }
    /// The kind of the error.
    pub fn kind(self: &Self) -> &RuntimeErrorKind {
        &self.kind
    }
    /// Address of the instruction that caused the error.
    pub fn offset(self: &Self) -> CodeAddress {
        self.offset
    }
}

pub type RuntimeResult<T = ()> = Result<T, RuntimeError>;
