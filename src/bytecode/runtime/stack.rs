//! Operand stack.

use crate::{Value, StackAddress, StackOffset};
use crate::bytecode::runtime::RuntimeErrorKind;

/// The value stack, holding globals, frames, temporaries and parameters.
#[derive(Clone, Debug, Default)]
pub struct Stack {
    data: Vec<Value>,
}

impl Stack {
    /// Creates a new, empty stack.
    pub fn new() -> Self {
        Stack {
            data: Vec::new(),
        }
    }
    /// Returns the current stack pointer, the address of the next free slot.
    #[cfg_attr(not(debug_assertions), inline(always))]
    pub fn sp(self: &Self) -> StackAddress {
        self.data.len()
    }
    /// Returns the entire stack as slice.
    pub fn data(self: &Self) -> &[Value] {
        &self.data
    }
    /// Pushes a value onto the stack.
    #[cfg_attr(not(debug_assertions), inline(always))]
    pub fn push(self: &mut Self, value: Value) {
        self.data.push(value);
    }
    /// Pops a value off the stack.
    #[cfg_attr(not(debug_assertions), inline(always))]
    pub fn pop(self: &mut Self) -> Result<Value, RuntimeErrorKind> {
        self.data.pop().ok_or(RuntimeErrorKind::StackUnderflow)
    }
    /// Pops two values off the stack and returns them in push order: `(lower, top)`.
    #[cfg_attr(not(debug_assertions), inline(always))]
    pub fn pop_2(self: &mut Self) -> Result<(Value, Value), RuntimeErrorKind> {
        let top = self.pop()?;
        let lower = self.pop()?;
        Ok((lower, top))
    }
    /// Loads the value at the given absolute address.
    #[cfg_attr(not(debug_assertions), inline(always))]
    pub fn load(self: &Self, address: StackAddress) -> Result<Value, RuntimeErrorKind> {
        self.data.get(address).copied().ok_or(RuntimeErrorKind::InvalidAddress(address as StackOffset))
    }
    /// Stores a value at the given absolute address. The address must lie within the stack.
    #[cfg_attr(not(debug_assertions), inline(always))]
    pub fn store(self: &mut Self, address: StackAddress, value: Value) -> Result<(), RuntimeErrorKind> {
        let slot = self.data.get_mut(address).ok_or(RuntimeErrorKind::InvalidAddress(address as StackOffset))?;
        *slot = value;
        Ok(())
    }
    /// Truncates the stack to given size.
    #[cfg_attr(not(debug_assertions), inline(always))]
    pub fn truncate(self: &mut Self, size: StackAddress) {
        self.data.truncate(size);
    }
    /// Resets the stack.
    pub fn reset(self: &mut Self) {
        self.data.clear();
    }
}
