//! Instruction writer.

use crate::CodeAddress;
use crate::bytecode::{Instruction, Program};

/// Instruction buffer and writer. Instruction emitters (one per instruction) are generated by `impl_vm!`.
#[derive(Debug, Default)]
pub struct Writer {
    pub(crate) program  : Program,
    pub(crate) position : CodeAddress,
}

impl Writer {
    /// Creates a new writer instance.
    pub fn new() -> Self {
        Writer {
            program : Program::new(),
            position: 0,
        }
    }
    /// Returns the current length of the program.
    pub fn len(self: &Self) -> CodeAddress {
        self.program.instructions.len()
    }
    /// Returns the current write position.
    pub fn position(self: &Self) -> CodeAddress {
        self.position
    }
    /// Converts the writer into the underlying program.
    pub fn into_program(self: Self) -> Program {
        self.program
    }
    /// Writes an instruction at the current position, appending if the position is at the end of the program.
    /// Returns the address of the written instruction.
    pub fn write(self: &mut Self, instruction: Instruction) -> CodeAddress {
        let position = self.position;
        if position == self.len() {
            self.program.instructions.push(instruction);
        } else {
            self.program.instructions[position] = instruction;
        }
        self.position += 1;
        position
    }
    /// Overwrites the program at given position and returns to the previous position afterwards.
    pub fn overwrite<F>(self: &mut Self, position: CodeAddress, write_fn: F) -> CodeAddress
        where F: FnOnce(&mut Self) -> CodeAddress
    {
        debug_assert!(position < self.len());
        let original_position = self.position;
        self.position = position;
        let result = write_fn(self);
        self.position = original_position;
        result
    }
}
