//! Compiled program.

use std::fmt::{self, Display};
use std::ops::Index;
use crate::CodeAddress;
use crate::bytecode::Instruction;

/// A compiled program: an ordered sequence of instructions, addressed by index. Execution begins at index 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub(crate) instructions: Vec<Instruction>,
}

impl Program {
    /// Creates a new, empty program.
    pub fn new() -> Self {
        Program {
            instructions: Vec::new(),
        }
    }
    /// Returns the number of instructions in the program.
    pub fn len(self: &Self) -> usize {
        self.instructions.len()
    }
    /// Returns whether the program contains no instructions.
    pub fn is_empty(self: &Self) -> bool {
        self.instructions.is_empty()
    }
    /// Returns the instruction at the given address, if any.
    pub fn get(self: &Self, address: CodeAddress) -> Option<Instruction> {
        self.instructions.get(address).copied()
    }
    /// Returns the program's instructions as a slice.
    pub fn instructions(self: &Self) -> &[Instruction] {
        &self.instructions
    }
}

impl From<Vec<Instruction>> for Program {
    fn from(instructions: Vec<Instruction>) -> Self {
        Program { instructions }
    }
}

impl Index<CodeAddress> for Program {
    type Output = Instruction;
    fn index(self: &Self, address: CodeAddress) -> &Instruction {
        &self.instructions[address]
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;
    fn into_iter(self: Self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

/// Writes one instruction per line in canonical text form.
impl Display for Program {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instruction in &self.instructions {
            writeln!(f, "{}", instruction)?;
        }
        Ok(())
    }
}
