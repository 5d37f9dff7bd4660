//! A virtual machine for running compiled programs.

use log::{debug, trace};
use crate::{Value, StackAddress, StackOffset, Level};
use crate::bytecode::{Instruction, Program};
use crate::bytecode::runtime::{Stack, Display, Output, RuntimeError, RuntimeErrorKind, RuntimeResult};

/// Current state of the vm, checked after each instruction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VMState {
    /// The program is ready to run.
    Ready,
    /// The program has terminated and must be reset before it can be run again.
    Terminated,
    /// The program encountered a runtime error and must be reset before it can be run again.
    RuntimeError,
}

/// A virtual machine executing a program's instructions against a value stack and a display.
///
/// Printed values are sent to the VM's `Output`.
#[derive(Debug)]
pub struct VM<O> {
    pub(crate) program  : Program,
    pub(crate) pc       : usize,
    pub(crate) state    : VMState,
    pub(crate) stack    : Stack,
    pub(crate) display  : Display,
    pub(crate) output   : O,
}

/// Public VM methods.
impl<O> VM<O> where O: Output {
    /// Create a new VM instance with the given Program, printing to the given output.
    pub fn new(program: &Program, output: O) -> Self {
        VM {
            program : program.clone(),
            pc      : 0,
            state   : VMState::Ready,
            stack   : Stack::new(),
            display : Display::new(),
            output,
        }
    }

    /// Executes instructions until the program counter moves past the last instruction or an error occurs.
    pub fn run(self: &mut Self) -> RuntimeResult<VMState> {
        if self.state != VMState::Ready {
            return Err(RuntimeError::new(self.pc, RuntimeErrorKind::NotReady));
        }
        debug!("running {} instructions", self.program.len());
        while let Some(instruction) = self.program.get(self.pc) {
            self.exec_step(instruction)?;
        }
        self.state = VMState::Terminated;
        debug!("terminated with {} values on the stack", self.stack.sp());
        Ok(self.state)
    }

    /// Executes a single instruction.
    #[cfg(feature="debugging")]
    pub fn step(self: &mut Self) -> RuntimeResult<VMState> {
        if self.state != VMState::Ready {
            return Err(RuntimeError::new(self.pc, RuntimeErrorKind::NotReady));
        }
        if let Some(instruction) = self.program.get(self.pc) {
            self.exec_step(instruction)?;
        }
        if self.pc >= self.program.len() {
            self.state = VMState::Terminated;
        }
        Ok(self.state)
    }

    /// Resets the VM, keeping only the program and the output.
    pub fn reset(self: &mut Self) {
        self.stack.reset();
        self.display.reset();
        self.pc = 0;
        self.state = VMState::Ready;
    }

    /// Returns the current VM state.
    pub fn state(self: &Self) -> VMState {
        self.state
    }

    /// Returns the current program counter.
    pub fn pc(self: &Self) -> usize {
        self.pc
    }

    /// Returns the value stack.
    pub fn stack(self: &Self) -> &Stack {
        &self.stack
    }

    /// Returns the display.
    pub fn display(self: &Self) -> &Display {
        &self.display
    }

    /// Returns the output.
    pub fn output(self: &Self) -> &O {
        &self.output
    }

    /// Consumes the VM and returns its output.
    pub fn into_output(self: Self) -> O {
        self.output
    }

    /// Returns the program as a string, one instruction per line, prefixed with its address.
    #[cfg(feature="debugging")]
    pub fn format_program(self: &Self) -> String {
        self.program.instructions().iter().enumerate()
            .map(|(address, instruction)| format!("{:>5} {}\n", address, instruction))
            .collect()
    }

    /// Returns the instruction at the program counter as a string.
    #[cfg(feature="debugging")]
    pub fn format_instruction(self: &Self) -> Option<String> {
        self.program.get(self.pc).map(|instruction| instruction.to_string())
    }

    /// Returns the current stack as a string.
    #[cfg(feature="debugging")]
    pub fn format_stack(self: &Self) -> String {
        format!("{:?}", self.stack.data())
    }

    /// Returns the current display as a string.
    #[cfg(feature="debugging")]
    pub fn format_display(self: &Self) -> String {
        format!("{:?}", self.display.data())
    }
}

/// Internal VM methods.
impl<O> VM<O> where O: Output {
    /// Advances the program counter past the given instruction and executes it. Moves the VM into
    /// the error state on failure.
    fn exec_step(self: &mut Self, instruction: Instruction) -> RuntimeResult {
        let offset = self.pc;
        trace!("{:>5} {}", offset, instruction);
        self.pc += 1;
        self.exec_instruction(instruction).map_err(|kind| {
            self.state = VMState::RuntimeError;
            debug!("runtime error at instruction {}: {}", offset, kind);
            RuntimeError::new(offset, kind)
        })
    }

    /// Computes the absolute stack address of a frame offset in the innermost activation of the given level.
    pub(crate) fn address(self: &Self, level: Level, offset: StackOffset) -> Result<StackAddress, RuntimeErrorKind> {
        let base = self.display.get(level) as StackOffset;
        let address = base.checked_add(offset).ok_or(RuntimeErrorKind::InvalidAddress(offset))?;
        StackAddress::try_from(address).map_err(|_| RuntimeErrorKind::InvalidAddress(address))
    }

    /// Converts a saved display entry or return address read from a frame header.
    pub(crate) fn saved_address(value: Value) -> Result<StackAddress, RuntimeErrorKind> {
        StackAddress::try_from(value).map_err(|_| RuntimeErrorKind::InvalidAddress(value as StackOffset))
    }
}
