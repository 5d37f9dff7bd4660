//! Instruction definitions. Implemented on Writer/VM.

use crate::{Value, Level, StackOffset, CodeAddress};
#[cfg(feature="runtime")]
use crate::bytecode::runtime::RuntimeErrorKind;

impl_vm!{

    /// Pushes the given value onto the stack.
    fn lit(&mut self, value: Value) {
        self.stack.push(value);
    }

    /// Discards the top stack value.
    fn pop(&mut self) {
        self.stack.pop()?;
    }

    /// Loads the value at the given frame offset of the innermost activation of the given level and pushes it onto the stack.
    fn lod(&mut self, level: Level, offset: StackOffset) {
        let address = self.address(level, offset)?;
        let value = self.stack.load(address)?;
        self.stack.push(value);
    }

    /// Pops the top stack value and stores it at the given frame offset of the innermost activation of the given level.
    fn sto(&mut self, level: Level, offset: StackOffset) {
        let value = self.stack.pop()?;
        let address = self.address(level, offset)?;
        self.stack.store(address, value)?;
    }

    /// Jumps to the given instruction.
    fn jmp(&mut self, target: CodeAddress) {
        self.pc = target;
    }

    /// Pops the top stack value and jumps to the given instruction if the value is not 0.
    fn jpc(&mut self, target: CodeAddress) {
        if self.stack.pop()? != 0 {
            self.pc = target;
        }
    }

    /// Negates the top stack value.
    fn neg(&mut self) {
        let value = self.stack.pop()?;
        self.stack.push(value.wrapping_neg());
    }

    /// Pops 2 values from the stack and pushes their sum.
    fn add(&mut self) {
        let (a, b) = self.stack.pop_2()?;
        self.stack.push(a.wrapping_add(b));
    }

    /// Pops 2 values from the stack and pushes their difference.
    fn sub(&mut self) {
        let (a, b) = self.stack.pop_2()?;
        self.stack.push(a.wrapping_sub(b));
    }

    /// Pops 2 values from the stack and pushes their product.
    fn mul(&mut self) {
        let (a, b) = self.stack.pop_2()?;
        self.stack.push(a.wrapping_mul(b));
    }

    /// Pops 2 values from the stack and pushes their quotient, truncated toward zero.
    fn div(&mut self) {
        let (a, b) = self.stack.pop_2()?;
        if b == 0 {
            return Err(RuntimeErrorKind::DivisionByZero);
        }
        self.stack.push(a.wrapping_div(b));
    }

    /// Pops 2 values from the stack and pushes 1 if they are equal, otherwise 0.
    fn eq(&mut self) {
        let (a, b) = self.stack.pop_2()?;
        self.stack.push((a == b) as Value);
    }

    /// Pops 2 values from the stack and pushes 1 if they differ, otherwise 0.
    fn neq(&mut self) {
        let (a, b) = self.stack.pop_2()?;
        self.stack.push((a != b) as Value);
    }

    /// Pops 2 values from the stack and pushes 1 if the lower one is less than the top one, otherwise 0.
    fn lss(&mut self) {
        let (a, b) = self.stack.pop_2()?;
        self.stack.push((a < b) as Value);
    }

    /// Pops 2 values from the stack and pushes 1 if the lower one is less than or equal to the top one, otherwise 0.
    fn leq(&mut self) {
        let (a, b) = self.stack.pop_2()?;
        self.stack.push((a <= b) as Value);
    }

    /// Pops 2 values from the stack and pushes 1 if the lower one is greater than the top one, otherwise 0.
    fn grt(&mut self) {
        let (a, b) = self.stack.pop_2()?;
        self.stack.push((a > b) as Value);
    }

    /// Pops 2 values from the stack and pushes 1 if the lower one is greater than or equal to the top one, otherwise 0.
    fn geq(&mut self) {
        let (a, b) = self.stack.pop_2()?;
        self.stack.push((a >= b) as Value);
    }

    /// Pops 2 values from the stack and pushes 1 if both are non-zero, otherwise 0.
    /// Both operands have already been evaluated; there is no short-circuiting.
    fn and(&mut self) {
        let (a, b) = self.stack.pop_2()?;
        self.stack.push((a != 0 && b != 0) as Value);
    }

    /// Pops 2 values from the stack and pushes 1 if either is non-zero, otherwise 0.
    /// Both operands have already been evaluated; there is no short-circuiting.
    fn or(&mut self) {
        let (a, b) = self.stack.pop_2()?;
        self.stack.push((a != 0 || b != 0) as Value);
    }

    /// Pops the top stack value and pushes 1 if it is 0, otherwise 0.
    fn not(&mut self) {
        let value = self.stack.pop()?;
        self.stack.push((value == 0) as Value);
    }

    /// Calls the code at the given address, declared on the given level. Saves the display entry of the
    /// level above and the return address in the two header slots of the new frame, which starts at the
    /// current stack pointer.
    fn cal(&mut self, level: Level, target: CodeAddress) {
        let callee_level = level.checked_add(1).ok_or(RuntimeErrorKind::InvalidAddress(level as StackOffset))?;
        let saved_display = self.display.get(callee_level);
        self.display.set(callee_level, self.stack.sp());
        self.stack.push(saved_display as Value);    // save display entry of the callee level
        self.stack.push(self.pc as Value);          // save program counter as it would be after this instruction
        self.pc = target;
    }

    /// Returns from the innermost activation of the given level. Restores display entry and program counter
    /// from the frame header, removes the frame and the given number of caller-pushed parameters and leaves
    /// the popped return value on the stack.
    fn ret(&mut self, level: Level, num_params: usize) {
        let result = self.stack.pop()?;
        let base = self.display.get(level);
        let saved_display = self.stack.load(base)?;
        let saved_pc = self.stack.load(base + 1)?;
        self.display.set(level, Self::saved_address(saved_display)?);
        let size = base.checked_sub(num_params).ok_or(RuntimeErrorKind::InvalidAddress(base as StackOffset - num_params as StackOffset))?;
        self.stack.truncate(size);
        self.pc = Self::saved_address(saved_pc)?;
        self.stack.push(result);
    }

    /// Pops the top stack value and prints it.
    fn pri(&mut self) {
        let value = self.stack.pop()?;
        self.output.print(value).map_err(|error| RuntimeErrorKind::Output(error.kind()))?;
    }
}
