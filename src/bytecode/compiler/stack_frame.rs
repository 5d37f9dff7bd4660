use crate::{Level, StackOffset, FRAME_HEADER_SIZE};

/// Allocation state of one lexical level.
#[derive(Copy, Clone, Debug)]
pub struct StackFrame {
    /// Offset for the NEXT variable to be inserted.
    pub var_pos     : StackOffset,
    /// Number of parameters the caller pushed for this frame. 0 for blocks and the global frame.
    pub num_params  : usize,
}

impl StackFrame {
    /// Creates the descriptor for a frame entered via `cal`. Locals start after the frame header.
    pub fn new(num_params: usize) -> Self {
        StackFrame {
            var_pos: FRAME_HEADER_SIZE,
            num_params,
        }
    }
    /// Creates the descriptor for the global frame, which has no header.
    pub fn root() -> Self {
        StackFrame {
            var_pos: 0,
            num_params: 0,
        }
    }
}

/// A stack of frame descriptors, one per lexical level. The root frame is level 0.
#[derive(Debug)]
pub struct StackFrames(Vec<StackFrame>);

impl StackFrames {
    /// Create new stack frame descriptor stack containing the global frame.
    pub fn new() -> Self {
        StackFrames(vec![ StackFrame::root() ])
    }
    /// Returns the current lexical level.
    pub fn level(self: &Self) -> Level {
        self.0.len() - 1
    }
    /// Push stack frame descriptor, entering the next level.
    pub fn push(self: &mut Self, frame: StackFrame) {
        self.0.push(frame);
    }
    /// Pop stack frame descriptor and return it. The global frame is never popped.
    pub fn pop(self: &mut Self) -> Option<StackFrame> {
        if self.0.len() > 1 { self.0.pop() } else { None }
    }
    /// Allocates a variable slot in the current frame and returns its offset.
    pub fn alloc_var(self: &mut Self) -> StackOffset {
        let frame = self.current_mut();
        let offset = frame.var_pos;
        frame.var_pos += 1;
        offset
    }
    /// Releases the most recently allocated variable slot of the current frame.
    pub fn free_var(self: &mut Self) {
        self.current_mut().var_pos -= 1;
    }
    /// Returns the parameter count of the current frame.
    pub fn num_params(self: &Self) -> usize {
        self.current().num_params
    }
    fn current(self: &Self) -> &StackFrame {
        &self.0[self.0.len() - 1]
    }
    fn current_mut(self: &mut Self) -> &mut StackFrame {
        let index = self.0.len() - 1;
        &mut self.0[index]
    }
}
