
/// Type of a runtime value. Booleans are represented as 0 and 1.
pub type Value = i64;

/// Type representing an absolute stack address.
pub type StackAddress = usize;

/// Type representing a stack offset relative to a frame base. Parameters have negative offsets.
pub type StackOffset = isize;

/// Type representing the index of an instruction within a program.
pub type CodeAddress = usize;

/// Type representing a lexical level. 0 is the global level.
pub type Level = usize;

/// Number of stack slots reserved at the base of each frame: the saved display entry and the return address.
pub const FRAME_HEADER_SIZE: StackOffset = 2;

/// Name of the builtin print function registered before any user code is compiled.
pub const PRINT_FUNCTION: &str = "print";
