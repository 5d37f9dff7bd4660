//! Display registers.

use crate::{Level, StackAddress};

/// Per-level frame base addresses. `display[l]` is the base of the innermost active frame at level `l`.
///
/// Reading a level that was never set yields 0, so level 0 (the global frame) always starts at address 0.
#[derive(Clone, Debug, Default)]
pub struct Display {
    bases: Vec<StackAddress>,
}

impl Display {
    /// Creates a new display with every level based at 0.
    pub fn new() -> Self {
        Display {
            bases: Vec::new(),
        }
    }
    /// Returns the frame base of the given level.
    #[cfg_attr(not(debug_assertions), inline(always))]
    pub fn get(self: &Self, level: Level) -> StackAddress {
        self.bases.get(level).copied().unwrap_or(0)
    }
    /// Sets the frame base of the given level.
    #[cfg_attr(not(debug_assertions), inline(always))]
    pub fn set(self: &mut Self, level: Level, base: StackAddress) {
        if level >= self.bases.len() {
            self.bases.resize(level + 1, 0);
        }
        self.bases[level] = base;
    }
    /// Returns the explicitly set levels as slice.
    pub fn data(self: &Self) -> &[StackAddress] {
        &self.bases
    }
    /// Resets all levels to 0.
    pub fn reset(self: &mut Self) {
        self.bases.clear();
    }
}
