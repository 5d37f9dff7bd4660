//! Runtime traits.

use std::io::{self, Write};
use crate::Value;

/// Destination for values printed by the `pri` instruction.
pub trait Output {
    /// Emits a single printed value.
    fn print(self: &mut Self, value: Value) -> io::Result<()>;
}

/// Collects printed values in order.
impl Output for Vec<Value> {
    fn print(self: &mut Self, value: Value) -> io::Result<()> {
        self.push(value);
        Ok(())
    }
}

/// Writes each printed value on its own line.
impl Output for io::Stdout {
    fn print(self: &mut Self, value: Value) -> io::Result<()> {
        writeln!(self.lock(), "{}", value)
    }
}

impl<T> Output for &mut T where T: Output + ?Sized {
    fn print(self: &mut Self, value: Value) -> io::Result<()> {
        (**self).print(value)
    }
}
