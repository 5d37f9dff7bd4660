//! Types shared between compiler and runtime.

pub mod error;
