//! A bytecode compiler and virtual machine for a small imperative language.
//!
//! Programs are given as an AST (see `ast`), compiled into a flat instruction sequence and executed on a
//! stack machine that addresses variables through a display of per-level frame bases.
//!
//! ```
//! use tinypl::{run, ast::{Statement, Expression, BinaryOperator}};
//!
//! let program = vec![
//!     Statement::let_binding("a", Expression::int(20)),
//!     Statement::expr(Expression::call("print", vec![
//!         Expression::binary(Expression::var("a"), BinaryOperator::Add, Expression::int(22))
//!     ])),
//! ];
//! let printed = run(&program, Vec::new()).unwrap();
//! assert_eq!(printed, vec![ 42 ]);
//! ```

mod config;
pub use config::*;
#[cfg(feature="compiler")]
mod frontend;
mod bytecode;
mod shared;
mod interface;
pub use interface::*;

/// One stop shop to compile the given AST.
#[cfg(feature="compiler")]
pub fn build(program: &ast::Program) -> Result<compiler::Program, Error> {
    Ok(compiler::compile(program)?)
}

/// One stop shop to compile and run the given AST. Returns the output after the program terminates.
#[cfg(all(feature="compiler", feature="runtime"))]
pub fn run<O>(program: &ast::Program, output: O) -> Result<O, Error> where O: runtime::Output {
    let program = build(program)?;
    let mut vm = runtime::VM::new(&program, output);
    vm.run()?;
    Ok(vm.into_output())
}
