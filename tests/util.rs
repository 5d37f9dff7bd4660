#![allow(dead_code)]

pub use tinypl::Value;
pub use tinypl::ast::{self, Statement, Expression, Else, BinaryOperator as BO, UnaryOperator as UO, PostfixOperator as PO};
pub use tinypl::compiler::{Program, Instruction, CompileErrorKind};
pub use tinypl::runtime::{VM, VMState, RuntimeError, RuntimeErrorKind};

/// Installs the test logger. Run with `RUST_LOG=trace` to see compiler and VM traces.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Expression shorthands

pub fn int(value: Value) -> Expression<'static> {
    Expression::int(value)
}

pub fn boolean(value: bool) -> Expression<'static> {
    Expression::bool(value)
}

pub fn var(name: &str) -> Expression<'_> {
    Expression::var(name)
}

pub fn call<'a>(name: &'a str, args: Vec<Expression<'a>>) -> Expression<'a> {
    Expression::call(name, args)
}

pub fn bin<'a>(left: Expression<'a>, op: BO, right: Expression<'a>) -> Expression<'a> {
    Expression::binary(left, op, right)
}

pub fn unary(op: UO, expr: Expression<'_>) -> Expression<'_> {
    Expression::unary(op, expr)
}

pub fn inc(name: &str) -> Expression<'_> {
    Expression::postfix(Expression::var(name), PO::Increment)
}

pub fn dec(name: &str) -> Expression<'_> {
    Expression::postfix(Expression::var(name), PO::Decrement)
}

// Statement shorthands

/// `print(expr);`
pub fn print(expr: Expression<'_>) -> Statement<'_> {
    Statement::expr(Expression::call("print", vec![ expr ]))
}

pub fn let_<'a>(name: &'a str, expr: Expression<'a>) -> Statement<'a> {
    Statement::let_binding(name, expr)
}

pub fn assign<'a>(name: &'a str, expr: Expression<'a>) -> Statement<'a> {
    Statement::assign(name, expr)
}

pub fn return_(expr: Expression<'_>) -> Statement<'_> {
    Statement::ret(Some(expr))
}

pub fn expr(expr: Expression<'_>) -> Statement<'_> {
    Statement::expr(expr)
}

pub fn block(statements: Vec<Statement<'_>>) -> Statement<'_> {
    Statement::block(statements)
}

pub fn func<'a>(name: &'a str, params: Vec<&'a str>, statements: Vec<Statement<'a>>) -> Statement<'a> {
    Statement::function(name, params, statements)
}

pub fn if_<'a>(cond: Expression<'a>, if_block: Vec<Statement<'a>>) -> Statement<'a> {
    Statement::if_block(cond, if_block, None)
}

pub fn if_else<'a>(cond: Expression<'a>, if_block: Vec<Statement<'a>>, else_block: Else<'a>) -> Statement<'a> {
    Statement::if_block(cond, if_block, Some(else_block))
}

/// `for (let name = from; name < to; name++) { ... }`
pub fn for_range<'a>(name: &'a str, from: Value, to: Value, statements: Vec<Statement<'a>>) -> Statement<'a> {
    Statement::for_loop(let_(name, int(from)), bin(var(name), BO::Less, int(to)), expr(inc(name)), statements)
}

// Compile and run helpers

/// Compiles the given program, panicking on compile errors.
pub fn compile(program: &ast::Program) -> Program {
    init_logger();
    tinypl::build(program).expect("compile error")
}

/// Compiles the given program and returns the kind of the expected compile error.
pub fn compile_error(program: &ast::Program) -> CompileErrorKind {
    init_logger();
    match tinypl::compiler::compile(program) {
        Ok(program) => panic!("expected compile error, got:\n{}", program),
        Err(error) => error.kind().clone(),
    }
}

/// Compiles and runs the given program and returns the printed values.
pub fn run(program: &ast::Program) -> Vec<Value> {
    let program = compile(program);
    let mut vm = VM::new(&program, Vec::new());
    let state = vm.run().expect("runtime error");
    assert_eq!(state, VMState::Terminated);
    vm.into_output()
}

/// Compiles and runs the given program, expecting a runtime error. Returns the values printed up to the error.
pub fn run_error(program: &ast::Program) -> (Vec<Value>, RuntimeError) {
    let program = compile(program);
    let mut vm = VM::new(&program, Vec::new());
    let error = vm.run().expect_err("expected runtime error");
    assert_eq!(vm.state(), VMState::RuntimeError);
    (vm.into_output(), error)
}
