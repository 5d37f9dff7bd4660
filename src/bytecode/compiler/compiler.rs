use log::{debug, trace};
use crate::{Value, CodeAddress, StackOffset, PRINT_FUNCTION};
use crate::frontend::ast::{self, Statement, Expression, Literal, UnaryOperator, BinaryOperator, PostfixOperator};
use crate::bytecode::{Writer, Program};
use crate::bytecode::compiler::symbols::{SymbolTable, Declaration};
use crate::bytecode::compiler::stack_frame::{StackFrame, StackFrames};
use crate::bytecode::compiler::error::{CompileError, CompileErrorKind, CompileResult, OptionToCompileError};

/// Bytecode emitter. Compiles a program from its AST in a single pass.
///
/// Every function body and every block (bare blocks, `if`/`else` bodies, `for` loops) gets its own
/// lexical level. Blocks are entered through `cal` like functions so their locals live in a
/// frame of their own; see `enter_block` for how returns propagate out of them.
pub struct Compiler<'a> {
    /// Bytecode writer used to output to.
    writer  : Writer,
    /// Names visible at the current emission point.
    symbols : SymbolTable<'a>,
    /// Variable allocation state per lexical level.
    frames  : StackFrames,
}

/// Compiles a program into bytecode.
///
/// ```
/// use tinypl::{ast::{Statement, Expression}, compiler::{compile, Instruction}};
/// let program = compile(&vec![ Statement::let_binding("a", Expression::int(1)) ]).unwrap();
/// assert_eq!(program.len(), 8);
/// assert_eq!(program[7], Instruction::sto(0, 0));
/// ```
pub fn compile<'a>(program: &ast::Program<'a>) -> CompileResult<Program> {
    let mut compiler = Compiler::new();
    compiler.compile_program(program)?;
    Ok(compiler.into_program())
}

/// Basic compiler functionality.
impl<'a> Compiler<'a> {

    /// Creates a new compiler with the builtin `print` function already emitted.
    pub fn new() -> Self {
        let mut compiler = Compiler {
            writer  : Writer::new(),
            symbols : SymbolTable::new(),
            frames  : StackFrames::new(),
        };
        compiler.define_print();
        compiler
    }

    /// Compiles the given program's statements at the global level.
    pub fn compile_program(self: &mut Self, program: &ast::Program<'a>) -> CompileResult {
        debug!("compiling {} top-level statements", program.len());
        for statement in program {
            self.compile_statement(statement)?;
        }
        debug!("compiled {} instructions", self.writer.len());
        Ok(())
    }

    /// Consumes the compiler and returns the compiled program.
    pub fn into_program(self: Self) -> Program {
        self.writer.into_program()
    }

    /// Emits the builtin `print(value)` function: a level 1 frame printing its only parameter.
    fn define_print(self: &mut Self) {
        let skip = self.writer.jmp(0);
        let entry = self.writer.position();
        self.symbols.declare(PRINT_FUNCTION, Declaration::Function { level: 0, entry, num_params: 1 });
        self.writer.lod(1, -1);
        self.writer.pri();
        self.writer.lit(0);
        self.writer.ret(1, 1);
        let end = self.writer.position();
        self.writer.overwrite(skip, |w| w.jmp(end));
    }
}

/// Methods for compiling individual statements.
impl<'a> Compiler<'a> {

    /// Compiles the given statement.
    fn compile_statement(self: &mut Self, item: &Statement<'a>) -> CompileResult {
        match item {
            Statement::Let(let_binding)     => self.compile_let(let_binding),
            Statement::Assignment(assignment) => self.compile_assignment(assignment),
            Statement::Function(function)   => self.compile_function(function),
            Statement::Return(ret)          => self.compile_return(ret),
            Statement::IfBlock(if_block)    => self.compile_if_block(if_block),
            Statement::ForLoop(for_loop)    => self.compile_for_loop(for_loop),
            Statement::Block(block)         => self.compile_block(block),
            Statement::Expression(expr)     => {
                self.compile_expression(expr)?;
                self.writer.pop();
                Ok(())
            },
            Statement::Empty                => Ok(()),
        }
    }

    /// Compiles a variable binding. The slot is reserved and the name declared before the initializer is compiled.
    fn compile_let(self: &mut Self, item: &ast::Let<'a>) -> CompileResult {
        let level = self.frames.level();
        let offset = self.frames.alloc_var();
        self.writer.lit(0);
        self.symbols.declare(item.name, Declaration::Variable { level, offset });
        self.compile_expression(&item.expr)?;
        self.writer.sto(level, offset);
        Ok(())
    }

    /// Compiles an assignment to an existing variable or parameter.
    fn compile_assignment(self: &mut Self, item: &ast::Assignment<'a>) -> CompileResult {
        let (level, offset) = match self.symbols.resolve(item.name) {
            Some(Declaration::Variable { level, offset }) | Some(Declaration::Parameter { level, offset }) => (level, offset),
            Some(Declaration::Function { .. }) => return Err(CompileErrorKind::NotAssignable(item.name.to_string()).into()),
            None => return Err(CompileErrorKind::UndeclaredAssignment(item.name.to_string()).into()),
        };
        self.compile_expression(&item.expr)?;
        self.writer.sto(level, offset);
        Ok(())
    }

    /// Compiles a function declaration. The declaration is skipped over at its definition site.
    fn compile_function(self: &mut Self, item: &ast::Function<'a>) -> CompileResult {
        let skip = self.writer.jmp(0);
        let level = self.frames.level();
        let entry = self.writer.position();
        let num_params = item.params.len();
        trace!("function {} at level {}, entry {}", item.name, level, entry);

        // declare before the body so the function may call itself
        self.symbols.declare(item.name, Declaration::Function { level, entry, num_params });
        self.symbols.enter();
        self.frames.push(StackFrame::new(num_params));
        let inner = self.frames.level();

        for (index, &param) in item.params.iter().enumerate() {
            let offset = index as StackOffset - num_params as StackOffset;
            self.symbols.declare(param, Declaration::Parameter { level: inner, offset });
        }
        for statement in &item.block.statements {
            self.compile_statement(statement)?;
        }

        // implicit return 0
        self.writer.lit(0);
        self.writer.ret(inner, num_params);

        self.frames.pop().ice_msg("function frame missing")?;
        self.symbols.leave();
        let end = self.writer.position();
        self.writer.overwrite(skip, |w| w.jmp(end));
        Ok(())
    }

    /// Compiles a return from the innermost frame, which may be a block frame.
    fn compile_return(self: &mut Self, item: &ast::Return<'a>) -> CompileResult {
        match &item.expr {
            Some(expr) => self.compile_expression(expr)?,
            None => { self.writer.lit(0); },
        }
        self.writer.ret(self.frames.level(), self.frames.num_params());
        Ok(())
    }

    /// Compiles an if/else-if/else chain. The end jump is emitted even without an alternative.
    fn compile_if_block(self: &mut Self, item: &ast::IfBlock<'a>) -> CompileResult {
        self.compile_expression(&item.cond)?;
        self.writer.not();
        let else_jump = self.writer.jpc(0);
        self.compile_block(&item.if_block)?;
        let end_jump = self.writer.jmp(0);

        let else_start = self.writer.position();
        self.writer.overwrite(else_jump, |w| w.jpc(else_start));
        match &item.else_block {
            Some(ast::Else::Block(block)) => self.compile_block(block)?,
            Some(ast::Else::If(if_block)) => self.compile_if_block(if_block)?,
            None => { },
        }

        let end = self.writer.position();
        self.writer.overwrite(end_jump, |w| w.jmp(end));
        Ok(())
    }

    /// Compiles a for loop. The loop header shares a block frame with the loop, the body gets its own.
    fn compile_for_loop(self: &mut Self, item: &ast::ForLoop<'a>) -> CompileResult {
        let block = self.enter_block();
        self.compile_statement(&item.init)?;

        let loop_start = self.writer.position();
        self.compile_expression(&item.cond)?;
        self.writer.not();
        let exit_jump = self.writer.jpc(0);
        self.compile_block(&item.block)?;
        self.compile_statement(&item.after)?;
        self.writer.jmp(loop_start);

        let exit = self.writer.position();
        self.writer.overwrite(exit_jump, |w| w.jpc(exit));
        self.leave_block(block)
    }

    /// Compiles the given block in a frame of its own.
    fn compile_block(self: &mut Self, item: &ast::Block<'a>) -> CompileResult {
        let block = self.enter_block();
        for statement in &item.statements {
            self.compile_statement(statement)?;
        }
        self.leave_block(block)
    }

    /// Emits the entry sequence of a block and enters its level. Returns the position of the jump that
    /// `leave_block` has to patch.
    ///
    /// A flag slot, initialized to 0, is reserved in the enclosing frame before the block is called.
    /// Normal completion sets the flag. When the block's frame is left through an explicit `return`
    /// instead, the flag stays 0 and the instruction after the `cal` returns from the enclosing
    /// frame as well, carrying the returned value outward.
    fn enter_block(self: &mut Self) -> CodeAddress {
        let level = self.frames.level();
        let flag = self.frames.alloc_var();
        self.writer.lit(0);
        let call = self.writer.cal(level, 0);
        self.writer.lod(level, flag);
        let skip = self.writer.jpc(0);
        self.writer.ret(level, self.frames.num_params());

        let body = self.writer.position();
        self.writer.overwrite(call, |w| w.cal(level, body));
        self.frames.push(StackFrame::new(0));
        self.symbols.enter();
        trace!("block at level {}, entry {}", level + 1, body);
        skip
    }

    /// Emits the normal exit of the current block, leaves its level and releases the flag slot.
    fn leave_block(self: &mut Self, skip: CodeAddress) -> CompileResult {
        let level = self.frames.level();
        self.writer.lit(1);
        self.writer.sto(level, -1);   // flag slot sits right below the block's frame
        self.writer.lit(0);
        self.writer.ret(level, 0);
        self.symbols.leave();
        self.frames.pop().ice_msg("block frame missing")?;

        let end = self.writer.position();
        self.writer.overwrite(skip, |w| w.jpc(end));
        self.writer.pop(); // return value
        self.writer.pop(); // flag
        self.frames.free_var();
        trace!("left block at level {}", level);
        Ok(())
    }
}

/// Methods for compiling expressions. Each leaves exactly one value on the stack.
impl<'a> Compiler<'a> {

    /// Compiles the given expression.
    fn compile_expression(self: &mut Self, item: &Expression<'a>) -> CompileResult {
        match item {
            Expression::Literal(literal)    => self.compile_literal(literal),
            Expression::Variable(name)      => self.compile_variable(name),
            Expression::Call(call)          => self.compile_call(call),
            Expression::UnaryOp(unary)      => self.compile_unary_op(unary),
            Expression::BinaryOp(binary)    => self.compile_binary_op(binary),
            Expression::PostfixOp(postfix)  => self.compile_postfix_op(postfix),
        }
    }

    /// Compiles a literal. Booleans are emitted as 1 and 0.
    fn compile_literal(self: &mut Self, item: &Literal) -> CompileResult {
        match *item {
            Literal::Integer(value) => self.writer.lit(value),
            Literal::Boolean(value) => self.writer.lit(value as Value),
        };
        Ok(())
    }

    /// Compiles a variable or parameter load.
    fn compile_variable(self: &mut Self, name: &str) -> CompileResult {
        match self.symbols.resolve(name) {
            Some(Declaration::Variable { level, offset }) | Some(Declaration::Parameter { level, offset }) => {
                self.writer.lod(level, offset);
                Ok(())
            },
            Some(Declaration::Function { .. }) => Err(CompileErrorKind::FunctionAsValue(name.to_string()).into()),
            None => Err(CompileErrorKind::Unresolved(name.to_string()).into()),
        }
    }

    /// Compiles a function call. Arguments are pushed left to right.
    fn compile_call(self: &mut Self, item: &ast::Call<'a>) -> CompileResult {
        let (level, entry) = match self.symbols.resolve(item.name) {
            Some(Declaration::Function { level, entry, num_params }) => {
                if num_params != item.args.len() {
                    return Err(CompileErrorKind::ArgumentCount { name: item.name.to_string(), expected: num_params, given: item.args.len() }.into());
                }
                (level, entry)
            },
            Some(_) => return Err(CompileErrorKind::NotCallable(item.name.to_string()).into()),
            None => return Err(CompileErrorKind::Unresolved(item.name.to_string()).into()),
        };
        for arg in &item.args {
            self.compile_expression(arg)?;
        }
        self.writer.cal(level, entry);
        Ok(())
    }

    /// Compiles a prefix operation. Prefix `+` emits nothing.
    fn compile_unary_op(self: &mut Self, item: &ast::UnaryOp<'a>) -> CompileResult {
        self.compile_expression(&item.expr)?;
        match item.op {
            UnaryOperator::Not      => { self.writer.not(); },
            UnaryOperator::Minus    => { self.writer.neg(); },
            UnaryOperator::Plus     => { },
        }
        Ok(())
    }

    /// Compiles a binary operation. `&&` and `||` evaluate both operands.
    fn compile_binary_op(self: &mut Self, item: &ast::BinaryOp<'a>) -> CompileResult {
        use BinaryOperator as BO;
        self.compile_expression(&item.left)?;
        self.compile_expression(&item.right)?;
        match item.op {
            BO::Add         => self.writer.add(),
            BO::Sub         => self.writer.sub(),
            BO::Mul         => self.writer.mul(),
            BO::Div         => self.writer.div(),
            BO::Equal       => self.writer.eq(),
            BO::NotEqual    => self.writer.neq(),
            BO::Less        => self.writer.lss(),
            BO::LessOrEq    => self.writer.leq(),
            BO::Greater     => self.writer.grt(),
            BO::GreaterOrEq => self.writer.geq(),
            BO::And         => self.writer.and(),
            BO::Or          => self.writer.or(),
        };
        Ok(())
    }

    /// Compiles `x++`/`x--` on a local variable. The value loaded first is left on the stack as the result,
    /// so the expression evaluates to the value before the update.
    fn compile_postfix_op(self: &mut Self, item: &ast::PostfixOp<'a>) -> CompileResult {
        let invalid = || CompileError::new(CompileErrorKind::InvalidOperand(item.op.symbol().to_string()));
        let name = match item.expr {
            Expression::Variable(name) => name,
            _ => return Err(invalid()),
        };
        let (level, offset) = match self.symbols.resolve(name) {
            Some(Declaration::Variable { level, offset }) => (level, offset),
            Some(_) => return Err(invalid()),
            None => return Err(CompileErrorKind::Unresolved(name.to_string()).into()),
        };
        let step = match item.op {
            PostfixOperator::Increment => 1,
            PostfixOperator::Decrement => -1,
        };
        self.writer.lod(level, offset);
        self.writer.lod(level, offset);
        self.writer.lit(step);
        self.writer.add();
        self.writer.sto(level, offset);
        Ok(())
    }
}
