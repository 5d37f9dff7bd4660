//! AST datastructures and helpers.
//!
//! The tree is produced by a parser (not part of this crate) or assembled directly via the builder functions.

use std::fmt::{self, Display};
use crate::Value;

pub type Program<'a> = Vec<Statement<'a>>;

#[derive(Clone, Debug, PartialEq)]
pub enum Statement<'a> {
    Let(Let<'a>),
    Assignment(Assignment<'a>),
    Function(Function<'a>),
    Return(Return<'a>),
    IfBlock(IfBlock<'a>),
    ForLoop(ForLoop<'a>),
    Block(Block<'a>),
    Expression(Expression<'a>),
    Empty,
}

/// `let name = expr`
#[derive(Clone, Debug, PartialEq)]
pub struct Let<'a> {
    pub name    : &'a str,
    pub expr    : Expression<'a>,
}

/// `name = expr`
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment<'a> {
    pub name    : &'a str,
    pub expr    : Expression<'a>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Function<'a> {
    pub name    : &'a str,
    pub params  : Vec<&'a str>,
    pub block   : Block<'a>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Return<'a> {
    pub expr    : Option<Expression<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IfBlock<'a> {
    pub cond        : Expression<'a>,
    pub if_block    : Block<'a>,
    pub else_block  : Option<Else<'a>>,
}

/// Alternative of an `if`: either a block or a chained `else if`.
#[derive(Clone, Debug, PartialEq)]
pub enum Else<'a> {
    Block(Block<'a>),
    If(Box<IfBlock<'a>>),
}

/// `for (init; cond; after) block`
#[derive(Clone, Debug, PartialEq)]
pub struct ForLoop<'a> {
    pub init    : Box<Statement<'a>>,
    pub cond    : Expression<'a>,
    pub after   : Box<Statement<'a>>,
    pub block   : Block<'a>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Block<'a> {
    pub statements: Vec<Statement<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expression<'a> {
    Literal(Literal),
    Variable(&'a str),
    Call(Call<'a>),
    UnaryOp(Box<UnaryOp<'a>>),
    BinaryOp(Box<BinaryOp<'a>>),
    PostfixOp(Box<PostfixOp<'a>>),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Literal {
    Integer(Value),
    Boolean(bool),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Call<'a> {
    pub name    : &'a str,
    pub args    : Vec<Expression<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnaryOp<'a> {
    pub op      : UnaryOperator,
    pub expr    : Expression<'a>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BinaryOp<'a> {
    pub left    : Expression<'a>,
    pub op      : BinaryOperator,
    pub right   : Expression<'a>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PostfixOp<'a> {
    pub expr    : Expression<'a>,
    pub op      : PostfixOperator,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UnaryOperator {
    Not,
    Minus,
    Plus,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Equal,
    NotEqual,
    Less,
    LessOrEq,
    Greater,
    GreaterOrEq,
    And,
    Or,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PostfixOperator {
    Increment,
    Decrement,
}

impl UnaryOperator {
    pub fn symbol(self: Self) -> &'static str {
        match self {
            UnaryOperator::Not      => "!",
            UnaryOperator::Minus    => "-",
            UnaryOperator::Plus     => "+",
        }
    }
}

impl BinaryOperator {
    pub fn symbol(self: Self) -> &'static str {
        match self {
            BinaryOperator::Add         => "+",
            BinaryOperator::Sub         => "-",
            BinaryOperator::Mul         => "*",
            BinaryOperator::Div         => "/",
            BinaryOperator::Equal       => "==",
            BinaryOperator::NotEqual    => "!=",
            BinaryOperator::Less        => "<",
            BinaryOperator::LessOrEq    => "<=",
            BinaryOperator::Greater     => ">",
            BinaryOperator::GreaterOrEq => ">=",
            BinaryOperator::And         => "&&",
            BinaryOperator::Or          => "||",
        }
    }
}

impl PostfixOperator {
    pub fn symbol(self: Self) -> &'static str {
        match self {
            PostfixOperator::Increment => "++",
            PostfixOperator::Decrement => "--",
        }
    }
}

// Builders

impl<'a> Statement<'a> {
    pub fn let_binding(name: &'a str, expr: Expression<'a>) -> Self {
        Statement::Let(Let { name, expr })
    }
    pub fn assign(name: &'a str, expr: Expression<'a>) -> Self {
        Statement::Assignment(Assignment { name, expr })
    }
    pub fn function(name: &'a str, params: Vec<&'a str>, statements: Vec<Statement<'a>>) -> Self {
        Statement::Function(Function { name, params, block: Block::new(statements) })
    }
    pub fn ret(expr: Option<Expression<'a>>) -> Self {
        Statement::Return(Return { expr })
    }
    pub fn if_block(cond: Expression<'a>, if_block: Vec<Statement<'a>>, else_block: Option<Else<'a>>) -> Self {
        Statement::IfBlock(IfBlock { cond, if_block: Block::new(if_block), else_block })
    }
    pub fn for_loop(init: Statement<'a>, cond: Expression<'a>, after: Statement<'a>, statements: Vec<Statement<'a>>) -> Self {
        Statement::ForLoop(ForLoop { init: Box::new(init), cond, after: Box::new(after), block: Block::new(statements) })
    }
    pub fn block(statements: Vec<Statement<'a>>) -> Self {
        Statement::Block(Block::new(statements))
    }
    pub fn expr(expr: Expression<'a>) -> Self {
        Statement::Expression(expr)
    }
}

impl<'a> Else<'a> {
    pub fn block(statements: Vec<Statement<'a>>) -> Self {
        Else::Block(Block::new(statements))
    }
    /// Chained `else if`.
    pub fn if_block(cond: Expression<'a>, if_block: Vec<Statement<'a>>, else_block: Option<Else<'a>>) -> Self {
        Else::If(Box::new(IfBlock { cond, if_block: Block::new(if_block), else_block }))
    }
}

impl<'a> Block<'a> {
    pub fn new(statements: Vec<Statement<'a>>) -> Self {
        Block { statements }
    }
}

impl<'a> Expression<'a> {
    pub fn int(value: Value) -> Self {
        Expression::Literal(Literal::Integer(value))
    }
    pub fn bool(value: bool) -> Self {
        Expression::Literal(Literal::Boolean(value))
    }
    pub fn var(name: &'a str) -> Self {
        Expression::Variable(name)
    }
    pub fn call(name: &'a str, args: Vec<Expression<'a>>) -> Self {
        Expression::Call(Call { name, args })
    }
    pub fn unary(op: UnaryOperator, expr: Expression<'a>) -> Self {
        Expression::UnaryOp(Box::new(UnaryOp { op, expr }))
    }
    pub fn binary(left: Expression<'a>, op: BinaryOperator, right: Expression<'a>) -> Self {
        Expression::BinaryOp(Box::new(BinaryOp { left, op, right }))
    }
    pub fn postfix(expr: Expression<'a>, op: PostfixOperator) -> Self {
        Expression::PostfixOp(Box::new(PostfixOp { expr, op }))
    }
}

// Debug text forms

impl<'a> Display for Statement<'a> {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(Let { name, expr }) => write!(f, "let {} = {}", name, expr),
            Statement::Assignment(Assignment { name, expr }) => write!(f, "{} = {}", name, expr),
            Statement::Function(Function { name, params, block }) => write!(f, "function {}({}) {}", name, params.join(", "), block),
            Statement::Return(Return { expr: Some(expr) }) => write!(f, "return {}", expr),
            Statement::Return(Return { expr: None }) => write!(f, "return"),
            Statement::IfBlock(if_block) => write!(f, "{}", if_block),
            Statement::ForLoop(ForLoop { init, cond, after, block }) => write!(f, "for({}; {}; {}) {}", init, cond, after, block),
            Statement::Block(block) => write!(f, "{}", block),
            Statement::Expression(expr) => write!(f, "{}", expr),
            Statement::Empty => Ok(()),
        }
    }
}

impl<'a> Display for IfBlock<'a> {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if({}) {}", self.cond, self.if_block)?;
        match &self.else_block {
            Some(Else::Block(block)) => write!(f, " else {}", block),
            Some(Else::If(if_block)) => write!(f, " else {}", if_block),
            None => Ok(()),
        }
    }
}

/// Writes the block's statements one per line, indented by two spaces.
impl<'a> Display for Block<'a> {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for statement in &self.statements {
            for line in statement.to_string().split('\n') {
                writeln!(f, "  {}", line)?;
            }
        }
        write!(f, "}}")
    }
}

impl<'a> Display for Expression<'a> {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(Literal::Integer(value)) => write!(f, "{}", value),
            Expression::Literal(Literal::Boolean(value)) => write!(f, "{}", value),
            Expression::Variable(name) => f.write_str(name),
            Expression::Call(Call { name, args }) => {
                write!(f, "{}(", name)?;
                for (index, arg) in args.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(")")
            },
            Expression::UnaryOp(unary) => write!(f, "({}{})", unary.op.symbol(), unary.expr),
            Expression::BinaryOp(binary) => write!(f, "({} {} {})", binary.left, binary.op.symbol(), binary.right),
            Expression::PostfixOp(postfix) => write!(f, "({}{})", postfix.expr, postfix.op.symbol()),
        }
    }
}
