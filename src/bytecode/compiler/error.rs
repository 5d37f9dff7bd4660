use thiserror::Error;

/// Represents the various possible compiler error-kinds.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CompileErrorKind {
    #[error("unresolved identifier '{0}'")]
    Unresolved(String),
    #[error("assignment to undeclared variable '{0}'")]
    UndeclaredAssignment(String),
    #[error("function '{0}' used as a value")]
    FunctionAsValue(String),
    #[error("'{0}' is not a function")]
    NotCallable(String),
    #[error("cannot assign to function '{0}'")]
    NotAssignable(String),
    /// Operand of `++`/`--` is not a plain variable. Holds the operator.
    #[error("invalid operand for '{0}', expected a variable")]
    InvalidOperand(String),
    #[error("function '{name}' takes {expected} argument(s) but {given} were given")]
    ArgumentCount { name: String, expected: usize, given: usize },
    #[error("internal compiler error: {0}")]
    Internal(String),
}

/// An error reported by the compiler.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct CompileError {
    kind: CompileErrorKind,
}

impl CompileError {
    pub(crate) fn new(kind: CompileErrorKind) -> CompileError {
        Self { kind }
    }
    /// The kind of the error.
    pub fn kind(self: &Self) -> &CompileErrorKind {
        &self.kind
    }
}

impl From<CompileErrorKind> for CompileError {
    fn from(kind: CompileErrorKind) -> CompileError {
        CompileError::new(kind)
    }
}

pub type CompileResult<T = ()> = Result<T, CompileError>;

/// Trait to convert an Option to a Result compatible with CompileResult
pub(super) trait OptionToCompileError<T> {
    fn ice_msg(self: Self, message: &str) -> CompileResult<T>;
}

impl<T> OptionToCompileError<T> for Option<T> {
    fn ice_msg(self: Self, message: &str) -> CompileResult<T> {
        if let Some(result) = self {
            Ok(result)
        } else {
            #[cfg(feature="ice_panics")]
            panic!("Internal compiler error: {}", message);
            #[cfg(not(feature="ice_panics"))]
            Err(CompileError::new(CompileErrorKind::Internal(message.to_string())))
        }
    }
}
