//! Unified error type for the compilation pipeline — wraps the
//! per-component errors from [`lexer`](crate::lexer) and
//! [`postfix`](crate::postfix) and adds the driver's own failure modes.

use std::fmt;

use crate::lexer::LexError;
use crate::postfix::PostfixError;

/// Everything that can make [`crate::compiler::compile`] fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    Lex(LexError),
    Postfix(PostfixError),
    /// A variable or function name had no entry in the symbol table.
    UnresolvedSymbol(String),
    /// A symbol's address does not fit in the 32-bit address space the
    /// generated code runs in.
    SymbolAddressOutOfRange(String),
    /// The caller's output buffer is too small for the generated code.
    OutputBufferTooSmall { needed: usize, available: usize },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Lex(e) => write!(f, "{e}"),
            CompileError::Postfix(e) => write!(f, "{e}"),
            CompileError::UnresolvedSymbol(name) => write!(f, "unknown symbol '{name}'"),
            CompileError::SymbolAddressOutOfRange(name) => {
                write!(f, "symbol '{name}' has an address outside the 32-bit range")
            }
            CompileError::OutputBufferTooSmall { needed, available } => write!(
                f,
                "output buffer holds {available} words but {needed} are needed"
            ),
        }
    }
}

impl std::error::Error for CompileError {}

impl From<LexError> for CompileError {
    fn from(e: LexError) -> Self {
        CompileError::Lex(e)
    }
}

impl From<PostfixError> for CompileError {
    fn from(e: PostfixError) -> Self {
        CompileError::Postfix(e)
    }
}
