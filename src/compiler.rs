//! The driver — component E. Ties the tokenizer, postfix converter, and
//! ARM code generator together into the one safe entry point the rest of
//! the crate (and the FFI boundary) calls.

use crate::arm::generate;
use crate::error::CompileError;
use crate::lexer::tokenize;
use crate::postfix::convert;
use crate::symbols::SymbolTable;

/// Compiles `expression` against `symbols`, returning the A32 word
/// sequence ready to be copied into executable memory.
pub fn compile(expression: &str, symbols: &SymbolTable) -> Result<Vec<u32>, CompileError> {
    let tokens = tokenize(expression)?;
    let postfix = convert(&tokens)?;
    generate(&postfix, symbols)
}

/// Compiles `expression` and writes the resulting words into `out`,
/// returning how many were written.
///
/// Errs with [`CompileError::OutputBufferTooSmall`] rather than
/// truncating silently.
pub fn compile_into(
    expression: &str,
    symbols: &SymbolTable,
    out: &mut [u32],
) -> Result<usize, CompileError> {
    let words = compile(expression, symbols)?;
    if words.len() > out.len() {
        return Err(CompileError::OutputBufferTooSmall {
            needed: words.len(),
            available: out.len(),
        });
    }
    out[..words.len()].copy_from_slice(&words);
    Ok(words.len())
}
