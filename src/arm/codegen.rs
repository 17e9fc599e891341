//! Stack-machine code generator — component D.
//!
//! Walks a postfix [`Token`] stream and emits A32 words that evaluate it
//! using the native call stack as the expression stack: every
//! sub-expression's value is pushed to `{r0}` on completion and popped
//! back off by whatever consumes it next. r4/lr are saved across the
//! whole function since `blx` clobbers `lr` and function calls clobber
//! r4 as the callee-address scratch register.

use crate::arm::encode;
use crate::error::CompileError;
use crate::symbols::SymbolTable;
use crate::token::{Operation, Token};

/// Generates the A32 word sequence for an already-postfix expression.
///
/// `symbols` resolves every [`Token::Variable`] and [`Token::Function`]
/// name to a native address; an unresolved name is a
/// [`CompileError::UnresolvedSymbol`].
pub fn generate(postfix: &[Token], symbols: &SymbolTable) -> Result<Vec<u32>, CompileError> {
    let mut out = Vec::new();
    out.push(encode::PUSH_R4_LR);

    for token in postfix {
        match token {
            Token::Number { value } => {
                encode::set_constant(&mut out, 0, *value as u32);
                out.push(encode::PUSH_R0);
            }
            Token::Variable { name } => {
                let address = symbols
                    .resolve(name)
                    .ok_or_else(|| CompileError::UnresolvedSymbol(name.clone()))?;
                encode::load_variable(&mut out, 0, address);
                out.push(encode::PUSH_R0);
            }
            Token::Function { name, arity } => {
                let address = symbols
                    .resolve(name)
                    .ok_or_else(|| CompileError::UnresolvedSymbol(name.clone()))?;
                encode::call_function(&mut out, address, *arity);
            }
            Token::Operation(Operation::UnaryMinus) => {
                // Zero r0, pop the operand into r1, then reuse the
                // binary subtract word: r0 = 0 - r1.
                encode::set_constant(&mut out, 0, 0);
                out.push(encode::pop(1));
                out.push(encode::SUB_R0_R0_R1);
                out.push(encode::PUSH_R0);
            }
            Token::Operation(op @ (Operation::Plus | Operation::Minus | Operation::Multiply)) => {
                // Right operand is the top of stack, left is beneath it;
                // this ordering matters for the non-commutative subtract.
                out.push(encode::pop(1));
                out.push(encode::pop(0));
                out.push(match op {
                    Operation::Plus => encode::ADD_R0_R0_R1,
                    Operation::Minus => encode::SUB_R0_R0_R1,
                    Operation::Multiply => encode::MUL_R0_R0_R1,
                    _ => unreachable!(),
                });
                out.push(encode::PUSH_R0);
            }
            Token::Operation(Operation::OpenBracket | Operation::CloseBracket | Operation::Comma) => {
                unreachable!("not present in a well-formed postfix stream")
            }
        }
    }

    // The final value is sitting in r0 right after its push; drop that
    // push rather than emit a matching pop.
    if out.last() == Some(&encode::PUSH_R0) {
        out.pop();
    }

    out.push(encode::POP_R4_LR);
    out.push(encode::BX_LR);
    Ok(out)
}
