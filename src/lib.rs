//! A just-in-time compiler that turns a small integer arithmetic
//! expression into AArch32 (ARMv7-A, A32) machine code, ready to be
//! copied into executable memory and called like any other function.
//!
//! The pipeline is four stages, one module each:
//!
//! - [`lexer`] splits source text into [`token::Token`]s.
//! - [`postfix`] re-orders them into postfix (reverse-Polish) notation
//!   via the shunting-yard algorithm, disambiguating unary minus.
//! - [`arm`] encodes individual A32 instructions and walks the postfix
//!   stream to generate a full function body.
//! - [`compiler`] ties the above together behind one safe entry point;
//!   [`ffi`] exposes the same behavior over a C ABI.
//!
//! ```
//! use armjitc::compiler::compile;
//! use armjitc::symbols::SymbolTable;
//!
//! let mut symbols = SymbolTable::new();
//! symbols.insert("a", 0x1000);
//!
//! let words = compile("1 + a * 2", &symbols).unwrap();
//! assert!(words.len() > 2);
//! ```

pub mod arm;
pub mod cli;
pub mod compiler;
pub mod error;
pub mod ffi;
pub mod lexer;
pub mod postfix;
pub mod symbols;
pub mod token;

pub use compiler::{compile, compile_into};
pub use error::CompileError;
pub use symbols::SymbolTable;
