//! Command-line interface for armjitc.
//!
//! This module handles parsing command-line arguments and turning them
//! into a [`SymbolTable`](crate::symbols::SymbolTable) plus output
//! options for the compiler driver. Since the CLI runs on whatever host
//! `cargo` builds it for, not necessarily ARM, it cannot invoke the
//! emitted code — it only compiles an expression and prints the
//! resulting instruction words. `--var`/`--const` bindings give the
//! compiled expression something to read: each one allocates an `i32`
//! cell in this process and registers its address.

use std::fmt;

#[cfg(feature = "cli")]
use clap::Parser;

use crate::symbols::SymbolTable;

/// Command-line arguments for armjitc.
#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "armjitc")]
#[command(about = "Compiles an integer arithmetic expression to AArch32 machine code", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The expression to compile, e.g. "2+3*a"
    pub expression: String,

    /// Binds a variable name to a value, e.g. --var a=5
    #[arg(long = "var", value_name = "NAME=VALUE")]
    pub vars: Vec<String>,

    /// Binds a constant name to a value, e.g. --const d=239
    #[arg(long = "const", value_name = "NAME=VALUE")]
    pub consts: Vec<String>,

    /// Output format for the generated word list
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Hex)]
    pub format: OutputFormat,

    /// Write the generated words to a file instead of stdout
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<String>,
}

#[cfg(feature = "cli")]
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `0xXXXXXXXX` word per line.
    Hex,
    /// One plain decimal `u32` per line.
    Words,
}

#[cfg(not(feature = "cli"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Hex,
    Words,
}

/// Error parsing a `--var`/`--const` binding.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseBindingError {
    message: String,
}

impl fmt::Display for ParseBindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid symbol binding: {}", self.message)
    }
}

impl std::error::Error for ParseBindingError {}

/// Parses a `NAME=VALUE` binding, `VALUE` being a signed decimal `i32`.
pub fn parse_binding(s: &str) -> Result<(String, i32), ParseBindingError> {
    let (name, value) = s.split_once('=').ok_or_else(|| ParseBindingError {
        message: format!("expected NAME=VALUE, got '{s}'"),
    })?;

    if name.is_empty() {
        return Err(ParseBindingError {
            message: "empty symbol name".to_string(),
        });
    }

    let value = value.trim().parse::<i32>().map_err(|_| ParseBindingError {
        message: format!("invalid value '{value}'"),
    })?;

    Ok((name.to_string(), value))
}

/// Builds a [`SymbolTable`] from repeated `--var`/`--const` bindings,
/// allocating one leaked `i32` cell per binding so its address stays
/// valid for the lifetime of the process. Both share one namespace,
/// same as the symbol table itself.
pub fn build_symbol_table(vars: &[String], consts: &[String]) -> Result<SymbolTable, ParseBindingError> {
    let mut table = SymbolTable::new();
    for binding in vars.iter().chain(consts.iter()) {
        let (name, value) = parse_binding(binding)?;
        let cell: &'static mut i32 = Box::leak(Box::new(value));
        let address = u32::try_from(cell as *mut i32 as usize).map_err(|_| ParseBindingError {
            message: format!("'{name}' landed above the 32-bit address space"),
        })?;
        table.insert(name, address);
    }
    Ok(table)
}

/// Renders a compiled word list per `format`.
pub fn format_words(words: &[u32], format: OutputFormat) -> String {
    let mut out = String::new();
    for word in words {
        match format {
            OutputFormat::Hex => out.push_str(&format!("0x{word:08X}\n")),
            OutputFormat::Words => out.push_str(&format!("{word}\n")),
        }
    }
    out
}
