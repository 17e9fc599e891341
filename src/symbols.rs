//! The symbol table the caller hands in: variable and function
//! addresses keyed by name, resolved against [`Token`](crate::token::Token)
//! names during code generation.

use std::collections::HashMap;
use std::ffi::{c_char, c_void, CStr};

use crate::error::CompileError;

/// A single `{name, address}` pair in the C ABI, matching the original
/// `symbol_t` layout: a null-terminated array of these, terminated by a
/// `name` of `NULL`, is how callers hand in externs over FFI.
#[repr(C)]
pub struct RawSymbol {
    pub name: *const c_char,
    pub pointer: *mut c_void,
}

/// Variable and function addresses available to a compiled expression.
///
/// Both variables and functions share one namespace, same as the
/// original: what a name resolves to (a value's address to load, or a
/// function to call) is determined by how the expression *uses* the
/// name, not by any tag stored here.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    addresses: HashMap<String, u32>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a symbol at a native address, already truncated to the
    /// 32-bit space the generated code addresses.
    pub fn insert(&mut self, name: impl Into<String>, address: u32) {
        self.addresses.insert(name.into(), address);
    }

    pub fn resolve(&self, name: &str) -> Option<u32> {
        self.addresses.get(name).copied()
    }

    /// Builds a table from a caller-supplied null-terminated array of
    /// [`RawSymbol`] entries (the array ends at the first entry whose
    /// `name` is a null pointer).
    ///
    /// # Safety
    ///
    /// `entries` must either be null or point to a valid, null-terminated
    /// array of `RawSymbol` whose `name` fields are valid, NUL-terminated,
    /// UTF-8 C strings for as long as this call runs.
    pub unsafe fn from_raw(entries: *const RawSymbol) -> Result<Self, CompileError> {
        let mut table = Self::new();
        if entries.is_null() {
            return Ok(table);
        }

        let mut i = 0isize;
        loop {
            let entry = &*entries.offset(i);
            if entry.name.is_null() || entry.pointer.is_null() {
                break;
            }
            let name = CStr::from_ptr(entry.name)
                .to_str()
                .map_err(|_| CompileError::UnresolvedSymbol("<invalid utf-8 symbol name>".into()))?
                .to_string();
            let address = u32::try_from(entry.pointer as usize)
                .map_err(|_| CompileError::SymbolAddressOutOfRange(name.clone()))?;
            table.insert(name, address);
            i += 1;
        }

        Ok(table)
    }
}
