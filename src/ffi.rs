//! The C ABI boundary: `jit_compile_expression_to_arm`, a drop-in
//! replacement for the original entry point of the same name and
//! signature.

use std::ffi::{c_char, c_int, c_void, CStr};

use crate::compiler::compile;
use crate::symbols::{RawSymbol, SymbolTable};

/// Compiles `expression` against the null-terminated `externs` array and
/// writes the resulting A32 words starting at `out_buffer`.
///
/// Returns `1` on success, `0` on any compile error (printed to stderr,
/// matching the original's "Parser error: " diagnostic).
///
/// # Safety
///
/// - `expression` must be a valid, NUL-terminated, UTF-8 C string.
/// - `externs` must be null or point to a valid null-terminated array of
///   [`RawSymbol`] as documented on [`SymbolTable::from_raw`].
/// - `out_buffer` must be valid for writes of at least as many `u32`
///   words as the compiled expression produces; this function has no
///   way to know the buffer's capacity and, like the original, does not
///   bounds-check it. Use [`crate::compiler::compile_into`] from safe
///   Rust if you want that check.
#[no_mangle]
pub unsafe extern "C" fn jit_compile_expression_to_arm(
    expression: *const c_char,
    externs: *const RawSymbol,
    out_buffer: *mut c_void,
) -> c_int {
    let result = (|| -> Result<Vec<u32>, Box<dyn std::error::Error>> {
        let expression = CStr::from_ptr(expression).to_str()?;
        let symbols = SymbolTable::from_raw(externs)?;
        Ok(compile(expression, &symbols)?)
    })();

    match result {
        Ok(words) => {
            let mut out = out_buffer as *mut u32;
            for word in words {
                out.write(word);
                out = out.add(1);
            }
            1
        }
        Err(error) => {
            eprintln!("Parser error: {error}");
            0
        }
    }
}
