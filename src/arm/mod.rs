//! AArch32 (ARMv7-A, A32, little-endian) backend: instruction encoding
//! (component C) and the stack-machine code generator (component D).

pub mod codegen;
pub mod encode;

pub use codegen::generate;
