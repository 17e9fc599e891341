//! A small AArch32 software interpreter for exactly the instruction
//! subset `armjitc` emits. It lets the integration tests check that
//! generated code actually computes the right value without needing
//! real ARM hardware, the same role `rv32_i::CPU::execute` plays for
//! the assembler side of an emulator.

use std::collections::HashMap;

use armjitc::arm::encode;

/// Five general-purpose registers plus `lr`; enough for every word this
/// crate's code generator produces.
#[derive(Debug, Default, Clone)]
pub struct ArmVm {
    pub r: [u32; 5],
    pub lr: u32,
    stack: Vec<u32>,
}

impl ArmVm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `words` from the first instruction to the trailing `bx lr`,
    /// resolving `movw`/`movt` addresses against `memory` for loads.
    /// Returns the final r0.
    pub fn run(words: &[u32], memory: &HashMap<u32, i32>, functions: &HashMap<u32, fn(&[i32]) -> i32>) -> i32 {
        let mut vm = Self::new();
        let mut pc = 0usize;

        while pc < words.len() {
            let word = words[pc];
            pc += 1;

            match word {
                w if w == encode::ADD_R0_R0_R1 => {
                    vm.r[0] = vm.r[0].wrapping_add(vm.r[1]);
                }
                w if w == encode::SUB_R0_R0_R1 => {
                    vm.r[0] = vm.r[0].wrapping_sub(vm.r[1]);
                }
                w if w == encode::MUL_R0_R0_R1 => {
                    vm.r[0] = vm.r[0].wrapping_mul(vm.r[1]);
                }
                w if w == encode::PUSH_R0 => {
                    vm.stack.push(vm.r[0]);
                }
                w if w == encode::PUSH_R4_LR => {
                    vm.stack.push(vm.r[4]);
                    vm.stack.push(vm.lr);
                }
                w if w == encode::POP_R4_LR => {
                    vm.lr = vm.stack.pop().expect("pop {r4,lr} on empty stack");
                    vm.r[4] = vm.stack.pop().expect("pop {r4,lr} on empty stack");
                }
                w if w == encode::BLX_R4 => {
                    let addr = vm.r[4];
                    let f = functions.get(&addr).unwrap_or_else(|| panic!("no function at {addr:#x}"));
                    // Arguments already sit in r0.. from the preceding
                    // `pop`s; the callee only reads the ones it has arity for.
                    vm.r[0] = f(&vm.r[0..4].iter().map(|v| *v as i32).collect::<Vec<_>>());
                }
                w if w == encode::BX_LR => {
                    return vm.r[0] as i32;
                }
                w if is_pop(w) => {
                    let reg = pop_register(w);
                    vm.r[reg] = vm.stack.pop().expect("pop on empty stack");
                }
                w if is_movw(w) => {
                    let (reg, imm) = movw_fields(w);
                    vm.r[reg] = (vm.r[reg] & 0xFFFF_0000) | imm as u32;
                }
                w if is_movt(w) => {
                    let (reg, imm) = movt_fields(w);
                    vm.r[reg] = (vm.r[reg] & 0x0000_FFFF) | ((imm as u32) << 16);
                }
                w if is_ldr(w) => {
                    let reg = ldr_register(w);
                    let addr = vm.r[reg];
                    vm.r[reg] = *memory
                        .get(&addr)
                        .unwrap_or_else(|| panic!("no memory at {addr:#x}")) as u32;
                }
                other => panic!("unrecognized instruction word {other:#010x}"),
            }
        }

        panic!("ran off the end without hitting bx lr");
    }
}

fn is_pop(w: u32) -> bool {
    (w & !(0x7 << 12)) == 0xE49D_0004
}
fn pop_register(w: u32) -> usize {
    ((w >> 12) & 0x7) as usize
}

fn is_movw(w: u32) -> bool {
    (w & 0xFFF0_0000) == 0xE300_0000
}
fn is_movt(w: u32) -> bool {
    (w & 0xFFF0_0000) == 0xE340_0000
}
fn movw_fields(w: u32) -> (usize, u16) {
    let reg = ((w >> 12) & 0xF) as usize;
    let imm4 = (w >> 16) & 0xF;
    let imm12 = w & 0xFFF;
    (reg, ((imm4 << 12) | imm12) as u16)
}
fn movt_fields(w: u32) -> (usize, u16) {
    movw_fields(w)
}

fn is_ldr(w: u32) -> bool {
    (w & 0xFFF0_0FFF) == 0xE590_0000
}
fn ldr_register(w: u32) -> usize {
    ((w >> 12) & 0xF) as usize
}
