//! Instruction Set.
//!
//! This module covers the ARM subset the divide-by-seven idiom needs:
//! 1. **Instructions:** Typed operands and the five instruction forms.
//! 2. **Disassembly:** Assembler-style rendering for traces.
//! 3. **Program:** The fixed sequence a compiler emits for `r0 / 7`.

/// Instruction disassembler for traces and diagnostics.
pub mod disasm;

/// Instruction and operand definitions.
pub mod instruction;

/// The divide-by-seven instruction program.
pub mod program;

pub use instruction::{Instruction, InstructionClass, Shift};
pub use program::{DIVIDE_BY_SEVEN, divide_by_seven_program};
