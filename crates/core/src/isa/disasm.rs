//! Instruction Disassembler.
//!
//! Renders instructions in the assembler syntax used by the trace output:
//!
//! ```
//! use div7_core::common::Reg;
//! use div7_core::isa::{Instruction, Shift};
//!
//! let rsb = Instruction::Rsb { rd: Reg::R0, rn: Reg::R0, rm: Reg::R3, shift: Shift::Asr(2) };
//! assert_eq!(rsb.to_string(), "rsb r0, r0, r3, ASR#2");
//! ```

use std::fmt;

use super::instruction::{Instruction, Shift};

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asr(amount) => write!(f, "ASR#{amount}"),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ldr { rd, imm } => write!(f, "ldr {rd}, ={imm:#x}"),
            Self::Smull { rd_lo, rd_hi, rn, rm } => {
                write!(f, "smull {rd_lo}, {rd_hi}, {rn}, {rm}")
            }
            Self::Add { rd, rn, rm } => write!(f, "add {rd}, {rn}, {rm}"),
            Self::Mov { rd, rm, shift } => write!(f, "mov {rd}, {rm}, {shift}"),
            Self::Rsb { rd, rn, rm, shift } => write!(f, "rsb {rd}, {rn}, {rm}, {shift}"),
        }
    }
}

/// Renders a program as one instruction per line.
pub fn listing(program: &[Instruction]) -> String {
    program
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
