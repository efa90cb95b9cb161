//! The divide-by-seven program.
//!
//! Dividend in `r0`, truncated quotient out in `r0`. Clobbers `r2` and `r3`.

use crate::common::Reg;
use crate::common::constants::{MAGIC_SEVEN_WORD, POST_SHIFT, SIGN_SHIFT};

use super::instruction::{Instruction, Shift};

/// Instruction sequence a compiler emits for signed `r0 / 7`.
pub const DIVIDE_BY_SEVEN: [Instruction; 5] = [
    Instruction::Ldr {
        rd: Reg::R3,
        imm: MAGIC_SEVEN_WORD,
    },
    // r3 = high word of r0 * magic
    Instruction::Smull {
        rd_lo: Reg::R2,
        rd_hi: Reg::R3,
        rn: Reg::R0,
        rm: Reg::R3,
    },
    Instruction::Add {
        rd: Reg::R3,
        rn: Reg::R3,
        rm: Reg::R0,
    },
    // r0 = 0 or -1
    Instruction::Mov {
        rd: Reg::R0,
        rm: Reg::R0,
        shift: Shift::Asr(SIGN_SHIFT),
    },
    Instruction::Rsb {
        rd: Reg::R0,
        rn: Reg::R0,
        rm: Reg::R3,
        shift: Shift::Asr(POST_SHIFT),
    },
];

/// Returns the divide-by-seven program.
pub const fn divide_by_seven_program() -> &'static [Instruction] {
    &DIVIDE_BY_SEVEN
}
