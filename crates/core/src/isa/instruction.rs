//! Instruction definitions.
//!
//! Only the forms needed to express the reciprocal-multiply idiom are modelled.
//! Operands are typed registers rather than raw encodings; the idiom is never
//! decoded from machine code.

use serde::Serialize;

use crate::common::Reg;

/// Barrel-shifter operation applied to the second operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Shift {
    /// Arithmetic shift right by a constant amount.
    Asr(u8),
}

/// Coarse instruction category, used for statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum InstructionClass {
    /// Literal-pool load of a 32-bit constant.
    LoadImmediate,
    /// Long multiply.
    Multiply,
    /// Data-processing (add, move, reverse subtract).
    Alu,
}

/// An ARM instruction from the divide-by-seven idiom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Instruction {
    /// `ldr rd, =imm`: load a 32-bit constant.
    Ldr {
        /// Destination register.
        rd: Reg,
        /// Constant word.
        imm: u32,
    },
    /// `smull rdlo, rdhi, rn, rm`: signed 32x32 -> 64 multiply.
    Smull {
        /// Receives bits 0-31 of the product.
        rd_lo: Reg,
        /// Receives bits 32-63 of the product.
        rd_hi: Reg,
        /// First factor.
        rn: Reg,
        /// Second factor.
        rm: Reg,
    },
    /// `add rd, rn, rm`.
    Add {
        /// Destination register.
        rd: Reg,
        /// First operand.
        rn: Reg,
        /// Second operand.
        rm: Reg,
    },
    /// `mov rd, rm, <shift>`.
    Mov {
        /// Destination register.
        rd: Reg,
        /// Source register.
        rm: Reg,
        /// Shift applied to `rm`.
        shift: Shift,
    },
    /// `rsb rd, rn, rm, <shift>`: reverse subtract, `rd = shifted(rm) - rn`.
    Rsb {
        /// Destination register.
        rd: Reg,
        /// Subtrahend.
        rn: Reg,
        /// Minuend before shifting.
        rm: Reg,
        /// Shift applied to `rm`.
        shift: Shift,
    },
}

impl Instruction {
    /// Returns the statistics category of this instruction.
    pub const fn class(&self) -> InstructionClass {
        match self {
            Self::Ldr { .. } => InstructionClass::LoadImmediate,
            Self::Smull { .. } => InstructionClass::Multiply,
            Self::Add { .. } | Self::Mov { .. } | Self::Rsb { .. } => InstructionClass::Alu,
        }
    }

    /// Returns the shift applied to the second operand, if any.
    pub const fn shift(&self) -> Option<Shift> {
        match self {
            Self::Mov { shift, .. } | Self::Rsb { shift, .. } => Some(*shift),
            Self::Ldr { .. } | Self::Smull { .. } | Self::Add { .. } => None,
        }
    }
}
