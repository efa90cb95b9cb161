//! Execution statistics.
//!
//! Tracks how many instructions of each category the CPU retired. For the
//! divide-by-seven program this is always one load, one multiply, and three
//! data-processing instructions, two of them with a shifted operand.

use std::fmt;

use serde::Serialize;

use crate::isa::{Instruction, InstructionClass};

/// Counts of retired instructions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExecStats {
    /// Total instructions retired.
    pub instructions_retired: u64,
    /// Literal-pool constant loads.
    pub load_immediates: u64,
    /// Long multiplies.
    pub multiplies: u64,
    /// Data-processing instructions.
    pub alu_ops: u64,
    /// Instructions whose second operand went through the barrel shifter.
    pub shifted_operands: u64,
}

impl ExecStats {
    /// Records one retired instruction.
    pub const fn record(&mut self, inst: &Instruction) {
        self.instructions_retired += 1;
        match inst.class() {
            InstructionClass::LoadImmediate => self.load_immediates += 1,
            InstructionClass::Multiply => self.multiplies += 1,
            InstructionClass::Alu => self.alu_ops += 1,
        }
        if inst.shift().is_some() {
            self.shifted_operands += 1;
        }
    }

    /// Adds another set of counters into this one.
    pub const fn merge(&mut self, other: &Self) {
        self.instructions_retired += other.instructions_retired;
        self.load_immediates += other.load_immediates;
        self.multiplies += other.multiplies;
        self.alu_ops += other.alu_ops;
        self.shifted_operands += other.shifted_operands;
    }
}

impl fmt::Display for ExecStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} instructions retired ({} ldr, {} mul, {} alu, {} shifted)",
            self.instructions_retired,
            self.load_immediates,
            self.multiplies,
            self.alu_ops,
            self.shifted_operands
        )
    }
}
