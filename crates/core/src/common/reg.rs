//! ARM Register File.
//!
//! This module provides the 32-bit general-purpose register model used by the CPU.
//! It provides:
//! 1. **Naming:** The `Reg` enum for `r0`-`r15` with assembler-style display.
//! 2. **Storage:** Raw 32-bit words with signed views, as the hardware holds them.
//! 3. **Observability:** A register dump routed through `tracing`.

use std::fmt;

use serde::Serialize;

use super::constants::NUM_REGS;

/// An ARM general-purpose register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub enum Reg {
    /// Register `r0` (dividend in, quotient out).
    R0,
    /// Register `r1`.
    R1,
    /// Register `r2` (low half of the long multiply).
    R2,
    /// Register `r3` (magic constant, then high half of the long multiply).
    R3,
    /// Register `r4`.
    R4,
    /// Register `r5`.
    R5,
    /// Register `r6`.
    R6,
    /// Register `r7`.
    R7,
    /// Register `r8`.
    R8,
    /// Register `r9`.
    R9,
    /// Register `r10`.
    R10,
    /// Register `r11`.
    R11,
    /// Register `r12`.
    R12,
    /// Register `r13` (stack pointer).
    R13,
    /// Register `r14` (link register).
    R14,
    /// Register `r15` (program counter).
    R15,
}

impl Reg {
    /// All registers in index order.
    pub const ALL: [Self; NUM_REGS] = [
        Self::R0,
        Self::R1,
        Self::R2,
        Self::R3,
        Self::R4,
        Self::R5,
        Self::R6,
        Self::R7,
        Self::R8,
        Self::R9,
        Self::R10,
        Self::R11,
        Self::R12,
        Self::R13,
        Self::R14,
        Self::R15,
    ];

    /// Returns the register's index (0-15).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.index())
    }
}

impl From<Reg> for String {
    fn from(reg: Reg) -> Self {
        reg.to_string()
    }
}

/// Sixteen 32-bit general-purpose registers, zeroed on construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u32; NUM_REGS],
}

impl RegisterFile {
    /// Creates a register file with every register cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the raw word held in `reg`.
    #[inline]
    pub const fn read(&self, reg: Reg) -> u32 {
        self.regs[reg.index()]
    }

    /// Reads `reg` reinterpreted as a two's-complement signed value.
    #[inline]
    pub const fn read_signed(&self, reg: Reg) -> i32 {
        self.regs[reg.index()] as i32
    }

    /// Writes a raw word to `reg`.
    #[inline]
    pub const fn write(&mut self, reg: Reg, val: u32) {
        self.regs[reg.index()] = val;
    }

    /// Writes a signed value to `reg` as its two's-complement word.
    #[inline]
    pub const fn write_signed(&mut self, reg: Reg, val: i32) {
        self.regs[reg.index()] = val as u32;
    }

    /// Emits every non-zero register at `TRACE` level.
    pub fn dump(&self) {
        for reg in Reg::ALL {
            let val = self.read(reg);
            if val != 0 {
                tracing::trace!(%reg, value = val as i32, word = %format!("{val:#010x}"), "register");
            }
        }
    }
}
