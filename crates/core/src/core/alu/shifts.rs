//! ALU shift operations.
//!
//! Arithmetic shift right, as applied by the barrel shifter to the second
//! operand. Amounts of 32 or more fill the word with the sign bit.

use crate::common::constants::MAX_ASR;

/// Arithmetic shift right of a register word.
#[inline]
pub fn asr(value: u32, amount: u8) -> u32 {
    ((value as i32) >> amount.min(MAX_ASR)) as u32
}
