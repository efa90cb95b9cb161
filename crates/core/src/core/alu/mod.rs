//! Arithmetic Logic Unit (ALU).
//!
//! Integer operations over raw 32-bit register words. Every result wraps the
//! way a 32-bit datapath does; signedness is a matter of interpretation, not
//! storage.
//!
//! - [`arithmetic`]: Add, Rsb, Smull
//! - [`shifts`]:     Asr (the barrel shifter)

/// Integer arithmetic (add, reverse subtract, long multiply).
pub mod arithmetic;

/// Barrel-shifter operations.
pub mod shifts;

use crate::isa::Shift;

/// Arithmetic Logic Unit for the idiom's data-processing instructions.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Applies a barrel-shifter operation to an operand word.
    ///
    /// # Examples
    ///
    /// ```
    /// use div7_core::core::alu::Alu;
    /// use div7_core::isa::Shift;
    ///
    /// assert_eq!(Alu::shift(0x8000_0000, Shift::Asr(31)), 0xFFFF_FFFF);
    /// assert_eq!(Alu::shift(24, Shift::Asr(2)), 6);
    /// ```
    #[inline]
    pub fn shift(value: u32, shift: Shift) -> u32 {
        match shift {
            Shift::Asr(amount) => shifts::asr(value, amount),
        }
    }
}
