//! Divide-by-seven.
//!
//! Signed division by 7 without a divide instruction:
//!
//! 1. `hi = (n * MAGIC) >> 32`, where `MAGIC = -0x6DB6DB6D`. Read unsigned,
//!    the word is `M = ceil(2^34 / 7)`, so `MAGIC = M - 2^32` and
//!    `hi = floor(n * M / 2^32) - n`.
//! 2. `hi += n` leaves `floor(n * M / 2^32)`.
//! 3. `hi >> 2` gives `floor(n * M / 2^34)`: `floor(n / 7)` for `n >= 0`,
//!    and `ceil(n / 7) - 1` for `n < 0` because `M` slightly exceeds `2^34 / 7`.
//! 4. Subtracting `n >> 31` (`0` or `-1`) adds the missing one back for
//!    negative dividends, which makes the result truncate toward zero.
//!
//! The result equals `n / 7` for every `i32`, including `i32::MIN`.

use std::convert::Infallible;

use serde::Serialize;

use crate::common::constants::{DIVISOR, MAGIC_SEVEN, POST_SHIFT, SIGN_SHIFT, WORD_BITS};
use crate::common::{EmuError, Reg};
use crate::core::Cpu;
use crate::isa::{Instruction, divide_by_seven_program};
use crate::stats::ExecStats;

use super::trace::{TraceEvent, TraceSink};

/// Computes `dividend / 7`, truncated toward zero, with the reciprocal-multiply idiom.
///
/// ```
/// use div7_core::divide_by_seven;
///
/// assert_eq!(divide_by_seven(13), 1);
/// assert_eq!(divide_by_seven(-13), -1);
/// ```
pub const fn divide_by_seven(dividend: i32) -> i32 {
    let product = (dividend as i64) * (MAGIC_SEVEN as i64);
    let high = ((product >> WORD_BITS) as i32).wrapping_add(dividend);
    let sign = dividend >> SIGN_SHIFT;
    (high >> POST_SHIFT).wrapping_sub(sign)
}

/// Outcome of one emulated division.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Division {
    /// Value placed in `r0` before the program ran.
    pub dividend: i32,
    /// Value left in `r0` afterwards.
    pub quotient: i32,
    /// Every retired instruction, in order.
    pub steps: Vec<TraceEvent>,
    /// Retirement counters.
    pub stats: ExecStats,
}

impl Division {
    /// `dividend - quotient * 7`. Always in `(-7, 7)` with the dividend's sign.
    pub const fn remainder(&self) -> i32 {
        self.dividend.wrapping_sub(self.quotient.wrapping_mul(DIVISOR))
    }
}

/// Runs the divide-by-seven instruction program on an emulated CPU.
#[derive(Clone, Copy, Debug)]
pub struct DividerEmulator {
    program: &'static [Instruction],
}

impl Default for DividerEmulator {
    fn default() -> Self {
        Self::new()
    }
}

impl DividerEmulator {
    /// Creates an emulator for the standard divide-by-seven program.
    pub const fn new() -> Self {
        Self {
            program: divide_by_seven_program(),
        }
    }

    /// The program this emulator executes.
    pub const fn program(&self) -> &'static [Instruction] {
        self.program
    }

    /// Emulates `dividend / 7`, reporting every step to `sink`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `sink`. The arithmetic itself cannot fail.
    pub fn run<S: TraceSink + ?Sized>(
        &self,
        dividend: i32,
        sink: &mut S,
    ) -> Result<Division, EmuError> {
        sink.begin(dividend)?;
        let division = self.drive(dividend, |event| sink.step(event))?;
        sink.finish(division.quotient)?;
        Ok(division)
    }

    /// Emulates `dividend / 7` without reporting.
    pub fn evaluate(&self, dividend: i32) -> Division {
        match self.drive(dividend, |_| Ok::<(), Infallible>(())) {
            Ok(division) => division,
            Err(never) => match never {},
        }
    }

    fn drive<E>(
        &self,
        dividend: i32,
        on_step: impl FnMut(&TraceEvent) -> Result<(), E>,
    ) -> Result<Division, E> {
        let mut cpu = Cpu::new();
        cpu.regs.write_signed(Reg::R0, dividend);

        let steps = cpu.execute(self.program, on_step)?;
        cpu.regs.dump();

        Ok(Division {
            dividend,
            quotient: cpu.regs.read_signed(Reg::R0),
            steps,
            stats: cpu.stats,
        })
    }
}
