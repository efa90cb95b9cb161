//! Execution trace events and sinks.
//!
//! The emulator reports each retired instruction as a [`TraceEvent`] to a
//! [`TraceSink`]. Presentation lives entirely in the sinks:
//! 1. **`NullSink`:** Discards everything.
//! 2. **`TextSink`:** Human-readable listing with register values in decimal and hex.
//! 3. **`LogSink`:** Forwards events to `tracing` at `DEBUG` level.
//! 4. **`Vec<TraceEvent>`:** Collects events for later inspection.

use std::io::Write;

use serde::Serialize;

use crate::common::constants::DIVISOR;
use crate::common::{EmuError, Reg};
use crate::isa::Instruction;

/// A register written by an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RegWrite {
    /// Destination register.
    pub reg: Reg,
    /// Raw word written.
    pub value: u32,
}

impl RegWrite {
    /// The written word as a signed value.
    #[inline]
    pub const fn signed(&self) -> i32 {
        self.value as i32
    }
}

/// One retired instruction and its visible effects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TraceEvent {
    /// Zero-based position in the program.
    pub step: usize,
    /// Assembler text of the instruction.
    pub asm: String,
    /// The instruction itself.
    pub instruction: Instruction,
    /// Full 64-bit product, for long multiplies only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<i64>,
    /// Registers written, in write order.
    pub writes: Vec<RegWrite>,
}

impl TraceEvent {
    /// Returns the value written to `reg` by this instruction, if any.
    pub fn written(&self, reg: Reg) -> Option<u32> {
        self.writes.iter().find(|w| w.reg == reg).map(|w| w.value)
    }
}

/// Consumer of trace events emitted while emulating one division.
pub trait TraceSink {
    /// Called once before the first instruction.
    fn begin(&mut self, _dividend: i32) -> Result<(), EmuError> {
        Ok(())
    }

    /// Called after every retired instruction.
    fn step(&mut self, event: &TraceEvent) -> Result<(), EmuError>;

    /// Called once after the last instruction with the final quotient.
    fn finish(&mut self, _quotient: i32) -> Result<(), EmuError> {
        Ok(())
    }
}

impl<S: TraceSink + ?Sized> TraceSink for &mut S {
    fn begin(&mut self, dividend: i32) -> Result<(), EmuError> {
        (**self).begin(dividend)
    }

    fn step(&mut self, event: &TraceEvent) -> Result<(), EmuError> {
        (**self).step(event)
    }

    fn finish(&mut self, quotient: i32) -> Result<(), EmuError> {
        (**self).finish(quotient)
    }
}

impl TraceSink for Vec<TraceEvent> {
    fn step(&mut self, event: &TraceEvent) -> Result<(), EmuError> {
        self.push(event.clone());
        Ok(())
    }
}

/// Sink that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn step(&mut self, _event: &TraceEvent) -> Result<(), EmuError> {
        Ok(())
    }
}

/// Writes a human-readable trace.
///
/// ```text
/// Computing 42/7
///     r0 = 42 (0x0000002a)
/// ldr r3, =0x92492493
///     r3 = -1840700269 (0x92492493)
/// smull r2, r3, r0, r3
///     r0*r3 = -77309411298 (0xffffffee0000001e)
/// ...
/// 42/7 = 6
/// ```
#[derive(Debug)]
pub struct TextSink<W: Write> {
    out: W,
    dividend: i32,
}

impl<W: Write> TextSink<W> {
    /// Creates a sink writing to `out`.
    pub const fn new(out: W) -> Self {
        Self { out, dividend: 0 }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn register_line(&mut self, reg: Reg, value: u32) -> Result<(), EmuError> {
        writeln!(self.out, "    {reg} = {} ({value:#010x})", value as i32)?;
        Ok(())
    }
}

impl<W: Write> TraceSink for TextSink<W> {
    fn begin(&mut self, dividend: i32) -> Result<(), EmuError> {
        self.dividend = dividend;
        writeln!(self.out, "Computing {dividend}/{DIVISOR}")?;
        self.register_line(Reg::R0, dividend as u32)
    }

    fn step(&mut self, event: &TraceEvent) -> Result<(), EmuError> {
        writeln!(self.out, "{}", event.asm)?;
        if let (Some(product), Instruction::Smull { rn, rm, .. }) = (event.product, event.instruction) {
            writeln!(self.out, "    {rn}*{rm} = {product} ({product:#018x})")?;
        }
        for write in &event.writes {
            self.register_line(write.reg, write.value)?;
        }
        Ok(())
    }

    fn finish(&mut self, quotient: i32) -> Result<(), EmuError> {
        writeln!(self.out, "{}/{DIVISOR} = {quotient}", self.dividend)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Forwards trace events to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn begin(&mut self, dividend: i32) -> Result<(), EmuError> {
        tracing::debug!(dividend, "begin division by {DIVISOR}");
        Ok(())
    }

    fn step(&mut self, event: &TraceEvent) -> Result<(), EmuError> {
        for write in &event.writes {
            tracing::debug!(
                step = event.step,
                asm = %event.asm,
                reg = %write.reg,
                value = write.signed(),
                "retired"
            );
        }
        Ok(())
    }

    fn finish(&mut self, quotient: i32) -> Result<(), EmuError> {
        tracing::debug!(quotient, "division complete");
        Ok(())
    }
}
