//! CPU core.
//!
//! 1. **ALU:** 32-bit arithmetic, long multiply, and the barrel shifter.
//! 2. **CPU:** Register state and instruction retirement.

/// Arithmetic Logic Unit.
pub mod alu;

/// CPU state and instruction execution.
pub mod cpu;

pub use cpu::Cpu;
