//! ARM divide-by-seven emulator library.
//!
//! This crate emulates, instruction by instruction, the sequence an ARM compiler
//! emits to replace signed 32-bit division by 7 with a reciprocal multiply:
//! 1. **Common:** Register file, architectural constants, and error types.
//! 2. **ISA:** The instruction subset used by the idiom, its disassembly, and the program itself.
//! 3. **Core:** The 32-bit ALU and the CPU that retires instructions.
//! 4. **Simulation:** The divider emulator, trace sinks, and range verification.
//! 5. **Support:** Configuration and execution statistics.
//!
//! The arithmetic is available as a pure function, independent of any tracing:
//!
//! ```
//! use div7_core::divide_by_seven;
//!
//! assert_eq!(divide_by_seven(42), 6);
//! assert_eq!(divide_by_seven(-6), 0);
//! assert_eq!(divide_by_seven(i32::MIN), i32::MIN / 7);
//! ```

/// Common types and constants (registers, magic constant, errors).
pub mod common;
/// Configuration (trace format, verification range).
pub mod config;
/// CPU core (ALU and instruction execution).
pub mod core;
/// Instruction set (instructions, disassembly, the divide-by-seven program).
pub mod isa;
/// Divider emulator, trace sinks, and verification.
pub mod sim;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// CPU type; holds the register file and statistics.
pub use crate::core::Cpu;
/// Pure divide-by-seven using the reciprocal-multiply idiom.
pub use crate::sim::divider::divide_by_seven;
/// Traced emulator that runs the instruction program.
pub use crate::sim::divider::{Division, DividerEmulator};
/// Trace event consumer trait.
pub use crate::sim::trace::TraceSink;
