//! Simulation.
//!
//! 1. **Divider:** The pure divide-by-seven function and the traced emulator.
//! 2. **Trace:** Trace events and the sinks that present them.
//! 3. **Verify:** Range checks against native truncating division.

/// Divide-by-seven computation and emulation.
pub mod divider;

/// Trace events and sinks.
pub mod trace;

/// Verification against native division.
pub mod verify;

pub use divider::{Division, DividerEmulator, divide_by_seven};
pub use trace::{LogSink, NullSink, RegWrite, TextSink, TraceEvent, TraceSink};
pub use verify::{VerifyReport, verify_range};
