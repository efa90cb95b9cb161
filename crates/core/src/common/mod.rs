//! Common utilities and types used throughout the emulator.
//!
//! This module provides the building blocks shared by every other component:
//! 1. **Constants:** The magic reciprocal, shift amounts, and register widths.
//! 2. **Error Handling:** Error enums for tracing, configuration, and verification.
//! 3. **Register Management:** ARM register names and the 32-bit register file.

/// Architectural and idiom constants.
pub mod constants;

/// Error types.
pub mod error;

/// Register names and register file.
pub mod reg;

pub use constants::{DIVISOR, MAGIC_SEVEN, POST_SHIFT, SIGN_SHIFT};
pub use error::{ConfigError, EmuError, VerifyError};
pub use reg::{Reg, RegisterFile};
