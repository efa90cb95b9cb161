//! Error definitions.
//!
//! The divide-by-seven arithmetic itself cannot fail. Errors only arise at the
//! edges of the emulator:
//! 1. **Tracing:** A trace sink failed to write or encode an event.
//! 2. **Configuration:** A config file was unreadable, malformed, or inconsistent.
//! 3. **Verification:** The emulator disagreed with native division.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while running the traced emulator.
#[derive(Debug, Error)]
pub enum EmuError {
    /// A trace sink failed to write its output.
    #[error("failed to write trace: {0}")]
    Trace(#[from] io::Error),

    /// A trace could not be encoded as JSON.
    #[error("failed to encode trace: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors raised while loading or validating a [`Config`](crate::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read config {}: {source}", .path.display())]
    Read {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The config file is not valid JSON for the config schema.
    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The verification range is empty in the wrong direction.
    #[error("invalid verify range: start {start} is greater than end {end}")]
    InvalidRange {
        /// Configured first dividend.
        start: i32,
        /// Configured end (exclusive).
        end: i32,
    },
}

/// Errors raised by range verification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    /// The emulated quotient differs from native truncating division.
    #[error("{dividend}/7: expected {expected}, emulator produced {actual}")]
    Mismatch {
        /// Dividend that failed.
        dividend: i32,
        /// Native `dividend / 7`.
        expected: i32,
        /// Quotient produced by the emulator.
        actual: i32,
    },
}
