//! Range verification.
//!
//! Checks both the pure function and the instruction-level emulator against
//! native truncating division over a half-open range of dividends.

use std::ops::Range;

use serde::Serialize;

use crate::common::VerifyError;
use crate::common::constants::DIVISOR;

use super::divider::{DividerEmulator, divide_by_seven};

/// Summary of a successful verification run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    /// First dividend checked.
    pub start: i32,
    /// End of the range (exclusive).
    pub end: i32,
    /// Number of dividends checked.
    pub checked: u64,
}

/// Verifies every dividend in `range`.
///
/// # Errors
///
/// Returns [`VerifyError::Mismatch`] for the first dividend where either
/// implementation disagrees with `n / 7`.
pub fn verify_range(range: Range<i32>) -> Result<VerifyReport, VerifyError> {
    let emulator = DividerEmulator::new();
    let mut checked = 0u64;

    for dividend in range.clone() {
        let expected = dividend / DIVISOR;
        let pure = divide_by_seven(dividend);
        let emulated = emulator.evaluate(dividend).quotient;

        if let Some(actual) = [pure, emulated].into_iter().find(|&q| q != expected) {
            tracing::warn!(dividend, expected, actual, "quotient mismatch");
            return Err(VerifyError::Mismatch {
                dividend,
                expected,
                actual,
            });
        }
        checked += 1;
    }

    tracing::info!(start = range.start, end = range.end, checked, "verified");
    Ok(VerifyReport {
        start: range.start,
        end: range.end,
        checked,
    })
}
