//! ALU arithmetic operations.
//!
//! Add and reverse-subtract wrap modulo 2^32. The long multiply sign-extends
//! both factors to 64 bits first, so the product is exact: two 32-bit
//! factors cannot overflow a 64-bit result.

use crate::common::constants::WORD_BITS;

/// `rn + rm`, wrapping.
#[inline]
pub const fn add(rn: u32, rm: u32) -> u32 {
    rn.wrapping_add(rm)
}

/// `operand2 - rn`, wrapping (ARM `RSB`).
#[inline]
pub const fn rsb(rn: u32, operand2: u32) -> u32 {
    operand2.wrapping_sub(rn)
}

/// Full signed 64-bit product of two register words.
#[inline]
pub const fn smull_product(rn: u32, rm: u32) -> i64 {
    (rn as i32 as i64) * (rm as i32 as i64)
}

/// Signed long multiply, returning `(lo, hi)` words of the product.
///
/// ```
/// use div7_core::core::alu::arithmetic::smull;
///
/// let (lo, hi) = smull(-1i32 as u32, 2);
/// assert_eq!((lo, hi), (0xFFFF_FFFE, 0xFFFF_FFFF));
/// ```
#[inline]
pub const fn smull(rn: u32, rm: u32) -> (u32, u32) {
    let product = smull_product(rn, rm);
    (product as u32, (product >> WORD_BITS) as u32)
}
