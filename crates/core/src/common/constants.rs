//! Constants of the divide-by-seven idiom and the 32-bit register model.

/// The only divisor this idiom is valid for.
pub const DIVISOR: i32 = 7;

/// Fixed-point reciprocal used by the multiply step: `-(3/7) * 2^32`, truncated toward zero.
///
/// Read as an unsigned word this is `0x92492493`, i.e. `ceil(2^34 / 7)`.
pub const MAGIC_SEVEN: i32 = -0x6DB6DB6D;

/// Raw register word holding [`MAGIC_SEVEN`], as loaded by `ldr r3, =...`.
pub const MAGIC_SEVEN_WORD: u32 = MAGIC_SEVEN as u32;

/// Arithmetic shift applied to the corrected high word (`ASR#2`).
pub const POST_SHIFT: u8 = 2;

/// Arithmetic shift that extracts the dividend's sign (`ASR#31`).
pub const SIGN_SHIFT: u8 = 31;

/// Width of an ARM general-purpose register in bits.
pub const WORD_BITS: u32 = 32;

/// Number of ARM general-purpose registers (`r0`-`r15`).
pub const NUM_REGS: usize = 16;

/// Largest distinct arithmetic shift; `ASR` by 32 or more fills with the sign bit.
pub const MAX_ASR: u8 = 31;
