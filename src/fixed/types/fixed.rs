// src/fixed/types/fixed.rs
/// Signed 8-bit fixed-point sample (one sign bit, seven fractional bits).
/// `Q7::MAX` (127) stands for just under +1.0. All arithmetic wraps.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Q7(i8);

/// Width of the fixed-point word in bits.
pub const WORD_BITS: u32 = i8::BITS;

/// Right shift applied to a raw product before the rounding step.
/// The product of two words carries two sign bits, so one final shift
/// after extracting the rounding bit lands back on the word format.
pub const MUL_SHIFT: u32 = WORD_BITS - 2;

/// Fixed-point multiply with rounding to nearest.
///
/// The product is formed in an `i16` accumulator and shifted right by
/// [`MUL_SHIFT`]. The lowest remaining bit is the rounding bit; one more
/// shift plus that bit gives the result. Overflow wraps silently, so
/// `fix_mul(-128, -128)` is `-128`.
#[inline]
pub const fn fix_mul(a: i8, b: i8) -> i8 {
    let c = (a as i16 * b as i16) >> MUL_SHIFT;
    let round = c & 0x01;
    ((c >> 1) + round) as i8
}

impl Q7 {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i8::MAX);
    pub const MIN: Self = Self(i8::MIN);

    /// Creates a Q7 from the raw integer value.
    #[inline]
    pub const fn from_bits(bits: i8) -> Self {
        Self(bits)
    }

    /// Returns the stored raw value.
    #[inline]
    pub const fn to_bits(self) -> i8 {
        self.0
    }

    /// Converts an f32 in [-1, 1) to Q7, rounding to nearest.
    /// Values outside the range saturate at the ends.
    pub fn from_f32(value: f32) -> Self {
        let scaled = libm::roundf(value * (1i32 << (WORD_BITS - 1)) as f32);
        Self(scaled as i8)
    }

    pub fn to_f32(self) -> f32 {
        self.0 as f32 / (1i32 << (WORD_BITS - 1)) as f32
    }

    /// Scales the value by 0.5 (arithmetic shift right by 1).
    #[inline]
    pub const fn scale_half(self) -> Self {
        Self(self.0 >> 1)
    }

    /// Magnitude as `u8`, so `Q7::MIN` does not overflow.
    #[inline]
    pub const fn unsigned_abs(self) -> u8 {
        self.0.unsigned_abs()
    }
}

use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

impl Add for Q7 {
    type Output = Q7;

    #[inline]
    fn add(self, rhs: Q7) -> Q7 {
        Q7(self.0.wrapping_add(rhs.0))
    }
}

impl AddAssign for Q7 {
    #[inline]
    fn add_assign(&mut self, rhs: Q7) {
        *self = *self + rhs;
    }
}

impl Sub for Q7 {
    type Output = Q7;

    #[inline]
    fn sub(self, rhs: Q7) -> Q7 {
        Q7(self.0.wrapping_sub(rhs.0))
    }
}

impl SubAssign for Q7 {
    #[inline]
    fn sub_assign(&mut self, rhs: Q7) {
        *self = *self - rhs;
    }
}

impl Neg for Q7 {
    type Output = Q7;

    #[inline]
    fn neg(self) -> Q7 {
        Q7(self.0.wrapping_neg())
    }
}

impl Mul for Q7 {
    type Output = Q7;

    #[inline]
    fn mul(self, rhs: Q7) -> Q7 {
        Q7(fix_mul(self.0, rhs.0))
    }
}

impl From<i8> for Q7 {
    fn from(bits: i8) -> Self {
        Self(bits)
    }
}

impl From<Q7> for i8 {
    fn from(value: Q7) -> Self {
        value.0
    }
}

use core::fmt;

impl fmt::Display for Q7 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.to_f32())
    }
}

impl fmt::Debug for Q7 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // In Debug, show both the decimal value and the raw value in parentheses
        write!(f, "{:.4} (raw: {})", self.to_f32(), self.0)
    }
}
