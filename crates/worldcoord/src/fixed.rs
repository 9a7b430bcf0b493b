//! Fixed-point scalar used for continuous physics space.
//!
//! [`FixedPoint`] stores a signed 64-bit raw value with [`FixedPoint::FRACTIONAL_BITS`]
//! fractional bits, so one whole unit (one tile) is `1 << 16` raw steps. Integer values
//! convert exactly, which keeps tile corners and tile centers free of drift.
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::math::floor_div_wide;

/// Signed fixed-point number with 16 fractional bits.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct FixedPoint {
    raw: i64,
}

impl FixedPoint {
    pub const FRACTIONAL_BITS: u32 = 16;
    /// Raw value of one whole unit.
    pub const SCALE: i64 = 1 << Self::FRACTIONAL_BITS;
    const FRACTION_MASK: i64 = Self::SCALE - 1;

    pub const ZERO: Self = Self::from_raw(0);
    pub const ONE: Self = Self::from_raw(Self::SCALE);
    pub const HALF: Self = Self::from_raw(Self::SCALE / 2);
    pub const MIN: Self = Self::from_raw(i64::MIN);
    pub const MAX: Self = Self::from_raw(i64::MAX);

    /// Wraps a raw value without any scaling.
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self { raw }
    }

    #[inline]
    pub const fn raw(self) -> i64 {
        self.raw
    }

    /// Exact integer conversion. Fails if `n` has no representation in range.
    pub fn from_int(n: i64) -> Result<Self> {
        n.checked_mul(Self::SCALE)
            .map(Self::from_raw)
            .ok_or_else(|| Error::overflow(format!("{n} does not fit the fixed-point range")))
    }

    /// Nearest representable value below `v`. Non-finite or out-of-range inputs saturate.
    pub fn from_f64(v: f64) -> Self {
        Self::from_raw((v * Self::SCALE as f64).floor() as i64)
    }

    pub fn to_f64(self) -> f64 {
        self.raw as f64 / Self::SCALE as f64
    }

    pub fn to_f32(self) -> f32 {
        self.to_f64() as f32
    }

    /// Largest integer not greater than the value.
    #[inline]
    pub const fn floor(self) -> i64 {
        self.raw >> Self::FRACTIONAL_BITS
    }

    /// Fractional part, always in `[0, 1)`.
    #[inline]
    pub const fn fract(self) -> Self {
        Self::from_raw(self.raw & Self::FRACTION_MASK)
    }

    /// Sum, or [`Error::Overflow`] outside the raw range.
    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        self.raw
            .checked_add(rhs.raw)
            .map(Self::from_raw)
            .ok_or_else(|| Error::overflow(format!("{self} + {rhs}")))
    }

    /// Difference, or [`Error::Overflow`] outside the raw range.
    pub fn checked_sub(self, rhs: Self) -> Result<Self> {
        self.raw
            .checked_sub(rhs.raw)
            .map(Self::from_raw)
            .ok_or_else(|| Error::overflow(format!("{self} - {rhs}")))
    }

    /// Fixed-point product, floored to the nearest representable value.
    pub fn checked_mul(self, rhs: Self) -> Result<Self> {
        let wide = floor_div_wide(self.raw as i128 * rhs.raw as i128, Self::SCALE as i128);
        i64::try_from(wide)
            .map(Self::from_raw)
            .map_err(|_| Error::overflow(format!("{self} * {rhs}")))
    }

    /// Fixed-point quotient, truncated toward zero like integer division.
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        if rhs.raw == 0 {
            return Err(Error::division_by_zero(self));
        }
        let wide = ((self.raw as i128) << Self::FRACTIONAL_BITS) / rhs.raw as i128;
        i64::try_from(wide)
            .map(Self::from_raw)
            .map_err(|_| Error::overflow(format!("{self} / {rhs}")))
    }
}

impl From<i32> for FixedPoint {
    fn from(value: i32) -> Self {
        Self::from_raw((value as i64) << Self::FRACTIONAL_BITS)
    }
}

impl Add for FixedPoint {
    type Output = FixedPoint;
    #[inline]
    fn add(self, rhs: FixedPoint) -> FixedPoint {
        FixedPoint::from_raw(self.raw + rhs.raw)
    }
}

impl Sub for FixedPoint {
    type Output = FixedPoint;
    #[inline]
    fn sub(self, rhs: FixedPoint) -> FixedPoint {
        FixedPoint::from_raw(self.raw - rhs.raw)
    }
}

impl Neg for FixedPoint {
    type Output = FixedPoint;
    #[inline]
    fn neg(self) -> FixedPoint {
        FixedPoint::from_raw(-self.raw)
    }
}

impl Mul for FixedPoint {
    type Output = FixedPoint;
    /// Floored fixed-point product. Overflow behaves like integer `*`: it panics with
    /// debug assertions and wraps without them. Use [`FixedPoint::checked_mul`] to detect it.
    #[inline]
    fn mul(self, rhs: FixedPoint) -> FixedPoint {
        let wide = floor_div_wide(self.raw as i128 * rhs.raw as i128, Self::SCALE as i128);
        debug_assert!(
            i64::try_from(wide).is_ok(),
            "attempt to multiply with overflow"
        );
        FixedPoint::from_raw(wide as i64)
    }
}

impl AddAssign for FixedPoint {
    fn add_assign(&mut self, rhs: FixedPoint) {
        *self = *self + rhs;
    }
}

impl SubAssign for FixedPoint {
    fn sub_assign(&mut self, rhs: FixedPoint) {
        *self = *self - rhs;
    }
}

impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f64(), f)
    }
}

impl fmt::Debug for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedPoint({})", self.to_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_convert_exactly() {
        assert_eq!(FixedPoint::from_int(1).unwrap().raw(), 65_536);
        assert_eq!(FixedPoint::from_int(-3).unwrap().raw(), -196_608);
        assert_eq!(FixedPoint::from(2).raw(), 131_072);
        assert_eq!(FixedPoint::from_int(10).unwrap().to_f64(), 10.0);
    }

    #[test]
    fn from_int_fails_outside_range() {
        assert!(matches!(
            FixedPoint::from_int(i64::MAX / 2),
            Err(Error::Overflow(_))
        ));
        assert!(FixedPoint::from_int((i64::MAX >> 16) + 1).is_err());
        assert!(FixedPoint::from_int(i64::MAX >> 16).is_ok());
    }

    #[test]
    fn floor_and_fract_split_negative_values() {
        let v = FixedPoint::from_f64(-0.25);
        assert_eq!(v.floor(), -1);
        assert_eq!(v.fract(), FixedPoint::from_f64(0.75));

        let w = FixedPoint::from_raw(98_304);
        assert_eq!(w.floor(), 1);
        assert_eq!(w.fract(), FixedPoint::HALF);
    }

    #[test]
    fn half_is_exact() {
        assert_eq!(FixedPoint::HALF + FixedPoint::HALF, FixedPoint::ONE);
        assert_eq!(FixedPoint::HALF.to_f64(), 0.5);
    }

    #[test]
    fn multiplication_and_division() {
        let a = FixedPoint::from_f64(1.5);
        let b = FixedPoint::from(4);
        assert_eq!(a * b, FixedPoint::from(6));
        assert_eq!((b.checked_div(a)).unwrap().raw(), 174_762);
        assert_eq!(a.checked_mul(b).unwrap(), FixedPoint::from(6));
    }

    #[test]
    fn division_by_zero_is_reported() {
        assert!(matches!(
            FixedPoint::ONE.checked_div(FixedPoint::ZERO),
            Err(Error::InvalidScalar(_))
        ));
    }

    #[test]
    fn checked_mul_detects_overflow() {
        assert!(FixedPoint::MAX.checked_mul(FixedPoint::from(2)).is_err());
        assert!(FixedPoint::MAX.checked_add(FixedPoint::ONE).is_err());
        assert!(FixedPoint::MIN.checked_sub(FixedPoint::ONE).is_err());
        assert_eq!(
            FixedPoint::ONE.checked_sub(FixedPoint::HALF).unwrap(),
            FixedPoint::HALF
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "attempt to multiply with overflow")]
    fn mul_overflow_panics_like_integers() {
        let _ = FixedPoint::MAX * FixedPoint::from(2);
    }

    #[test]
    fn display_shows_decimal_value() {
        assert_eq!(FixedPoint::from_f64(1.5).to_string(), "1.5");
        assert_eq!(format!("{:?}", FixedPoint::HALF), "FixedPoint(0.5)");
    }
}
