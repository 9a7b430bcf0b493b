//! Scalar types stored in coordinate fields.
//!
//! Every frame picks one [`Scalar`]: integer pixels for screen frames, integer indices for
//! the tile and chunk grids, and [`FixedPoint`] for physics space.
use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{Error, Result};
use crate::fixed::FixedPoint;

/// Screen pixels.
pub type PixelT = i32;
/// Tile grid index.
pub type TileT = i64;
/// Chunk grid index.
pub type ChunkT = i64;
/// Physics space, in tiles with sub-tile precision.
pub type PhysT = FixedPoint;

/// Fixed engine-wide constants.
pub mod settings {
    use super::{PhysT, TileT};
    use crate::fixed::FixedPoint;

    /// Raw physics units per tile edge.
    pub const PHYS_PER_TILE: i64 = FixedPoint::SCALE;
    /// Default chunk edge length in tiles.
    pub const TILES_PER_CHUNK: TileT = 16;
    /// Half a tile, the offset from a tile's corner to its center.
    pub const HALF_TILE: PhysT = FixedPoint::HALF;
}

/// Field type of a coordinate.
pub trait Scalar:
    Copy
    + PartialEq
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;

    /// Quotient that reports a zero divisor instead of panicking.
    fn checked_quotient(self, rhs: Self) -> Result<Self>;

    /// Sum that reports leaving the scalar range as [`Error::Overflow`].
    fn try_add(self, rhs: Self) -> Result<Self>;

    /// Difference that reports leaving the scalar range as [`Error::Overflow`].
    fn try_sub(self, rhs: Self) -> Result<Self>;
}

macro_rules! impl_int_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0;

                fn checked_quotient(self, rhs: Self) -> Result<Self> {
                    if rhs == 0 {
                        return Err(Error::division_by_zero(self));
                    }
                    self.checked_div(rhs)
                        .ok_or_else(|| Error::overflow(format!("{self} / {rhs}")))
                }

                fn try_add(self, rhs: Self) -> Result<Self> {
                    self.checked_add(rhs)
                        .ok_or_else(|| Error::overflow(format!("{self} + {rhs}")))
                }

                fn try_sub(self, rhs: Self) -> Result<Self> {
                    self.checked_sub(rhs)
                        .ok_or_else(|| Error::overflow(format!("{self} - {rhs}")))
                }
            }
        )*
    };
}

impl_int_scalar!(i32, i64);

impl Scalar for FixedPoint {
    const ZERO: Self = FixedPoint::ZERO;

    fn checked_quotient(self, rhs: Self) -> Result<Self> {
        self.checked_div(rhs)
    }

    fn try_add(self, rhs: Self) -> Result<Self> {
        self.checked_add(rhs)
    }

    fn try_sub(self, rhs: Self) -> Result<Self> {
        self.checked_sub(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_quotient_truncates() {
        assert_eq!(7i64.checked_quotient(2).unwrap(), 3);
        assert_eq!((-7i32).checked_quotient(2).unwrap(), -3);
    }

    #[test]
    fn zero_divisor_fails_for_every_scalar() {
        assert!(matches!(5i32.checked_quotient(0), Err(Error::InvalidScalar(_))));
        assert!(matches!(5i64.checked_quotient(0), Err(Error::InvalidScalar(_))));
        assert!(matches!(
            FixedPoint::ONE.checked_quotient(FixedPoint::ZERO),
            Err(Error::InvalidScalar(_))
        ));
    }

    #[test]
    fn min_over_minus_one_overflows() {
        assert!(matches!(i32::MIN.checked_quotient(-1), Err(Error::Overflow(_))));
    }

    #[test]
    fn checked_sum_and_difference() {
        assert_eq!(3i32.try_add(4).unwrap(), 7);
        assert!(matches!(i32::MAX.try_add(1), Err(Error::Overflow(_))));
        assert!(matches!(i64::MIN.try_sub(1), Err(Error::Overflow(_))));
        assert!(matches!(
            FixedPoint::MIN.try_sub(FixedPoint::ONE),
            Err(Error::Overflow(_))
        ));
    }

    #[test]
    fn settings_are_consistent() {
        assert_eq!(settings::PHYS_PER_TILE, 65_536);
        assert_eq!(settings::HALF_TILE.raw() * 2, settings::PHYS_PER_TILE);
    }
}
