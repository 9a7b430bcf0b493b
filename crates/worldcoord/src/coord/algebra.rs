//! Affine-space operator set for [`Coord`].
//!
//! | expression            | result |
//! |-----------------------|--------|
//! | point − point         | vector |
//! | point ± vector        | point  |
//! | vector + point        | point  |
//! | vector ± vector       | vector |
//! | vector × scalar       | vector |
//! | −point, −vector       | same   |
//!
//! Division never goes through `/`: [`RelativeVector::try_div`] reports a zero divisor
//! as [`crate::error::Error::InvalidScalar`]. Scaling a point has no affine meaning (the
//! result depends on where the frame's origin is), so it is only available under the
//! explicit names [`AbsolutePoint::raw_scale`] and [`AbsolutePoint::try_raw_div`].
//!
//! The operators follow integer semantics on overflow. [`Coord::try_add`],
//! [`Coord::try_sub`] and [`AbsolutePoint::try_relative_to`] report it as
//! [`crate::error::Error::Overflow`] instead.
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{AbsolutePoint, Coord, Frame, Kind, RelativeVector};
use crate::error::Result;
use crate::scalar::Scalar;

impl<F: Frame, const N: usize> AbsolutePoint<F, N> {
    /// Reinterprets the fields as a displacement from the frame origin.
    #[inline]
    pub fn as_relative(self) -> RelativeVector<F, N> {
        Coord::from_array(self.to_array())
    }

    /// Field-wise scaling of a location. Not origin-independent.
    #[inline]
    pub fn raw_scale(self, k: F::Scalar) -> Self {
        self.map(|v| v * k)
    }

    /// Field-wise division of a location. Not origin-independent.
    pub fn try_raw_div(self, k: F::Scalar) -> Result<Self> {
        self.try_convert(|v| v.checked_quotient(k))
    }

    /// `self - origin`, failing instead of overflowing.
    pub fn try_relative_to(self, origin: Self) -> Result<RelativeVector<F, N>> {
        self.try_zip_with(origin, <F::Scalar as Scalar>::try_sub)
    }
}

impl<F: Frame, K: Kind, const N: usize> Coord<F, K, N> {
    /// `self + rhs`, failing instead of overflowing.
    pub fn try_add(self, rhs: RelativeVector<F, N>) -> Result<Self> {
        self.try_zip_with(rhs, <F::Scalar as Scalar>::try_add)
    }

    /// `self - rhs`, failing instead of overflowing.
    pub fn try_sub(self, rhs: RelativeVector<F, N>) -> Result<Self> {
        self.try_zip_with(rhs, <F::Scalar as Scalar>::try_sub)
    }
}

impl<F: Frame, const N: usize> RelativeVector<F, N> {
    pub const ZERO: Self = Coord::from_array([<F::Scalar as Scalar>::ZERO; N]);

    /// Reinterprets the displacement as the location it reaches from the frame origin.
    #[inline]
    pub fn as_absolute(self) -> AbsolutePoint<F, N> {
        Coord::from_array(self.to_array())
    }

    /// Field-wise division; a zero divisor is an error, not a panic.
    pub fn try_div(self, k: F::Scalar) -> Result<Self> {
        self.try_convert(|v| v.checked_quotient(k))
    }
}

impl<F: Frame, const N: usize> Default for RelativeVector<F, N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<F: Frame, const N: usize> Sub for AbsolutePoint<F, N> {
    type Output = RelativeVector<F, N>;
    #[inline]
    fn sub(self, rhs: Self) -> RelativeVector<F, N> {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<F: Frame, const N: usize> Add<RelativeVector<F, N>> for AbsolutePoint<F, N> {
    type Output = AbsolutePoint<F, N>;
    #[inline]
    fn add(self, rhs: RelativeVector<F, N>) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<F: Frame, const N: usize> Sub<RelativeVector<F, N>> for AbsolutePoint<F, N> {
    type Output = AbsolutePoint<F, N>;
    #[inline]
    fn sub(self, rhs: RelativeVector<F, N>) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<F: Frame, const N: usize> Add<AbsolutePoint<F, N>> for RelativeVector<F, N> {
    type Output = AbsolutePoint<F, N>;
    #[inline]
    fn add(self, rhs: AbsolutePoint<F, N>) -> AbsolutePoint<F, N> {
        rhs + self
    }
}

impl<F: Frame, const N: usize> Add for RelativeVector<F, N> {
    type Output = RelativeVector<F, N>;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<F: Frame, const N: usize> Sub for RelativeVector<F, N> {
    type Output = RelativeVector<F, N>;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<F: Frame, const N: usize> Mul<F::Scalar> for RelativeVector<F, N> {
    type Output = RelativeVector<F, N>;
    #[inline]
    fn mul(self, k: F::Scalar) -> Self {
        self.map(|v| v * k)
    }
}

impl<F: Frame, K: Kind, const N: usize> Neg for Coord<F, K, N> {
    type Output = Coord<F, K, N>;
    #[inline]
    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}

impl<F: Frame, K: Kind, const N: usize> AddAssign<RelativeVector<F, N>> for Coord<F, K, N>
where
    Coord<F, K, N>: Add<RelativeVector<F, N>, Output = Coord<F, K, N>>,
{
    fn add_assign(&mut self, rhs: RelativeVector<F, N>) {
        *self = *self + rhs;
    }
}

impl<F: Frame, K: Kind, const N: usize> SubAssign<RelativeVector<F, N>> for Coord<F, K, N>
where
    Coord<F, K, N>: Sub<RelativeVector<F, N>, Output = Coord<F, K, N>>,
{
    fn sub_assign(&mut self, rhs: RelativeVector<F, N>) {
        *self = *self - rhs;
    }
}

impl<F: Frame, const N: usize> MulAssign<F::Scalar> for RelativeVector<F, N> {
    fn mul_assign(&mut self, k: F::Scalar) {
        *self = *self * k;
    }
}

impl<F: Frame, const N: usize> Sum for RelativeVector<F, N> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, v| acc + v)
    }
}
