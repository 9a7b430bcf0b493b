//! Generic coordinate kernel.
//!
//! A [`Coord`] is `N` scalars tagged with two zero-sized markers: the [`Frame`] it lives
//! in and its [`Kind`]. [`Absolute`] values are locations ([`AbsolutePoint`]), [`Relative`]
//! values are displacements ([`RelativeVector`]). The markers exist only at compile time;
//! the operator set in [`algebra`] is selected by them, so a tile index cannot be added to a
//! chunk index and two locations cannot be added to each other.
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use crate::error::Result;
use crate::scalar::Scalar;

pub mod algebra;

mod sealed {
    pub trait Sealed {}
}

/// A named coordinate space.
pub trait Frame: 'static {
    type Scalar: Scalar;
    /// Name used when formatting values of this frame.
    const NAME: &'static str;
}

/// World-facing frame with `ne`, `se` and `up` axes.
pub trait GroundFrame: Frame {}

/// Pixel frame with `x` and `y` axes.
pub trait PixelFrame: Frame {}

/// Absolute or relative. Implemented only by [`Absolute`] and [`Relative`].
pub trait Kind: sealed::Sealed + 'static {
    const SUFFIX: &'static str;
}

/// Marker for locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Absolute;

/// Marker for displacements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Relative;

impl sealed::Sealed for Absolute {}
impl sealed::Sealed for Relative {}

impl Kind for Absolute {
    const SUFFIX: &'static str = "";
}

impl Kind for Relative {
    const SUFFIX: &'static str = "_delta";
}

/// `N` scalars of frame `F` with kind `K`.
pub struct Coord<F: Frame, K: Kind, const N: usize> {
    values: [F::Scalar; N],
    _marker: PhantomData<fn() -> (F, K)>,
}

/// A location in frame `F`.
pub type AbsolutePoint<F, const N: usize> = Coord<F, Absolute, N>;

/// A displacement in frame `F`.
pub type RelativeVector<F, const N: usize> = Coord<F, Relative, N>;

impl<F: Frame, K: Kind, const N: usize> Coord<F, K, N> {
    #[inline]
    pub const fn from_array(values: [F::Scalar; N]) -> Self {
        Self {
            values,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub const fn as_array(&self) -> &[F::Scalar; N] {
        &self.values
    }

    #[inline]
    pub fn to_array(self) -> [F::Scalar; N] {
        self.values
    }

    /// Field `I`, checked against `N` at compile time.
    #[inline]
    pub fn get<const I: usize>(&self) -> F::Scalar {
        const { assert!(I < N, "axis index out of range") };
        self.values[I]
    }

    #[inline]
    pub(crate) fn map(self, f: impl FnMut(F::Scalar) -> F::Scalar) -> Self {
        Self::from_array(self.values.map(f))
    }

    /// Field-wise combination with another value of the same frame.
    #[inline]
    pub(crate) fn zip_with<L: Kind, J: Kind>(
        self,
        rhs: Coord<F, L, N>,
        mut f: impl FnMut(F::Scalar, F::Scalar) -> F::Scalar,
    ) -> Coord<F, J, N> {
        let mut out = self.values;
        for (lhs, rhs) in out.iter_mut().zip(rhs.values) {
            *lhs = f(*lhs, rhs);
        }
        Coord::from_array(out)
    }

    /// Field-wise fallible combination with another value of the same frame.
    pub(crate) fn try_zip_with<L: Kind, J: Kind>(
        self,
        rhs: Coord<F, L, N>,
        mut f: impl FnMut(F::Scalar, F::Scalar) -> Result<F::Scalar>,
    ) -> Result<Coord<F, J, N>> {
        let mut out = self.values;
        for (lhs, rhs) in out.iter_mut().zip(rhs.values) {
            *lhs = f(*lhs, rhs)?;
        }
        Ok(Coord::from_array(out))
    }

    /// Field-wise fallible conversion into another frame of the same dimension.
    pub(crate) fn try_convert<G: Frame, J: Kind>(
        self,
        mut f: impl FnMut(F::Scalar) -> Result<G::Scalar>,
    ) -> Result<Coord<G, J, N>> {
        let mut out = [<G::Scalar as Scalar>::ZERO; N];
        for (dst, src) in out.iter_mut().zip(self.values) {
            *dst = f(src)?;
        }
        Ok(Coord::from_array(out))
    }

    /// Field-wise infallible conversion into another frame of the same dimension.
    pub(crate) fn convert<G: Frame, J: Kind>(
        self,
        f: impl FnMut(F::Scalar) -> G::Scalar,
    ) -> Coord<G, J, N> {
        Coord::from_array(self.values.map(f))
    }
}

impl<F: Frame, K: Kind> Coord<F, K, 1> {
    #[inline]
    pub const fn new(a: F::Scalar) -> Self {
        Self::from_array([a])
    }
}

impl<F: Frame, K: Kind> Coord<F, K, 2> {
    #[inline]
    pub const fn new(a: F::Scalar, b: F::Scalar) -> Self {
        Self::from_array([a, b])
    }
}

impl<F: Frame, K: Kind> Coord<F, K, 3> {
    #[inline]
    pub const fn new(a: F::Scalar, b: F::Scalar, c: F::Scalar) -> Self {
        Self::from_array([a, b, c])
    }
}

impl<F: GroundFrame, K: Kind> Coord<F, K, 2> {
    #[inline]
    pub fn ne(&self) -> F::Scalar {
        self.values[0]
    }

    #[inline]
    pub fn se(&self) -> F::Scalar {
        self.values[1]
    }
}

impl<F: GroundFrame, K: Kind> Coord<F, K, 3> {
    #[inline]
    pub fn ne(&self) -> F::Scalar {
        self.values[0]
    }

    #[inline]
    pub fn se(&self) -> F::Scalar {
        self.values[1]
    }

    /// Elevation.
    #[inline]
    pub fn up(&self) -> F::Scalar {
        self.values[2]
    }

    /// Same ground position at another elevation.
    #[inline]
    pub fn with_up(mut self, up: F::Scalar) -> Self {
        self.values[2] = up;
        self
    }
}

impl<F: PixelFrame, K: Kind> Coord<F, K, 2> {
    #[inline]
    pub fn x(&self) -> F::Scalar {
        self.values[0]
    }

    #[inline]
    pub fn y(&self) -> F::Scalar {
        self.values[1]
    }
}

impl<F: Frame, K: Kind, const N: usize> Clone for Coord<F, K, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Frame, K: Kind, const N: usize> Copy for Coord<F, K, N> {}

impl<F: Frame, K: Kind, const N: usize> PartialEq for Coord<F, K, N> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<F: Frame, K: Kind, const N: usize> Eq for Coord<F, K, N> where F::Scalar: Eq {}

impl<F: Frame, K: Kind, const N: usize> Hash for Coord<F, K, N>
where
    F::Scalar: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.values.hash(state);
    }
}

impl<F: Frame, K: Kind, const N: usize> Index<usize> for Coord<F, K, N> {
    type Output = F::Scalar;

    fn index(&self, axis: usize) -> &F::Scalar {
        &self.values[axis]
    }
}

impl<F: Frame, K: Kind, const N: usize> IndexMut<usize> for Coord<F, K, N> {
    fn index_mut(&mut self, axis: usize) -> &mut F::Scalar {
        &mut self.values[axis]
    }
}

impl<F: Frame, K: Kind, const N: usize> fmt::Display for Coord<F, K, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}(", F::NAME, K::SUFFIX)?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str(")")
    }
}

impl<F: Frame, K: Kind, const N: usize> fmt::Debug for Coord<F, K, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
