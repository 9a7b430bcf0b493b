//! Conversions to and from `glam` and `mint` vector types.
//!
//! Integer frames convert losslessly in both directions: pixel frames through
//! [`glam::IVec2`], tile and chunk frames through [`glam::I64Vec2`] and [`glam::I64Vec3`].
//! The frame tag is dropped on the way out and must be named again on the way in.
//! `mint` keeps the affine kind: points map to `mint::Point*`, vectors to `mint::Vector*`.
//!
//! Physics coordinates only go out, as `f32` tile units for uploading to a renderer.
use glam::{I64Vec2, I64Vec3, IVec2, Vec2, Vec3};

use crate::coord::{AbsolutePoint, Coord, Frame, Kind, RelativeVector};
use crate::frame::{Phys2Space, Phys3Space};

macro_rules! glam_interop {
    ($scalar:ty, $vec2:ty, $vec3:ty) => {
        impl<F: Frame<Scalar = $scalar>, K: Kind> From<Coord<F, K, 2>> for $vec2 {
            fn from(c: Coord<F, K, 2>) -> Self {
                <$vec2>::from_array(c.to_array())
            }
        }

        impl<F: Frame<Scalar = $scalar>, K: Kind> From<$vec2> for Coord<F, K, 2> {
            fn from(v: $vec2) -> Self {
                Coord::from_array(v.to_array())
            }
        }

        impl<F: Frame<Scalar = $scalar>, K: Kind> From<Coord<F, K, 3>> for $vec3 {
            fn from(c: Coord<F, K, 3>) -> Self {
                <$vec3>::from_array(c.to_array())
            }
        }

        impl<F: Frame<Scalar = $scalar>, K: Kind> From<$vec3> for Coord<F, K, 3> {
            fn from(v: $vec3) -> Self {
                Coord::from_array(v.to_array())
            }
        }
    };
}

glam_interop!(i32, IVec2, glam::IVec3);
glam_interop!(i64, I64Vec2, I64Vec3);

macro_rules! mint_interop {
    ($($scalar:ty),*) => {
        $(
            impl<F: Frame<Scalar = $scalar>> From<AbsolutePoint<F, 2>> for mint::Point2<$scalar> {
                fn from(p: AbsolutePoint<F, 2>) -> Self {
                    mint::Point2::from(p.to_array())
                }
            }

            impl<F: Frame<Scalar = $scalar>> From<mint::Point2<$scalar>> for AbsolutePoint<F, 2> {
                fn from(p: mint::Point2<$scalar>) -> Self {
                    Coord::from_array([p.x, p.y])
                }
            }

            impl<F: Frame<Scalar = $scalar>> From<AbsolutePoint<F, 3>> for mint::Point3<$scalar> {
                fn from(p: AbsolutePoint<F, 3>) -> Self {
                    mint::Point3::from(p.to_array())
                }
            }

            impl<F: Frame<Scalar = $scalar>> From<mint::Point3<$scalar>> for AbsolutePoint<F, 3> {
                fn from(p: mint::Point3<$scalar>) -> Self {
                    Coord::from_array([p.x, p.y, p.z])
                }
            }

            impl<F: Frame<Scalar = $scalar>> From<RelativeVector<F, 2>> for mint::Vector2<$scalar> {
                fn from(v: RelativeVector<F, 2>) -> Self {
                    mint::Vector2::from(v.to_array())
                }
            }

            impl<F: Frame<Scalar = $scalar>> From<mint::Vector2<$scalar>> for RelativeVector<F, 2> {
                fn from(v: mint::Vector2<$scalar>) -> Self {
                    Coord::from_array([v.x, v.y])
                }
            }

            impl<F: Frame<Scalar = $scalar>> From<RelativeVector<F, 3>> for mint::Vector3<$scalar> {
                fn from(v: RelativeVector<F, 3>) -> Self {
                    mint::Vector3::from(v.to_array())
                }
            }

            impl<F: Frame<Scalar = $scalar>> From<mint::Vector3<$scalar>> for RelativeVector<F, 3> {
                fn from(v: mint::Vector3<$scalar>) -> Self {
                    Coord::from_array([v.x, v.y, v.z])
                }
            }
        )*
    };
}

mint_interop!(i32, i64);

impl<K: Kind> Coord<Phys2Space, K, 2> {
    /// `(ne, se)` in tiles.
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.ne().to_f32(), self.se().to_f32())
    }
}

impl<K: Kind> Coord<Phys3Space, K, 3> {
    /// `(ne, se, up)` in tiles.
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.ne().to_f32(), self.se().to_f32(), self.up().to_f32())
    }
}

impl From<AbsolutePoint<Phys3Space, 3>> for mint::Point3<f32> {
    fn from(p: AbsolutePoint<Phys3Space, 3>) -> Self {
        p.to_vec3().into()
    }
}

impl From<RelativeVector<Phys3Space, 3>> for mint::Vector3<f32> {
    fn from(v: RelativeVector<Phys3Space, 3>) -> Self {
        v.to_vec3().into()
    }
}
