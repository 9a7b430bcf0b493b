//! Physics space conversions.
//!
//! Phys → tile floors every axis: a position a fraction below a tile boundary belongs to
//! the lower tile, also for negative positions. Projection into camgame pixels follows the
//! isometric layout: one tile `ne` moves `(+w, +h)` pixels, one tile `se` moves `(+w, -h)`
//! and one tile `up` moves `(0, +h)`, where `(w, h)` is
//! [`CoordinateContext::tile_pixel_size`].
use super::{Camgame, CamgameDelta, Phys2, Phys2Delta, Phys3, Phys3Delta, Tile, Tile3};
use crate::context::CoordinateContext;
use crate::error::{Error, Result};
use crate::math::floor_div_wide;
use crate::scalar::settings::PHYS_PER_TILE;
use crate::scalar::{PhysT, PixelT};

fn to_pixel(v: i128, axis: &str) -> Result<PixelT> {
    PixelT::try_from(v)
        .map_err(|_| Error::overflow(format!("camgame {axis} = {v} exceeds the pixel range")))
}

impl Phys2 {
    /// Tile containing this position.
    pub fn to_tile(self) -> Tile {
        self.convert(PhysT::floor)
    }

    /// Position inside the containing tile, every axis in `[0, 1)`.
    pub fn get_fraction(self) -> Phys2Delta {
        self.convert(PhysT::fract)
    }

    /// Lifts the position to elevation `up`.
    pub fn to_phys3(self, up: PhysT) -> Phys3 {
        Phys3::new(self.ne(), self.se(), up)
    }
}

impl Phys2Delta {
    /// Adds an elevation change of `up`.
    pub fn to_phys3(self, up: PhysT) -> Phys3Delta {
        Phys3Delta::new(self.ne(), self.se(), up)
    }
}

impl Phys3 {
    /// Ground projection; drops the elevation.
    pub fn to_phys2(self) -> Phys2 {
        Phys2::new(self.ne(), self.se())
    }

    /// Tile containing this position, including its layer.
    pub fn to_tile3(self) -> Tile3 {
        self.convert(PhysT::floor)
    }

    /// Ground tile under this position.
    pub fn to_tile(self) -> Tile {
        self.to_phys2().to_tile()
    }

    /// Position inside the containing tile, every axis in `[0, 1)`.
    pub fn get_fraction(self) -> Phys3Delta {
        self.convert(PhysT::fract)
    }

    /// Camera-relative pixel position. The camera position maps to the camgame origin.
    pub fn to_camgame(self, ctx: &CoordinateContext) -> Result<Camgame> {
        let rel = self.try_relative_to(ctx.camera_world_position)?;
        Ok(rel.to_camgame(ctx)?.as_absolute())
    }
}

impl Phys3Delta {
    /// Ground part of the displacement.
    pub fn to_phys2(self) -> Phys2Delta {
        Phys2Delta::new(self.ne(), self.se())
    }

    /// Pixel displacement of this world displacement, floored to whole pixels.
    pub fn to_camgame(self, ctx: &CoordinateContext) -> Result<CamgameDelta> {
        let size = ctx.tile_pixel_size;
        let (ne, se, up) = (
            self.ne().raw() as i128,
            self.se().raw() as i128,
            self.up().raw() as i128,
        );
        let x = floor_div_wide((ne + se) * size.x() as i128, PHYS_PER_TILE as i128);
        let y = floor_div_wide((ne - se + up) * size.y() as i128, PHYS_PER_TILE as i128);
        Ok(CamgameDelta::new(to_pixel(x, "x")?, to_pixel(y, "y")?))
    }
}
