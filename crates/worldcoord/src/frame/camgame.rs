//! Camera-relative pixel conversions.
//!
//! Camgame pixels grow right and up from the camera position. Going back into the world
//! needs an elevation: a screen pixel covers a whole column of phys3 positions, and the
//! caller picks the one at `up`.
//!
//! The inverse picks, inside that column, the world position whose projection is exactly
//! the requested pixel: the smallest `ne + se` and `ne - se + up` sums that floor onto it,
//! bumped by one raw unit where needed so both halves come out whole. This needs at least
//! two raw units per pixel, which [`CoordinateContext::validate`] enforces.
use super::{
    Camgame, CamgameDelta, Phys3, Phys3Delta, Viewport, ViewportDelta, Window, WindowDelta,
};
use crate::context::CoordinateContext;
use crate::error::{Error, Result};
use crate::fixed::FixedPoint;
use crate::math::ceil_div_wide;
use crate::scalar::settings::PHYS_PER_TILE;
use crate::scalar::PhysT;

fn to_raw_phys(v: i128, axis: &str) -> Result<PhysT> {
    i64::try_from(v)
        .map(FixedPoint::from_raw)
        .map_err(|_| Error::overflow(format!("phys3 {axis} = {v} raw units is out of range")))
}

impl CamgameDelta {
    /// World displacement that projects onto this pixel displacement with elevation
    /// change `up`.
    pub fn to_phys3(self, ctx: &CoordinateContext, up: PhysT) -> Result<Phys3Delta> {
        let size = ctx.tile_pixel_size;
        if size.x() == 0 || size.y() == 0 {
            return Err(Error::InvalidScalar(format!(
                "tile pixel size {size} has a zero axis"
            )));
        }

        let up_raw = up.raw() as i128;
        let sum = ceil_div_wide(self.x() as i128 * PHYS_PER_TILE as i128, size.x() as i128);
        let mut diff = ceil_div_wide(self.y() as i128 * PHYS_PER_TILE as i128, size.y() as i128);
        if (sum + diff - up_raw).rem_euclid(2) == 1 {
            diff += 1;
        }

        let ne = (sum + diff - up_raw) / 2;
        let se = (sum - diff + up_raw) / 2;
        Ok(Phys3Delta::new(
            to_raw_phys(ne, "ne")?,
            to_raw_phys(se, "se")?,
            up,
        ))
    }

    /// Flips the y axis: window pixels grow downward.
    pub fn to_window(self) -> WindowDelta {
        WindowDelta::new(self.x(), -self.y())
    }

    /// Same displacement in the viewport; both frames grow up.
    pub fn to_viewport(self) -> ViewportDelta {
        ViewportDelta::new(self.x(), self.y())
    }
}

impl Camgame {
    /// World position at elevation `up` that is drawn at this pixel.
    pub fn to_phys3(self, ctx: &CoordinateContext, up: PhysT) -> Result<Phys3> {
        let camera = ctx.camera_world_position;
        let delta = self
            .as_relative()
            .to_phys3(ctx, up.checked_sub(camera.up())?)?;
        camera.try_add(delta)
    }

    /// Window pixel of this position.
    pub fn to_window(self, ctx: &CoordinateContext) -> Window {
        ctx.camgame_window_origin + self.as_relative().to_window()
    }

    /// Viewport pixel of this position.
    pub fn to_viewport(self, ctx: &CoordinateContext) -> Viewport {
        (self.as_relative().to_viewport() + ctx.viewport_center()).as_absolute()
    }
}
