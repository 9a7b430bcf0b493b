//! Camera and window geometry shared by the pixel-frame conversions.
//!
//! [`CoordinateContext`] is a plain value owned by the caller and passed by reference into
//! every conversion that needs it. Conversions read it, never store it: a result computed
//! against an old context stays stale after a resize or camera move.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::fixed::FixedPoint;
use crate::frame::{CamgameDelta, Phys3, Phys3Delta, ViewportDelta, Window};
use crate::scalar::settings::{PHYS_PER_TILE, TILES_PER_CHUNK};
use crate::scalar::TileT;

/// Geometry needed to move between world and screen frames.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordinateContext {
    /// World position drawn at the camgame origin.
    pub camera_world_position: Phys3,
    /// Window pixel of the camgame origin.
    pub camgame_window_origin: Window,
    /// Window pixel of the camhud origin.
    pub camhud_window_origin: Window,
    /// Pixel half-extent of one tile: stepping one tile `ne` moves `(x, y)` pixels.
    pub tile_pixel_size: CamgameDelta,
    /// Size of the render area in pixels.
    pub viewport_size: ViewportDelta,
    /// Chunk edge length in tiles.
    pub tiles_per_chunk: TileT,
}

impl CoordinateContext {
    pub const DEFAULT_VIEWPORT_SIZE: ViewportDelta = ViewportDelta::new(800, 600);
    pub const DEFAULT_TILE_PIXEL_SIZE: CamgameDelta = CamgameDelta::new(48, 24);

    /// Creates a context with the default camera laid out for a render area of `viewport_size`.
    pub fn new(viewport_size: ViewportDelta) -> Self {
        let mut ctx = Self {
            camera_world_position: Phys3::new(
                FixedPoint::from(10),
                FixedPoint::from(10),
                FixedPoint::ZERO,
            ),
            camgame_window_origin: Window::new(0, 0),
            camhud_window_origin: Window::new(0, 0),
            tile_pixel_size: Self::DEFAULT_TILE_PIXEL_SIZE,
            viewport_size,
            tiles_per_chunk: TILES_PER_CHUNK,
        };
        ctx.layout(viewport_size);
        ctx
    }

    /// Like [`CoordinateContext::new`], but rejects an invalid geometry.
    pub fn try_new(viewport_size: ViewportDelta) -> Result<Self> {
        let ctx = Self::new(viewport_size);
        if let Err(e) = ctx.validate() {
            warn!("Rejected coordinate context: {}", e);
            return Err(e);
        }
        Ok(ctx)
    }

    /// Sets the camera position.
    pub fn with_camera_world_position(mut self, position: Phys3) -> Self {
        self.camera_world_position = position;
        self
    }

    /// Sets the tile pixel half-extent.
    pub fn with_tile_pixel_size(mut self, size: CamgameDelta) -> Self {
        self.tile_pixel_size = size;
        self
    }

    /// Sets the chunk edge length.
    pub fn with_tiles_per_chunk(mut self, tiles_per_chunk: TileT) -> Self {
        self.tiles_per_chunk = tiles_per_chunk;
        self
    }

    /// Sets the render area size and lays out both window origins for it.
    pub fn with_viewport_size(mut self, size: ViewportDelta) -> Self {
        self.layout(size);
        self
    }

    /// Validates the geometry, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.tile_pixel_size.x() <= 0 || self.tile_pixel_size.y() <= 0 {
            return Err(Error::InvalidConfig(
                "tile_pixel_size must be > 0 in both components".into(),
            ));
        }
        let max_pixels = PHYS_PER_TILE / 2;
        if i64::from(self.tile_pixel_size.x()) > max_pixels
            || i64::from(self.tile_pixel_size.y()) > max_pixels
        {
            return Err(Error::InvalidConfig(format!(
                "tile_pixel_size must be <= {max_pixels} in both components"
            )));
        }
        if self.tiles_per_chunk <= 0 {
            return Err(Error::InvalidConfig("tiles_per_chunk must be > 0".into()));
        }
        if self.viewport_size.x() < 0 || self.viewport_size.y() < 0 {
            return Err(Error::InvalidConfig(
                "viewport_size must be >= 0 in both components".into(),
            ));
        }

        Ok(())
    }

    /// Offset of the camgame origin from the viewport's bottom-left corner.
    ///
    /// Derived from [`CoordinateContext::camgame_window_origin`], so the viewport and
    /// window routes into camgame agree for odd sizes and moved origins too.
    pub fn viewport_center(&self) -> ViewportDelta {
        ViewportDelta::new(
            self.camgame_window_origin.x(),
            self.viewport_size.y() - self.camgame_window_origin.y(),
        )
    }

    /// Adapts the layout to a resized window.
    pub fn on_resize(&mut self, new_size: ViewportDelta) {
        debug!(
            "Viewport resized from {} to {}.",
            self.viewport_size, new_size
        );
        self.layout(new_size);
    }

    /// Moves the camera to `position`.
    pub fn set_camera_world_position(&mut self, position: Phys3) {
        debug!(
            "Camera moved from {} to {}.",
            self.camera_world_position, position
        );
        self.camera_world_position = position;
    }

    /// Moves the camera by a world displacement.
    pub fn move_camera(&mut self, delta: Phys3Delta) {
        trace!("Camera moved by {}.", delta);
        self.camera_world_position += delta;
    }

    /// Scrolls the camera by a pixel displacement along the ground plane.
    pub fn move_camera_pixels(&mut self, delta: CamgameDelta) -> Result<()> {
        let world = delta.to_phys3(self, FixedPoint::ZERO)?;
        self.move_camera(world);
        Ok(())
    }

    fn layout(&mut self, size: ViewportDelta) {
        self.viewport_size = size;
        self.camgame_window_origin = Window::new(size.x() / 2, size.y() / 2);
        self.camhud_window_origin = Window::new(0, size.y());
    }
}

impl Default for CoordinateContext {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VIEWPORT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{Camgame, Tile};

    #[test]
    fn default_matches_startup_geometry() {
        let ctx = CoordinateContext::default();
        assert_eq!(ctx.viewport_size, ViewportDelta::new(800, 600));
        assert_eq!(ctx.camgame_window_origin, Window::new(400, 300));
        assert_eq!(ctx.camhud_window_origin, Window::new(0, 600));
        assert_eq!(ctx.tile_pixel_size, CamgameDelta::new(48, 24));
        assert_eq!(ctx.tiles_per_chunk, 16);
        assert_eq!(
            ctx.camera_world_position,
            Tile::new(10, 10).to_phys3(FixedPoint::ZERO).unwrap()
        );
        assert!(ctx.validate().is_ok());
    }

    #[test]
    fn resize_recenters_origins() {
        let mut ctx = CoordinateContext::default();
        ctx.on_resize(ViewportDelta::new(1_280, 720));
        assert_eq!(ctx.viewport_size, ViewportDelta::new(1_280, 720));
        assert_eq!(ctx.camgame_window_origin, Window::new(640, 360));
        assert_eq!(ctx.camhud_window_origin, Window::new(0, 720));
        assert_eq!(ctx.viewport_center(), ViewportDelta::new(640, 360));
        assert_eq!(ctx, CoordinateContext::new(ViewportDelta::new(1_280, 720)));
    }

    #[test]
    fn builders_set_fields() {
        let camera = Phys3::new(FixedPoint::ONE, FixedPoint::ONE, FixedPoint::ONE);
        let ctx = CoordinateContext::default()
            .with_camera_world_position(camera)
            .with_tile_pixel_size(CamgameDelta::new(64, 32))
            .with_tiles_per_chunk(32)
            .with_viewport_size(ViewportDelta::new(100, 50));
        assert_eq!(ctx.camera_world_position, camera);
        assert_eq!(ctx.tile_pixel_size, CamgameDelta::new(64, 32));
        assert_eq!(ctx.tiles_per_chunk, 32);
        assert_eq!(ctx.camgame_window_origin, Window::new(50, 25));
    }

    #[test]
    fn validation_rejects_bad_geometry() {
        let bad_tile = CoordinateContext::default().with_tile_pixel_size(CamgameDelta::new(0, 24));
        assert!(matches!(bad_tile.validate(), Err(Error::InvalidConfig(_))));

        let bad_chunk = CoordinateContext::default().with_tiles_per_chunk(0);
        assert!(matches!(bad_chunk.validate(), Err(Error::InvalidConfig(_))));

        assert!(matches!(
            CoordinateContext::try_new(ViewportDelta::new(-1, 600)),
            Err(Error::InvalidConfig(_))
        ));
        assert!(CoordinateContext::try_new(ViewportDelta::new(0, 0)).is_ok());

        let huge_tile =
            CoordinateContext::default().with_tile_pixel_size(CamgameDelta::new(48, 32_769));
        assert!(matches!(huge_tile.validate(), Err(Error::InvalidConfig(_))));
        let largest =
            CoordinateContext::default().with_tile_pixel_size(CamgameDelta::new(32_768, 32_768));
        assert!(largest.validate().is_ok());
    }

    #[test]
    fn viewport_center_follows_the_camgame_origin() {
        let mut ctx = CoordinateContext::new(ViewportDelta::new(801, 601));
        assert_eq!(ctx.camgame_window_origin, Window::new(400, 300));
        assert_eq!(ctx.viewport_center(), ViewportDelta::new(400, 301));

        ctx.camgame_window_origin = Window::new(10, 20);
        assert_eq!(ctx.viewport_center(), ViewportDelta::new(10, 581));
    }

    #[test]
    fn camera_motion() {
        let mut ctx = CoordinateContext::default();
        let start = ctx.camera_world_position;
        let step = Phys3Delta::new(FixedPoint::ONE, FixedPoint::ZERO, FixedPoint::ZERO);
        ctx.move_camera(step);
        assert_eq!(ctx.camera_world_position, start + step);

        ctx.set_camera_world_position(start);
        assert_eq!(ctx.camera_world_position, start);
    }

    #[test]
    fn pixel_scroll_moves_the_picked_point() {
        let mut ctx = CoordinateContext::default();
        let before = Camgame::new(96, 0).to_phys3(&ctx, FixedPoint::ZERO).unwrap();
        ctx.move_camera_pixels(CamgameDelta::new(96, 0)).unwrap();
        assert_eq!(ctx.camera_world_position, before);
        assert_eq!(before.to_camgame(&ctx).unwrap(), Camgame::new(0, 0));
    }
}
