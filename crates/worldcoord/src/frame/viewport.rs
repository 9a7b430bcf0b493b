//! Render area conversions.
//!
//! The viewport covers `[0, viewport_size)` with its origin at the bottom-left and y up,
//! the layout a renderer's framebuffer uses. The camgame origin sits at its center.
use super::{Camgame, CamgameDelta, Viewport, ViewportDelta, Window, WindowDelta};
use crate::context::CoordinateContext;

impl Viewport {
    /// Window pixel of this viewport pixel.
    pub fn to_window(self, ctx: &CoordinateContext) -> Window {
        Window::new(self.x(), ctx.viewport_size.y() - self.y())
    }

    /// Camera-relative pixel of this viewport pixel.
    pub fn to_camgame(self, ctx: &CoordinateContext) -> Camgame {
        (self - ctx.viewport_center()).as_relative().to_camgame().as_absolute()
    }

    /// Whether the pixel lies inside the render area.
    pub fn contains(self, ctx: &CoordinateContext) -> bool {
        let size = ctx.viewport_size;
        (0..size.x()).contains(&self.x()) && (0..size.y()).contains(&self.y())
    }
}

impl ViewportDelta {
    /// Flips the y axis.
    pub fn to_window(self) -> WindowDelta {
        WindowDelta::new(self.x(), -self.y())
    }

    /// Same displacement in camgame; both frames grow up.
    pub fn to_camgame(self) -> CamgameDelta {
        CamgameDelta::new(self.x(), self.y())
    }
}
