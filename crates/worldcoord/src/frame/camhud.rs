//! HUD pixel conversions. Camhud is anchored to the window's bottom-left corner and ignores
//! the camera, so HUD elements stay put while the world scrolls.
use super::{Camhud, CamhudDelta, Window, WindowDelta};
use crate::context::CoordinateContext;

impl Camhud {
    /// Window pixel of this HUD pixel.
    pub fn to_window(self, ctx: &CoordinateContext) -> Window {
        ctx.camhud_window_origin + self.as_relative().to_window()
    }
}

impl CamhudDelta {
    /// Flips the y axis.
    pub fn to_window(self) -> WindowDelta {
        WindowDelta::new(self.x(), -self.y())
    }
}
