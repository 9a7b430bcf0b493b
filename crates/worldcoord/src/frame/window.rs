//! Window pixel conversions.
//!
//! Window coordinates come straight from the OS: origin at the top-left corner, y growing
//! downward. Every other pixel frame grows upward, so each conversion flips y.
use super::{
    Camgame, CamgameDelta, Camhud, CamhudDelta, Viewport, ViewportDelta, Window, WindowDelta,
};
use crate::context::CoordinateContext;

impl Window {
    /// Camera-relative pixel under this window pixel.
    pub fn to_camgame(self, ctx: &CoordinateContext) -> Camgame {
        (self - ctx.camgame_window_origin).to_camgame().as_absolute()
    }

    /// HUD pixel under this window pixel.
    pub fn to_camhud(self, ctx: &CoordinateContext) -> Camhud {
        (self - ctx.camhud_window_origin).to_camhud().as_absolute()
    }

    /// Same pixel in the render area, origin moved to the bottom-left corner.
    pub fn to_viewport(self, ctx: &CoordinateContext) -> Viewport {
        Viewport::new(self.x(), ctx.viewport_size.y() - self.y())
    }
}

impl WindowDelta {
    /// Flips the y axis.
    pub fn to_camgame(self) -> CamgameDelta {
        CamgameDelta::new(self.x(), -self.y())
    }

    /// Flips the y axis.
    pub fn to_camhud(self) -> CamhudDelta {
        CamhudDelta::new(self.x(), -self.y())
    }

    /// Flips the y axis.
    pub fn to_viewport(self) -> ViewportDelta {
        ViewportDelta::new(self.x(), -self.y())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    use super::*;

    #[test]
    fn delta_flips_y() {
        assert_eq!(WindowDelta::new(10, -4).to_camgame(), CamgameDelta::new(10, 4));
        assert_eq!(WindowDelta::new(-3, 7).to_camhud(), CamhudDelta::new(-3, -7));
        assert_eq!(WindowDelta::new(0, 1).to_viewport(), ViewportDelta::new(0, -1));

        let w = WindowDelta::new(10, -4);
        assert_eq!(w.to_camgame().to_window(), w);
        assert_eq!(w.to_camhud().to_window(), w);
        assert_eq!(w.to_viewport().to_window(), w);
    }

    #[test]
    fn window_to_camgame() {
        let ctx = CoordinateContext::default();
        assert_eq!(Window::new(400, 300).to_camgame(&ctx), Camgame::new(0, 0));
        assert_eq!(Window::new(500, 200).to_camgame(&ctx), Camgame::new(100, 100));
        assert_eq!(Window::new(0, 0).to_camgame(&ctx), Camgame::new(-400, 300));
    }

    #[test]
    fn window_to_camhud() {
        let ctx = CoordinateContext::default();
        assert_eq!(Window::new(0, 600).to_camhud(&ctx), Camhud::new(0, 0));
        assert_eq!(Window::new(400, 300).to_camhud(&ctx), Camhud::new(400, 300));
        assert_eq!(Window::new(0, 0).to_camhud(&ctx), Camhud::new(0, 600));
    }

    #[test]
    fn window_to_viewport() {
        let ctx = CoordinateContext::default();
        assert_eq!(Window::new(0, 600).to_viewport(&ctx), Viewport::new(0, 0));
        assert_eq!(Window::new(0, 0).to_viewport(&ctx), Viewport::new(0, 600));
        assert_eq!(Window::new(123, 456).to_viewport(&ctx), Viewport::new(123, 144));
    }

    #[test]
    fn routes_through_viewport_and_window_agree() {
        let ctx = CoordinateContext::default();
        let mut rng = StdRng::seed_from_u64(0x71D0);
        for _ in 0..1_000 {
            let w = Window::new(
                (rng.next_u32() % 2_001) as i32 - 500,
                (rng.next_u32() % 2_001) as i32 - 500,
            );
            assert_eq!(w.to_viewport(&ctx).to_camgame(&ctx), w.to_camgame(&ctx));
            assert_eq!(w.to_camgame(&ctx).to_window(&ctx), w);
            assert_eq!(w.to_camhud(&ctx).to_window(&ctx), w);
            assert_eq!(w.to_viewport(&ctx).to_window(&ctx), w);
        }
    }

    #[test]
    fn routes_agree_after_resize() {
        let mut ctx = CoordinateContext::default();
        ctx.on_resize(ViewportDelta::new(1_920, 1_080));
        let w = Window::new(17, 1_000);
        assert_eq!(w.to_viewport(&ctx).to_camgame(&ctx), w.to_camgame(&ctx));
        assert_eq!(Window::new(960, 540).to_camgame(&ctx), Camgame::new(0, 0));
        assert_eq!(Window::new(0, 1_080).to_camhud(&ctx), Camhud::new(0, 0));
    }

    #[test]
    fn routes_agree_for_odd_sizes() {
        let mut rng = StdRng::seed_from_u64(0x0DD5);
        for size in [ViewportDelta::new(801, 601), ViewportDelta::new(1, 3)] {
            let ctx = CoordinateContext::new(size);
            let corner = Window::new(0, 0);
            assert_eq!(corner.to_viewport(&ctx).to_camgame(&ctx), corner.to_camgame(&ctx));
            for _ in 0..500 {
                let w = Window::new(
                    (rng.next_u32() % 2_001) as i32 - 500,
                    (rng.next_u32() % 2_001) as i32 - 500,
                );
                let c = w.to_camgame(&ctx);
                assert_eq!(w.to_viewport(&ctx).to_camgame(&ctx), c, "size {size}");
                assert_eq!(c.to_viewport(&ctx).to_window(&ctx), w, "size {size}");
            }
        }

        let ctx = CoordinateContext::new(ViewportDelta::new(801, 601));
        assert_eq!(Window::new(0, 0).to_camgame(&ctx), Camgame::new(-400, 300));
    }
}
