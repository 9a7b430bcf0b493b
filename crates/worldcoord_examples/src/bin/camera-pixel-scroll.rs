use worldcoord::prelude::*;
use worldcoord_examples::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut ctx = CoordinateContext::default();
    let landmark = Tile::new(12, 8).to_phys3_center(FixedPoint::ZERO)?;

    // Drag the map 24 pixels right per frame, then resize the window halfway.
    for frame in 0..8 {
        if frame == 4 {
            ctx.on_resize(ViewportDelta::new(1_024, 768));
        }
        ctx.move_camera_pixels(CamgameDelta::new(24, 0))?;

        let on_screen = landmark.to_camgame(&ctx)?;
        let window = on_screen.to_window(&ctx);
        let visible = on_screen.to_viewport(&ctx).contains(&ctx);
        tracing::info!(
            "frame {}: camera {} -> landmark at {} ({}), visible: {}",
            frame,
            ctx.camera_world_position.to_vec3(),
            window,
            on_screen,
            visible
        );
    }

    Ok(())
}
