use worldcoord::prelude::*;
use worldcoord_examples::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let ctx = CoordinateContext::try_new(ViewportDelta::new(1_280, 720))?
        .with_camera_world_position(Tile::new(64, 64).to_phys3_center(FixedPoint::ZERO)?);
    ctx.validate()?;

    let clicks = [
        Window::new(640, 360),
        Window::new(0, 0),
        Window::new(1_279, 719),
        Window::new(700, 330),
    ];

    for click in clicks {
        let viewport = click.to_viewport(&ctx);
        let camgame = click.to_camgame(&ctx);
        let ground = camgame.to_phys3(&ctx, FixedPoint::ZERO)?;
        let tile = ground.to_tile();
        let chunk = tile.to_chunk_sized(ctx.tiles_per_chunk)?;

        tracing::info!(
            "{} -> {} (visible: {}) -> {} -> {} -> {} in {}",
            click,
            viewport,
            viewport.contains(&ctx),
            camgame,
            ground,
            tile,
            chunk
        );

        let back = tile.to_phys3_center(FixedPoint::ZERO)?.to_camgame(&ctx)?.to_window(&ctx);
        tracing::info!("  center of {} is drawn at {}", tile, back);
    }

    let hud_button = Camhud::new(16, 16);
    tracing::info!("HUD button {} sits at {}", hud_button, hud_button.to_window(&ctx));

    Ok(())
}
