use std::collections::BTreeSet;

use glam::I64Vec2;
use worldcoord::prelude::*;
use worldcoord_examples::init_tracing;

/// Chunks within `radius` tiles of `center`, in chunk order.
fn chunks_around(center: Tile, radius: i64) -> Result<BTreeSet<(i64, i64)>> {
    let mut chunks = BTreeSet::new();
    for dne in -radius..=radius {
        for dse in -radius..=radius {
            let chunk = (center + TileDelta::new(dne, dse)).to_chunk_sized(TILES_PER_CHUNK)?;
            chunks.insert((chunk.ne(), chunk.se()));
        }
    }
    Ok(chunks)
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut ctx = CoordinateContext::default();
    let path = [
        TileDelta::new(0, 0),
        TileDelta::new(5, 0),
        TileDelta::new(5, 5),
        TileDelta::new(-20, 3),
    ];

    let mut loaded = BTreeSet::new();
    for step in path {
        ctx.move_camera(step.to_phys3(FixedPoint::ZERO)?);
        let center = ctx.camera_world_position.to_tile();
        let wanted = chunks_around(center, 12)?;

        let load: Vec<_> = wanted.difference(&loaded).copied().collect();
        let unload: Vec<_> = loaded.difference(&wanted).copied().collect();
        tracing::info!(
            "camera on {} (chunk {}, offset {}): load {}, unload {}",
            center,
            center.to_chunk(),
            center.get_pos_on_chunk(),
            load.len(),
            unload.len()
        );

        for (ne, se) in load {
            let chunk = Chunk::from(I64Vec2::new(ne, se));
            let origin = chunk.to_tile(TILES_PER_CHUNK)?;
            tracing::debug!("loading {} starting at {}", chunk, origin);
        }
        loaded = wanted;
    }

    Ok(())
}
