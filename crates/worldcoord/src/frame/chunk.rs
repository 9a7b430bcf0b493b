//! Chunk grid conversions.
//!
//! A chunk is addressed by its south-west tile: chunk `c` starts at tile `c × n` for a
//! chunk edge of `n` tiles. Elevation layers are not chunked, so the `up` axis of
//! [`Chunk3`] passes through to [`Tile3`] unchanged.
use super::{Chunk, Chunk3, Chunk3Delta, ChunkDelta, Tile, Tile3, TileDelta};
use crate::error::{Error, Result};
use crate::scalar::{ChunkT, TileT};

fn chunk_to_tile(c: ChunkT, n: TileT) -> Result<TileT> {
    c.checked_mul(n)
        .ok_or_else(|| Error::overflow(format!("chunk {c} at {n} tiles per chunk")))
}

impl Chunk {
    /// South-west tile of this chunk.
    pub fn to_tile(self, tiles_per_chunk: TileT) -> Result<Tile> {
        self.try_convert(|c| chunk_to_tile(c, tiles_per_chunk))
    }

    /// Tile at `pos_on_chunk` inside this chunk.
    pub fn to_tile_at(self, tiles_per_chunk: TileT, pos_on_chunk: TileDelta) -> Result<Tile> {
        let origin = self.to_tile(tiles_per_chunk)?;
        let ne = origin.ne().checked_add(pos_on_chunk.ne());
        let se = origin.se().checked_add(pos_on_chunk.se());
        match (ne, se) {
            (Some(ne), Some(se)) => Ok(Tile::new(ne, se)),
            _ => Err(Error::overflow(format!("{origin} + {pos_on_chunk}"))),
        }
    }

    /// Places the chunk on layer `up`.
    pub fn to_chunk3(self, up: ChunkT) -> Chunk3 {
        Chunk3::new(self.ne(), self.se(), up)
    }
}

impl ChunkDelta {
    /// Tile displacement spanned by this many chunks.
    pub fn to_tile(self, tiles_per_chunk: TileT) -> Result<TileDelta> {
        self.try_convert(|c| chunk_to_tile(c, tiles_per_chunk))
    }

    /// Adds a layer change of `up`.
    pub fn to_chunk3(self, up: ChunkT) -> Chunk3Delta {
        Chunk3Delta::new(self.ne(), self.se(), up)
    }
}

impl Chunk3 {
    /// Drops the layer.
    pub fn to_chunk(self) -> Chunk {
        Chunk::new(self.ne(), self.se())
    }

    /// South-west tile of this chunk on the same layer.
    pub fn to_tile3(self, tiles_per_chunk: TileT) -> Result<Tile3> {
        let ground = self.to_chunk().to_tile(tiles_per_chunk)?;
        Ok(ground.to_tile3(self.up()))
    }
}

impl Chunk3Delta {
    /// Drops the layer change.
    pub fn to_chunk(self) -> ChunkDelta {
        ChunkDelta::new(self.ne(), self.se())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_origin_scales_by_chunk_size() {
        assert_eq!(Chunk::new(0, 0).to_tile(16).unwrap(), Tile::new(0, 0));
        assert_eq!(Chunk::new(1, 1).to_tile(16).unwrap(), Tile::new(16, 16));
        assert_eq!(Chunk::new(2, -3).to_tile(16).unwrap(), Tile::new(32, -48));
    }

    #[test]
    fn tile_within_chunk() {
        let t = Chunk::new(1, 1)
            .to_tile_at(16, TileDelta::new(8, 8))
            .unwrap();
        assert_eq!(t, Tile::new(24, 24));
    }

    #[test]
    fn delta_scales_like_point() {
        assert_eq!(
            ChunkDelta::new(-1, 3).to_tile(32).unwrap(),
            TileDelta::new(-32, 96)
        );
    }

    #[test]
    fn layer_passes_through() {
        let c3 = Chunk::new(2, 5).to_chunk3(-1);
        assert_eq!(c3, Chunk3::new(2, 5, -1));
        assert_eq!(c3.to_chunk(), Chunk::new(2, 5));
        assert_eq!(c3.to_tile3(16).unwrap(), Tile3::new(32, 80, -1));
        assert_eq!(
            ChunkDelta::new(1, 1).to_chunk3(4).to_chunk(),
            ChunkDelta::new(1, 1)
        );
    }

    #[test]
    fn huge_chunk_overflows_loudly() {
        assert!(matches!(
            Chunk::new(i64::MAX / 2, 0).to_tile(16),
            Err(Error::Overflow(_))
        ));
        assert!(matches!(
            Chunk::new(i64::MAX / 16, 0).to_tile_at(16, TileDelta::new(16, 0)),
            Err(Error::Overflow(_))
        ));
    }
}
