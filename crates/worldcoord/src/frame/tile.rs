//! Tile grid conversions.
//!
//! Tile → chunk uses floor division, so tile `-1` lies in chunk `-1` at offset `n - 1`.
//! Tile → phys is an exact integer widening that fails with
//! [`crate::error::Error::Overflow`] when the tile has no fixed-point representation.
use super::{
    Chunk, Chunk3, Phys2, Phys2Delta, Phys3, Phys3Delta, Tile, Tile3, Tile3Delta, TileDelta,
};
use crate::error::{Error, Result};
use crate::fixed::FixedPoint;
use crate::math::{floor_div, floor_mod};
use crate::scalar::settings::{HALF_TILE, TILES_PER_CHUNK};
use crate::scalar::{PhysT, TileT};

fn check_chunk_size(tiles_per_chunk: TileT) -> Result<()> {
    if tiles_per_chunk <= 0 {
        return Err(Error::InvalidScalar(format!(
            "tiles per chunk must be > 0, got {tiles_per_chunk}"
        )));
    }
    Ok(())
}

fn tile_to_phys(t: TileT) -> Result<PhysT> {
    FixedPoint::from_int(t)
        .map_err(|_| Error::overflow(format!("tile {t} is outside the physics range")))
}

impl Tile {
    /// Lifts the tile onto layer `up`.
    pub fn to_tile3(self, up: TileT) -> Tile3 {
        Tile3::new(self.ne(), self.se(), up)
    }

    /// Chunk containing this tile, for the default chunk size.
    pub fn to_chunk(self) -> Chunk {
        self.convert(|t| t.div_euclid(TILES_PER_CHUNK))
    }

    /// Offset of this tile from its chunk's origin, for the default chunk size.
    pub fn get_pos_on_chunk(self) -> TileDelta {
        self.convert(|t| t.rem_euclid(TILES_PER_CHUNK))
    }

    /// Chunk containing this tile for chunks of `tiles_per_chunk` tiles.
    pub fn to_chunk_sized(self, tiles_per_chunk: TileT) -> Result<Chunk> {
        check_chunk_size(tiles_per_chunk)?;
        self.try_convert(|t| floor_div(t, tiles_per_chunk))
    }

    /// Offset from the chunk origin, every axis in `[0, tiles_per_chunk)`.
    pub fn get_pos_on_chunk_sized(self, tiles_per_chunk: TileT) -> Result<TileDelta> {
        check_chunk_size(tiles_per_chunk)?;
        self.try_convert(|t| floor_mod(t, tiles_per_chunk))
    }

    /// South-west corner of the tile.
    pub fn to_phys2(self) -> Result<Phys2> {
        self.try_convert(tile_to_phys)
    }

    /// Point at `offset` from the tile's south-west corner.
    pub fn to_phys2_at(self, offset: Phys2Delta) -> Result<Phys2> {
        let corner = self.to_phys2()?;
        let ne = corner.ne().checked_add(offset.ne())?;
        let se = corner.se().checked_add(offset.se())?;
        Ok(Phys2::new(ne, se))
    }

    /// Center of the tile.
    pub fn to_phys2_center(self) -> Result<Phys2> {
        self.to_phys2_at(Phys2Delta::new(HALF_TILE, HALF_TILE))
    }

    /// South-west corner of the tile at elevation `up`.
    pub fn to_phys3(self, up: PhysT) -> Result<Phys3> {
        Ok(Phys3::new(tile_to_phys(self.ne())?, tile_to_phys(self.se())?, up))
    }

    /// Center of the tile at elevation `up`.
    pub fn to_phys3_center(self, up: PhysT) -> Result<Phys3> {
        let center = self.to_phys2_center()?;
        Ok(center.to_phys3(up))
    }
}

impl TileDelta {
    /// Adds a layer change of `up`.
    pub fn to_tile3(self, up: TileT) -> Tile3Delta {
        Tile3Delta::new(self.ne(), self.se(), up)
    }

    /// Exact widening into phys units.
    pub fn to_phys2(self) -> Result<Phys2Delta> {
        self.try_convert(tile_to_phys)
    }

    /// Exact widening into phys units, with elevation change `up`.
    pub fn to_phys3(self, up: PhysT) -> Result<Phys3Delta> {
        Ok(Phys3Delta::new(
            tile_to_phys(self.ne())?,
            tile_to_phys(self.se())?,
            up,
        ))
    }
}

impl Tile3 {
    /// Drops the layer.
    pub fn to_tile(self) -> Tile {
        Tile::new(self.ne(), self.se())
    }

    /// Chunk containing this tile on the same layer, for the default chunk size.
    pub fn to_chunk3(self) -> Chunk3 {
        self.to_tile().to_chunk().to_chunk3(self.up())
    }

    /// South-west bottom corner; every axis widened exactly.
    pub fn to_phys3(self) -> Result<Phys3> {
        self.try_convert(tile_to_phys)
    }

    /// Ground center of the tile at the layer's exact elevation.
    pub fn to_phys3_center(self) -> Result<Phys3> {
        let corner = self.to_phys3()?;
        let ne = corner.ne().checked_add(HALF_TILE)?;
        let se = corner.se().checked_add(HALF_TILE)?;
        Ok(Phys3::new(ne, se, corner.up()))
    }
}

impl Tile3Delta {
    /// Drops the layer change.
    pub fn to_tile(self) -> TileDelta {
        TileDelta::new(self.ne(), self.se())
    }

    /// Exact widening into phys units on every axis.
    pub fn to_phys3(self) -> Result<Phys3Delta> {
        self.try_convert(tile_to_phys)
    }
}
