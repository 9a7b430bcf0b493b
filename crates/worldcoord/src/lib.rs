#![forbid(unsafe_code)]
//! worldcoord: Typed coordinate algebra for tile-based isometric worlds.
//!
//! Every coordinate carries its frame (tile, chunk, phys, camgame, window, camhud,
//! viewport) and its kind (absolute point or relative vector) in the type, so mixing frames
//! or adding two locations is a compile error. Conversions between frames are explicit
//! `to_*` methods.
//!
//! Modules:
//! - coord: generic kernel and the affine operator set
//! - frame: concrete frames, aliases and conversions
//! - context: camera and window geometry for the screen conversions
//! - fixed, scalar, math: field types and floor arithmetic
//! - interop: `glam` and `mint` conversions
//!
//! For a walkthrough, see the README and the `worldcoord_examples` binaries.
pub mod context;
pub mod coord;
pub mod error;
pub mod fixed;
pub mod frame;
pub mod interop;
pub mod math;
pub mod scalar;
#[cfg(feature = "serde")]
mod serde_impls;

/// Convenient re-exports for common types. Import with `use worldcoord::prelude::*;`.
pub mod prelude {
    pub use crate::context::CoordinateContext;
    pub use crate::coord::{
        Absolute, AbsolutePoint, Coord, Frame, GroundFrame, Kind, PixelFrame, Relative,
        RelativeVector,
    };
    pub use crate::error::{Error, Result};
    pub use crate::fixed::FixedPoint;
    pub use crate::frame::{
        Camgame, CamgameDelta, Camhud, CamhudDelta, Chunk, Chunk3, Chunk3Delta, ChunkDelta,
        Phys2, Phys2Delta, Phys3, Phys3Delta, Tile, Tile3, Tile3Delta, TileDelta, Viewport,
        ViewportDelta, Window, WindowDelta,
    };
    pub use crate::math::{floor_div, floor_mod};
    pub use crate::scalar::settings::{HALF_TILE, PHYS_PER_TILE, TILES_PER_CHUNK};
    pub use crate::scalar::{ChunkT, PhysT, PixelT, Scalar, TileT};
}
