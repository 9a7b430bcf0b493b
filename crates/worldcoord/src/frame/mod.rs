//! Frame catalogue: the concrete coordinate spaces and their conversions.
//!
//! Each space is a zero-sized marker implementing [`Frame`]; the aliases below pair it with
//! a dimension and a kind. Conversions between adjacent frames are inherent `to_*` methods
//! in the submodules, one per source frame. Conversions that depend on camera or window
//! geometry take a [`crate::context::CoordinateContext`].
//!
//! ```text
//! chunk ⇄ tile ⇄ tile3          (grid)
//!          ⇅       ⇅
//!        phys2 ⇄ phys3          (continuous world)
//!                  ⇅
//!   viewport ⇄ camgame ⇄ window ⇄ camhud   (pixels)
//! ```
use crate::coord::{AbsolutePoint, Frame, GroundFrame, PixelFrame, RelativeVector};
use crate::scalar::{ChunkT, PhysT, PixelT, TileT};

pub mod camgame;
pub mod camhud;
pub mod chunk;
pub mod phys;
pub mod tile;
pub mod viewport;
pub mod window;

macro_rules! frames {
    ($($(#[$meta:meta])* $space:ident => $name:literal, $scalar:ty, $axes:ident;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub struct $space;

            impl Frame for $space {
                type Scalar = $scalar;
                const NAME: &'static str = $name;
            }

            impl $axes for $space {}
        )*
    };
}

frames! {
    /// Discrete world grid, one unit per tile.
    TileSpace => "tile", TileT, GroundFrame;
    /// Tile grid with an elevation layer.
    Tile3Space => "tile3", TileT, GroundFrame;
    /// Terrain chunk grid.
    ChunkSpace => "chunk", ChunkT, GroundFrame;
    /// Chunk grid with an elevation layer.
    Chunk3Space => "chunk3", ChunkT, GroundFrame;
    /// Continuous ground plane in tiles.
    Phys2Space => "phys2", PhysT, GroundFrame;
    /// Continuous world space in tiles.
    Phys3Space => "phys3", PhysT, GroundFrame;
    /// Camera-relative game pixels, origin at the camera, y up.
    CamgameSpace => "camgame", PixelT, PixelFrame;
    /// OS window pixels, origin top-left, y down.
    WindowSpace => "window", PixelT, PixelFrame;
    /// HUD pixels, origin bottom-left of the window, y up.
    CamhudSpace => "camhud", PixelT, PixelFrame;
    /// Visible render area, origin bottom-left, y up.
    ViewportSpace => "viewport", PixelT, PixelFrame;
}

pub type Tile = AbsolutePoint<TileSpace, 2>;
pub type TileDelta = RelativeVector<TileSpace, 2>;
pub type Tile3 = AbsolutePoint<Tile3Space, 3>;
pub type Tile3Delta = RelativeVector<Tile3Space, 3>;
pub type Chunk = AbsolutePoint<ChunkSpace, 2>;
pub type ChunkDelta = RelativeVector<ChunkSpace, 2>;
pub type Chunk3 = AbsolutePoint<Chunk3Space, 3>;
pub type Chunk3Delta = RelativeVector<Chunk3Space, 3>;
pub type Phys2 = AbsolutePoint<Phys2Space, 2>;
pub type Phys2Delta = RelativeVector<Phys2Space, 2>;
pub type Phys3 = AbsolutePoint<Phys3Space, 3>;
pub type Phys3Delta = RelativeVector<Phys3Space, 3>;
pub type Camgame = AbsolutePoint<CamgameSpace, 2>;
pub type CamgameDelta = RelativeVector<CamgameSpace, 2>;
pub type Window = AbsolutePoint<WindowSpace, 2>;
pub type WindowDelta = RelativeVector<WindowSpace, 2>;
pub type Camhud = AbsolutePoint<CamhudSpace, 2>;
pub type CamhudDelta = RelativeVector<CamhudSpace, 2>;
pub type Viewport = AbsolutePoint<ViewportSpace, 2>;
pub type ViewportDelta = RelativeVector<ViewportSpace, 2>;
