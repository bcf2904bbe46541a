#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::too_many_lines,
    clippy::cast_lossless,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::module_name_repetitions
)]
//! Data model for tile grid levels.
//!
//! - `Level` - the multi-layer tile grid store
//! - `LayerKind` / `LayerFlags` - layer enumeration and per-layer active flags
//! - `TileFlipLookup` / `FlipTable` - tile id mirroring tables
//! - `resize` - anchored, content preserving resize of a level
//! - `transform` - whole level flips
//! - `formats` - the persisted level encoding

mod position;
pub use position::*;

mod error;
pub use error::*;

pub mod limits;

mod layer;
pub use layer::*;

mod level;
pub use level::*;

mod flip_table;
pub use flip_table::*;

mod selection;
pub use selection::*;

pub mod resize;
pub use resize::{Anchor, resize_level};

pub mod transform;

pub mod formats;

/// Tile identifier stored in every grid cell. `0` means empty.
pub type TileId = i32;

/// The empty tile.
pub const EMPTY_TILE: TileId = 0;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }

    /// Number of cells covered by this size, 0 for degenerate sizes.
    pub fn area(&self) -> usize {
        if self.width <= 0 || self.height <= 0 {
            return 0;
        }
        self.width as usize * self.height as usize
    }
}

impl From<(i32, i32)> for Size {
    fn from(value: (i32, i32)) -> Self {
        Size {
            width: value.0,
            height: value.1,
        }
    }
}

impl From<(usize, usize)> for Size {
    fn from(value: (usize, usize)) -> Self {
        Size {
            width: value.0 as i32,
            height: value.1 as i32,
        }
    }
}
