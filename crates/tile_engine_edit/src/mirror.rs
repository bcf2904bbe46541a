//! Symmetric painting
//!
//! With mirroring on, every placement is repeated at the point reflected about
//! the level's vertical and/or horizontal centerline, using the mirrored tile
//! graphic for each reflection.

use serde::{Deserialize, Serialize};
use tile_engine::{Position, Size, TileFlipLookup, TileId};

/// Global mirror toggles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorMode {
    /// Reflect about the vertical centerline
    #[serde(default)]
    pub horizontal: bool,
    /// Reflect about the horizontal centerline
    #[serde(default)]
    pub vertical: bool,
}

impl MirrorMode {
    pub fn new(horizontal: bool, vertical: bool) -> Self {
        Self { horizontal, vertical }
    }
}

/// Computes the up to four placements for `id` at `pos`, identity first.
///
/// Coordinates may fall outside the grid; the grid store ignores those.
pub fn mirror_placements(mode: MirrorMode, size: Size, pos: Position, id: TileId, lookup: &dyn TileFlipLookup) -> Vec<(Position, TileId)> {
    let mirrored_x = size.width - 1 - pos.x;
    let mirrored_y = size.height - 1 - pos.y;

    let mut result = Vec::with_capacity(4);
    result.push((pos, id));
    if mode.horizontal {
        result.push((Position::new(mirrored_x, pos.y), lookup.flip_x(id)));
    }
    if mode.vertical {
        result.push((Position::new(pos.x, mirrored_y), lookup.flip_y(id)));
    }
    if mode.horizontal && mode.vertical {
        result.push((Position::new(mirrored_x, mirrored_y), lookup.flip_y(lookup.flip_x(id))));
    }
    result
}
