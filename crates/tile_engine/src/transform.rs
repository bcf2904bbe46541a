//! Whole level flips
//!
//! A flip reflects every active layer about the level's centerline and maps
//! each tile through the flip lookup. With an involutive lookup, applying the
//! same flip twice with the same flags is the identity.

use crate::{LayerFlags, Level, Position, TileFlipLookup};

/// Mirror the active layers of `level` horizontally (`x' = width - 1 - x`).
pub fn flip_level_x(level: &mut Level, flags: LayerFlags, lookup: &dyn TileFlipLookup) {
    let width = level.width();
    let height = level.height();
    for kind in flags.active_layers() {
        for y in 0..height {
            for x in 0..(width + 1) / 2 {
                let pos1 = Position::new(x, y);
                let pos2 = Position::new(width - 1 - x, y);
                let ch1 = lookup.flip_x(level.tile(pos1, kind));
                let ch2 = lookup.flip_x(level.tile(pos2, kind));
                if pos1 == pos2 {
                    level.set_tile(pos1, kind, ch1);
                } else {
                    level.set_tile(pos1, kind, ch2);
                    level.set_tile(pos2, kind, ch1);
                }
            }
        }
    }
}

/// Mirror the active layers of `level` vertically (`y' = height - 1 - y`).
pub fn flip_level_y(level: &mut Level, flags: LayerFlags, lookup: &dyn TileFlipLookup) {
    let width = level.width();
    let height = level.height();
    for kind in flags.active_layers() {
        for x in 0..width {
            for y in 0..(height + 1) / 2 {
                let pos1 = Position::new(x, y);
                let pos2 = Position::new(x, height - 1 - y);
                let ch1 = lookup.flip_y(level.tile(pos1, kind));
                let ch2 = lookup.flip_y(level.tile(pos2, kind));
                if pos1 == pos2 {
                    level.set_tile(pos1, kind, ch1);
                } else {
                    level.set_tile(pos1, kind, ch2);
                    level.set_tile(pos2, kind, ch1);
                }
            }
        }
    }
}
