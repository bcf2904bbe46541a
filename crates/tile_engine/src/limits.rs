//! Level size limits
//!
//! Every layer of a level holds `width * height` cells, so these bounds also
//! cap the memory a single resize snapshot can take.

use crate::Size;

/// Minimum level width in cells
pub const MIN_LEVEL_WIDTH: i32 = 1;

/// Minimum level height in cells
pub const MIN_LEVEL_HEIGHT: i32 = 1;

/// Maximum level width in cells
pub const MAX_LEVEL_WIDTH: i32 = 1024;

/// Maximum level height in cells
pub const MAX_LEVEL_HEIGHT: i32 = 1024;

/// Width of a freshly created level
pub const DEFAULT_LEVEL_WIDTH: i32 = 64;

/// Height of a freshly created level
pub const DEFAULT_LEVEL_HEIGHT: i32 = 48;

/// Size of a freshly created level
pub const DEFAULT_LEVEL_SIZE: Size = Size {
    width: DEFAULT_LEVEL_WIDTH,
    height: DEFAULT_LEVEL_HEIGHT,
};

/// Check if dimensions are within the editor limits
#[inline]
pub fn is_within_limits(width: i32, height: i32) -> bool {
    (MIN_LEVEL_WIDTH..=MAX_LEVEL_WIDTH).contains(&width) && (MIN_LEVEL_HEIGHT..=MAX_LEVEL_HEIGHT).contains(&height)
}
