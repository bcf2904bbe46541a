//! In-process tile clipboard
//!
//! A copy of a multi rectangle selection keeps one buffer per rectangle, each
//! positioned relative to the top left corner of the merged selection bounds.

use tile_engine::{Bounds, LayerData, LayerKind, Level, Position, SelectionSet, Size, TileId, EMPTY_TILE};

/// One copied rectangle with all layers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClipboardPart {
    /// Offset from the top left of the whole copied area
    pub offset: Position,
    pub size: Size,
    /// Row-major buffers, indexed by `LayerKind::index()`
    pub layers: LayerData,
}

impl ClipboardPart {
    /// Copies `bounds` out of `level`; cells outside the level copy as empty.
    pub fn capture(level: &Level, bounds: Bounds, origin: Position) -> Self {
        let layers = std::array::from_fn(|i| {
            let layer = LayerKind::ALL[i];
            bounds.cells().map(|pos| level.tile(pos, layer)).collect()
        });
        Self {
            offset: bounds.top_left() - origin,
            size: bounds.size(),
            layers,
        }
    }

    pub fn tile(&self, x: i32, y: i32, layer: LayerKind) -> TileId {
        if x < 0 || y < 0 || x >= self.size.width || y >= self.size.height {
            return EMPTY_TILE;
        }
        self.layers[layer.index()]
            .get((y * self.size.width + x) as usize)
            .copied()
            .unwrap_or(EMPTY_TILE)
    }
}

/// Copied selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clipboard {
    /// Size of the merged bounds
    pub size: Size,
    /// Parts in selection order, later parts paste over earlier ones
    pub parts: Vec<ClipboardPart>,
}

impl Clipboard {
    /// Copies every visible rectangle of `selection`. `None` if nothing is selected.
    pub fn capture(level: &Level, selection: &SelectionSet) -> Option<Self> {
        let bounds = selection.bounds()?;
        let origin = bounds.top_left();
        let parts = selection.visible().map(|rect| ClipboardPart::capture(level, rect.bounds(), origin)).collect();
        Some(Self { size: bounds.size(), parts })
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
