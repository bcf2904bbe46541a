use crate::{limits, EngineError, LayerKind, Position, Result, Size, TileId, EMPTY_TILE, LAYER_COUNT};

/// Deep copy of every layer of a level, indexed by `LayerKind::index()`.
pub type LayerData = [Vec<TileId>; LAYER_COUNT];

/// Multi-layer tile grid.
///
/// Every layer is a row-major `width * height` buffer. All layers always share
/// the same dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    size: Size,
    layers: LayerData,
}

impl Default for Level {
    fn default() -> Self {
        Self::new(limits::DEFAULT_LEVEL_SIZE)
    }
}

impl Level {
    /// Creates an empty level. Negative dimensions are treated as 0.
    pub fn new(size: impl Into<Size>) -> Self {
        let size = size.into();
        let size = Size::new(size.width.max(0), size.height.max(0));
        let len = size.area();
        Self {
            size,
            layers: std::array::from_fn(|_| vec![EMPTY_TILE; len]),
        }
    }

    /// Creates a level from existing layer buffers.
    ///
    /// # Errors
    ///
    /// Fails if a buffer length doesn't match `width * height`.
    pub fn from_layers(size: impl Into<Size>, layers: LayerData) -> Result<Self> {
        let size = size.into();
        if size.width < 0 || size.height < 0 || layers.iter().any(|layer| layer.len() != size.area()) {
            return Err(EngineError::InvalidDimensions {
                width: size.width,
                height: size.height,
            });
        }
        Ok(Self { size, layers })
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    /// `0 <= x < width && 0 <= y < height`
    pub fn is_inside(&self, pos: impl Into<Position>) -> bool {
        let pos = pos.into();
        pos.x >= 0 && pos.y >= 0 && pos.x < self.size.width && pos.y < self.size.height
    }

    fn index_of(&self, pos: Position) -> Option<usize> {
        if self.is_inside(pos) {
            Some(pos.y as usize * self.size.width as usize + pos.x as usize)
        } else {
            None
        }
    }

    /// Tile at `pos`, `None` outside the grid.
    pub fn get_tile(&self, pos: impl Into<Position>, layer: LayerKind) -> Option<TileId> {
        let idx = self.index_of(pos.into())?;
        Some(self.layers[layer.index()][idx])
    }

    /// Tile at `pos`, empty outside the grid.
    pub fn tile(&self, pos: impl Into<Position>, layer: LayerKind) -> TileId {
        self.get_tile(pos, layer).unwrap_or(EMPTY_TILE)
    }

    /// Raw write without history. Returns the previous id, `None` if `pos` is outside.
    pub fn set_tile(&mut self, pos: impl Into<Position>, layer: LayerKind, id: TileId) -> Option<TileId> {
        let idx = self.index_of(pos.into())?;
        let cell = &mut self.layers[layer.index()][idx];
        Some(std::mem::replace(cell, id))
    }

    pub fn layer(&self, layer: LayerKind) -> &[TileId] {
        &self.layers[layer.index()]
    }

    pub fn layer_mut(&mut self, layer: LayerKind) -> &mut [TileId] {
        &mut self.layers[layer.index()]
    }

    /// Deep copy of all layer buffers.
    pub fn snapshot(&self) -> LayerData {
        self.layers.clone()
    }

    /// Replaces dimensions and every layer buffer at once.
    pub fn restore(&mut self, size: Size, layers: LayerData) {
        debug_assert!(layers.iter().all(|layer| layer.len() == size.area()), "layer buffers don't match {size}");
        self.size = size;
        self.layers = layers;
    }

    /// Number of non-empty cells over all layers.
    pub fn used_cells(&self) -> usize {
        LayerKind::ALL.into_iter().map(|kind| self.used_cells_in(kind)).sum()
    }

    pub fn used_cells_in(&self, layer: LayerKind) -> usize {
        self.layer(layer).iter().filter(|id| **id != EMPTY_TILE).count()
    }
}
