use tile_engine::{
    resize_level,
    transform::{flip_level_x, flip_level_y},
    Anchor, Result, Size,
};

use super::{LevelEditState, LevelUndoOp};

impl LevelEditState {
    /// Mirrors every active layer about the vertical centerline.
    pub fn flip_x(&mut self) {
        self.history.close_stroke();
        let layers = self.active_layers;
        if layers.active_layers().next().is_none() {
            return;
        }
        self.history.push(LevelUndoOp::FlipHorizontal { layers });
        flip_level_x(&mut self.level, layers, self.flip_table.as_ref());
        self.is_dirty = true;
    }

    /// Mirrors every active layer about the horizontal centerline.
    pub fn flip_y(&mut self) {
        self.history.close_stroke();
        let layers = self.active_layers;
        if layers.active_layers().next().is_none() {
            return;
        }
        self.history.push(LevelUndoOp::FlipVertical { layers });
        flip_level_y(&mut self.level, layers, self.flip_table.as_ref());
        self.is_dirty = true;
    }

    /// Resizes the level keeping the content pinned at `anchor`.
    ///
    /// Resize works on all layers regardless of the active flags. Resizing to
    /// the current size records nothing.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidDimensions` if `size` is outside the editor limits.
    pub fn resize(&mut self, size: impl Into<Size>, anchor: Anchor) -> Result<()> {
        let new_size = size.into();
        let old_size = self.level.size();
        if new_size == old_size {
            return Ok(());
        }
        let resized = resize_level(&self.level, new_size, anchor)?;

        self.history.close_stroke();
        self.history.push(LevelUndoOp::Resize {
            anchor,
            old_size,
            new_size,
            old_layers: self.level.snapshot(),
            new_layers: resized.snapshot(),
        });
        self.level = resized;
        self.is_dirty = true;
        Ok(())
    }
}
