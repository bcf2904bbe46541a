use tile_engine::{LayerKind, Position, TileId};

use super::{HistoryAction, LevelEditState, LevelUndoOp};
use crate::mirror::mirror_placements;

impl LevelEditState {
    /// Starts a new tool gesture: closes the open stroke and opens a fresh
    /// Normal entry (reusing an empty one at the cursor).
    pub fn begin_stroke(&mut self) {
        self.history.close_stroke();
        self.history.push(LevelUndoOp::Normal { edits: Vec::new() });
    }

    /// Ends the current gesture. The next placement opens a new entry.
    pub fn end_stroke(&mut self) {
        self.history.close_stroke();
    }

    /// Writes one cell and records it in the open Normal entry, opening one if
    /// needed. Inactive layers and cells outside the grid are ignored.
    pub fn place_tile(&mut self, pos: impl Into<Position>, id: TileId, layer: LayerKind) {
        let pos = pos.into();
        if !self.active_layers.is_active(layer) || !self.level.is_inside(pos) {
            return;
        }
        if !self.history.is_open_for(HistoryAction::Normal) {
            self.begin_stroke();
        }
        self.write_cell(pos, id, layer);
    }

    /// Same cell semantics as [`Self::place_tile`] but records into the open
    /// Clear entry. Only selection delete opens Clear entries.
    pub fn place_tile_clear(&mut self, pos: impl Into<Position>, id: TileId, layer: LayerKind) {
        let pos = pos.into();
        if !self.active_layers.is_active(layer) || !self.level.is_inside(pos) {
            return;
        }
        let open = self.history.is_open_for(HistoryAction::Clear);
        debug_assert!(open, "place_tile_clear without an open Clear entry");
        if !open {
            log::warn!("place_tile_clear at {pos} without an open Clear entry, ignored");
            return;
        }
        self.write_cell(pos, id, layer);
    }

    fn write_cell(&mut self, pos: Position, id: TileId, layer: LayerKind) {
        let old = self.level.tile(pos, layer);
        if self.history.record_edit(pos, layer, old, id) {
            self.is_dirty = true;
        }
        self.level.set_tile(pos, layer, id);
    }

    /// Places `id` at `pos` and at its mirror companions for the active
    /// mirror toggles. All placements land in the same history entry.
    pub fn mirror_place(&mut self, pos: impl Into<Position>, id: TileId, layer: LayerKind) {
        let placements = mirror_placements(self.mirror, self.level.size(), pos.into(), id, self.flip_table.as_ref());
        for (pos, id) in placements {
            self.place_tile(pos, id, layer);
        }
    }
}
