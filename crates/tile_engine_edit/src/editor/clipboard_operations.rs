use tile_engine::{LayerKind, Position, SelectionSet, EMPTY_TILE};

use super::{LevelEditState, LevelUndoOp};
use crate::Clipboard;

impl LevelEditState {
    /// Copies the visible selection into the clipboard. Returns false (and
    /// keeps the old clipboard) if nothing is selected.
    pub fn copy(&mut self) -> bool {
        match Clipboard::capture(&self.level, &self.selection) {
            Some(clipboard) => {
                self.clipboard = Some(clipboard);
                true
            }
            None => false,
        }
    }

    /// Clears every selected cell on the active layers and deselects, as one
    /// Clear entry.
    pub fn delete_selection(&mut self) -> bool {
        if !self.selection.has_visible() {
            return false;
        }
        self.selection_drag = None;
        self.history.close_stroke();
        self.history.push(LevelUndoOp::Clear {
            edits: Vec::new(),
            old_selection: self.selection.clone(),
            new_selection: SelectionSet::new(),
        });

        let cells: Vec<Position> = self.selection.visible().flat_map(|rect| rect.bounds().cells()).collect();
        for layer in LayerKind::ALL {
            for &pos in &cells {
                self.place_tile_clear(pos, EMPTY_TILE, layer);
            }
        }
        self.selection.clear();
        self.history.close_stroke();
        self.is_dirty = true;
        true
    }

    /// Copy followed by delete.
    pub fn cut(&mut self) -> bool {
        self.copy() && self.delete_selection()
    }

    /// Writes the clipboard with its top left corner at `pos` as one Normal
    /// entry. Overlapping parts are written in copy order.
    pub fn paste(&mut self, pos: impl Into<Position>) -> bool {
        let pos = pos.into();
        let Some(clipboard) = self.clipboard.take() else {
            return false;
        };

        self.begin_stroke();
        for part in &clipboard.parts {
            let origin = pos + part.offset;
            for layer in LayerKind::ALL {
                for y in 0..part.size.height {
                    for x in 0..part.size.width {
                        self.place_tile(origin + Position::new(x, y), part.tile(x, y, layer), layer);
                    }
                }
            }
        }
        self.end_stroke();

        self.clipboard = Some(clipboard);
        true
    }
}
