use std::collections::HashMap;

use tile_engine::{LayerKind, Position, Result, TileId};

use super::{HistoryAction, LevelUndoOp, TileEdit};

pub trait UndoState {
    fn undo_description(&self) -> Option<String>;
    fn can_undo(&self) -> bool;
    /// Steps the history cursor back by one real entry.
    ///
    /// # Errors
    ///
    /// This function will return an error if the entry can't be restored.
    fn undo(&mut self) -> Result<()>;

    fn redo_description(&self) -> Option<String>;
    fn can_redo(&self) -> bool;
    /// Steps the history cursor forward by one real entry.
    ///
    /// # Errors
    ///
    /// This function will return an error if the entry can't be reapplied.
    fn redo(&mut self) -> Result<()>;
}

/// Linear history log with a cursor.
///
/// Entries `0..applied` are applied to the document, entries after that are
/// the redo tail. Opening a new entry discards the redo tail.
#[derive(Debug, Default)]
pub struct LevelHistory {
    entries: Vec<LevelUndoOp>,
    applied: usize,

    /// The entry at the cursor still accepts cell edits.
    stroke_open: bool,

    /// Index into the open entry's edit list, one slot per touched cell.
    cell_index: HashMap<(Position, LayerKind), usize>,
}

impl LevelHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cursor position, `-1` before the first entry.
    pub fn position(&self) -> isize {
        self.applied as isize - 1
    }

    pub fn entries(&self) -> &[LevelUndoOp] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&LevelUndoOp> {
        self.entries.get(index)
    }

    /// Entry at the cursor.
    pub fn current(&self) -> Option<&LevelUndoOp> {
        self.applied.checked_sub(1).and_then(|idx| self.entries.get(idx))
    }

    /// Entry a redo would apply next.
    pub fn next_redo(&self) -> Option<&LevelUndoOp> {
        self.entries.get(self.applied)
    }

    pub fn can_undo(&self) -> bool {
        self.applied > 0
    }

    pub fn can_redo(&self) -> bool {
        self.applied < self.entries.len()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.current().map(LevelUndoOp::get_description)
    }

    pub fn redo_description(&self) -> Option<String> {
        self.next_redo().map(LevelUndoOp::get_description)
    }

    /// Opens `op` as the new current entry.
    ///
    /// A Normal entry reuses an empty Normal entry at the cursor instead of
    /// stacking another placeholder.
    pub fn push(&mut self, op: LevelUndoOp) {
        self.cell_index.clear();
        self.truncate_redo();

        if op.action() == HistoryAction::Normal && self.current().is_some_and(LevelUndoOp::is_empty_normal) {
            log::debug!("history: reusing empty entry at {}", self.position());
            self.stroke_open = true;
            return;
        }

        self.stroke_open = matches!(op.action(), HistoryAction::Normal | HistoryAction::Clear);
        log::debug!("history: open {:?} at {}", op.action(), self.applied);
        self.entries.push(op);
        self.applied += 1;
    }

    fn truncate_redo(&mut self) {
        if self.entries.len() > self.applied {
            log::debug!("history: discarding {} redo entries", self.entries.len() - self.applied);
            self.entries.truncate(self.applied);
        }
    }

    /// True if cell edits of `action` can be appended to the current entry.
    pub fn is_open_for(&self, action: HistoryAction) -> bool {
        self.stroke_open && self.current().is_some_and(|op| op.action() == action)
    }

    /// Stops appending cell edits to the current entry.
    pub fn close_stroke(&mut self) {
        self.stroke_open = false;
        self.cell_index.clear();
    }

    /// Records a cell write into the open entry.
    ///
    /// Repeated writes to one cell keep the first old value and the latest new
    /// value. Returns false if nothing was recorded (no open entry, or a write
    /// that doesn't change an untouched cell).
    pub(crate) fn record_edit(&mut self, pos: Position, layer: LayerKind, old: TileId, new: TileId) -> bool {
        if !self.stroke_open {
            return false;
        }
        let Some(edits) = self.applied.checked_sub(1).and_then(|idx| self.entries.get_mut(idx)).and_then(LevelUndoOp::edits_mut) else {
            return false;
        };

        if let Some(&slot) = self.cell_index.get(&(pos, layer)) {
            edits[slot].new = new;
            return true;
        }
        if old == new {
            return false;
        }
        self.cell_index.insert((pos, layer), edits.len());
        edits.push(TileEdit { pos, layer, old, new });
        true
    }

    /// Moves the cursor back, returning the index of the entry to undo.
    pub(crate) fn step_back(&mut self) -> Option<usize> {
        self.close_stroke();
        if self.applied == 0 {
            return None;
        }
        self.applied -= 1;
        Some(self.applied)
    }

    /// Moves the cursor forward, returning the index of the entry to redo.
    pub(crate) fn step_forward(&mut self) -> Option<usize> {
        self.close_stroke();
        if self.applied >= self.entries.len() {
            return None;
        }
        self.applied += 1;
        Some(self.applied - 1)
    }

    /// Drops every entry, used when the document closes.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.applied = 0;
        self.close_stroke();
    }
}
