//! Undo/Redo for level documents
//!
//! Empty Normal entries are placeholders left by gestures that changed
//! nothing. Undo and redo step over them so a single step always has a
//! visible effect.

use tile_engine::Result;

use super::undo_operation::UndoTarget;
use super::{LevelEditState, LevelUndoOp, UndoState};

impl LevelEditState {
    /// Undoes everything, leaving the cursor at `-1`.
    ///
    /// # Errors
    ///
    /// Propagates errors of the individual undo steps.
    pub fn history_begin(&mut self) -> Result<()> {
        while self.history.can_undo() {
            self.undo()?;
        }
        Ok(())
    }

    /// Redoes everything, leaving the cursor on the last entry.
    ///
    /// # Errors
    ///
    /// Propagates errors of the individual redo steps.
    pub fn history_end(&mut self) -> Result<()> {
        while self.history.can_redo() {
            self.redo()?;
        }
        Ok(())
    }

    /// Applies the entry at `index` backwards (`forward == false`) or forwards.
    /// Returns true if the entry was an empty placeholder.
    fn apply_entry(&mut self, index: usize, forward: bool) -> bool {
        let Some(op) = self.history.get(index) else {
            log::warn!("history: no entry at {index}");
            return false;
        };
        let mut target = UndoTarget {
            level: &mut self.level,
            selection: &mut self.selection,
            flip_table: self.flip_table.as_ref(),
        };
        if forward {
            op.redo(&mut target);
        } else {
            op.undo(&mut target);
        }
        if op.changes_data() {
            self.is_dirty = true;
        }
        log::debug!("history: {} {:?} at {index}", if forward { "redo" } else { "undo" }, op.action());
        op.is_empty_normal()
    }
}

impl UndoState for LevelEditState {
    fn undo_description(&self) -> Option<String> {
        self.history.undo_description()
    }

    fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    fn undo(&mut self) -> Result<()> {
        self.cancel_selection_drag();
        while let Some(index) = self.history.step_back() {
            if !self.apply_entry(index, false) {
                break;
            }
        }
        Ok(())
    }

    fn redo_description(&self) -> Option<String> {
        self.history.redo_description()
    }

    fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn redo(&mut self) -> Result<()> {
        self.cancel_selection_drag();
        while let Some(index) = self.history.step_forward() {
            if !self.apply_entry(index, true) {
                break;
            }
        }
        while self.history.next_redo().is_some_and(LevelUndoOp::is_empty_normal) {
            self.history.step_forward();
        }
        Ok(())
    }
}
