//! Rubber band selection
//!
//! A drag runs `begin_selection` → `update_selection`* → `end_selection`. The
//! whole drag becomes one SelectState entry. A drag that starts outside the
//! grid only turns visible once it reaches the grid.

use tile_engine::{Bounds, Position, SelectionRect, SelectionSet};

use super::{LevelEditState, LevelUndoOp};

impl LevelEditState {
    /// Starts a selection drag at `pos`. With `additive` the new rectangle is
    /// appended to the current set, otherwise it replaces it.
    pub fn begin_selection(&mut self, pos: impl Into<Position>, additive: bool) {
        let pos = pos.into();
        self.history.close_stroke();
        self.selection_drag = Some(self.selection.clone());
        if !additive {
            self.selection.clear();
        }
        let mut rect = SelectionRect::new(pos);
        rect.visible = self.level.is_inside(pos);
        self.selection.push(rect);
    }

    /// Moves the lead corner of the rectangle being dragged.
    pub fn update_selection(&mut self, pos: impl Into<Position>) {
        let pos = pos.into();
        if self.selection_drag.is_none() || self.level.size().area() == 0 {
            return;
        }
        let level = &self.level;
        let clamp = |p: Position| Position::new(p.x.clamp(0, level.width() - 1), p.y.clamp(0, level.height() - 1));

        let Some(rect) = self.selection.last_mut() else {
            return;
        };
        if !rect.visible {
            if !level.is_inside(pos) {
                rect.lead = pos;
                return;
            }
            rect.anchor = clamp(rect.anchor);
            rect.visible = true;
        }
        rect.lead = clamp(pos);
    }

    /// Finishes the drag, recording the change as one history entry.
    pub fn end_selection(&mut self) {
        let Some(old) = self.selection_drag.take() else {
            return;
        };
        if self.selection.rects().last().is_some_and(|rect| !rect.visible) {
            self.selection.pop();
        }
        if old != self.selection {
            self.history.push(LevelUndoOp::SelectState {
                old,
                new: self.selection.clone(),
            });
        }
    }

    /// Drops a drag in progress and puts back the selection it started from.
    pub fn cancel_selection_drag(&mut self) {
        if let Some(old) = self.selection_drag.take() {
            self.selection = old;
        }
    }

    pub fn select_all(&mut self) {
        let size = self.level.size();
        let rect = SelectionRect::from_corners((0, 0), (size.width - 1, size.height - 1));
        self.set_selection(SelectionSet::single(rect));
    }

    pub fn deselect(&mut self) {
        self.set_selection(SelectionSet::new());
    }

    /// Replaces the selection set, recorded as a SelectState entry if it differs.
    pub fn set_selection(&mut self, selection: SelectionSet) {
        self.cancel_selection_drag();
        self.history.close_stroke();
        if selection == self.selection {
            return;
        }
        self.history.push(LevelUndoOp::SelectState {
            old: self.selection.clone(),
            new: selection.clone(),
        });
        self.selection = selection;
    }

    /// Merged bounds of all visible rectangles.
    pub fn selection_bounds(&self) -> Option<Bounds> {
        self.selection.bounds()
    }

    pub fn is_selected(&self, pos: impl Into<Position>) -> bool {
        self.selection.contains(pos)
    }
}
