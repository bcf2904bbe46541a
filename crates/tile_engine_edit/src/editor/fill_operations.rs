//! Flood fill and global replace
//!
//! Both work on one layer. The id under the start cell is the "find" id. If a
//! selection is visible, the start cell decides whether the operation stays
//! inside the selection or outside of it.

use std::collections::VecDeque;

use tile_engine::{LayerKind, Position, SelectionSet, TileId};

use super::LevelEditState;

/// Selection constraint of a fill, fixed at fill start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillConstraint {
    Unconstrained,
    InsideSelection,
    OutsideSelection,
}

impl FillConstraint {
    pub fn for_start(selection: &SelectionSet, start: Position) -> Self {
        if !selection.has_visible() {
            FillConstraint::Unconstrained
        } else if selection.contains(start) {
            FillConstraint::InsideSelection
        } else {
            FillConstraint::OutsideSelection
        }
    }

    pub fn allows(self, selection: &SelectionSet, pos: Position) -> bool {
        match self {
            FillConstraint::Unconstrained => true,
            FillConstraint::InsideSelection => selection.contains(pos),
            FillConstraint::OutsideSelection => !selection.contains(pos),
        }
    }
}

impl LevelEditState {
    /// 4-connected flood fill from `start`, replacing the connected region of
    /// the start id with `replace_id`. Placements go through the mirror
    /// transform. Returns the number of filled cells (mirror copies excluded).
    pub fn flood_fill(&mut self, start: impl Into<Position>, layer: LayerKind, replace_id: TileId) -> usize {
        let start = start.into();
        let Some(find_id) = self.level.get_tile(start, layer) else {
            return 0;
        };
        if find_id == replace_id || !self.active_layers.is_active(layer) {
            return 0;
        }
        let constraint = FillConstraint::for_start(&self.selection, start);
        let width = self.level.width() as usize;
        let cell = |pos: Position| pos.y as usize * width + pos.x as usize;

        self.begin_stroke();
        let mut visited = vec![false; self.level.size().area()];
        visited[cell(start)] = true;
        self.mirror_place(start, replace_id, layer);
        let mut filled = 1;

        let mut frontier = VecDeque::from([start]);
        while let Some(cur) = frontier.pop_front() {
            for next in cur.neighbors() {
                if !self.level.is_inside(next) || visited[cell(next)] || !constraint.allows(&self.selection, next) {
                    continue;
                }
                visited[cell(next)] = true;
                if self.level.tile(next, layer) == find_id {
                    self.mirror_place(next, replace_id, layer);
                    frontier.push_back(next);
                    filled += 1;
                }
            }
        }
        self.end_stroke();

        log::debug!("flood fill {find_id} -> {replace_id} on {layer}: {filled} cells");
        filled
    }

    /// Replaces every cell of the start id on `layer` with `replace_id`, in
    /// raster order. Unlike [`Self::flood_fill`] this ignores the mirror toggles.
    pub fn replace_all(&mut self, start: impl Into<Position>, layer: LayerKind, replace_id: TileId) -> usize {
        let start = start.into();
        let Some(find_id) = self.level.get_tile(start, layer) else {
            return 0;
        };
        if find_id == replace_id || !self.active_layers.is_active(layer) {
            return 0;
        }
        let constraint = FillConstraint::for_start(&self.selection, start);

        self.begin_stroke();
        let mut replaced = 0;
        for y in 0..self.level.height() {
            for x in 0..self.level.width() {
                let pos = Position::new(x, y);
                if constraint.allows(&self.selection, pos) && self.level.tile(pos, layer) == find_id {
                    self.place_tile(pos, replace_id, layer);
                    replaced += 1;
                }
            }
        }
        self.end_stroke();

        log::debug!("replace {find_id} -> {replace_id} on {layer}: {replaced} cells");
        replaced
    }
}
