//! History entries
//!
//! One variant per action, each carrying only what it needs to be undone and
//! redone.

use tile_engine::{
    transform::{flip_level_x, flip_level_y},
    Anchor, LayerData, LayerFlags, LayerKind, Level, Position, SelectionSet, Size, TileFlipLookup, TileId,
};

/// A single recorded cell write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileEdit {
    pub pos: Position,
    pub layer: LayerKind,
    pub old: TileId,
    pub new: TileId,
}

/// Tag of a history entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryAction {
    Normal,
    Clear,
    FlipHorizontal,
    FlipVertical,
    SelectState,
    Resize,
}

/// History log entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LevelUndoOp {
    /// Brush strokes, fills, replaces and pastes
    Normal { edits: Vec<TileEdit> },

    /// Selection delete. Clearing deselects, so both selection sets are kept.
    Clear {
        edits: Vec<TileEdit>,
        old_selection: SelectionSet,
        new_selection: SelectionSet,
    },

    /// Whole level flip. Re-applying with the same flags undoes it.
    FlipHorizontal { layers: LayerFlags },

    /// Whole level flip. Re-applying with the same flags undoes it.
    FlipVertical { layers: LayerFlags },

    /// Selection box change, never touches tiles
    SelectState { old: SelectionSet, new: SelectionSet },

    /// Canvas resize with full snapshots of both grids
    Resize {
        anchor: Anchor,
        old_size: Size,
        new_size: Size,
        old_layers: LayerData,
        new_layers: LayerData,
    },
}

/// Mutable document parts an entry restores.
pub(crate) struct UndoTarget<'a> {
    pub level: &'a mut Level,
    pub selection: &'a mut SelectionSet,
    pub flip_table: &'a dyn TileFlipLookup,
}

impl LevelUndoOp {
    pub fn action(&self) -> HistoryAction {
        match self {
            LevelUndoOp::Normal { .. } => HistoryAction::Normal,
            LevelUndoOp::Clear { .. } => HistoryAction::Clear,
            LevelUndoOp::FlipHorizontal { .. } => HistoryAction::FlipHorizontal,
            LevelUndoOp::FlipVertical { .. } => HistoryAction::FlipVertical,
            LevelUndoOp::SelectState { .. } => HistoryAction::SelectState,
            LevelUndoOp::Resize { .. } => HistoryAction::Resize,
        }
    }

    /// Get a description of this operation for display
    pub fn get_description(&self) -> String {
        match self {
            LevelUndoOp::Normal { edits } => {
                if edits.len() == 1 {
                    "Place tile".to_string()
                } else {
                    format!("Place {} tiles", edits.len())
                }
            }
            LevelUndoOp::Clear { .. } => "Delete selection".to_string(),
            LevelUndoOp::FlipHorizontal { .. } => "Flip horizontal".to_string(),
            LevelUndoOp::FlipVertical { .. } => "Flip vertical".to_string(),
            LevelUndoOp::SelectState { .. } => "Selection change".to_string(),
            LevelUndoOp::Resize { old_size, new_size, .. } => format!("Resize {old_size} to {new_size}"),
        }
    }

    /// Placeholder entry opened by a gesture that didn't change anything.
    pub fn is_empty_normal(&self) -> bool {
        matches!(self, LevelUndoOp::Normal { edits } if edits.is_empty())
    }

    /// Whether undoing/redoing this entry affects the dirty flag
    pub fn changes_data(&self) -> bool {
        match self {
            LevelUndoOp::SelectState { .. } => false,
            LevelUndoOp::Normal { edits } => !edits.is_empty(),
            _ => true,
        }
    }

    pub fn edits(&self) -> &[TileEdit] {
        match self {
            LevelUndoOp::Normal { edits } | LevelUndoOp::Clear { edits, .. } => edits.as_slice(),
            _ => &[],
        }
    }

    pub(crate) fn edits_mut(&mut self) -> Option<&mut Vec<TileEdit>> {
        match self {
            LevelUndoOp::Normal { edits } | LevelUndoOp::Clear { edits, .. } => Some(edits),
            _ => None,
        }
    }

    pub(crate) fn undo(&self, target: &mut UndoTarget<'_>) {
        match self {
            LevelUndoOp::Normal { edits } => {
                for edit in edits.iter().rev() {
                    target.level.set_tile(edit.pos, edit.layer, edit.old);
                }
            }
            LevelUndoOp::Clear { edits, old_selection, .. } => {
                for edit in edits.iter().rev() {
                    target.level.set_tile(edit.pos, edit.layer, edit.old);
                }
                target.selection.clone_from(old_selection);
            }
            LevelUndoOp::FlipHorizontal { layers } => flip_level_x(target.level, *layers, target.flip_table),
            LevelUndoOp::FlipVertical { layers } => flip_level_y(target.level, *layers, target.flip_table),
            LevelUndoOp::SelectState { old, .. } => target.selection.clone_from(old),
            LevelUndoOp::Resize { old_size, old_layers, .. } => {
                target.level.restore(*old_size, old_layers.clone());
            }
        }
    }

    pub(crate) fn redo(&self, target: &mut UndoTarget<'_>) {
        match self {
            LevelUndoOp::Normal { edits } => {
                for edit in edits {
                    target.level.set_tile(edit.pos, edit.layer, edit.new);
                }
            }
            LevelUndoOp::Clear { edits, new_selection, .. } => {
                for edit in edits {
                    target.level.set_tile(edit.pos, edit.layer, edit.new);
                }
                target.selection.clone_from(new_selection);
            }
            LevelUndoOp::FlipHorizontal { layers } => flip_level_x(target.level, *layers, target.flip_table),
            LevelUndoOp::FlipVertical { layers } => flip_level_y(target.level, *layers, target.flip_table),
            LevelUndoOp::SelectState { new, .. } => target.selection.clone_from(new),
            LevelUndoOp::Resize { new_size, new_layers, .. } => {
                target.level.restore(*new_size, new_layers.clone());
            }
        }
    }
}
