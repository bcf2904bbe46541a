use std::sync::Arc;

use pretty_assertions::assert_eq;
use tile_engine_edit::{Anchor, EngineError, FlipTable, HistoryAction, LayerFlags, LayerKind, Size, UndoState};

use super::helpers::{rows, state_from_rows};

#[test]
fn test_flip_x_and_undo() {
    let mut state = state_from_rows(LayerKind::Active, &[&[1, 2, 3], &[4, 5, 6]]);
    state.flip_x();
    assert_eq!(rows(&state, LayerKind::Active), vec![vec![3, 2, 1], vec![6, 5, 4]]);
    assert!(state.is_dirty());
    assert_eq!(state.history().current().map(|op| op.action()), Some(HistoryAction::FlipHorizontal));

    state.undo().unwrap();
    assert_eq!(rows(&state, LayerKind::Active), vec![vec![1, 2, 3], vec![4, 5, 6]]);
    state.redo().unwrap();
    assert_eq!(rows(&state, LayerKind::Active), vec![vec![3, 2, 1], vec![6, 5, 4]]);
}

#[test]
fn test_flip_maps_ids() {
    let mut table = FlipTable::new();
    table.add_horizontal_pair(1, 10).unwrap();
    let mut state = state_from_rows(LayerKind::Active, &[&[1, 2, 3]]);
    state.set_flip_table(Arc::new(table));

    state.flip_x();
    assert_eq!(rows(&state, LayerKind::Active), vec![vec![3, 2, 10]]);
    state.flip_x();
    assert_eq!(rows(&state, LayerKind::Active), vec![vec![1, 2, 3]]);
}

#[test]
fn test_flip_y() {
    let mut state = state_from_rows(LayerKind::Tag, &[&[1, 2], &[3, 4]]);
    state.flip_y();
    assert_eq!(rows(&state, LayerKind::Tag), vec![vec![3, 4], vec![1, 2]]);
    state.undo().unwrap();
    assert_eq!(rows(&state, LayerKind::Tag), vec![vec![1, 2], vec![3, 4]]);
}

#[test]
fn test_flip_undo_uses_recorded_layers() {
    let mut state = state_from_rows(LayerKind::Back1, &[&[1, 2]]);
    state.place_tile((0, 0), 5, LayerKind::Active);
    state.set_active_layers(LayerFlags::only(LayerKind::Active));
    state.flip_x();
    assert_eq!(rows(&state, LayerKind::Active), vec![vec![0, 5]]);
    assert_eq!(rows(&state, LayerKind::Back1), vec![vec![1, 2]]);

    state.set_active_layers(LayerFlags::all());
    state.undo().unwrap();
    assert_eq!(rows(&state, LayerKind::Active), vec![vec![5, 0]]);
    assert_eq!(rows(&state, LayerKind::Back1), vec![vec![1, 2]]);
}

#[test]
fn test_flip_without_active_layers() {
    let mut state = state_from_rows(LayerKind::Active, &[&[1, 2]]);
    state.set_active_layers(LayerFlags::none());
    state.flip_x();
    state.flip_y();
    assert_eq!(state.history_len(), 0);
    assert_eq!(rows(&state, LayerKind::Active), vec![vec![1, 2]]);
}

#[test]
fn test_resize_undo_redo() {
    let mut state = state_from_rows(LayerKind::Active, &[&[1, 2], &[3, 4]]);
    state.resize((4, 3), Anchor::NorthWest).unwrap();
    assert_eq!(state.level().size(), Size::new(4, 3));
    assert_eq!(rows(&state, LayerKind::Active), vec![vec![1, 2, 0, 0], vec![3, 4, 0, 0], vec![0, 0, 0, 0]]);
    assert_eq!(state.undo_description().as_deref(), Some("Resize 2x2 to 4x3"));

    state.undo().unwrap();
    assert_eq!(state.level().size(), Size::new(2, 2));
    assert_eq!(rows(&state, LayerKind::Active), vec![vec![1, 2], vec![3, 4]]);

    state.redo().unwrap();
    assert_eq!(state.level().size(), Size::new(4, 3));
    assert_eq!(rows(&state, LayerKind::Active)[1], vec![3, 4, 0, 0]);
}

#[test]
fn test_resize_center() {
    let mut state = state_from_rows(LayerKind::Back2, &[&[1, 2], &[3, 4]]);
    state.resize((4, 4), Anchor::Center).unwrap();
    assert_eq!(
        rows(&state, LayerKind::Back2),
        vec![vec![0, 0, 0, 0], vec![0, 1, 2, 0], vec![0, 3, 4, 0], vec![0, 0, 0, 0]]
    );
}

#[test]
fn test_resize_ignores_active_flags() {
    let mut state = state_from_rows(LayerKind::Overlay, &[&[1, 2, 3]]);
    state.set_active_layers(LayerFlags::none());
    state.resize((2, 1), Anchor::East).unwrap();
    assert_eq!(rows(&state, LayerKind::Overlay), vec![vec![2, 3]]);
}

#[test]
fn test_resize_same_size_records_nothing() {
    let mut state = state_from_rows(LayerKind::Active, &[&[1, 2]]);
    state.resize((2, 1), Anchor::Center).unwrap();
    assert_eq!(state.history_len(), 0);
    assert!(!state.is_dirty());
}

#[test]
fn test_resize_rejects_invalid_size() {
    let mut state = state_from_rows(LayerKind::Active, &[&[1, 2]]);
    let err = state.resize((0, 4), Anchor::Center).unwrap_err();
    assert!(matches!(err, EngineError::InvalidDimensions { width: 0, height: 4 }));
    assert_eq!(state.history_len(), 0);
    assert_eq!(state.level().size(), Size::new(2, 1));
}
