use pretty_assertions::assert_eq;
use tile_engine_edit::{Anchor, Bounds, Clipboard, ClipboardPart, HistoryAction, LayerKind, Position, SelectionRect, SelectionSet, Size, UndoState};

use super::helpers::{blank_state, rows, state_from_rows};

fn select(corner_a: (i32, i32), corner_b: (i32, i32)) -> SelectionSet {
    SelectionSet::single(SelectionRect::from_corners(corner_a, corner_b))
}

#[test]
fn test_copy_and_paste() {
    let mut state = state_from_rows(LayerKind::Active, &[&[1, 2, 0], &[3, 4, 0], &[0, 0, 0]]);
    state.set_selection(select((0, 0), (1, 1)));
    assert!(state.copy());
    assert_eq!(state.clipboard().map(|c| c.size), Some(Size::new(2, 2)));

    assert!(state.paste((1, 1)));
    assert_eq!(rows(&state, LayerKind::Active), vec![vec![1, 2, 0], vec![3, 1, 2], vec![0, 3, 4]]);
    assert_eq!(state.history().current().map(|op| op.action()), Some(HistoryAction::Normal));

    state.undo().unwrap();
    assert_eq!(rows(&state, LayerKind::Active), vec![vec![1, 2, 0], vec![3, 4, 0], vec![0, 0, 0]]);
    assert!(state.clipboard().is_some());
}

#[test]
fn test_paste_clips_at_level_edge() {
    let mut state = state_from_rows(LayerKind::Active, &[&[1, 2], &[3, 4]]);
    state.select_all();
    state.copy();
    state.paste((1, 1));
    assert_eq!(rows(&state, LayerKind::Active), vec![vec![1, 2], vec![3, 1]]);
}

#[test]
fn test_copy_without_selection() {
    let mut state = blank_state(3, 3);
    assert!(!state.copy());
    assert!(state.clipboard().is_none());
    assert!(!state.paste((0, 0)));
    assert_eq!(state.history_len(), 0);
}

#[test]
fn test_copy_multiple_rects_keeps_offsets() {
    let mut state = state_from_rows(LayerKind::Active, &[&[1, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 5]]);
    let mut selection = select((0, 0), (0, 0));
    selection.push(SelectionRect::from_corners((3, 2), (3, 2)));
    state.set_selection(selection);
    state.copy();

    let clipboard = state.clipboard().unwrap();
    assert_eq!(clipboard.size, Size::new(4, 3));
    assert_eq!(clipboard.parts.len(), 2);
    assert_eq!(clipboard.parts[1].offset, Position::new(3, 2));

    state.deselect();
    state.resize((5, 4), Anchor::NorthWest).unwrap();
    state.paste((1, 1));
    assert_eq!(rows(&state, LayerKind::Active)[1], vec![0, 1, 0, 0, 0]);
    assert_eq!(rows(&state, LayerKind::Active)[3], vec![0, 0, 0, 0, 5]);
}

#[test]
fn test_overlapping_parts_paste_in_order() {
    let mut state = blank_state(3, 1);
    let part = |offset: (i32, i32), width: i32, ids: Vec<i32>| {
        let mut layers: [Vec<i32>; 5] = std::array::from_fn(|_| vec![0; width as usize]);
        layers[LayerKind::Active.index()] = ids;
        ClipboardPart {
            offset: offset.into(),
            size: Size::new(width, 1),
            layers,
        }
    };
    state.set_clipboard(Some(Clipboard {
        size: Size::new(2, 1),
        parts: vec![part((0, 0), 2, vec![5, 6]), part((1, 0), 1, vec![9])],
    }));

    state.paste((0, 0));
    assert_eq!(rows(&state, LayerKind::Active), vec![vec![5, 9, 0]]);
    state.undo().unwrap();
    assert_eq!(rows(&state, LayerKind::Active), vec![vec![0, 0, 0]]);
}

#[test]
fn test_delete_selection() {
    let mut state = state_from_rows(LayerKind::Active, &[&[1, 2, 3]]);
    state.set_selection(select((0, 0), (1, 0)));
    assert!(state.delete_selection());

    assert_eq!(rows(&state, LayerKind::Active), vec![vec![0, 0, 3]]);
    assert!(state.selection().is_empty());
    assert!(state.is_dirty());
    assert_eq!(state.history().current().map(|op| op.action()), Some(HistoryAction::Clear));

    state.undo().unwrap();
    assert_eq!(rows(&state, LayerKind::Active), vec![vec![1, 2, 3]]);
    assert_eq!(state.selection_bounds(), Some(Bounds::new(0, 0, 1, 0)));

    state.redo().unwrap();
    assert_eq!(rows(&state, LayerKind::Active), vec![vec![0, 0, 3]]);
    assert!(state.selection().is_empty());
}

#[test]
fn test_delete_skips_inactive_layers() {
    let mut state = state_from_rows(LayerKind::Back1, &[&[7, 7]]);
    state.place_tile((0, 0), 4, LayerKind::Active);
    state.set_layer_active(LayerKind::Back1, false);
    state.select_all();
    state.delete_selection();

    assert_eq!(rows(&state, LayerKind::Back1), vec![vec![7, 7]]);
    assert_eq!(rows(&state, LayerKind::Active), vec![vec![0, 0]]);
}

#[test]
fn test_delete_without_selection() {
    let mut state = state_from_rows(LayerKind::Active, &[&[1]]);
    assert!(!state.delete_selection());
    assert_eq!(state.history_len(), 0);
}

#[test]
fn test_cut_then_paste() {
    let mut state = state_from_rows(LayerKind::Overlay, &[&[1, 2, 0, 0]]);
    state.set_selection(select((0, 0), (1, 0)));
    assert!(state.cut());
    assert_eq!(rows(&state, LayerKind::Overlay), vec![vec![0, 0, 0, 0]]);

    state.paste((2, 0));
    assert_eq!(rows(&state, LayerKind::Overlay), vec![vec![0, 0, 1, 2]]);

    state.undo().unwrap();
    state.undo().unwrap();
    assert_eq!(rows(&state, LayerKind::Overlay), vec![vec![1, 2, 0, 0]]);
}
