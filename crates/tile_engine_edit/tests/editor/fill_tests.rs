use std::sync::Arc;

use pretty_assertions::assert_eq;
use tile_engine_edit::{FillConstraint, FlipTable, LayerKind, MirrorMode, Position, SelectionRect, SelectionSet, UndoState};

use super::helpers::{blank_state, rows, state_from_rows};

fn select(corner_a: (i32, i32), corner_b: (i32, i32)) -> SelectionSet {
    SelectionSet::single(SelectionRect::from_corners(corner_a, corner_b))
}

#[test]
fn test_fill_matches_find_id_only() {
    let mut state = blank_state(4, 4);
    state.place_tile((1, 1), 5, LayerKind::Active);
    state.end_stroke();

    assert_eq!(state.flood_fill((1, 1), LayerKind::Active, 7), 1);
    assert_eq!(
        rows(&state, LayerKind::Active),
        vec![vec![0, 0, 0, 0], vec![0, 7, 0, 0], vec![0, 0, 0, 0], vec![0, 0, 0, 0]]
    );
}

#[test]
fn test_fill_region_with_hole() {
    let mut state = state_from_rows(
        LayerKind::Back1,
        &[&[1, 1, 1, 1, 1], &[1, 0, 0, 0, 1], &[1, 0, 2, 0, 1], &[1, 0, 0, 0, 1], &[1, 1, 1, 1, 1]],
    );
    assert_eq!(state.flood_fill((1, 1), LayerKind::Back1, 3), 8);
    assert_eq!(
        rows(&state, LayerKind::Back1),
        vec![
            vec![1, 1, 1, 1, 1],
            vec![1, 3, 3, 3, 1],
            vec![1, 3, 2, 3, 1],
            vec![1, 3, 3, 3, 1],
            vec![1, 1, 1, 1, 1],
        ]
    );

    assert_eq!(state.flood_fill((4, 4), LayerKind::Back1, 4), 16);
    assert_eq!(rows(&state, LayerKind::Back1)[2], vec![4, 3, 2, 3, 4]);
}

#[test]
fn test_fill_is_one_entry() {
    let mut state = state_from_rows(LayerKind::Active, &[&[0, 0, 1], &[0, 1, 0]]);
    assert_eq!(state.flood_fill((0, 0), LayerKind::Active, 9), 3);
    assert_eq!(state.history_len(), 1);

    state.undo().unwrap();
    assert_eq!(rows(&state, LayerKind::Active), vec![vec![0, 0, 1], vec![0, 1, 0]]);
}

#[test]
fn test_fill_noops() {
    let mut state = state_from_rows(LayerKind::Active, &[&[2, 2]]);
    assert_eq!(state.flood_fill((0, 0), LayerKind::Active, 2), 0);
    assert_eq!(state.flood_fill((5, 0), LayerKind::Active, 3), 0);

    state.set_layer_active(LayerKind::Active, false);
    assert_eq!(state.flood_fill((0, 0), LayerKind::Active, 3), 0);
    assert_eq!(state.history_len(), 0);
    assert_eq!(rows(&state, LayerKind::Active), vec![vec![2, 2]]);
}

#[test]
fn test_fill_constrained_inside_selection() {
    let mut state = blank_state(4, 4);
    state.set_selection(select((1, 1), (2, 2)));
    assert_eq!(FillConstraint::for_start(state.selection(), Position::new(1, 1)), FillConstraint::InsideSelection);

    assert_eq!(state.flood_fill((1, 1), LayerKind::Active, 5), 4);
    assert_eq!(
        rows(&state, LayerKind::Active),
        vec![vec![0, 0, 0, 0], vec![0, 5, 5, 0], vec![0, 5, 5, 0], vec![0, 0, 0, 0]]
    );
}

#[test]
fn test_fill_constrained_outside_selection() {
    let mut state = blank_state(4, 4);
    state.set_selection(select((2, 1), (1, 2)));
    assert_eq!(FillConstraint::for_start(state.selection(), Position::new(0, 0)), FillConstraint::OutsideSelection);

    assert_eq!(state.flood_fill((0, 0), LayerKind::Active, 6), 12);
    assert_eq!(
        rows(&state, LayerKind::Active),
        vec![vec![6, 6, 6, 6], vec![6, 0, 0, 6], vec![6, 0, 0, 6], vec![6, 6, 6, 6]]
    );
}

#[test]
fn test_fill_goes_through_mirror() {
    let mut table = FlipTable::new();
    table.add_horizontal_pair(7, 8).unwrap();

    let mut state = state_from_rows(LayerKind::Active, &[&[0, 0, 1, 0, 0]]);
    state.set_flip_table(Arc::new(table));
    state.set_mirror(MirrorMode::new(true, false));

    assert_eq!(state.flood_fill((0, 0), LayerKind::Active, 7), 2);
    assert_eq!(rows(&state, LayerKind::Active), vec![vec![7, 7, 1, 8, 8]]);
    assert_eq!(state.history_len(), 1);
}

#[test]
fn test_replace_all_ignores_connectivity() {
    let mut state = state_from_rows(LayerKind::Overlay, &[&[2, 0, 2], &[0, 2, 0]]);
    assert_eq!(state.replace_all((1, 1), LayerKind::Overlay, 4), 3);
    assert_eq!(rows(&state, LayerKind::Overlay), vec![vec![4, 0, 4], vec![0, 4, 0]]);
    assert_eq!(state.history_len(), 1);
}

#[test]
fn test_replace_all_does_not_mirror() {
    let mut state = state_from_rows(LayerKind::Active, &[&[2, 0, 2, 0, 0]]);
    state.set_mirror(MirrorMode::new(true, true));
    assert_eq!(state.replace_all((0, 0), LayerKind::Active, 9), 2);
    assert_eq!(rows(&state, LayerKind::Active), vec![vec![9, 0, 9, 0, 0]]);
}

#[test]
fn test_replace_all_respects_selection() {
    let mut state = state_from_rows(LayerKind::Active, &[&[2, 2, 2]]);
    state.set_selection(select((0, 0), (1, 0)));
    assert_eq!(state.replace_all((0, 0), LayerKind::Active, 9), 2);
    assert_eq!(rows(&state, LayerKind::Active), vec![vec![9, 9, 2]]);
}
