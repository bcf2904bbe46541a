use tile_engine_edit::{LayerKind, Level, LevelEditState, Position, TileId};

/// Edit state over a level built from rows of ids on one layer.
pub fn state_from_rows(layer: LayerKind, rows: &[&[TileId]]) -> LevelEditState {
    let height = rows.len() as i32;
    let width = rows.first().map_or(0, |r| r.len()) as i32;
    let mut level = Level::new((width, height));
    for (y, row) in rows.iter().enumerate() {
        for (x, id) in row.iter().enumerate() {
            level.set_tile(Position::new(x as i32, y as i32), layer, *id);
        }
    }
    LevelEditState::from_level(level)
}

/// Edit state over an empty level.
pub fn blank_state(width: i32, height: i32) -> LevelEditState {
    LevelEditState::from_level(Level::new((width, height)))
}

/// Rows of one layer of the edited level.
pub fn rows(state: &LevelEditState, layer: LayerKind) -> Vec<Vec<TileId>> {
    let level = state.level();
    level.layer(layer).chunks(level.width().max(1) as usize).map(<[TileId]>::to_vec).collect()
}
