use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tile_engine_edit::{formats, EditableDocument, EditorSettings, LayerKind, LevelEditState, MirrorMode, Size, UndoState};

use super::helpers::state_from_rows;

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tile_engine_edit_{}_{name}", std::process::id()))
}

#[test]
fn test_document_forwards_undo() {
    let mut doc = EditableDocument::from(state_from_rows(LayerKind::Active, &[&[0, 0]]));
    assert!(!doc.can_undo());
    doc.level_mut().place_tile((1, 0), 3, LayerKind::Active);
    assert!(doc.is_dirty());
    assert_eq!(doc.undo_description().as_deref(), Some("Place tile"));

    doc.undo().unwrap();
    assert_eq!(doc.level().level().tile((1, 0), LayerKind::Active), 0);
    assert!(doc.can_redo());
    doc.redo().unwrap();
    assert_eq!(doc.level().level().tile((1, 0), LayerKind::Active), 3);

    doc.mark_clean();
    assert!(!doc.is_dirty());
}

#[test]
fn test_save_and_load() {
    let path = temp_file("save_and_load.lvl");
    let mut state = state_from_rows(LayerKind::Back2, &[&[1, 2, 3], &[4, 5, 6]]);
    state.place_tile((0, 1), 9, LayerKind::Tag);
    assert!(state.is_dirty());

    state.save(&path).unwrap();
    assert!(!state.is_dirty());
    assert_eq!(state.file_path(), Some(&path));

    let loaded = LevelEditState::load(&path, &EditorSettings::default()).unwrap();
    assert_eq!(loaded.level(), state.level());
    assert!(!loaded.is_dirty());
    assert_eq!(loaded.history_len(), 0);
    assert_eq!(formats::load_level_file(&path).unwrap(), *state.level());

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_document_save() {
    let path = temp_file("document_save.lvl");
    let mut doc = EditableDocument::from(state_from_rows(LayerKind::Active, &[&[7]]));
    doc.level_mut().place_tile((0, 0), 8, LayerKind::Active);
    doc.save(&path).unwrap();
    assert!(!doc.is_dirty());
    assert_eq!(doc.file_path(), Some(&path));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_load_empty_file_gives_blank_level() {
    let path = temp_file("empty.lvl");
    std::fs::write(&path, b"").unwrap();
    let settings = EditorSettings {
        default_width: 10,
        default_height: 6,
        ..EditorSettings::default()
    };

    let state = LevelEditState::load(&path, &settings).unwrap();
    assert_eq!(state.level().size(), Size::new(10, 6));
    assert_eq!(state.level().used_cells(), 0);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_load_rejects_garbage() {
    let path = temp_file("garbage.lvl");
    std::fs::write(&path, b"\x01\x02\x03").unwrap();
    assert!(LevelEditState::load(&path, &EditorSettings::default()).is_err());
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_load_rejects_invalid_settings() {
    let path = temp_file("invalid_settings.lvl");
    std::fs::write(&path, b"").unwrap();
    let settings = EditorSettings {
        default_width: 0,
        ..EditorSettings::default()
    };
    assert!(LevelEditState::load(&path, &settings).is_err());
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_with_settings() {
    let mut settings = EditorSettings {
        default_width: 8,
        default_height: 4,
        mirror: MirrorMode::new(true, false),
        ..EditorSettings::default()
    };
    settings.active_layers.set(LayerKind::Tag, false);

    let state = LevelEditState::with_settings(&settings);
    assert_eq!(state.level().size(), Size::new(8, 4));
    assert_eq!(state.mirror(), MirrorMode::new(true, false));
    assert!(!state.active_layers().is_active(LayerKind::Tag));
    assert!(state.active_layers().is_active(LayerKind::Active));
}
