//! Level edit state
//!
//! `LevelEditState` owns everything one open level document needs: the grid,
//! the layer active flags, mirror toggles, the selection set, the clipboard and
//! the history log. Every grid mutation goes through the history.
//!
//! The implementation is split by category:
//! - `edit_operations.rs` - single cell placement, mirrored placement, strokes
//! - `fill_operations.rs` - flood fill and global replace
//! - `selection_operations.rs` - rubber band selection
//! - `area_operations.rs` - whole level flips and resize
//! - `clipboard_operations.rs` - copy, cut, paste, delete selection
//! - `undo.rs` - undo/redo

pub mod undo_stack;
pub use undo_stack::*;

pub mod undo_operation;
pub use undo_operation::{HistoryAction, LevelUndoOp, TileEdit};

mod area_operations;
mod clipboard_operations;
mod edit_operations;
mod fill_operations;
pub use fill_operations::FillConstraint;
mod selection_operations;
mod undo;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tile_engine::{formats, IdentityFlip, LayerFlags, LayerKind, Level, Result, SelectionSet, TileFlipLookup};

use crate::{Clipboard, EditorSettings, MirrorMode};

/// Editing state of one level document.
pub struct LevelEditState {
    level: Level,
    active_layers: LayerFlags,
    mirror: MirrorMode,
    flip_table: Arc<dyn TileFlipLookup>,

    selection: SelectionSet,
    /// Selection set as it was when the current drag started.
    selection_drag: Option<SelectionSet>,

    clipboard: Option<Clipboard>,
    history: LevelHistory,

    file_path: Option<PathBuf>,
    is_dirty: bool,
}

impl Default for LevelEditState {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelEditState {
    /// Blank level of the default size.
    pub fn new() -> Self {
        Self::from_level(Level::default())
    }

    pub fn from_level(level: Level) -> Self {
        Self {
            level,
            active_layers: LayerFlags::all(),
            mirror: MirrorMode::default(),
            flip_table: Arc::new(IdentityFlip),
            selection: SelectionSet::new(),
            selection_drag: None,
            clipboard: None,
            history: LevelHistory::new(),
            file_path: None,
            is_dirty: false,
        }
    }

    /// Blank level configured from `settings`.
    pub fn with_settings(settings: &EditorSettings) -> Self {
        let mut state = Self::from_level(Level::new(settings.default_size()));
        state.apply_settings(settings);
        state
    }

    /// Takes over mirror toggles and layer flags from `settings`.
    pub fn apply_settings(&mut self, settings: &EditorSettings) {
        self.mirror = settings.mirror;
        self.active_layers = settings.active_layers;
    }

    /// Loads a level file. An empty file opens a blank level of the default size.
    ///
    /// # Errors
    ///
    /// Fails if the file can't be read or has an unsupported format.
    pub fn load(path: impl Into<PathBuf>, settings: &EditorSettings) -> Result<Self> {
        settings.validate()?;
        let path = path.into();
        let data = std::fs::read(&path)?;
        let level = formats::load_level_or(&data, settings.default_size())?;
        let mut state = Self::from_level(level);
        state.apply_settings(settings);
        state.file_path = Some(path);
        Ok(state)
    }

    /// Writes the level and marks the document clean.
    ///
    /// # Errors
    ///
    /// Fails if the file can't be written.
    pub fn save(&mut self, path: &Path) -> Result<()> {
        formats::save_level_file(path, &self.level)?;
        self.file_path = Some(path.to_path_buf());
        self.is_dirty = false;
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Getters
    // ═══════════════════════════════════════════════════════════════════════

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn active_layers(&self) -> LayerFlags {
        self.active_layers
    }

    pub fn mirror(&self) -> MirrorMode {
        self.mirror
    }

    pub fn flip_table(&self) -> &dyn TileFlipLookup {
        self.flip_table.as_ref()
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn clipboard(&self) -> Option<&Clipboard> {
        self.clipboard.as_ref()
    }

    pub fn history(&self) -> &LevelHistory {
        &self.history
    }

    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    /// Unsaved changes flag
    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Basic setters (no history)
    // ═══════════════════════════════════════════════════════════════════════

    pub fn set_layer_active(&mut self, layer: LayerKind, active: bool) {
        self.active_layers.set(layer, active);
    }

    pub fn set_active_layers(&mut self, flags: LayerFlags) {
        self.active_layers = flags;
    }

    pub fn set_mirror(&mut self, mirror: MirrorMode) {
        self.mirror = mirror;
    }

    pub fn set_flip_table(&mut self, flip_table: Arc<dyn TileFlipLookup>) {
        self.flip_table = flip_table;
    }

    pub fn set_clipboard(&mut self, clipboard: Option<Clipboard>) {
        self.clipboard = clipboard;
    }

    /// Mark as clean (after save)
    pub fn mark_clean(&mut self) {
        self.is_dirty = false;
    }

    /// Cursor of the history log, `-1` when everything is undone.
    pub fn history_position(&self) -> isize {
        self.history.position()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Drops the history log.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
