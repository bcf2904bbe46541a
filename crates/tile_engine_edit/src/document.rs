use std::path::{Path, PathBuf};

use tile_engine::Result;

use crate::{LevelEditState, UndoState};

/// An open document. Levels are the only editable kind.
pub enum EditableDocument {
    Level(Box<LevelEditState>),
}

impl EditableDocument {
    pub fn level(&self) -> &LevelEditState {
        match self {
            EditableDocument::Level(state) => state,
        }
    }

    pub fn level_mut(&mut self) -> &mut LevelEditState {
        match self {
            EditableDocument::Level(state) => state,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.level().is_dirty()
    }

    pub fn mark_clean(&mut self) {
        self.level_mut().mark_clean();
    }

    pub fn file_path(&self) -> Option<&PathBuf> {
        self.level().file_path()
    }

    /// # Errors
    ///
    /// Fails if the document can't be written.
    pub fn save(&mut self, path: &Path) -> Result<()> {
        match self {
            EditableDocument::Level(state) => state.save(path),
        }
    }
}

impl From<LevelEditState> for EditableDocument {
    fn from(state: LevelEditState) -> Self {
        EditableDocument::Level(Box::new(state))
    }
}

impl UndoState for EditableDocument {
    fn undo_description(&self) -> Option<String> {
        self.level().undo_description()
    }

    fn can_undo(&self) -> bool {
        self.level().can_undo()
    }

    fn undo(&mut self) -> Result<()> {
        self.level_mut().undo()
    }

    fn redo_description(&self) -> Option<String> {
        self.level().redo_description()
    }

    fn can_redo(&self) -> bool {
        self.level().can_redo()
    }

    fn redo(&mut self) -> Result<()> {
        self.level_mut().redo()
    }
}
