#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
mod editor;
pub use editor::*;

pub mod mirror;
pub use mirror::MirrorMode;

pub mod clipboard;
pub use clipboard::{Clipboard, ClipboardPart};

mod settings;
pub use settings::EditorSettings;

mod document;
pub use document::EditableDocument;

// Re-export the data model types callers need alongside the edit state
pub use tile_engine::{
    formats, limits, Anchor, Bounds, EngineError, FlipTable, IdentityFlip, LayerFlags, LayerKind, Level, Position, Result, SelectionRect, SelectionSet, Size,
    TileFlipLookup, TileId, EMPTY_TILE,
};
