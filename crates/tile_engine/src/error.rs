use thiserror::Error;

/// Errors produced while loading, saving or reshaping levels.
///
/// Out of range coordinates and undo/redo at the history boundary are not
/// errors; those calls are silent no-ops.
#[derive(Error, Debug)]
pub enum EngineError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Loading Errors ===
    #[error("File too short to be valid")]
    FileTooShort,

    #[error("Unsupported level format version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Layer count mismatch: expected {expected}, got {actual}")]
    LayerCountMismatch { expected: usize, actual: usize },

    #[error("Invalid level dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    // === Configuration Errors ===
    #[error("Invalid flip table: {message}")]
    InvalidFlipTable { message: String },

    #[error("Invalid settings: {message}")]
    InvalidSettings { message: String },

    #[error("{0}")]
    Generic(String),
}

/// Result type alias for `tile_engine` operations
pub type Result<T> = std::result::Result<T, EngineError>;
