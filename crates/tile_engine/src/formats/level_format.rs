//! Binary level format
//!
//! ```text
//! u32 BE  format version (LEVEL_FORMAT_VERSION)
//! i32 BE  width
//! i32 BE  height
//! u32 BE  layer count (LAYER_COUNT)
//! i32 BE  cells, one layer after another in LayerKind::FILE_ORDER, row-major
//! ```
//!
//! A zero length file is a blank level of the default size.

use std::io::{Cursor, Read, Write};
use std::path::Path;

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::{limits, EngineError, LayerKind, Level, Result, Size, LAYER_COUNT};

/// The only format version this crate reads and writes.
pub const LEVEL_FORMAT_VERSION: u32 = 1;

const HEADER_SIZE: usize = 16;

/// Decodes a level. An empty buffer yields a blank level of the default size.
///
/// # Errors
///
/// Fails on an unknown version, a layer count other than `LAYER_COUNT`,
/// dimensions outside the editor limits or truncated cell data.
pub fn load_level(data: &[u8]) -> Result<Level> {
    load_level_or(data, limits::DEFAULT_LEVEL_SIZE)
}

/// Like [`load_level`] but uses `blank_size` for empty input.
///
/// # Errors
///
/// See [`load_level`].
pub fn load_level_or(data: &[u8], blank_size: Size) -> Result<Level> {
    if data.is_empty() {
        log::info!("empty level file, creating blank {blank_size} level");
        return Ok(Level::new(blank_size));
    }
    if data.len() < HEADER_SIZE {
        return Err(EngineError::FileTooShort);
    }

    let mut reader = Cursor::new(data);
    let version = reader.read_u32::<BigEndian>()?;
    if version != LEVEL_FORMAT_VERSION {
        log::warn!("rejecting level with format version {version}");
        return Err(EngineError::UnsupportedVersion { version });
    }
    let width = reader.read_i32::<BigEndian>()?;
    let height = reader.read_i32::<BigEndian>()?;
    let layer_count = reader.read_u32::<BigEndian>()? as usize;

    if !limits::is_within_limits(width, height) {
        return Err(EngineError::InvalidDimensions { width, height });
    }
    if layer_count != LAYER_COUNT {
        return Err(EngineError::LayerCountMismatch {
            expected: LAYER_COUNT,
            actual: layer_count,
        });
    }

    let size = Size::new(width, height);
    let expected_len = HEADER_SIZE + size.area() * LAYER_COUNT * 4;
    if data.len() < expected_len {
        return Err(EngineError::FileTooShort);
    }

    let mut level = Level::new(size);
    for kind in LayerKind::FILE_ORDER {
        read_layer(&mut reader, level.layer_mut(kind))?;
    }
    Ok(level)
}

fn read_layer(reader: &mut impl Read, cells: &mut [i32]) -> Result<()> {
    reader.read_i32_into::<BigEndian>(cells).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            EngineError::FileTooShort
        } else {
            EngineError::Io(e)
        }
    })
}

/// Encodes `level` into the binary level format.
pub fn save_level(level: &Level) -> Vec<u8> {
    let mut result = Vec::with_capacity(HEADER_SIZE + level.size().area() * LAYER_COUNT * 4);
    // writing into a Vec can't fail
    let _ = write_level(&mut result, level);
    result
}

/// Streams `level` in the binary level format.
///
/// # Errors
///
/// Propagates writer failures.
pub fn write_level(writer: &mut impl Write, level: &Level) -> Result<()> {
    writer.write_u32::<BigEndian>(LEVEL_FORMAT_VERSION)?;
    writer.write_i32::<BigEndian>(level.width())?;
    writer.write_i32::<BigEndian>(level.height())?;
    writer.write_u32::<BigEndian>(LAYER_COUNT as u32)?;
    for kind in LayerKind::FILE_ORDER {
        for id in level.layer(kind) {
            writer.write_i32::<BigEndian>(*id)?;
        }
    }
    Ok(())
}

/// Reads a level file from disk.
///
/// # Errors
///
/// Fails if the file can't be read or decoded.
pub fn load_level_file(path: &Path) -> Result<Level> {
    let data = std::fs::read(path)?;
    log::info!("loading level {} ({} bytes)", path.display(), data.len());
    load_level(&data)
}

/// Writes a level file to disk.
///
/// # Errors
///
/// Fails if the file can't be written.
pub fn save_level_file(path: &Path, level: &Level) -> Result<()> {
    let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_level(&mut file, level)?;
    file.flush()?;
    log::info!("saved level {} ({})", path.display(), level.size());
    Ok(())
}

