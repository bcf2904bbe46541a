use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{EngineError, Result, TileId, EMPTY_TILE};

/// Maps a tile id to the id of its mirrored graphic.
///
/// Both lookups must be involutions (`flip_x(flip_x(id)) == id`) and must map
/// the empty tile to itself.
pub trait TileFlipLookup: Send + Sync {
    /// Tile showing `id` mirrored about a vertical axis.
    fn flip_x(&self, id: TileId) -> TileId;

    /// Tile showing `id` mirrored about a horizontal axis.
    fn flip_y(&self, id: TileId) -> TileId;
}

/// Lookup that leaves every id unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityFlip;

impl TileFlipLookup for IdentityFlip {
    fn flip_x(&self, id: TileId) -> TileId {
        id
    }

    fn flip_y(&self, id: TileId) -> TileId {
        id
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct FlipTableFile {
    #[serde(default)]
    horizontal: Vec<[TileId; 2]>,
    #[serde(default)]
    vertical: Vec<[TileId; 2]>,
}

/// Table driven flip lookup. Unmapped ids flip to themselves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlipTable {
    horizontal: BTreeMap<TileId, TileId>,
    vertical: BTreeMap<TileId, TileId>,
}

impl FlipTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `a <-> b` as horizontal mirror images.
    ///
    /// # Errors
    ///
    /// Fails if either id is already paired with a different tile or one of them is empty.
    pub fn add_horizontal_pair(&mut self, a: TileId, b: TileId) -> Result<()> {
        insert_pair(&mut self.horizontal, a, b)
    }

    /// Registers `a <-> b` as vertical mirror images.
    ///
    /// # Errors
    ///
    /// Fails if either id is already paired with a different tile or one of them is empty.
    pub fn add_vertical_pair(&mut self, a: TileId, b: TileId) -> Result<()> {
        insert_pair(&mut self.vertical, a, b)
    }

    /// Parses a table of the form
    ///
    /// ```toml
    /// horizontal = [[1, 2], [5, 6]]
    /// vertical = [[3, 4]]
    /// ```
    ///
    /// # Errors
    ///
    /// Fails on malformed TOML or inconsistent pairs.
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        let file: FlipTableFile = toml::from_str(txt).map_err(|e| EngineError::InvalidFlipTable { message: e.to_string() })?;
        let mut table = FlipTable::new();
        for [a, b] in file.horizontal {
            table.add_horizontal_pair(a, b)?;
        }
        for [a, b] in file.vertical {
            table.add_vertical_pair(a, b)?;
        }
        log::debug!(
            "loaded flip table with {} horizontal and {} vertical mappings",
            table.horizontal.len(),
            table.vertical.len()
        );
        Ok(table)
    }

    /// Loads a flip table from a TOML file.
    ///
    /// # Errors
    ///
    /// Fails if the file can't be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let txt = std::fs::read_to_string(path)?;
        Self::from_toml_str(&txt)
    }

    pub fn is_empty(&self) -> bool {
        self.horizontal.is_empty() && self.vertical.is_empty()
    }
}

fn insert_pair(map: &mut BTreeMap<TileId, TileId>, a: TileId, b: TileId) -> Result<()> {
    if a == EMPTY_TILE || b == EMPTY_TILE {
        return Err(EngineError::InvalidFlipTable {
            message: format!("empty tile can't be paired ({a} <-> {b})"),
        });
    }
    for (from, to) in [(a, b), (b, a)] {
        if let Some(existing) = map.get(&from) {
            if *existing != to {
                return Err(EngineError::InvalidFlipTable {
                    message: format!("tile {from} is already paired with {existing}"),
                });
            }
        }
    }
    map.insert(a, b);
    map.insert(b, a);
    Ok(())
}

impl TileFlipLookup for FlipTable {
    fn flip_x(&self, id: TileId) -> TileId {
        self.horizontal.get(&id).copied().unwrap_or(id)
    }

    fn flip_y(&self, id: TileId) -> TileId {
        self.vertical.get(&id).copied().unwrap_or(id)
    }
}
