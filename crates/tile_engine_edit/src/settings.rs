use std::path::Path;

use serde::{Deserialize, Serialize};
use tile_engine::{
    limits::{self, DEFAULT_LEVEL_HEIGHT, DEFAULT_LEVEL_WIDTH},
    Anchor, EngineError, LayerFlags, Result, Size,
};

use crate::MirrorMode;

/// Editor defaults read from `settings.toml`.
///
/// ```toml
/// default_width = 64
/// default_height = 48
/// resize_anchor = "north_west"
/// active_layers = [true, true, true, true, true]
///
/// [mirror]
/// horizontal = true
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub default_width: i32,
    pub default_height: i32,
    pub resize_anchor: Anchor,
    /// Indexed in `LayerKind::ALL` order
    pub active_layers: LayerFlags,
    pub mirror: MirrorMode,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            default_width: DEFAULT_LEVEL_WIDTH,
            default_height: DEFAULT_LEVEL_HEIGHT,
            resize_anchor: Anchor::default(),
            active_layers: LayerFlags::all(),
            mirror: MirrorMode::default(),
        }
    }
}

impl EditorSettings {
    /// Size of newly created levels.
    pub fn default_size(&self) -> Size {
        Size::new(self.default_width, self.default_height)
    }

    /// # Errors
    ///
    /// Fails if the default size is outside the editor limits.
    pub fn validate(&self) -> Result<()> {
        if !limits::is_within_limits(self.default_width, self.default_height) {
            return Err(EngineError::InvalidSettings {
                message: format!(
                    "default size {} outside {}x{}..{}x{}",
                    self.default_size(),
                    limits::MIN_LEVEL_WIDTH,
                    limits::MIN_LEVEL_HEIGHT,
                    limits::MAX_LEVEL_WIDTH,
                    limits::MAX_LEVEL_HEIGHT
                ),
            });
        }
        Ok(())
    }

    /// Parses and validates settings. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Fails on malformed TOML or values outside the editor limits.
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        let settings: EditorSettings = toml::from_str(txt).map_err(|e| EngineError::InvalidSettings { message: e.to_string() })?;
        settings.validate()?;
        Ok(settings)
    }

    /// # Errors
    ///
    /// Fails if the file can't be read or holds invalid settings.
    pub fn load(path: &Path) -> Result<Self> {
        let txt = std::fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&txt)?;
        log::info!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// # Errors
    ///
    /// Fails if the settings can't be serialized.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| EngineError::InvalidSettings { message: e.to_string() })
    }
}
