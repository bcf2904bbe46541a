use serde::{Deserialize, Serialize};

/// Number of layers every level carries.
pub const LAYER_COUNT: usize = 5;

/// The named layers of a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    /// Gameplay tags (spawn points, triggers)
    Tag,
    /// Drawn above everything else
    Overlay,
    /// The layer the player collides with
    Active,
    Back1,
    Back2,
}

impl LayerKind {
    /// In-memory enumeration order. `index()` is the position in this array.
    pub const ALL: [LayerKind; LAYER_COUNT] = [LayerKind::Tag, LayerKind::Overlay, LayerKind::Active, LayerKind::Back1, LayerKind::Back2];

    /// Order in which layers are stored in a level file, back to front.
    pub const FILE_ORDER: [LayerKind; LAYER_COUNT] = [LayerKind::Back2, LayerKind::Back1, LayerKind::Active, LayerKind::Overlay, LayerKind::Tag];

    pub fn index(self) -> usize {
        match self {
            LayerKind::Tag => 0,
            LayerKind::Overlay => 1,
            LayerKind::Active => 2,
            LayerKind::Back1 => 3,
            LayerKind::Back2 => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LayerKind::Tag => "Tag",
            LayerKind::Overlay => "Overlay",
            LayerKind::Active => "Active",
            LayerKind::Back1 => "Back1",
            LayerKind::Back2 => "Back2",
        }
    }
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for LayerKind {
    type Err = crate::EngineError;

    fn from_str(s: &str) -> crate::Result<Self> {
        LayerKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| crate::EngineError::Generic(format!("Unknown layer '{s}'")))
    }
}

/// Per-layer "active" switches. Mutation, fills and flips skip inactive layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerFlags([bool; LAYER_COUNT]);

impl Default for LayerFlags {
    fn default() -> Self {
        Self::all()
    }
}

impl LayerFlags {
    pub fn all() -> Self {
        LayerFlags([true; LAYER_COUNT])
    }

    pub fn none() -> Self {
        LayerFlags([false; LAYER_COUNT])
    }

    /// Flags with only `kind` switched on.
    pub fn only(kind: LayerKind) -> Self {
        let mut flags = Self::none();
        flags.set(kind, true);
        flags
    }

    pub fn is_active(&self, kind: LayerKind) -> bool {
        self.0[kind.index()]
    }

    pub fn set(&mut self, kind: LayerKind, active: bool) {
        self.0[kind.index()] = active;
    }

    /// Iterates the active layers in enumeration order.
    pub fn active_layers(&self) -> impl Iterator<Item = LayerKind> + '_ {
        LayerKind::ALL.into_iter().filter(|kind| self.is_active(*kind))
    }
}
