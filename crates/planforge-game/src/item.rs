use std::fmt;
use std::hash::{Hash, Hasher};

/// Physical state of an item, fixed by game data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemState {
    Solid,
    Liquid,
    Gas,
}

impl ItemState {
    pub fn is_solid(&self) -> bool {
        matches!(self, Self::Solid)
    }

    /// Liquids and gases move through pipes rather than belts.
    pub fn is_fluid(&self) -> bool {
        !matches!(self, Self::Solid)
    }
}

/// An item definition. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct Item {
    pub key: String,
    pub name: String,
    /// True for raw resources (ores, fluids extracted from the world).
    pub resource: bool,
    pub state: ItemState,
    pub energy_mj: f64,
    pub sink_points: u32,
}

// Item identity is its key; names are display-only.
impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Item {}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
