use std::fmt;

/// An item key paired with a per-minute rate.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRate {
    pub item: String,
    pub amount: f64,
}

impl ItemRate {
    pub fn new(item: impl Into<String>, amount: f64) -> Self {
        Self {
            item: item.into(),
            amount,
        }
    }
}

impl fmt::Display for ItemRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{}/min", self.item, self.amount)
    }
}

/// Min/max power draw of a recipe in variable-power buildings.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerRange {
    pub min_mw: f64,
    pub max_mw: f64,
}

/// A crafting recipe. Immutable once loaded.
///
/// Input and output amounts are per-minute rates; the wire document carries
/// per-craft amounts and the database indexer converts them on load.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub key: String,
    pub name: String,
    /// Alternate recipes are unlocked via hard drives and are opt-in.
    pub alternate: bool,
    pub inputs: Vec<ItemRate>,
    pub outputs: Vec<ItemRate>,
    pub craft_time_secs: f64,
    /// Key of the building that crafts this recipe.
    pub building: String,
    /// Unlock events this recipe is tied to (e.g. seasonal content).
    pub events: Vec<String>,
    pub power: PowerRange,
}

impl Recipe {
    pub fn crafts_per_min(&self) -> f64 {
        60.0 / self.craft_time_secs
    }

    pub fn has_output_item(&self, item_key: &str) -> bool {
        self.outputs.iter().any(|o| o.item == item_key)
    }

    pub fn has_input_item(&self, item_key: &str) -> bool {
        self.inputs.iter().any(|i| i.item == item_key)
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
