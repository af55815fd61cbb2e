//! Serde wire structs for the backend database document.
//!
//! These mirror the JSON served at `/api/1/database`. Amounts on recipes
//! and producer outputs are per-craft; [`crate::database::GameDatabase`]
//! converts them to per-minute rates when indexing.

use std::collections::HashMap;

use crate::building::PowerConsumption;
use crate::item::ItemState;
use crate::recipe::PowerRange;

/// The top-level database document.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseDoc {
    #[serde(default)]
    pub items: Vec<ItemDoc>,
    #[serde(default)]
    pub buildings: Vec<BuildingDoc>,
    #[serde(default)]
    pub recipes: Vec<RecipeDoc>,
    /// Default extraction-rate limit per resource item key.
    #[serde(default)]
    pub resource_limits: HashMap<String, f64>,
}

/// An item entry in the document.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDoc {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub resource: bool,
    pub state: ItemState,
    #[serde(rename = "energyMJ", default)]
    pub energy_mj: f64,
    #[serde(default)]
    pub sink_points: u32,
}

/// An item key with a per-craft amount.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ItemAmountDoc {
    pub item: String,
    pub amount: f64,
}

/// A building entry, discriminated by the `type` tag.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BuildingDoc {
    #[serde(rename_all = "camelCase")]
    Manufacturer {
        key: String,
        name: String,
        power_consumption: PowerConsumption,
    },
    #[serde(rename_all = "camelCase")]
    PowerGenerator {
        key: String,
        name: String,
        power_consumption: PowerConsumption,
        power_production_mw: f64,
    },
    #[serde(rename_all = "camelCase")]
    ItemProducer {
        key: String,
        name: String,
        power_consumption: PowerConsumption,
        craft_time_secs: f64,
        output: ItemAmountDoc,
    },
    #[serde(rename_all = "camelCase")]
    ResourceExtractor {
        key: String,
        name: String,
        power_consumption: PowerConsumption,
        extraction_rate: f64,
        #[serde(default)]
        allowed_resources: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    ResourceWell {
        key: String,
        name: String,
        power_consumption: PowerConsumption,
        extraction_rate: f64,
        #[serde(default)]
        allowed_resources: Vec<String>,
    },
}

impl BuildingDoc {
    pub fn key(&self) -> &str {
        match self {
            Self::Manufacturer { key, .. }
            | Self::PowerGenerator { key, .. }
            | Self::ItemProducer { key, .. }
            | Self::ResourceExtractor { key, .. }
            | Self::ResourceWell { key, .. } => key,
        }
    }
}

/// A recipe entry in the document.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDoc {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub alternate: bool,
    pub inputs: Vec<ItemAmountDoc>,
    pub outputs: Vec<ItemAmountDoc>,
    pub craft_time_secs: f64,
    pub building: String,
    #[serde(default)]
    pub events: Vec<String>,
    #[serde(default)]
    pub power: PowerRange,
}
