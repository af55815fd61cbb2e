//! The indexed game database built from a fetched document.

use std::collections::HashMap;

use crate::building::{
    Building, ItemProducer, Manufacturer, PowerGenerator, ResourceExtractor, ResourceWell,
};
use crate::item::Item;
use crate::recipe::{ItemRate, Recipe};
use crate::schema::{BuildingDoc, DatabaseDoc, ItemAmountDoc};

/// Errors raised while turning a fetched payload into a [`GameDatabase`].
#[derive(Debug, thiserror::Error)]
pub enum DatabaseParseError {
    #[error("malformed database document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Key-indexed game reference data: items, buildings, recipes, and the
/// default extraction-rate limit per resource.
///
/// Loaded once from the backend and treated as immutable; a reload replaces
/// the whole database, never parts of it. Recipe and building references
/// are assumed consistent by the loader — lookups return `Option` and
/// absence is the caller's problem.
#[derive(Debug, Clone, Default)]
pub struct GameDatabase {
    items: HashMap<String, Item>,
    buildings: HashMap<String, Building>,
    recipes: HashMap<String, Recipe>,
    resource_limits: HashMap<String, f64>,
}

impl GameDatabase {
    /// Parse a JSON database document and index it.
    pub fn from_json(payload: &str) -> Result<Self, DatabaseParseError> {
        let doc: DatabaseDoc = serde_json::from_str(payload)?;
        Ok(Self::from_doc(doc))
    }

    /// Index a parsed document into key-addressed maps.
    ///
    /// Duplicate keys are last-write-wins; per-craft amounts become
    /// per-minute rates here.
    pub fn from_doc(doc: DatabaseDoc) -> Self {
        let mut items = HashMap::with_capacity(doc.items.len());
        for item in doc.items {
            items.insert(
                item.key.clone(),
                Item {
                    key: item.key,
                    name: item.name,
                    resource: item.resource,
                    state: item.state,
                    energy_mj: item.energy_mj,
                    sink_points: item.sink_points,
                },
            );
        }

        let mut buildings = HashMap::with_capacity(doc.buildings.len());
        for building in doc.buildings {
            let converted = convert_building(building);
            buildings.insert(converted.key().to_string(), converted);
        }

        let mut recipes = HashMap::with_capacity(doc.recipes.len());
        for recipe in doc.recipes {
            let crafts_per_min = 60.0 / recipe.craft_time_secs;
            recipes.insert(
                recipe.key.clone(),
                Recipe {
                    key: recipe.key,
                    name: recipe.name,
                    alternate: recipe.alternate,
                    inputs: per_minute(recipe.inputs, crafts_per_min),
                    outputs: per_minute(recipe.outputs, crafts_per_min),
                    craft_time_secs: recipe.craft_time_secs,
                    building: recipe.building,
                    events: recipe.events,
                    power: recipe.power,
                },
            );
        }

        tracing::debug!(
            items = items.len(),
            buildings = buildings.len(),
            recipes = recipes.len(),
            "indexed game database"
        );

        Self {
            items,
            buildings,
            recipes,
            resource_limits: doc.resource_limits,
        }
    }

    pub fn item(&self, key: &str) -> Option<&Item> {
        self.items.get(key)
    }

    pub fn building(&self, key: &str) -> Option<&Building> {
        self.buildings.get(key)
    }

    pub fn recipe(&self, key: &str) -> Option<&Recipe> {
        self.recipes.get(key)
    }

    /// Default extraction-rate limit for a resource item, if one is known.
    pub fn resource_limit(&self, item_key: &str) -> Option<f64> {
        self.resource_limits.get(item_key).copied()
    }

    pub fn resource_limits(&self) -> &HashMap<String, f64> {
        &self.resource_limits
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.values()
    }

    pub fn buildings(&self) -> impl Iterator<Item = &Building> {
        self.buildings.values()
    }

    /// Keys of every non-alternate recipe, sorted for a stable order.
    /// Alternates must be opted into explicitly by the user.
    pub fn base_recipe_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .recipes
            .values()
            .filter(|r| !r.alternate)
            .map(|r| r.key.clone())
            .collect();
        keys.sort();
        keys
    }

    pub fn find_recipes_by_output(&self, item_key: &str) -> Vec<&Recipe> {
        self.recipes
            .values()
            .filter(|r| r.has_output_item(item_key))
            .collect()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }

    pub fn building_count(&self) -> usize {
        self.buildings.len()
    }

    /// True before any load has completed.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
            && self.buildings.is_empty()
            && self.recipes.is_empty()
            && self.resource_limits.is_empty()
    }
}

fn per_minute(amounts: Vec<ItemAmountDoc>, crafts_per_min: f64) -> Vec<ItemRate> {
    amounts
        .into_iter()
        .map(|a| ItemRate::new(a.item, a.amount * crafts_per_min))
        .collect()
}

fn convert_building(doc: BuildingDoc) -> Building {
    match doc {
        BuildingDoc::Manufacturer {
            key,
            name,
            power_consumption,
        } => Building::Manufacturer(Manufacturer {
            key,
            name,
            power_consumption,
        }),
        BuildingDoc::PowerGenerator {
            key,
            name,
            power_consumption,
            power_production_mw,
        } => Building::PowerGenerator(PowerGenerator {
            key,
            name,
            power_consumption,
            power_production_mw,
        }),
        BuildingDoc::ItemProducer {
            key,
            name,
            power_consumption,
            craft_time_secs,
            output,
        } => {
            let crafts_per_min = 60.0 / craft_time_secs;
            Building::ItemProducer(ItemProducer {
                key,
                name,
                power_consumption,
                craft_time_secs,
                output: ItemRate::new(output.item, output.amount * crafts_per_min),
            })
        }
        BuildingDoc::ResourceExtractor {
            key,
            name,
            power_consumption,
            extraction_rate,
            allowed_resources,
        } => Building::ResourceExtractor(ResourceExtractor {
            key,
            name,
            power_consumption,
            extraction_rate,
            allowed_resources,
        }),
        BuildingDoc::ResourceWell {
            key,
            name,
            power_consumption,
            extraction_rate,
            allowed_resources,
        } => Building::ResourceWell(ResourceWell {
            key,
            name,
            power_consumption,
            extraction_rate,
            allowed_resources,
        }),
    }
}
