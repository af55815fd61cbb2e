//! Shared database fixture for tests across the workspace.

use crate::database::GameDatabase;

/// A small but fully-formed database document: iron and copper chains,
/// one alternate recipe, one extractor, one generator.
pub const FIXTURE_JSON: &str = r#"{
    "items": [
        {"key": "Desc_OreIron_C", "name": "Iron Ore", "resource": true, "state": "solid", "sinkPoints": 1},
        {"key": "Desc_IronIngot_C", "name": "Iron Ingot", "state": "solid", "sinkPoints": 2},
        {"key": "Desc_IronPlate_C", "name": "Iron Plate", "state": "solid", "sinkPoints": 6},
        {"key": "Desc_OreCopper_C", "name": "Copper Ore", "resource": true, "state": "solid", "sinkPoints": 3},
        {"key": "Desc_Water_C", "name": "Water", "resource": true, "state": "liquid"},
        {"key": "Desc_Coal_C", "name": "Coal", "resource": true, "state": "solid", "energyMJ": 300.0, "sinkPoints": 3}
    ],
    "buildings": [
        {
            "key": "Build_SmelterMk1_C", "name": "Smelter", "type": "manufacturer",
            "powerConsumption": {"type": "fixed", "valueMw": 4.0, "exponent": 1.321929}
        },
        {
            "key": "Build_ConstructorMk1_C", "name": "Constructor", "type": "manufacturer",
            "powerConsumption": {"type": "fixed", "valueMw": 4.0, "exponent": 1.321929}
        },
        {
            "key": "Build_MinerMk1_C", "name": "Miner Mk.1", "type": "resource_extractor",
            "powerConsumption": {"type": "fixed", "valueMw": 5.0, "exponent": 1.321929},
            "extractionRate": 60.0,
            "allowedResources": ["Desc_OreIron_C", "Desc_OreCopper_C", "Desc_Coal_C"]
        },
        {
            "key": "Build_GeneratorCoal_C", "name": "Coal Generator", "type": "power_generator",
            "powerConsumption": {"type": "fixed", "valueMw": 0.0, "exponent": 1.321929},
            "powerProductionMw": 75.0
        }
    ],
    "recipes": [
        {
            "key": "Recipe_IngotIron_C", "name": "Iron Ingot",
            "inputs": [{"item": "Desc_OreIron_C", "amount": 1.0}],
            "outputs": [{"item": "Desc_IronIngot_C", "amount": 1.0}],
            "craftTimeSecs": 2.0,
            "building": "Build_SmelterMk1_C"
        },
        {
            "key": "Recipe_IronPlate_C", "name": "Iron Plate",
            "inputs": [{"item": "Desc_IronIngot_C", "amount": 3.0}],
            "outputs": [{"item": "Desc_IronPlate_C", "amount": 2.0}],
            "craftTimeSecs": 6.0,
            "building": "Build_ConstructorMk1_C"
        },
        {
            "key": "Recipe_Alternate_PureIronIngot_C", "name": "Pure Iron Ingot",
            "alternate": true,
            "inputs": [
                {"item": "Desc_OreIron_C", "amount": 7.0},
                {"item": "Desc_Water_C", "amount": 4.0}
            ],
            "outputs": [{"item": "Desc_IronIngot_C", "amount": 13.0}],
            "craftTimeSecs": 12.0,
            "building": "Build_SmelterMk1_C"
        }
    ],
    "resourceLimits": {
        "Desc_OreIron_C": 70380.0,
        "Desc_OreCopper_C": 28860.0,
        "Desc_Coal_C": 30900.0,
        "Desc_Water_C": 9007199254740991.0
    }
}"#;

/// Parse [`FIXTURE_JSON`] into an indexed database.
pub fn fixture_db() -> GameDatabase {
    GameDatabase::from_json(FIXTURE_JSON).expect("fixture JSON must parse")
}
