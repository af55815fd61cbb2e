//! Cross-crate scenario tests: database document → stores → edits.
//!
//! These walk the same paths the planner UI does: inject a database
//! snapshot, build factories from it, and edit them through the store API.

use planforge_game::GameDatabase;
use planforge_store::{
    DEFAULT_FACTORY_NAME, FactoriesStore, GameDatabaseStore, LoadStatus, OutputKind,
};

use planforge_game::test_utils::fixture_db;

// ===========================================================================
// Default-factory construction
// ===========================================================================

#[test]
fn default_factory_enables_exactly_the_base_recipes() {
    let json = r#"{
        "recipes": [
            {
                "key": "A", "name": "Recipe A",
                "inputs": [{"item": "x", "amount": 1.0}],
                "outputs": [{"item": "y", "amount": 1.0}],
                "craftTimeSecs": 1.0,
                "building": "b"
            },
            {
                "key": "B", "name": "Recipe B", "alternate": true,
                "inputs": [{"item": "x", "amount": 1.0}],
                "outputs": [{"item": "y", "amount": 2.0}],
                "craftTimeSecs": 1.0,
                "building": "b"
            }
        ]
    }"#;
    let db = GameDatabase::from_json(json).unwrap();

    let store = FactoriesStore::new(&db);
    let factory = store.active_factory().unwrap();

    assert_eq!(factory.enabled_recipes, vec!["A".to_string()]);
}

#[test]
fn default_factory_before_load_sees_the_empty_database() {
    // The startup race: building a factory before the fetch resolves.
    let db_store = GameDatabaseStore::new();
    assert_eq!(db_store.status(), LoadStatus::NotStarted);

    let factories = FactoriesStore::new(&db_store.snapshot());
    let factory = factories.active_factory().unwrap();

    assert!(factory.enabled_recipes.is_empty());
    assert!(factory.resource_limits.is_empty());
    assert_eq!(factory.name, DEFAULT_FACTORY_NAME);
}

#[test]
fn factories_built_after_load_see_the_loaded_database() {
    let db_store = GameDatabaseStore::new();
    db_store.set_state(fixture_db());
    assert_eq!(db_store.status(), LoadStatus::Ready);

    // The continuation path: construct only once the store is ready.
    let factories = FactoriesStore::new(&db_store.snapshot());
    let factory = factories.active_factory().unwrap();

    assert!(!factory.enabled_recipes.is_empty());
    assert_eq!(factory.resource_limits["Desc_OreIron_C"], 70380.0);
}

// ===========================================================================
// Resource-limit scenario
// ===========================================================================

#[test]
fn resource_limit_override_stays_per_factory() {
    let json = r#"{
        "items": [
            {"key": "Iron Ore", "name": "Iron Ore", "resource": true, "state": "solid"}
        ],
        "resourceLimits": {"Iron Ore": 120.0}
    }"#;
    let db = GameDatabase::from_json(json).unwrap();

    let mut store = FactoriesStore::new(&db);
    store.add_factory(&db);

    assert_eq!(store.factory(0).unwrap().resource_limits["Iron Ore"], 120.0);

    store.set_resource_limit(0, "Iron Ore", 60.0).unwrap();

    assert_eq!(store.factory(0).unwrap().resource_limits["Iron Ore"], 60.0);
    assert_eq!(store.factory(1).unwrap().resource_limits["Iron Ore"], 120.0);
}

// ===========================================================================
// Factory list shape
// ===========================================================================

#[test]
fn add_add_remove_leaves_the_second_factory() {
    let db = fixture_db();
    let mut store = FactoriesStore::empty();
    store.add_factory(&db);
    let f2 = store.add_factory(&db);

    store.remove_factory(0).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.factory(0).unwrap().id, f2);
}

#[test]
fn tab_order_survives_middle_removal() {
    let db = fixture_db();
    let mut store = FactoriesStore::empty();
    let ids: Vec<_> = (0..4).map(|_| store.add_factory(&db)).collect();

    store.remove_factory(1).unwrap();

    let remaining: Vec<_> = store.factories().iter().map(|f| f.id).collect();
    assert_eq!(remaining, vec![ids[0], ids[2], ids[3]]);
}

// ===========================================================================
// A full editing session
// ===========================================================================

#[test]
fn editing_session_round_trip() {
    let db = fixture_db();
    let mut store = FactoriesStore::new(&db);

    // Feed the factory water from outside, target 30 plates/min, and also
    // maximize ingots.
    store.add_input(0).unwrap();
    store
        .update_input_item(0, 0, Some("Desc_Water_C".to_string()))
        .unwrap();
    store.update_input_amount(0, 0, 240.0).unwrap();

    store
        .update_output_item(0, 0, Some("Desc_IronPlate_C".to_string()))
        .unwrap();
    store.update_output_amount(0, 0, 30.0).unwrap();

    store.add_output(0).unwrap();
    store
        .update_output_item(0, 1, Some("Desc_IronIngot_C".to_string()))
        .unwrap();
    store.update_output_kind(0, 1, OutputKind::Maximize).unwrap();

    // Opt into the alternate recipe the defaults excluded.
    store
        .enable_recipe(0, "Recipe_Alternate_PureIronIngot_C")
        .unwrap();

    // Duplicate the configured factory as a starting point for a second
    // one, then tighten its iron budget.
    let clone_id = store.clone_factory(0).unwrap();
    store.set_resource_limit(1, "Desc_OreIron_C", 480.0).unwrap();
    store.set_active_factory(clone_id);

    let original = store.factory(0).unwrap();
    let clone = store.active_factory().unwrap();

    assert_eq!(clone.inputs, original.inputs);
    assert_eq!(clone.outputs, original.outputs);
    assert!(clone.is_recipe_enabled("Recipe_Alternate_PureIronIngot_C"));
    assert_eq!(clone.resource_limits["Desc_OreIron_C"], 480.0);
    assert_eq!(original.resource_limits["Desc_OreIron_C"], 70380.0);
}
