//! A single user-authored factory configuration.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use planforge_game::GameDatabase;

/// Placeholder name for a freshly created factory.
pub const DEFAULT_FACTORY_NAME: &str = "New Factory";

/// Placeholder rate for the default output row, items per minute.
pub const DEFAULT_OUTPUT_RATE: f64 = 10.0;

/// Identifies a factory for the lifetime of a [`crate::FactoriesStore`].
/// Allocated by the store; stable across list reordering and removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FactoryId(pub u64);

impl fmt::Display for FactoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "factory-{}", self.0)
    }
}

/// One row of the factory's input list. `item: None` is an unset
/// placeholder row the user has not filled in yet.
#[derive(Debug, Clone, PartialEq)]
pub struct FactoryInput {
    pub item: Option<String>,
    /// Items per minute supplied from outside the factory.
    pub amount: f64,
}

impl Default for FactoryInput {
    fn default() -> Self {
        Self {
            item: None,
            amount: 0.0,
        }
    }
}

/// How an output target is interpreted by the (future) solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputKind {
    /// Produce a fixed rate; `amount` is meaningful.
    #[default]
    PerMinute,
    /// Produce as much as resource limits allow; `amount` is ignored.
    Maximize,
}

/// One row of the factory's output list.
#[derive(Debug, Clone, PartialEq)]
pub struct FactoryOutput {
    pub item: Option<String>,
    pub kind: OutputKind,
    pub amount: f64,
}

impl Default for FactoryOutput {
    fn default() -> Self {
        Self {
            item: None,
            kind: OutputKind::PerMinute,
            amount: DEFAULT_OUTPUT_RATE,
        }
    }
}

/// A factory configuration: what goes in, what must come out, which
/// recipes the solver may use, and how much of each resource it may draw.
///
/// Resource limits are held behind an `Arc` and updated copy-on-write: a
/// captured snapshot of the map never changes after the fact.
#[derive(Debug, Clone, PartialEq)]
pub struct FactoryState {
    pub id: FactoryId,
    pub name: String,
    pub inputs: Vec<FactoryInput>,
    pub resource_limits: Arc<HashMap<String, f64>>,
    pub outputs: Vec<FactoryOutput>,
    /// Enabled recipe keys in insertion order. Set semantics: adds through
    /// the store deduplicate, removes drop every occurrence.
    pub enabled_recipes: Vec<String>,
}

impl FactoryState {
    /// Default construction: limits seeded from the database defaults, one
    /// placeholder per-minute output, every non-alternate recipe enabled.
    ///
    /// Against an empty (pre-load) database this yields empty limits and
    /// recipes; run it after the load resolves to get a useful factory.
    pub fn with_defaults(id: FactoryId, db: &GameDatabase) -> Self {
        Self {
            id,
            name: DEFAULT_FACTORY_NAME.to_string(),
            inputs: Vec::new(),
            resource_limits: Arc::new(db.resource_limits().clone()),
            outputs: vec![FactoryOutput::default()],
            enabled_recipes: db.base_recipe_keys(),
        }
    }

    /// A deep copy under a fresh id. Nested lists and the limit map are
    /// duplicated so the clone shares no mutable state with the original.
    pub fn duplicated(&self, id: FactoryId) -> Self {
        Self {
            id,
            name: self.name.clone(),
            inputs: self.inputs.clone(),
            resource_limits: Arc::new((*self.resource_limits).clone()),
            outputs: self.outputs.clone(),
            enabled_recipes: self.enabled_recipes.clone(),
        }
    }

    /// Copy-on-write single-entry update: builds a new map with the entry
    /// added or overwritten and swaps it in. Anyone holding the old `Arc`
    /// keeps seeing the old map.
    pub(crate) fn set_resource_limit(&mut self, item_key: &str, limit: f64) {
        let mut next = (*self.resource_limits).clone();
        next.insert(item_key.to_string(), limit);
        self.resource_limits = Arc::new(next);
    }

    pub(crate) fn replace_resource_limits(&mut self, limits: HashMap<String, f64>) {
        self.resource_limits = Arc::new(limits);
    }

    pub(crate) fn enable_recipe(&mut self, key: &str) {
        if !self.enabled_recipes.iter().any(|k| k == key) {
            self.enabled_recipes.push(key.to_string());
        }
    }

    pub(crate) fn disable_recipe(&mut self, key: &str) {
        self.enabled_recipes.retain(|k| k != key);
    }

    pub fn is_recipe_enabled(&self, key: &str) -> bool {
        self.enabled_recipes.iter().any(|k| k == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planforge_game::test_utils::fixture_db;

    #[test]
    fn defaults_seed_limits_and_base_recipes() {
        let db = fixture_db();
        let f = FactoryState::with_defaults(FactoryId(1), &db);

        assert_eq!(f.name, DEFAULT_FACTORY_NAME);
        assert!(f.inputs.is_empty());
        assert_eq!(*f.resource_limits, *db.resource_limits());
        assert_eq!(f.outputs.len(), 1);
        assert_eq!(f.outputs[0].kind, OutputKind::PerMinute);
        assert_eq!(f.outputs[0].amount, DEFAULT_OUTPUT_RATE);
        assert!(f.outputs[0].item.is_none());
        assert!(f.is_recipe_enabled("Recipe_IngotIron_C"));
        assert!(!f.is_recipe_enabled("Recipe_Alternate_PureIronIngot_C"));
    }

    #[test]
    fn defaults_against_empty_database_are_empty() {
        let f = FactoryState::with_defaults(FactoryId(1), &GameDatabase::default());
        assert!(f.resource_limits.is_empty());
        assert!(f.enabled_recipes.is_empty());
        // The placeholder output row is still there.
        assert_eq!(f.outputs.len(), 1);
    }

    #[test]
    fn duplicated_gets_fresh_id_and_equal_fields() {
        let db = fixture_db();
        let original = FactoryState::with_defaults(FactoryId(1), &db);
        let copy = original.duplicated(FactoryId(2));

        assert_ne!(copy.id, original.id);
        assert_eq!(copy.name, original.name);
        assert_eq!(copy.inputs, original.inputs);
        assert_eq!(copy.outputs, original.outputs);
        assert_eq!(copy.enabled_recipes, original.enabled_recipes);
        assert_eq!(*copy.resource_limits, *original.resource_limits);
        // Deep copy: the maps are distinct allocations.
        assert!(!Arc::ptr_eq(&copy.resource_limits, &original.resource_limits));
    }

    #[test]
    fn set_resource_limit_is_copy_on_write() {
        let db = fixture_db();
        let mut f = FactoryState::with_defaults(FactoryId(1), &db);
        let captured = Arc::clone(&f.resource_limits);

        f.set_resource_limit("Desc_OreIron_C", 60.0);

        assert_eq!(captured["Desc_OreIron_C"], 70380.0);
        assert_eq!(f.resource_limits["Desc_OreIron_C"], 60.0);
    }

    #[test]
    fn enable_recipe_deduplicates() {
        let db = fixture_db();
        let mut f = FactoryState::with_defaults(FactoryId(1), &db);
        let before = f.enabled_recipes.clone();
        f.enable_recipe("Recipe_IngotIron_C");
        assert_eq!(f.enabled_recipes, before);
    }

    #[test]
    fn disable_recipe_removes_every_occurrence() {
        let mut f = FactoryState::with_defaults(FactoryId(1), &GameDatabase::default());
        // Duplicates can only appear through direct manipulation.
        f.enabled_recipes = vec!["a".into(), "b".into(), "a".into()];
        f.disable_recipe("a");
        assert_eq!(f.enabled_recipes, vec!["b".to_string()]);
    }
}
