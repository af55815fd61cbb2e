//! The ordered list of factory configurations and the active selection.

use std::collections::HashMap;

use planforge_game::GameDatabase;

use crate::error::StoreError;
use crate::factory::{FactoryId, FactoryInput, FactoryOutput, FactoryState, OutputKind};

/// Owns every [`FactoryState`] and the active-factory selection.
///
/// List order is display/tab order and is meaningful; removals splice,
/// they never swap. All mutation goes through these methods — components
/// read slices and dispatch operations, nothing mutates state directly.
///
/// Every index-addressed operation validates the index and returns
/// [`StoreError::IndexOutOfRange`] instead of panicking or silently
/// no-opping.
#[derive(Debug)]
pub struct FactoriesStore {
    factories: Vec<FactoryState>,
    active_factory_id: Option<FactoryId>,
    next_id: u64,
}

impl FactoriesStore {
    /// A store seeded with one default factory built from `db`, which is
    /// also the active factory. Run this after the database load resolves;
    /// an empty `db` gives the factory empty limits and recipes.
    pub fn new(db: &GameDatabase) -> Self {
        let mut store = Self::empty();
        let id = store.add_factory(db);
        store.active_factory_id = Some(id);
        store
    }

    /// A store with no factories and no active selection.
    pub fn empty() -> Self {
        Self {
            factories: Vec::new(),
            active_factory_id: None,
            next_id: 0,
        }
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    pub fn factories(&self) -> &[FactoryState] {
        &self.factories
    }

    pub fn factory(&self, index: usize) -> Option<&FactoryState> {
        self.factories.get(index)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    pub fn active_factory_id(&self) -> Option<FactoryId> {
        self.active_factory_id
    }

    /// The active factory, if the active id currently resolves to one.
    /// The id may dangle transiently (e.g. right after a removal).
    pub fn active_factory(&self) -> Option<&FactoryState> {
        let id = self.active_factory_id?;
        self.factories.iter().find(|f| f.id == id)
    }

    // -----------------------------------------------------------------------
    // Factory level
    // -----------------------------------------------------------------------

    /// Append a default factory built from `db`. Returns its id.
    pub fn add_factory(&mut self, db: &GameDatabase) -> FactoryId {
        let id = self.allocate_id();
        tracing::debug!(%id, "factory added");
        self.factories.push(FactoryState::with_defaults(id, db));
        id
    }

    /// Deep-copy the factory at `index` and append the copy. The clone
    /// shares no mutable state with the original.
    pub fn clone_factory(&mut self, index: usize) -> Result<FactoryId, StoreError> {
        check_index("factory", index, self.factories.len())?;
        let id = self.allocate_id();
        let copy = self.factories[index].duplicated(id);
        tracing::debug!(%id, from = index, "factory cloned");
        self.factories.push(copy);
        Ok(id)
    }

    /// Remove the factory at `index`, preserving the order of the rest.
    /// The active id is left alone even if it now dangles.
    pub fn remove_factory(&mut self, index: usize) -> Result<(), StoreError> {
        check_index("factory", index, self.factories.len())?;
        let removed = self.factories.remove(index);
        tracing::debug!(id = %removed.id, "factory removed");
        Ok(())
    }

    /// Set the active factory. Not validated against the list — callers
    /// own that invariant.
    pub fn set_active_factory(&mut self, id: FactoryId) {
        self.active_factory_id = Some(id);
    }

    // -----------------------------------------------------------------------
    // Input list
    // -----------------------------------------------------------------------

    pub fn add_input(&mut self, factory: usize) -> Result<(), StoreError> {
        self.factory_mut(factory)?
            .inputs
            .push(FactoryInput::default());
        Ok(())
    }

    pub fn update_input_item(
        &mut self,
        factory: usize,
        input: usize,
        item: Option<String>,
    ) -> Result<(), StoreError> {
        let f = self.factory_mut(factory)?;
        let len = f.inputs.len();
        let row = f.inputs.get_mut(input).ok_or(StoreError::IndexOutOfRange {
            list: "input",
            index: input,
            len,
        })?;
        row.item = item;
        Ok(())
    }

    pub fn update_input_amount(
        &mut self,
        factory: usize,
        input: usize,
        amount: f64,
    ) -> Result<(), StoreError> {
        let f = self.factory_mut(factory)?;
        let len = f.inputs.len();
        let row = f.inputs.get_mut(input).ok_or(StoreError::IndexOutOfRange {
            list: "input",
            index: input,
            len,
        })?;
        row.amount = amount;
        Ok(())
    }

    /// Index-preserving splice; rows after `input` shift left.
    pub fn remove_input(&mut self, factory: usize, input: usize) -> Result<(), StoreError> {
        let f = self.factory_mut(factory)?;
        check_index("input", input, f.inputs.len())?;
        f.inputs.remove(input);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Output list
    // -----------------------------------------------------------------------

    pub fn add_output(&mut self, factory: usize) -> Result<(), StoreError> {
        self.factory_mut(factory)?
            .outputs
            .push(FactoryOutput::default());
        Ok(())
    }

    pub fn update_output_item(
        &mut self,
        factory: usize,
        output: usize,
        item: Option<String>,
    ) -> Result<(), StoreError> {
        let row = Self::output_mut(self.factory_mut(factory)?, output)?;
        row.item = item;
        Ok(())
    }

    pub fn update_output_kind(
        &mut self,
        factory: usize,
        output: usize,
        kind: OutputKind,
    ) -> Result<(), StoreError> {
        let row = Self::output_mut(self.factory_mut(factory)?, output)?;
        row.kind = kind;
        Ok(())
    }

    /// Only meaningful for [`OutputKind::PerMinute`] rows; stored either way.
    pub fn update_output_amount(
        &mut self,
        factory: usize,
        output: usize,
        amount: f64,
    ) -> Result<(), StoreError> {
        let row = Self::output_mut(self.factory_mut(factory)?, output)?;
        row.amount = amount;
        Ok(())
    }

    pub fn remove_output(&mut self, factory: usize, output: usize) -> Result<(), StoreError> {
        let f = self.factory_mut(factory)?;
        check_index("output", output, f.outputs.len())?;
        f.outputs.remove(output);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Resource limits
    // -----------------------------------------------------------------------

    /// Copy-on-write single-entry update; a previously captured map
    /// snapshot stays untouched.
    pub fn set_resource_limit(
        &mut self,
        factory: usize,
        item_key: &str,
        limit: f64,
    ) -> Result<(), StoreError> {
        self.factory_mut(factory)?.set_resource_limit(item_key, limit);
        Ok(())
    }

    /// Wholesale replacement of the factory's limit map.
    pub fn replace_resource_limits(
        &mut self,
        factory: usize,
        limits: HashMap<String, f64>,
    ) -> Result<(), StoreError> {
        self.factory_mut(factory)?.replace_resource_limits(limits);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Enabled recipes
    // -----------------------------------------------------------------------

    /// Enable one recipe. Already-enabled keys are left alone (set
    /// semantics, insertion order preserved).
    pub fn enable_recipe(&mut self, factory: usize, key: &str) -> Result<(), StoreError> {
        self.factory_mut(factory)?.enable_recipe(key);
        Ok(())
    }

    pub fn enable_recipes<I, S>(&mut self, factory: usize, keys: I) -> Result<(), StoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let f = self.factory_mut(factory)?;
        for key in keys {
            f.enable_recipe(key.as_ref());
        }
        Ok(())
    }

    /// Disable one recipe, dropping every occurrence of the key.
    pub fn disable_recipe(&mut self, factory: usize, key: &str) -> Result<(), StoreError> {
        self.factory_mut(factory)?.disable_recipe(key);
        Ok(())
    }

    pub fn disable_recipes<I, S>(&mut self, factory: usize, keys: I) -> Result<(), StoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let f = self.factory_mut(factory)?;
        for key in keys {
            f.disable_recipe(key.as_ref());
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn allocate_id(&mut self) -> FactoryId {
        let id = FactoryId(self.next_id);
        self.next_id += 1;
        id
    }

    fn factory_mut(&mut self, index: usize) -> Result<&mut FactoryState, StoreError> {
        let len = self.factories.len();
        self.factories
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange {
                list: "factory",
                index,
                len,
            })
    }

    fn output_mut(f: &mut FactoryState, index: usize) -> Result<&mut FactoryOutput, StoreError> {
        let len = f.outputs.len();
        f.outputs.get_mut(index).ok_or(StoreError::IndexOutOfRange {
            list: "output",
            index,
            len,
        })
    }
}

fn check_index(list: &'static str, index: usize, len: usize) -> Result<(), StoreError> {
    if index < len {
        Ok(())
    } else {
        Err(StoreError::IndexOutOfRange { list, index, len })
    }
}
