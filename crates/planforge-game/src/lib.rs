//! Game reference data for the planner: items, buildings, recipes, and
//! default resource limits, indexed by key.
//!
//! The backend serves one JSON document (see [`schema::DatabaseDoc`]);
//! [`database::GameDatabase`] indexes it into key-addressed maps and
//! converts per-craft amounts into per-minute rates. Everything in this
//! crate is immutable once loaded — a reload replaces the database
//! wholesale.
//!
//! # Key Types
//!
//! - [`item::Item`] / [`item::ItemState`] -- item definitions.
//! - [`building::Building`] -- closed tagged union over the five building
//!   kinds, each carrying [`building::PowerConsumption`].
//! - [`recipe::Recipe`] -- per-minute crafting recipes with alternate flag
//!   and power range.
//! - [`database::GameDatabase`] -- the indexed, read-only database.

pub mod building;
pub mod database;
pub mod item;
pub mod recipe;
pub mod schema;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use building::{Building, PowerConsumption};
pub use database::{DatabaseParseError, GameDatabase};
pub use item::{Item, ItemState};
pub use recipe::{ItemRate, PowerRange, Recipe};
