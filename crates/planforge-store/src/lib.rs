//! State containers for the planner UI.
//!
//! Two cooperating stores, both explicitly constructed and passed by the
//! caller (`create → use → discard`, no global context):
//!
//! - [`GameDatabaseStore`] -- the shared read-mostly snapshot of game
//!   reference data plus its one-shot load status. The snapshot is
//!   replaced wholesale; readers never see a half-updated database.
//! - [`FactoriesStore`] -- the ordered list of user-authored
//!   [`FactoryState`] configurations and the active-factory selection,
//!   with narrow index-addressed mutation operations so UI rows re-render
//!   only for the paths they touch.
//!
//! All mutations are synchronous and run to completion; the only
//! asynchronous step in the system is the database fetch, which hands its
//! result to [`GameDatabaseStore::set_state`].

pub mod error;
pub mod factories;
pub mod factory;
pub mod game_db;

pub use error::StoreError;
pub use factories::FactoriesStore;
pub use factory::{
    DEFAULT_FACTORY_NAME, DEFAULT_OUTPUT_RATE, FactoryId, FactoryInput, FactoryOutput,
    FactoryState, OutputKind,
};
pub use game_db::{GameDatabaseStore, LoadStatus};
