//! The shared, read-mostly game database snapshot.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use planforge_game::GameDatabase;

/// Where the one-shot database load currently stands. Exposed alongside
/// the snapshot so consumers can tell "empty because not loaded yet" from
/// "empty because the load failed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    NotStarted,
    Loading,
    Ready,
    Failed,
}

#[derive(Debug)]
struct Inner {
    snapshot: Arc<GameDatabase>,
    status: LoadStatus,
    last_error: Option<String>,
}

/// Holds the single shared snapshot of game reference data.
///
/// Readers get an `Arc` clone; replacing the snapshot is one atomic
/// assignment, so a reader concurrent with a reload observes either the
/// old or the new database, never a partially-updated one. Constructed
/// explicitly and passed where needed — there is no global instance.
#[derive(Debug)]
pub struct GameDatabaseStore {
    inner: RwLock<Inner>,
}

impl GameDatabaseStore {
    /// An empty store: empty database, load not started.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                snapshot: Arc::new(GameDatabase::default()),
                status: LoadStatus::NotStarted,
                last_error: None,
            }),
        }
    }

    /// The current database. Cheap; clones an `Arc`.
    pub fn snapshot(&self) -> Arc<GameDatabase> {
        Arc::clone(&self.read().snapshot)
    }

    pub fn status(&self) -> LoadStatus {
        self.read().status
    }

    /// Message from the most recent failed load, if any.
    pub fn last_error(&self) -> Option<String> {
        self.read().last_error.clone()
    }

    /// Mark the one-shot load as in flight.
    pub fn begin_load(&self) {
        tracing::debug!("game database load started");
        self.write().status = LoadStatus::Loading;
    }

    /// Replace the snapshot wholesale and mark the store ready. Also the
    /// fixture injection point for tests.
    pub fn set_state(&self, db: GameDatabase) {
        tracing::debug!(
            items = db.item_count(),
            recipes = db.recipe_count(),
            "game database replaced"
        );
        let mut inner = self.write();
        inner.snapshot = Arc::new(db);
        inner.status = LoadStatus::Ready;
        inner.last_error = None;
    }

    /// Record a failed load. The previous snapshot is left intact so the
    /// UI keeps working with whatever it had.
    pub fn fail_load(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(error = %message, "game database load failed");
        let mut inner = self.write();
        inner.status = LoadStatus::Failed;
        inner.last_error = Some(message);
    }

    // Lock poisoning only happens if a writer panicked mid-assignment;
    // the state is still a coherent snapshot, so recover and continue.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        match self.inner.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for GameDatabaseStore {
    fn default() -> Self {
        Self::new()
    }
}
