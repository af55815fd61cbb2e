//! One-shot HTTP load of the game database document.
//!
//! The backend serves the full database at `GET {base_url}/api/1/database`.
//! [`DatabaseClient::load_into`] is the load continuation: it drives the
//! store's status transitions (loading → ready/failed) so dependents can
//! build default factories only once the data is actually there. There are
//! no retries; a failed load leaves the previous snapshot intact and the
//! failure recorded.

use planforge_game::{DatabaseParseError, GameDatabase};
use planforge_store::GameDatabaseStore;

/// Path of the database document, relative to the configured base URL.
pub const DATABASE_PATH: &str = "/api/1/database";

/// Why a database load failed. Network transport, a non-success HTTP
/// status, and a payload that does not parse are distinct cases.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseLoadError {
    #[error("network failure fetching game database: {0}")]
    Network(#[from] reqwest::Error),

    #[error("backend returned HTTP {code} for the database request")]
    Status { code: u16 },

    #[error(transparent)]
    MalformedPayload(#[from] DatabaseParseError),
}

/// Fetches the database document from the backend.
///
/// `base_url` is supplied by the surrounding application configuration
/// (build-time or environment); the client only appends [`DATABASE_PATH`].
#[derive(Debug, Clone)]
pub struct DatabaseClient {
    base_url: String,
    http: reqwest::Client,
}

impl DatabaseClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// The full URL the database is fetched from.
    pub fn database_url(&self) -> String {
        format!("{}{}", self.base_url, DATABASE_PATH)
    }

    /// Fetch and index the database document.
    pub async fn fetch_database(&self) -> Result<GameDatabase, DatabaseLoadError> {
        let url = self.database_url();
        tracing::debug!(%url, "fetching game database");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DatabaseLoadError::Status {
                code: status.as_u16(),
            });
        }

        let payload = response.text().await?;
        Ok(GameDatabase::from_json(&payload)?)
    }

    /// Fetch the database and hand the outcome to `store`: `set_state` on
    /// success, `fail_load` on failure. The error is also returned so the
    /// caller can decide whether to surface it.
    pub async fn load_into(&self, store: &GameDatabaseStore) -> Result<(), DatabaseLoadError> {
        store.begin_load();
        match self.fetch_database().await {
            Ok(db) => {
                store.set_state(db);
                Ok(())
            }
            Err(err) => {
                store.fail_load(err.to_string());
                Err(err)
            }
        }
    }
}
