use crate::{config::Settings, error::ApiError};
use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};

/// Handle to the backing document store.
///
/// Constructed once at startup and injected into the repositories. When no
/// connection string is configured, or the configured URI fails to parse,
/// the handle is degraded: every data operation fails with
/// [`ApiError::StoreUnavailable`] instead of aborting the process.
#[derive(Clone)]
pub struct Store {
    db: Option<Database>,
}

impl Store {
    pub async fn connect(settings: &Settings) -> Self {
        let Some(url) = settings.database_url.as_deref() else {
            tracing::warn!("DATABASE_URL not set, store operations will be unavailable");
            return Self { db: None };
        };

        match Client::with_uri_str(url).await {
            Ok(client) => {
                let db = client.database(&settings.database_name);
                tracing::info!(database = %settings.database_name, "document store configured");
                Self { db: Some(db) }
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    "invalid store connection string, store operations will be unavailable"
                );
                Self { db: None }
            }
        }
    }

    /// A handle with no backing store, for degraded startup and tests.
    pub fn unavailable() -> Self {
        Self { db: None }
    }

    pub fn is_available(&self) -> bool {
        self.db.is_some()
    }

    /// Typed accessor for a named collection.
    pub fn collection<T>(&self, name: &str) -> Result<Collection<T>, ApiError> {
        self.db
            .as_ref()
            .map(|db| db.collection::<T>(name))
            .ok_or(ApiError::StoreUnavailable)
    }

    /// One round trip to the server; used by the diagnostic endpoint.
    pub async fn ping(&self) -> Result<(), ApiError> {
        let db = self.db.as_ref().ok_or(ApiError::StoreUnavailable)?;
        db.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }

    pub async fn collection_names(&self) -> Result<Vec<String>, ApiError> {
        let db = self.db.as_ref().ok_or(ApiError::StoreUnavailable)?;
        Ok(db.list_collection_names(None).await?)
    }
}
