//! App Context

use std::sync::Arc;

use secrecy::SecretString;
use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::{
    auth::AccessGate,
    database,
    domain::products::{
        CatalogService, ProductsService, memory::MemoryProductsRepository,
        repository::{PgProductsRepository, ProductsRepository},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migration(#[source] MigrateError),

    #[error("DATABASE_URL is required for postgres storage")]
    MissingDatabaseUrl,
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub access: Arc<AccessGate>,
}

impl AppContext {
    /// Build application context from a database URL, applying pending migrations.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting to the database or migrating it fails.
    pub async fn from_database_url(url: &str, api_key: SecretString) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migration)?;

        Ok(Self::from_repository(
            Arc::new(PgProductsRepository::new(pool)),
            api_key,
        ))
    }

    /// Build application context over a process-local store.
    #[must_use]
    pub fn in_memory(api_key: SecretString) -> Self {
        Self::from_repository(Arc::new(MemoryProductsRepository::new()), api_key)
    }

    #[must_use]
    pub fn from_repository(repository: Arc<dyn ProductsRepository>, api_key: SecretString) -> Self {
        Self {
            products: Arc::new(CatalogService::new(repository)),
            access: Arc::new(AccessGate::new(api_key)),
        }
    }
}
