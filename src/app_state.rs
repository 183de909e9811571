use std::sync::Arc;
use crate::{
    config::DatabaseConfig,
    database::{ReviewDatabase, ReviewStore},
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReviewStore>,
}

impl AppState {
    /// Wrap an already-initialized store, e.g. an in-memory one in tests.
    pub fn new(store: Arc<dyn ReviewStore>) -> Self {
        Self { store }
    }

    /// Connect to the configured database and make sure the table exists.
    pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<(Self, Arc<ReviewDatabase>)> {
        let database = Arc::new(ReviewDatabase::connect(config).await?);
        database.initialize().await?;

        Ok((Self::new(database.clone()), database))
    }
}
