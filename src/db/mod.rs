//! Table storage behind repository traits.
//!
//! Routes only see `ArtistRepository` / `AlbumRepository`, so they run the
//! same against Postgres and against the in-memory tables used in tests.

use crate::models;
use async_trait::async_trait;
use std::sync::Arc;

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error("row {0} not found")]
    RowNotFound(i32),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait ArtistRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<models::Artist>, RepositoryError>;

    async fn fetch(&self, id: i32) -> Result<Option<models::Artist>, RepositoryError>;

    /// Stores a new row. The incoming `id` is ignored and the generated one returned.
    async fn insert(&self, artist: models::Artist) -> Result<models::Artist, RepositoryError>;

    async fn update(&self, artist: models::Artist) -> Result<models::Artist, RepositoryError>;

    /// Returns `false` when there was no row to delete.
    async fn delete(&self, id: i32) -> Result<bool, RepositoryError>;
}

#[async_trait]
pub trait AlbumRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<models::Album>, RepositoryError>;

    async fn fetch(&self, id: i32) -> Result<Option<models::Album>, RepositoryError>;

    /// Stores a new row. Fails with `UniqueViolation` when the title is taken.
    async fn insert(&self, album: models::Album) -> Result<models::Album, RepositoryError>;

    async fn update(&self, album: models::Album) -> Result<models::Album, RepositoryError>;

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError>;
}

/// The pair of repositories the HTTP layer is started with.
#[derive(Clone)]
pub struct Repositories {
    pub artists: Arc<dyn ArtistRepository>,
    pub albums: Arc<dyn AlbumRepository>,
}

impl Repositories {
    pub fn postgres(pool: sqlx::PgPool) -> Self {
        let store = Arc::new(PgStore::new(pool));
        Self {
            artists: store.clone(),
            albums: store,
        }
    }

    pub fn memory() -> Self {
        Self::from_memory(Arc::new(MemoryStore::default()))
    }

    pub fn from_memory(store: Arc<MemoryStore>) -> Self {
        Self {
            artists: store.clone(),
            albums: store,
        }
    }
}
