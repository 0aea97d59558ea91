use super::{AlbumRepository, ArtistRepository, RepositoryError};
use crate::models;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Process-local tables with the same contract as the Postgres schema:
/// serial ids that are never reused and unique album titles.
#[derive(Default)]
pub struct MemoryStore {
    artists: RwLock<Table<models::Artist>>,
    albums: RwLock<Table<models::Album>>,
}

struct Table<T> {
    last_id: i32,
    rows: BTreeMap<i32, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            last_id: 0,
            rows: BTreeMap::new(),
        }
    }
}

impl<T: Clone> Table<T> {
    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }

    fn replace(&mut self, id: i32, row: T) -> Result<T, RepositoryError> {
        match self.rows.get_mut(&id) {
            Some(stored) => {
                *stored = row.clone();
                Ok(row)
            }
            None => Err(RepositoryError::RowNotFound(id)),
        }
    }
}

#[async_trait]
impl ArtistRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<models::Artist>, RepositoryError> {
        Ok(self.artists.read().await.rows.values().cloned().collect())
    }

    async fn fetch(&self, id: i32) -> Result<Option<models::Artist>, RepositoryError> {
        Ok(self.artists.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, mut artist: models::Artist) -> Result<models::Artist, RepositoryError> {
        let mut table = self.artists.write().await;
        artist.id = table.next_id();
        table.rows.insert(artist.id, artist.clone());
        Ok(artist)
    }

    async fn update(&self, artist: models::Artist) -> Result<models::Artist, RepositoryError> {
        self.artists.write().await.replace(artist.id, artist)
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        Ok(self.artists.write().await.rows.remove(&id).is_some())
    }
}

fn title_taken(table: &Table<models::Album>, title: &str, except: Option<i32>) -> bool {
    table
        .rows
        .values()
        .any(|album| album.title == title && Some(album.id) != except)
}

#[async_trait]
impl AlbumRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<models::Album>, RepositoryError> {
        Ok(self.albums.read().await.rows.values().cloned().collect())
    }

    async fn fetch(&self, id: i32) -> Result<Option<models::Album>, RepositoryError> {
        Ok(self.albums.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, mut album: models::Album) -> Result<models::Album, RepositoryError> {
        let mut table = self.albums.write().await;
        if title_taken(&table, &album.title, None) {
            return Err(RepositoryError::UniqueViolation(format!(
                "album title {:?} already exists",
                album.title
            )));
        }

        album.id = table.next_id();
        table.rows.insert(album.id, album.clone());
        Ok(album)
    }

    async fn update(&self, album: models::Album) -> Result<models::Album, RepositoryError> {
        let mut table = self.albums.write().await;
        if title_taken(&table, &album.title, Some(album.id)) {
            return Err(RepositoryError::UniqueViolation(format!(
                "album title {:?} already exists",
                album.title
            )));
        }

        table.replace(album.id, album)
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        Ok(self.albums.write().await.rows.remove(&id).is_some())
    }
}
