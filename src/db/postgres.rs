use super::{AlbumRepository, ArtistRepository, RepositoryError};
use crate::models;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::Instrument;

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Runs a single-row delete in its own transaction, rolled back on failure.
    async fn delete_row(&self, table: &'static str, id: i32) -> Result<bool, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(|err| {
            tracing::error!("Failed to open transaction: {:?}", err);
            RepositoryError::from(err)
        })?;

        let sql = format!("DELETE FROM {table} WHERE id = $1");
        match sqlx::query::<sqlx::Postgres>(&sql)
            .bind(id)
            .execute(&mut *tx)
            .await
        {
            Ok(result) => {
                tx.commit().await?;
                Ok(result.rows_affected() > 0)
            }
            Err(err) => {
                tracing::error!("Failed to delete from {}: {:?}", table, err);
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!("Rollback failed: {:?}", rollback_err);
                }
                Err(err.into())
            }
        }
    }
}

fn map_write_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            RepositoryError::UniqueViolation(db_err.message().to_string())
        }
        err => {
            tracing::error!("Failed to execute query: {:?}", err);
            RepositoryError::Database(err)
        }
    }
}

#[async_trait]
impl ArtistRepository for PgStore {
    async fn list(&self) -> Result<Vec<models::Artist>, RepositoryError> {
        let query_span = tracing::info_span!("Fetch all artists.");
        sqlx::query_as::<_, models::Artist>("SELECT id, name FROM artists ORDER BY id")
            .fetch_all(&self.pool)
            .instrument(query_span)
            .await
            .map_err(|err| {
                tracing::error!("Failed to fetch artists, error: {:?}", err);
                err.into()
            })
    }

    async fn fetch(&self, id: i32) -> Result<Option<models::Artist>, RepositoryError> {
        tracing::info!("Fetch artist {}", id);
        sqlx::query_as::<_, models::Artist>("SELECT id, name FROM artists WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Failed to fetch artist, error: {:?}", err);
                err.into()
            })
    }

    async fn insert(&self, artist: models::Artist) -> Result<models::Artist, RepositoryError> {
        let query_span = tracing::info_span!("Saving new artist into the database");
        sqlx::query_as::<_, models::Artist>(
            "INSERT INTO artists (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&artist.name)
        .fetch_one(&self.pool)
        .instrument(query_span)
        .await
        .map_err(map_write_error)
    }

    async fn update(&self, artist: models::Artist) -> Result<models::Artist, RepositoryError> {
        let query_span = tracing::info_span!("Updating artist");
        sqlx::query_as::<_, models::Artist>(
            "UPDATE artists SET name = $2 WHERE id = $1 RETURNING id, name",
        )
        .bind(artist.id)
        .bind(&artist.name)
        .fetch_optional(&self.pool)
        .instrument(query_span)
        .await
        .map_err(map_write_error)?
        .ok_or(RepositoryError::RowNotFound(artist.id))
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        tracing::info!("Delete artist {}", id);
        self.delete_row("artists", id).await
    }
}

#[async_trait]
impl AlbumRepository for PgStore {
    async fn list(&self) -> Result<Vec<models::Album>, RepositoryError> {
        let query_span = tracing::info_span!("Fetch all albums.");
        sqlx::query_as::<_, models::Album>(
            "SELECT id, title, year, artist FROM albums ORDER BY id",
        )
        .fetch_all(&self.pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch albums, error: {:?}", err);
            err.into()
        })
    }

    async fn fetch(&self, id: i32) -> Result<Option<models::Album>, RepositoryError> {
        tracing::info!("Fetch album {}", id);
        sqlx::query_as::<_, models::Album>(
            "SELECT id, title, year, artist FROM albums WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch album, error: {:?}", err);
            err.into()
        })
    }

    async fn insert(&self, album: models::Album) -> Result<models::Album, RepositoryError> {
        let query_span = tracing::info_span!("Saving new album into the database");
        sqlx::query_as::<_, models::Album>(
            r#"
            INSERT INTO albums (title, year, artist)
            VALUES ($1, $2, $3)
            RETURNING id, title, year, artist
            "#,
        )
        .bind(&album.title)
        .bind(album.year)
        .bind(&album.artist)
        .fetch_one(&self.pool)
        .instrument(query_span)
        .await
        .map_err(map_write_error)
    }

    async fn update(&self, album: models::Album) -> Result<models::Album, RepositoryError> {
        let query_span = tracing::info_span!("Updating album");
        sqlx::query_as::<_, models::Album>(
            r#"
            UPDATE albums
            SET title = $2, year = $3, artist = $4
            WHERE id = $1
            RETURNING id, title, year, artist
            "#,
        )
        .bind(album.id)
        .bind(&album.title)
        .bind(album.year)
        .bind(&album.artist)
        .fetch_optional(&self.pool)
        .instrument(query_span)
        .await
        .map_err(map_write_error)?
        .ok_or(RepositoryError::RowNotFound(album.id))
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        tracing::info!("Delete album {}", id);
        self.delete_row("albums", id).await
    }
}
