//! PostgreSQL-backed `MediaRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{MediaRepository, MediaRepositoryError};
use crate::domain::{MediaAsset, MediaOwnerKey};

use super::diesel_helpers::{map_diesel_failure, map_pool_failure};
use super::models::MediaRow;
use super::pool::{DbPool, PoolError};
use super::schema::hotel_media;

/// Diesel-backed implementation of the media repository port.
#[derive(Clone)]
pub struct DieselMediaRepository {
    pool: DbPool,
}

impl DieselMediaRepository {
    /// Adapter reading through `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> MediaRepositoryError {
    map_pool_failure(error, MediaRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> MediaRepositoryError {
    map_diesel_failure(
        error,
        "load media",
        MediaRepositoryError::query,
        MediaRepositoryError::connection,
    )
}

fn row_to_asset(row: MediaRow) -> MediaAsset {
    MediaAsset {
        owner_key: MediaOwnerKey::new(row.owner_key),
        image_seq: row.image_seq,
        url: row.public_url,
        alt: row.alt_text,
    }
}

#[async_trait]
impl MediaRepository for DieselMediaRepository {
    async fn media(
        &self,
        owner_keys: &[MediaOwnerKey],
    ) -> Result<Vec<MediaAsset>, MediaRepositoryError> {
        if owner_keys.is_empty() {
            return Ok(Vec::new());
        }
        let keys: Vec<&str> = owner_keys.iter().map(MediaOwnerKey::as_str).collect();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<MediaRow> = hotel_media::table
            .filter(hotel_media::owner_key.eq_any(keys))
            .order((
                hotel_media::owner_key.asc(),
                hotel_media::image_seq.asc(),
                hotel_media::id.asc(),
            ))
            .select(MediaRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_asset).collect())
    }
}
