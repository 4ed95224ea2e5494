//! PostgreSQL-backed `BrandRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{BrandRepository, BrandRepositoryError};
use crate::domain::{Brand, BrandId, Chain, ChainId, EntityStatus};

use super::diesel_helpers::{collect_rows, map_diesel_failure, map_pool_failure};
use super::models::{BrandRow, ChainRow};
use super::pool::{DbPool, PoolError};
use super::schema::{hotel_brands, hotel_chains};

/// Diesel-backed implementation of the brand repository port.
#[derive(Clone)]
pub struct DieselBrandRepository {
    pool: DbPool,
}

impl DieselBrandRepository {
    /// Adapter reading through `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> BrandRepositoryError {
    map_pool_failure(error, BrandRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error, operation: &'static str) -> BrandRepositoryError {
    map_diesel_failure(
        error,
        operation,
        BrandRepositoryError::query,
        BrandRepositoryError::connection,
    )
}

fn parse_status(owner: &str, id: i64, raw: &str) -> Result<EntityStatus, String> {
    raw.parse()
        .map_err(|err| format!("{owner} {id} has an invalid status: {err}"))
}

fn row_to_brand(row: BrandRow) -> Result<Brand, String> {
    let BrandRow {
        brand_id,
        chain_id,
        name_en,
        name_ko,
        status,
        sort_order,
    } = row;

    Ok(Brand {
        brand_id,
        chain_id,
        name_en,
        name_local: name_ko,
        status: parse_status("brand", brand_id, &status)?,
        sort_order,
    })
}

fn row_to_chain(row: ChainRow) -> Result<Chain, String> {
    let ChainRow {
        chain_id,
        slug,
        name_en,
        name_ko,
        status,
    } = row;

    Ok(Chain {
        chain_id,
        slug,
        name_en,
        name_local: name_ko,
        status: parse_status("chain", chain_id, &status)?,
    })
}

#[async_trait]
impl BrandRepository for DieselBrandRepository {
    async fn brands(&self, ids: &[BrandId]) -> Result<Vec<Brand>, BrandRepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<BrandRow> = hotel_brands::table
            .filter(hotel_brands::brand_id.eq_any(ids))
            .order((
                hotel_brands::sort_order.asc().nulls_last(),
                hotel_brands::brand_id.asc(),
            ))
            .select(BrandRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "load brands"))?;

        collect_rows(rows.into_iter().map(row_to_brand), BrandRepositoryError::query)
    }

    async fn chains(&self, ids: &[ChainId]) -> Result<Vec<Chain>, BrandRepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ChainRow> = hotel_chains::table
            .filter(hotel_chains::chain_id.eq_any(ids))
            .order(hotel_chains::chain_id.asc())
            .select(ChainRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "load chains"))?;

        collect_rows(rows.into_iter().map(row_to_chain), BrandRepositoryError::query)
    }
}
