//! PostgreSQL-backed `HotelRepository` implementation.
//!
//! The visibility predicate is pushed into SQL: hidden rows (`publish =
//! false`) never leave the store, and the restricted policy adds
//! `vcc = true`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{HotelQuery, HotelRepository, HotelRepositoryError};
use crate::domain::{BrandRefs, Hotel, PublishState};

use super::diesel_helpers::{map_diesel_failure, map_pool_failure};
use super::models::HotelRow;
use super::pool::{DbPool, PoolError};
use super::schema::hotels;

/// Diesel-backed implementation of the hotel repository port.
#[derive(Clone)]
pub struct DieselHotelRepository {
    pool: DbPool,
}

impl DieselHotelRepository {
    /// Adapter reading through `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> HotelRepositoryError {
    map_pool_failure(error, HotelRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> HotelRepositoryError {
    map_diesel_failure(
        error,
        "load hotels",
        HotelRepositoryError::query,
        HotelRepositoryError::connection,
    )
}

fn row_to_hotel(row: HotelRow) -> Hotel {
    let HotelRow {
        sabre_id,
        slug,
        name_ko,
        name_en,
        city_code,
        city_ko,
        country_code,
        country_ko,
        address,
        brand_id,
        brand_id_2,
        brand_id_3,
        chain_id,
        publish,
        vcc,
    } = row;

    Hotel {
        sabre_id,
        slug,
        name_local: name_ko,
        name_en,
        city_code,
        city_label: city_ko,
        country_code,
        country_label: country_ko,
        address,
        brands: BrandRefs::from_columns([
            brand_id.as_deref(),
            brand_id_2.as_deref(),
            brand_id_3.as_deref(),
        ]),
        chain_id,
        publish: PublishState::from(publish),
        vcc,
    }
}

#[async_trait]
impl HotelRepository for DieselHotelRepository {
    async fn hotels(&self, query: HotelQuery) -> Result<Vec<Hotel>, HotelRepositoryError> {
        let HotelQuery { policy, ids } = query;
        if ids.as_ref().is_some_and(Vec::is_empty) {
            return Ok(Vec::new());
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut statement = hotels::table
            .filter(hotels::publish.is_null().or(hotels::publish.eq(true)))
            .into_boxed();
        if policy.requires_vcc() {
            statement = statement.filter(hotels::vcc.eq(true));
        }
        if let Some(ids) = ids {
            statement = statement.filter(hotels::sabre_id.eq_any(ids));
        }

        let rows: Vec<HotelRow> = statement
            .order(hotels::sabre_id.asc())
            .select(HotelRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_hotel).collect())
    }
}
