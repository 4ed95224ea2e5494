//! PostgreSQL-backed `RegionRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RegionRepository, RegionRepositoryError};
use crate::domain::{Region, RegionKind};

use super::diesel_helpers::{collect_rows, map_diesel_failure, map_pool_failure};
use super::models::RegionRow;
use super::pool::{DbPool, PoolError};
use super::schema::regions;

/// Diesel-backed implementation of the region repository port.
#[derive(Clone)]
pub struct DieselRegionRepository {
    pool: DbPool,
}

impl DieselRegionRepository {
    /// Adapter reading through `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> RegionRepositoryError {
    map_pool_failure(error, RegionRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> RegionRepositoryError {
    map_diesel_failure(
        error,
        "load regions",
        RegionRepositoryError::query,
        RegionRepositoryError::connection,
    )
}

fn row_to_region(row: RegionRow) -> Result<Region, String> {
    let RegionRow {
        city_code,
        region_type,
        status,
        city_ko,
        city_en,
        city_slug,
        country_code,
        country_ko,
        country_en,
        country_slug,
        area_slug,
        area_ko,
        city_sort_order,
        country_sort_order,
    } = row;

    let kind: RegionKind = region_type
        .parse()
        .map_err(|err| format!("region {city_code}: {err}"))?;
    let status = status
        .parse()
        .map_err(|err| format!("region {city_code}: {err}"))?;

    Ok(Region {
        city_code,
        kind,
        status,
        city_label: city_ko,
        city_label_en: city_en,
        city_slug,
        country_code,
        country_label: country_ko,
        country_label_en: country_en,
        country_slug,
        area_slug,
        area_label: area_ko,
        city_sort_order,
        country_sort_order,
    })
}

#[async_trait]
impl RegionRepository for DieselRegionRepository {
    async fn regions(&self, kind: RegionKind) -> Result<Vec<Region>, RegionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let statement = regions::table
            .filter(regions::region_type.eq(kind.as_str()))
            .into_boxed();
        let statement = match kind {
            RegionKind::City => statement.order((
                regions::city_sort_order.asc().nulls_last(),
                regions::city_code.asc(),
            )),
            RegionKind::Country => statement.order((
                regions::country_sort_order.asc().nulls_last(),
                regions::city_code.asc(),
            )),
        };

        let rows: Vec<RegionRow> = statement
            .select(RegionRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        collect_rows(rows.into_iter().map(row_to_region), RegionRepositoryError::query)
    }
}
