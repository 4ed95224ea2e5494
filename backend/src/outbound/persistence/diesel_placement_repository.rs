//! PostgreSQL-backed `PlacementRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PlacementRepository, PlacementRepositoryError};
use crate::domain::{FeatureSlot, SabreId, SlotWindow, Surface};

use super::diesel_helpers::{collect_rows, map_diesel_failure, map_pool_failure};
use super::models::FeatureSlotRow;
use super::pool::{DbPool, PoolError};
use super::schema::{feature_slots, promotion_hotels};

/// Diesel-backed implementation of the placement repository port.
#[derive(Clone)]
pub struct DieselPlacementRepository {
    pool: DbPool,
}

impl DieselPlacementRepository {
    /// Adapter reading through `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> PlacementRepositoryError {
    map_pool_failure(error, PlacementRepositoryError::connection)
}

fn map_diesel_error(
    error: diesel::result::Error,
    operation: &'static str,
) -> PlacementRepositoryError {
    map_diesel_failure(
        error,
        operation,
        PlacementRepositoryError::query,
        PlacementRepositoryError::connection,
    )
}

fn row_to_slot(row: FeatureSlotRow) -> Result<FeatureSlot, String> {
    let FeatureSlotRow {
        surface,
        sabre_id,
        slot_key,
        start_date,
        end_date,
    } = row;

    let surface = Surface::new(surface)
        .map_err(|err| format!("slot for hotel {sabre_id} has an invalid surface: {err}"))?;
    Ok(FeatureSlot {
        surface,
        sabre_id,
        slot_key,
        window: SlotWindow::new(start_date, end_date),
    })
}

#[async_trait]
impl PlacementRepository for DieselPlacementRepository {
    async fn feature_slots(
        &self,
        surface: &Surface,
    ) -> Result<Vec<FeatureSlot>, PlacementRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<FeatureSlotRow> = feature_slots::table
            .filter(feature_slots::surface.eq(surface.as_str()))
            .order((feature_slots::slot_key.asc(), feature_slots::id.asc()))
            .select(FeatureSlotRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "load feature slots"))?;

        collect_rows(rows.into_iter().map(row_to_slot), PlacementRepositoryError::query)
    }

    async fn promotion_pool(&self) -> Result<Vec<SabreId>, PlacementRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        promotion_hotels::table
            .order(promotion_hotels::id.asc())
            .select(promotion_hotels::sabre_id)
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "load promotion pool"))
    }
}
