//! Placement scheduling for display surfaces.
//!
//! For one surface and one calendar day (UTC+9) the scheduler picks the
//! hotels to render:
//!
//! - unrestricted callers get the surface's active slots in ascending
//!   `slot_key` order;
//! - the restricted partner segment gets a random sample of the promotion
//!   pool instead, because editorial slot order does not apply to it.
//!
//! Cards are enriched only after truncation. Any driven-port failure yields
//! an empty placement for that surface.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use futures_util::future::join_all;
use mockable::Clock;
use rand::seq::SliceRandom;
use tracing::warn;

use super::catalog_reader::{CardEnricher, CatalogPorts, CatalogueReadError, distinct_in_order};
use super::catalogue::{FeatureSlot, Hotel, HotelCard, SabreId, Surface};
use super::ports::{HotelQuery, PlacementQuery, PlacementRequest, ScheduledPlacement};
use super::visibility::{CompanyCode, SegmentPolicy, VisibilityPolicy};

/// Offset of the scheduling timezone from UTC.
pub const SCHEDULE_UTC_OFFSET_HOURS: i64 = 9;

/// Calendar day used for slot activation.
pub fn schedule_day(clock: &dyn Clock) -> NaiveDate {
    (clock.utc() + Duration::hours(SCHEDULE_UTC_OFFSET_HOURS)).date_naive()
}

/// Active slots in ascending `slot_key` order. Ties keep adapter order.
pub fn active_slots(mut slots: Vec<FeatureSlot>, day: NaiveDate) -> Vec<FeatureSlot> {
    slots.sort_by_key(|slot| slot.slot_key);
    slots.retain(|slot| slot.window.is_active_on(day));
    slots
}

/// 0-based display rank per hotel. A hotel holding several slots keeps its
/// first (best) rank.
pub fn rank_map(active: &[FeatureSlot]) -> HashMap<SabreId, usize> {
    let mut ranks = HashMap::new();
    for (rank, slot) in active.iter().enumerate() {
        ranks.entry(slot.sabre_id).or_insert(rank);
    }
    ranks
}

/// Domain service implementing [`PlacementQuery`].
#[derive(Clone)]
pub struct SlotScheduler {
    ports: CatalogPorts,
    segments: SegmentPolicy,
    clock: Arc<dyn Clock>,
}

impl SlotScheduler {
    /// Build the scheduler; `clock` supplies "today".
    pub fn new(ports: CatalogPorts, segments: SegmentPolicy, clock: Arc<dyn Clock>) -> Self {
        Self {
            ports,
            segments,
            clock,
        }
    }

    async fn try_schedule(
        &self,
        surface: &Surface,
        company: Option<&CompanyCode>,
        count: usize,
        day: NaiveDate,
    ) -> Result<Vec<HotelCard>, CatalogueReadError> {
        let restricted = self.segments.is_restricted_segment(company);
        let policy = self.segments.resolve(company);

        let active = active_slots(self.ports.placements.feature_slots(surface).await?, day);
        let ranks = rank_map(&active);

        let pool: Vec<SabreId> = if restricted {
            distinct_in_order(self.ports.placements.promotion_pool().await?)
        } else {
            distinct_in_order(active.iter().map(|slot| slot.sabre_id).collect())
        };
        if pool.is_empty() || count == 0 {
            return Ok(Vec::new());
        }

        let hotels = self.candidates(policy, pool).await?;
        let selected = if restricted {
            sample(hotels, count)
        } else {
            order_by_rank(hotels, &ranks, count)
        };

        let enricher = CardEnricher::load(&self.ports, &selected).await?;
        Ok(enricher.cards(&selected))
    }

    async fn schedule_on(&self, request: PlacementRequest, day: NaiveDate) -> ScheduledPlacement {
        let PlacementRequest {
            surface,
            company,
            count,
        } = request;
        let hotels = match self
            .try_schedule(&surface, company.as_ref(), count, day)
            .await
        {
            Ok(hotels) => hotels,
            Err(error) => {
                warn!(%error, surface = %surface, %day, "placement degraded to empty");
                Vec::new()
            }
        };
        ScheduledPlacement {
            surface,
            served_on: day,
            hotels,
        }
    }

    async fn candidates(
        &self,
        policy: VisibilityPolicy,
        pool: Vec<SabreId>,
    ) -> Result<Vec<Hotel>, CatalogueReadError> {
        let members: BTreeSet<SabreId> = pool.iter().copied().collect();
        let mut hotels = self
            .ports
            .hotels
            .hotels(HotelQuery::for_ids(policy, pool))
            .await?;
        hotels.retain(|hotel| members.contains(&hotel.sabre_id) && policy.admits(hotel));
        Ok(hotels)
    }
}

/// Stable sort by rank, then truncate. Hotels without a rank sort as rank 0.
pub fn order_by_rank(
    mut hotels: Vec<Hotel>,
    ranks: &HashMap<SabreId, usize>,
    count: usize,
) -> Vec<Hotel> {
    hotels.sort_by_key(|hotel| ranks.get(&hotel.sabre_id).copied().unwrap_or(0));
    hotels.truncate(count);
    hotels
}

fn sample(mut hotels: Vec<Hotel>, count: usize) -> Vec<Hotel> {
    hotels.shuffle(&mut rand::thread_rng());
    hotels.truncate(count);
    hotels
}

#[async_trait]
impl PlacementQuery for SlotScheduler {
    async fn scheduled_hotels(&self, request: PlacementRequest) -> ScheduledPlacement {
        let day = schedule_day(self.clock.as_ref());
        self.schedule_on(request, day).await
    }

    async fn scheduled_surfaces(
        &self,
        surfaces: Vec<Surface>,
        company: Option<CompanyCode>,
        count: usize,
    ) -> Vec<ScheduledPlacement> {
        let day = schedule_day(self.clock.as_ref());
        let requests = surfaces.into_iter().map(|surface| {
            let request = PlacementRequest {
                surface,
                company: company.clone(),
                count,
            };
            self.schedule_on(request, day)
        });
        join_all(requests).await
    }
}

#[cfg(test)]
#[path = "slot_scheduler_tests.rs"]
mod tests;
