//! Driving port for scheduled placements on display surfaces.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{CompanyCode, HotelCard, Surface};

/// Largest number of hotels a single surface may request.
pub const MAX_PLACEMENT_COUNT: usize = 100;

/// One surface request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementRequest {
    pub surface: Surface,
    pub company: Option<CompanyCode>,
    pub count: usize,
}

/// Cards scheduled on a surface for one day.
///
/// An empty `hotels` list is a valid outcome: nothing is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledPlacement {
    pub surface: Surface,
    pub served_on: NaiveDate,
    pub hotels: Vec<HotelCard>,
}

/// Domain use-case port for placement surfaces.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlacementQuery: Send + Sync {
    /// Schedule one surface. Never fails; errors yield an empty placement.
    async fn scheduled_hotels(&self, request: PlacementRequest) -> ScheduledPlacement;

    /// Schedule several surfaces concurrently, preserving `surfaces` order.
    async fn scheduled_surfaces(
        &self,
        surfaces: Vec<Surface>,
        company: Option<CompanyCode>,
        count: usize,
    ) -> Vec<ScheduledPlacement>;
}
