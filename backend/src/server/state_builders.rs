//! Builders wiring driven adapters and domain services into HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::info;

use backend::domain::{CatalogPorts, CatalogService, SlotScheduler};
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::{
    DbPool, DieselBrandRepository, DieselHotelRepository, DieselMediaRepository,
    DieselPlacementRepository, DieselRegionRepository,
};

use super::ServerConfig;

/// Driven ports backed by the Diesel adapters sharing one pool.
fn diesel_ports(pool: &DbPool) -> CatalogPorts {
    CatalogPorts {
        hotels: Arc::new(DieselHotelRepository::new(pool.clone())),
        brands: Arc::new(DieselBrandRepository::new(pool.clone())),
        media: Arc::new(DieselMediaRepository::new(pool.clone())),
        placements: Arc::new(DieselPlacementRepository::new(pool.clone())),
        regions: Arc::new(DieselRegionRepository::new(pool.clone())),
    }
}

/// Select Diesel adapters when a pool is configured, fixtures otherwise.
pub(super) fn build_ports(pool: Option<&DbPool>) -> CatalogPorts {
    match pool {
        Some(pool) => diesel_ports(pool),
        None => {
            info!("no database configured; serving empty fixture catalogue");
            CatalogPorts::fixtures()
        }
    }
}

/// Construct the shared HTTP state from configuration.
///
/// The scheduler reads "today" from the system clock.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let ports = build_ports(config.db_pool.as_ref());
    let catalog = CatalogService::new(ports.clone(), config.segment_policy.clone());
    let scheduler = SlotScheduler::new(ports, config.segment_policy.clone(), clock);

    web::Data::new(
        HttpState::new(Arc::new(catalog), Arc::new(scheduler))
            .with_default_placement_count(config.default_placement_count),
    )
}
