//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) describe the read-only content store.
//! Driving ports (`CatalogQuery`, `PlacementQuery`) are what inbound
//! adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod brand_repository;
mod catalog_query;
mod hotel_repository;
mod media_repository;
mod placement_query;
mod placement_repository;
mod region_repository;

#[cfg(test)]
pub use brand_repository::MockBrandRepository;
pub use brand_repository::{BrandRepository, BrandRepositoryError, FixtureBrandRepository};
#[cfg(test)]
pub use catalog_query::MockCatalogQuery;
pub use catalog_query::{CatalogQuery, DestinationListing, HotelListing};
#[cfg(test)]
pub use hotel_repository::MockHotelRepository;
pub use hotel_repository::{
    FixtureHotelRepository, HotelQuery, HotelRepository, HotelRepositoryError,
};
#[cfg(test)]
pub use media_repository::MockMediaRepository;
pub use media_repository::{FixtureMediaRepository, MediaRepository, MediaRepositoryError};
#[cfg(test)]
pub use placement_query::MockPlacementQuery;
pub use placement_query::{
    MAX_PLACEMENT_COUNT, PlacementQuery, PlacementRequest, ScheduledPlacement,
};
#[cfg(test)]
pub use placement_repository::MockPlacementRepository;
pub use placement_repository::{
    FixturePlacementRepository, PlacementRepository, PlacementRepositoryError,
};
#[cfg(test)]
pub use region_repository::MockRegionRepository;
pub use region_repository::{FixtureRegionRepository, RegionRepository, RegionRepositoryError};
