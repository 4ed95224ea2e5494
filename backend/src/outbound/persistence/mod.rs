//! PostgreSQL read adapters for the content store, built on Diesel.
//!
//! # Architecture
//!
//! - **Read only**: every adapter issues `SELECT`s; the store is owned and
//!   migrated elsewhere.
//! - **Thin adapters**: repositories translate rows into domain types and
//!   push the visibility predicate into SQL. Selection, ranking and facet
//!   logic stay in the domain.
//! - **Internal models**: `models.rs` and `schema.rs` never leave this
//!   module.
//! - **Typed errors**: pool and Diesel failures map onto each port's
//!   `Connection`/`Query` variants.
//!
//! # Example
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, DieselHotelRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://reader@replica/content")).await?;
//! let hotels = DieselHotelRepository::new(pool);
//! ```

mod diesel_brand_repository;
mod diesel_helpers;
mod diesel_hotel_repository;
mod diesel_media_repository;
mod diesel_placement_repository;
mod diesel_region_repository;
mod models;
mod pool;
mod schema;

pub use diesel_brand_repository::DieselBrandRepository;
pub use diesel_hotel_repository::DieselHotelRepository;
pub use diesel_media_repository::DieselMediaRepository;
pub use diesel_placement_repository::DieselPlacementRepository;
pub use diesel_region_repository::DieselRegionRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
