//! Domain primitives, services and ports for the hotel catalogue.
//!
//! Purpose: turn read-only content-store rows into render-ready hotel cards,
//! facet summaries and scheduled placements, scoped by the caller's
//! visibility segment. Nothing here knows about HTTP or SQL; adapters reach
//! the domain through [`ports`].
//!
//! Public surface:
//! - [`CatalogService`] implements [`ports::CatalogQuery`] (listings, facets,
//!   promotion page, destination pages).
//! - [`SlotScheduler`] implements [`ports::PlacementQuery`] (hero and banner
//!   surfaces).
//! - Pure helpers: [`parse_multi_id`], [`has_intersection`],
//!   [`first_image_per_entity`], [`resolve_destination`].

mod brand_index;
mod catalog_aggregator;
mod catalog_reader;
pub mod catalogue;
mod destination;
pub mod error;
mod facets;
mod filter;
mod identifiers;
pub mod ports;
mod slot_scheduler;
mod slug;
pub mod trace_id;
mod visibility;

pub use self::brand_index::{BrandIndex, keyword_brand_label};
pub use self::catalog_aggregator::CatalogService;
pub use self::catalog_reader::CatalogPorts;
pub use self::catalogue::{
    Brand, BrandId, BrandRefs, CatalogueValidationError, Chain, ChainId, EntityStatus,
    FeatureSlot, Hotel, HotelCard, MediaAsset, MediaOwnerKey, PublishState, Region, RegionKind,
    SabreId, SlotWindow, Surface, first_image_per_entity,
};
pub use self::destination::{Destination, DestinationKind, ResolutionStrategy, resolve_destination};
pub use self::error::{Error, ErrorCode};
pub use self::facets::{CatalogFacets, FacetOption, compute_facets};
pub use self::filter::HotelListFilter;
pub use self::identifiers::{has_intersection, parse_multi_id, parse_multi_id_ordered};
pub use self::slot_scheduler::{
    SCHEDULE_UTC_OFFSET_HOURS, SlotScheduler, active_slots, order_by_rank, rank_map,
    schedule_day,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::visibility::{
    CompanyCode, DEFAULT_RESTRICTED_COMPANY_CODE, SegmentPolicy, VisibilityPolicy,
};
