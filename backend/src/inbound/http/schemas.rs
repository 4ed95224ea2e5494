//! OpenAPI schema definitions for catalogue read models.
//!
//! The domain read models only derive `Serialize`. These wrappers mirror
//! their JSON shape and register it with utoipa under the domain type's
//! name, keeping the framework out of the domain.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::HotelCard`].
#[derive(ToSchema)]
#[schema(as = crate::domain::HotelCard)]
#[schema(rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct HotelCardSchema {
    #[schema(example = 101)]
    id: i64,
    #[schema(example = "grand-hyatt-seoul")]
    slug: Option<String>,
    /// Local-language hotel name.
    name_local: Option<String>,
    #[schema(example = "Grand Hyatt Seoul")]
    name_en: Option<String>,
    city_label: Option<String>,
    address: Option<String>,
    /// Representative image: the lowest `image_seq` for the hotel.
    image_url: Option<String>,
    /// Brand labels in reference order; may fall back to the chain label.
    brand_labels: Vec<String>,
    chain_label: Option<String>,
}

/// OpenAPI schema for [`crate::domain::FacetOption`].
#[derive(ToSchema)]
#[schema(as = crate::domain::FacetOption)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct FacetOptionSchema {
    /// Country code, city code, brand id or chain id rendered as text.
    #[schema(example = "JP")]
    id: String,
    #[schema(example = "일본")]
    label: String,
    #[schema(example = 12)]
    count: u64,
}

/// OpenAPI schema for [`crate::domain::CatalogFacets`].
#[derive(ToSchema)]
#[schema(as = crate::domain::CatalogFacets)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct CatalogFacetsSchema {
    countries: Vec<FacetOptionSchema>,
    cities: Vec<FacetOptionSchema>,
    brands: Vec<FacetOptionSchema>,
    chains: Vec<FacetOptionSchema>,
}

/// OpenAPI schema for [`crate::domain::ports::HotelListing`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ports::HotelListing)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct HotelListingSchema {
    hotels: Vec<HotelCardSchema>,
    /// Facets over every visible hotel, ignoring the listing filter.
    facets: CatalogFacetsSchema,
}

/// OpenAPI schema for [`crate::domain::DestinationKind`].
#[derive(ToSchema)]
#[schema(as = crate::domain::DestinationKind)]
pub enum DestinationKindSchema {
    #[schema(rename = "city")]
    City,
    #[schema(rename = "country")]
    Country,
    #[schema(rename = "area")]
    Area,
}

/// OpenAPI schema for [`crate::domain::ResolutionStrategy`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ResolutionStrategy)]
pub enum ResolutionStrategySchema {
    #[schema(rename = "by_city_slug")]
    ByCitySlug,
    #[schema(rename = "by_country_slug")]
    ByCountrySlug,
    #[schema(rename = "by_area_slug")]
    ByAreaSlug,
    #[schema(rename = "by_localized_name")]
    ByLocalizedName,
}

/// OpenAPI schema for [`crate::domain::Destination`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Destination)]
#[schema(rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct DestinationSchema {
    kind: DestinationKindSchema,
    #[schema(example = "TYO")]
    code: String,
    label: Option<String>,
    city_codes: Vec<String>,
    strategy: ResolutionStrategySchema,
}

/// OpenAPI schema for [`crate::domain::ports::DestinationListing`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ports::DestinationListing)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct DestinationListingSchema {
    destination: DestinationSchema,
    hotels: Vec<HotelCardSchema>,
    facets: CatalogFacetsSchema,
}

/// OpenAPI schema for [`crate::domain::ports::ScheduledPlacement`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ports::ScheduledPlacement)]
#[schema(rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ScheduledPlacementSchema {
    #[schema(value_type = String, example = "hero")]
    surface: String,
    /// Day the schedule was evaluated for, in UTC+9.
    #[schema(value_type = String, format = Date, example = "2025-01-15")]
    served_on: String,
    hotels: Vec<HotelCardSchema>,
}

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A dependency the request cannot proceed without is unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    #[schema(example = "count must be between 1 and 100")]
    message: String,
    /// Correlation identifier, also returned in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Structured context such as the offending parameter.
    details: Option<serde_json::Value>,
}
