//! Hotel catalogue read endpoints.
//!
//! ```text
//! GET /api/v1/hotels?company=&country=&city=&brands=&chains=
//! GET /api/v1/hotels/facets?company=
//! GET /api/v1/promotion?company=
//! GET /api/v1/destinations/{slug}?company=
//! ```
//!
//! Every endpoint takes an optional `company` code selecting the caller's
//! visibility segment. Catalogue reads never fail: an unavailable store
//! yields an empty listing.

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use serde_json::json;

use crate::domain::{CompanyCode, Error, HotelListFilter};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::public_short_lived_header;
use crate::inbound::http::schemas::{
    CatalogFacetsSchema, DestinationListingSchema, ErrorSchema, HotelCardSchema, HotelListingSchema,
};
use crate::inbound::http::state::HttpState;

/// Query parameters shared by every catalogue endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct CompanyQuery {
    pub company: Option<String>,
}

impl CompanyQuery {
    fn company(&self) -> Option<CompanyCode> {
        CompanyCode::parse(self.company.as_deref())
    }
}

/// Query parameters for the hotel listing.
///
/// `brands` and `chains` accept a single id, a comma list or a bracketed
/// list; anything unparsable is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub company: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub brands: Option<String>,
    pub chains: Option<String>,
}

impl ListingQuery {
    fn into_parts(self) -> (Option<CompanyCode>, HotelListFilter) {
        let filter = HotelListFilter::from_raw(
            self.country.as_deref(),
            self.city.as_deref(),
            self.brands.as_deref(),
            self.chains.as_deref(),
        );
        (CompanyCode::parse(self.company.as_deref()), filter)
    }
}

/// List hotel cards with facets.
#[utoipa::path(
    get,
    path = "/api/v1/hotels",
    description = "Return hotel cards matching the filter plus facets over every hotel visible to the segment. Example request: GET /api/v1/hotels?country=JP&brands=5,7",
    params(
        ("company" = Option<String>, Query, description = "Company code selecting the visibility segment"),
        ("country" = Option<String>, Query, description = "Country code filter"),
        ("city" = Option<String>, Query, description = "City code filter"),
        ("brands" = Option<String>, Query, description = "Brand ids, e.g. `5`, `5,7` or `[5, 7]`"),
        ("chains" = Option<String>, Query, description = "Chain ids, same encodings as `brands`")
    ),
    responses(
        (
            status = 200,
            description = "Hotel listing",
            headers(("Cache-Control" = String, description = "Cache control header")),
            body = HotelListingSchema
        )
    ),
    tags = ["catalogue"],
    operation_id = "listHotels"
)]
#[get("/hotels")]
pub async fn list_hotels(
    state: web::Data<HttpState>,
    query: web::Query<ListingQuery>,
) -> ApiResult<HttpResponse> {
    let (company, filter) = query.into_inner().into_parts();
    let listing = state.catalog.listing(company, filter).await;
    Ok(HttpResponse::Ok()
        .insert_header(public_short_lived_header())
        .json(listing))
}

/// Facets only, for filter sidebars rendered separately from the list.
#[utoipa::path(
    get,
    path = "/api/v1/hotels/facets",
    params(
        ("company" = Option<String>, Query, description = "Company code selecting the visibility segment")
    ),
    responses(
        (
            status = 200,
            description = "Facet groups",
            headers(("Cache-Control" = String, description = "Cache control header")),
            body = CatalogFacetsSchema
        )
    ),
    tags = ["catalogue"],
    operation_id = "getHotelFacets"
)]
#[get("/hotels/facets")]
pub async fn get_facets(
    state: web::Data<HttpState>,
    query: web::Query<CompanyQuery>,
) -> ApiResult<HttpResponse> {
    let facets = state.catalog.facets(query.company()).await;
    Ok(HttpResponse::Ok()
        .insert_header(public_short_lived_header())
        .json(facets))
}

/// Cards for the general promotion pool, in pool order.
#[utoipa::path(
    get,
    path = "/api/v1/promotion",
    params(
        ("company" = Option<String>, Query, description = "Company code selecting the visibility segment")
    ),
    responses(
        (
            status = 200,
            description = "Promotion cards",
            headers(("Cache-Control" = String, description = "Cache control header")),
            body = Vec<HotelCardSchema>
        )
    ),
    tags = ["catalogue"],
    operation_id = "listPromotionHotels"
)]
#[get("/promotion")]
pub async fn list_promotion(
    state: web::Data<HttpState>,
    query: web::Query<CompanyQuery>,
) -> ApiResult<HttpResponse> {
    let cards = state.catalog.promotion_listing(query.company()).await;
    Ok(HttpResponse::Ok()
        .insert_header(public_short_lived_header())
        .json(cards))
}

/// Destination page: the resolved destination and its listing.
#[utoipa::path(
    get,
    path = "/api/v1/destinations/{slug}",
    params(
        ("slug" = String, Path, description = "City, country or area slug, or a localized name"),
        ("company" = Option<String>, Query, description = "Company code selecting the visibility segment")
    ),
    responses(
        (
            status = 200,
            description = "Destination listing",
            headers(("Cache-Control" = String, description = "Cache control header")),
            body = DestinationListingSchema
        ),
        (status = 404, description = "Slug does not name a destination", body = ErrorSchema)
    ),
    tags = ["catalogue"],
    operation_id = "getDestination"
)]
#[get("/destinations/{slug}")]
pub async fn get_destination(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<CompanyQuery>,
) -> ApiResult<HttpResponse> {
    let slug = path.into_inner();
    let listing = state
        .catalog
        .destination_listing(&slug, query.company())
        .await
        .ok_or_else(|| {
            Error::not_found(format!("no destination matches '{slug}'"))
                .with_details(json!({ "slug": slug }))
        })?;
    Ok(HttpResponse::Ok()
        .insert_header(public_short_lived_header())
        .json(listing))
}

#[cfg(test)]
#[path = "catalogue_tests.rs"]
mod tests;
