//! Scheduled placement endpoints for hero and banner surfaces.
//!
//! ```text
//! GET /api/v1/placements/{surface}?company=&count=
//! GET /api/v1/placements?surfaces=hero,top-banner&company=&count=
//! ```

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use serde_json::json;

use crate::domain::ports::{MAX_PLACEMENT_COUNT, PlacementRequest};
use crate::domain::{CompanyCode, Error, Surface};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::private_no_store_header;
use crate::inbound::http::schemas::{ErrorSchema, ScheduledPlacementSchema};
use crate::inbound::http::state::HttpState;

/// Query parameters for a single surface.
#[derive(Debug, Default, Deserialize)]
pub struct PlacementQueryParams {
    pub company: Option<String>,
    pub count: Option<String>,
}

/// Query parameters for several surfaces at once.
#[derive(Debug, Default, Deserialize)]
pub struct SurfacesQueryParams {
    pub surfaces: Option<String>,
    pub company: Option<String>,
    pub count: Option<String>,
}

fn invalid_count(raw: &str) -> Error {
    Error::invalid_request(format!("count must be between 1 and {MAX_PLACEMENT_COUNT}"))
        .with_details(json!({ "field": "count", "value": raw }))
}

/// Parse the requested hotel count, falling back to `default` when absent.
fn parse_count(raw: Option<&str>, default: usize) -> Result<usize, Error> {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(default);
    };
    let count: usize = raw.parse().map_err(|_| invalid_count(raw))?;
    if (1..=MAX_PLACEMENT_COUNT).contains(&count) {
        Ok(count)
    } else {
        Err(invalid_count(raw))
    }
}

fn parse_surface(raw: &str) -> Result<Surface, Error> {
    Surface::new(raw.trim()).map_err(|err| {
        Error::invalid_request(err.to_string()).with_details(json!({ "surface": raw }))
    })
}

/// Parse a comma-separated surface list, keeping first occurrences in order.
fn parse_surfaces(raw: Option<&str>) -> Result<Vec<Surface>, Error> {
    let mut surfaces: Vec<Surface> = Vec::new();
    for token in raw.unwrap_or_default().split(',') {
        if token.trim().is_empty() {
            continue;
        }
        let surface = parse_surface(token)?;
        if !surfaces.contains(&surface) {
            surfaces.push(surface);
        }
    }
    if surfaces.is_empty() {
        return Err(Error::invalid_request("surfaces must name at least one surface")
            .with_details(json!({ "field": "surfaces" })));
    }
    Ok(surfaces)
}

/// Hotels scheduled today on one surface.
#[utoipa::path(
    get,
    path = "/api/v1/placements/{surface}",
    description = "Return the hotels scheduled on a surface for the current UTC+9 day. Restricted segments receive a random sample of the promotion pool instead. Example request: GET /api/v1/placements/hero?count=6",
    params(
        ("surface" = String, Path, description = "Surface slug, e.g. `hero` or `top-banner`"),
        ("company" = Option<String>, Query, description = "Company code selecting the visibility segment"),
        ("count" = Option<usize>, Query, description = "Number of hotels, 1 to 100; defaults to the server setting")
    ),
    responses(
        (
            status = 200,
            description = "Scheduled placement",
            headers(("Cache-Control" = String, description = "Cache control header")),
            body = ScheduledPlacementSchema
        ),
        (status = 400, description = "Invalid surface or count", body = ErrorSchema)
    ),
    tags = ["placements"],
    operation_id = "getPlacement"
)]
#[get("/placements/{surface}")]
pub async fn get_placement(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<PlacementQueryParams>,
) -> ApiResult<HttpResponse> {
    let PlacementQueryParams { company, count } = query.into_inner();
    let surface = parse_surface(&path.into_inner())?;
    let count = parse_count(count.as_deref(), state.default_placement_count)?;

    let placement = state
        .placements
        .scheduled_hotels(PlacementRequest {
            surface,
            company: CompanyCode::parse(company.as_deref()),
            count,
        })
        .await;

    Ok(HttpResponse::Ok()
        .insert_header(private_no_store_header())
        .json(placement))
}

/// Hotels scheduled today on several surfaces, in request order.
#[utoipa::path(
    get,
    path = "/api/v1/placements",
    params(
        ("surfaces" = String, Query, description = "Comma-separated surface slugs"),
        ("company" = Option<String>, Query, description = "Company code selecting the visibility segment"),
        ("count" = Option<usize>, Query, description = "Number of hotels per surface, 1 to 100")
    ),
    responses(
        (
            status = 200,
            description = "Scheduled placements",
            headers(("Cache-Control" = String, description = "Cache control header")),
            body = Vec<ScheduledPlacementSchema>
        ),
        (status = 400, description = "Invalid surfaces or count", body = ErrorSchema)
    ),
    tags = ["placements"],
    operation_id = "listPlacements"
)]
#[get("/placements")]
pub async fn list_placements(
    state: web::Data<HttpState>,
    query: web::Query<SurfacesQueryParams>,
) -> ApiResult<HttpResponse> {
    let SurfacesQueryParams {
        surfaces,
        company,
        count,
    } = query.into_inner();
    let surfaces = parse_surfaces(surfaces.as_deref())?;
    let count = parse_count(count.as_deref(), state.default_placement_count)?;

    let placements = state
        .placements
        .scheduled_surfaces(surfaces, CompanyCode::parse(company.as_deref()), count)
        .await;

    Ok(HttpResponse::Ok()
        .insert_header(private_no_store_header())
        .json(placements))
}

#[cfg(test)]
#[path = "placements_tests.rs"]
mod tests;
