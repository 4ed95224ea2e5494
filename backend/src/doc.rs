//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the catalogue, placement and health endpoints plus
//! the schema wrappers from [`crate::inbound::http::schemas`], so domain
//! read models stay free of utoipa derives. The document is served by
//! Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    CatalogFacetsSchema, DestinationKindSchema, DestinationListingSchema, DestinationSchema,
    ErrorCodeSchema, ErrorSchema, FacetOptionSchema, HotelCardSchema, HotelListingSchema,
    ResolutionStrategySchema, ScheduledPlacementSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hotel concierge backend API",
        description = "Read-only hotel catalogue, destination pages and scheduled placements, scoped by company visibility segment."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::catalogue::list_hotels,
        crate::inbound::http::catalogue::get_facets,
        crate::inbound::http::catalogue::list_promotion,
        crate::inbound::http::catalogue::get_destination,
        crate::inbound::http::placements::get_placement,
        crate::inbound::http::placements::list_placements,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        HotelCardSchema,
        FacetOptionSchema,
        CatalogFacetsSchema,
        HotelListingSchema,
        DestinationKindSchema,
        ResolutionStrategySchema,
        DestinationSchema,
        DestinationListingSchema,
        ScheduledPlacementSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "catalogue", description = "Hotel listings, facets and destination pages"),
        (name = "placements", description = "Date-scheduled hero and banner surfaces"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated OpenAPI document.

    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    // utoipa replaces :: with . in schema names
    fn schema(name: &str) -> RefOr<Schema> {
        let doc = ApiDoc::openapi();
        doc.components
            .expect("components")
            .schemas
            .get(name)
            .unwrap_or_else(|| panic!("missing schema {name}"))
            .clone()
    }

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/api/v1/hotels")]
    #[case("/api/v1/hotels/facets")]
    #[case("/api/v1/promotion")]
    #[case("/api/v1/destinations/{slug}")]
    #[case("/api/v1/placements/{surface}")]
    #[case("/api/v1/placements")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn every_endpoint_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    #[case("crate.domain.Error", &["code", "message", "traceId", "details"])]
    #[case("crate.domain.HotelCard", &["id", "nameEn", "imageUrl", "brandLabels"])]
    #[case("crate.domain.ports.ScheduledPlacement", &["surface", "servedOn", "hotels"])]
    #[case("crate.domain.ports.DestinationListing", &["destination", "hotels", "facets"])]
    fn schemas_use_wire_field_names(#[case] name: &str, #[case] fields: &[&str]) {
        let schema = schema(name);
        for field in fields {
            assert_object_schema_has_field(&schema, field);
        }
    }
}
