//! Tests for catalogue HTTP handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::Value;

use super::*;
use crate::domain::ports::{
    DestinationListing, HotelListing, MockCatalogQuery, MockPlacementQuery,
};
use crate::domain::{
    CatalogFacets, Destination, DestinationKind, FacetOption, HotelCard, ResolutionStrategy,
};
use crate::inbound::http::cache_control::PUBLIC_SHORT_LIVED;

fn card(id: i64) -> HotelCard {
    HotelCard {
        id,
        slug: Some(format!("hotel-{id}")),
        name_local: None,
        name_en: Some(format!("Hotel {id}")),
        city_label: Some("도쿄".to_owned()),
        address: None,
        image_url: Some(format!("https://cdn.example.test/{id}/1.jpg")),
        brand_labels: vec!["Park Hyatt".to_owned()],
        chain_label: Some("Hyatt".to_owned()),
    }
}

fn listing(ids: &[i64]) -> HotelListing {
    HotelListing {
        hotels: ids.iter().copied().map(card).collect(),
        facets: CatalogFacets {
            countries: vec![FacetOption {
                id: "JP".to_owned(),
                label: "일본".to_owned(),
                count: ids.len(),
            }],
            ..CatalogFacets::default()
        },
    }
}

async fn get_json(catalog: MockCatalogQuery, uri: &str) -> (StatusCode, Option<String>, Value) {
    let state = HttpState::new(Arc::new(catalog), Arc::new(MockPlacementQuery::new()));
    let app = actix_test::init_service(
        App::new().app_data(web::Data::new(state)).service(
            web::scope("/api/v1")
                .service(get_facets)
                .service(list_hotels)
                .service(list_promotion)
                .service(get_destination),
        ),
    )
    .await;
    let response =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;
    let status = response.status();
    let cache = response
        .headers()
        .get("Cache-Control")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body: Value = actix_test::read_body_json(response).await;
    (status, cache, body)
}

#[rstest]
#[actix_web::test]
async fn listing_passes_company_and_filter_through() {
    let mut catalog = MockCatalogQuery::new();
    catalog
        .expect_listing()
        .withf(|company, filter| {
            company.as_ref().map(|code| code.as_str()) == Some("sk")
                && filter.country_code.as_deref() == Some("JP")
                && filter.brand_ids.iter().copied().eq([5, 7])
                && filter.chain_ids.is_empty()
        })
        .times(1)
        .returning(|_, _| listing(&[101, 102]));

    let (status, cache, body) =
        get_json(catalog, "/api/v1/hotels?company=SK&country=JP&brands=%5B5,7%5D").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache.as_deref(), Some(PUBLIC_SHORT_LIVED));
    assert_eq!(body["hotels"][0]["id"], 101);
    assert_eq!(body["hotels"][0]["nameEn"], "Hotel 101");
    assert_eq!(body["hotels"][1]["brandLabels"][0], "Park Hyatt");
    assert_eq!(body["facets"]["countries"][0]["count"], 2);
}

#[rstest]
#[case::missing("/api/v1/hotels")]
#[case::blank("/api/v1/hotels?company=%20%20&brands=abc")]
#[actix_web::test]
async fn blank_company_and_junk_ids_mean_no_constraint(#[case] uri: &str) {
    let mut catalog = MockCatalogQuery::new();
    catalog
        .expect_listing()
        .withf(|company, filter| company.is_none() && filter.is_empty())
        .returning(|_, _| HotelListing::default());

    let (status, _, body) = get_json(catalog, uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hotels"], Value::Array(Vec::new()));
}

#[rstest]
#[actix_web::test]
async fn facets_endpoint_returns_all_four_groups() {
    let mut catalog = MockCatalogQuery::new();
    catalog
        .expect_facets()
        .returning(|_| listing(&[1]).facets);

    let (status, _, body) = get_json(catalog, "/api/v1/hotels/facets").await;

    assert_eq!(status, StatusCode::OK);
    for group in ["countries", "cities", "brands", "chains"] {
        assert!(body[group].is_array(), "missing facet group {group}");
    }
    assert_eq!(body["countries"][0]["id"], "JP");
}

#[rstest]
#[actix_web::test]
async fn promotion_keeps_service_order() {
    let mut catalog = MockCatalogQuery::new();
    catalog
        .expect_promotion_listing()
        .returning(|_| vec![card(203), card(201)]);

    let (status, _, body) = get_json(catalog, "/api/v1/promotion?company=acme").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<_> = body
        .as_array()
        .expect("array body")
        .iter()
        .map(|card| card["id"].as_i64())
        .collect();
    assert_eq!(ids, vec![Some(203), Some(201)]);
}

#[rstest]
#[actix_web::test]
async fn destination_flattens_listing_next_to_destination() {
    let mut catalog = MockCatalogQuery::new();
    catalog
        .expect_destination_listing()
        .withf(|slug, company| slug == "tokyo" && company.is_none())
        .returning(|_, _| {
            Some(DestinationListing {
                destination: Destination {
                    kind: DestinationKind::City,
                    code: "TYO".to_owned(),
                    label: Some("도쿄".to_owned()),
                    city_codes: vec!["TYO".to_owned()],
                    strategy: ResolutionStrategy::ByCitySlug,
                },
                listing: listing(&[101]),
            })
        });

    let (status, _, body) = get_json(catalog, "/api/v1/destinations/tokyo").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["destination"]["kind"], "city");
    assert_eq!(body["destination"]["cityCodes"][0], "TYO");
    assert_eq!(body["destination"]["strategy"], "by_city_slug");
    assert_eq!(body["hotels"][0]["id"], 101);
    assert!(body["facets"].is_object());
}

#[rstest]
#[actix_web::test]
async fn unknown_destination_is_not_found() {
    let mut catalog = MockCatalogQuery::new();
    catalog
        .expect_destination_listing()
        .returning(|_, _| None);

    let (status, _, body) = get_json(catalog, "/api/v1/destinations/atlantis").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["details"]["slug"], "atlantis");
}
