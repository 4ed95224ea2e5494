//! Tests for placement HTTP handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use chrono::NaiveDate;
use rstest::rstest;
use serde_json::Value;

use super::*;
use crate::domain::HotelCard;
use crate::domain::ports::{MockCatalogQuery, MockPlacementQuery, ScheduledPlacement};
use crate::inbound::http::cache_control::PRIVATE_NO_STORE;

fn served_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date")
}

fn placement(surface: Surface, ids: &[i64]) -> ScheduledPlacement {
    ScheduledPlacement {
        surface,
        served_on: served_on(),
        hotels: ids
            .iter()
            .map(|id| HotelCard {
                id: *id,
                slug: None,
                name_local: None,
                name_en: None,
                city_label: None,
                address: None,
                image_url: None,
                brand_labels: Vec::new(),
                chain_label: None,
            })
            .collect(),
    }
}

async fn call(placements: MockPlacementQuery, uri: &str) -> (StatusCode, Option<String>, Value) {
    let state = HttpState::new(Arc::new(MockCatalogQuery::new()), Arc::new(placements))
        .with_default_placement_count(6);
    let app = actix_test::init_service(
        App::new().app_data(web::Data::new(state)).service(
            web::scope("/api/v1")
                .service(list_placements)
                .service(get_placement),
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
async fn single_surface_uses_default_count() {
    let mut placements = MockPlacementQuery::new();
    placements
        .expect_scheduled_hotels()
        .withf(|request| {
            request.surface == Surface::hero() && request.count == 6 && request.company.is_none()
        })
        .times(1)
        .returning(|request| placement(request.surface, &[102, 101]));

    let (status, cache, body) = call(placements, "/api/v1/placements/hero").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache.as_deref(), Some(PRIVATE_NO_STORE));
    assert_eq!(body["surface"], "hero");
    assert_eq!(body["servedOn"], "2025-01-15");
    assert_eq!(body["hotels"][0]["id"], 102);
    assert_eq!(body["hotels"][1]["id"], 101);
}

#[rstest]
#[actix_web::test]
async fn explicit_count_and_company_reach_the_scheduler() {
    let mut placements = MockPlacementQuery::new();
    placements
        .expect_scheduled_hotels()
        .withf(|request| {
            request.count == 3 && request.company.as_ref().map(|c| c.as_str()) == Some("sk")
        })
        .returning(|request| placement(request.surface, &[201]));

    let (status, _, _) = call(placements, "/api/v1/placements/top-banner?company=SK&count=3").await;

    assert_eq!(status, StatusCode::OK);
}

#[rstest]
#[case::zero("/api/v1/placements/hero?count=0")]
#[case::too_many("/api/v1/placements/hero?count=101")]
#[case::not_a_number("/api/v1/placements/hero?count=lots")]
#[case::negative("/api/v1/placements/hero?count=-1")]
#[case::bad_surface("/api/v1/placements/Hero%20Banner")]
#[actix_web::test]
async fn invalid_parameters_are_rejected(#[case] uri: &str) {
    let mut placements = MockPlacementQuery::new();
    placements.expect_scheduled_hotels().times(0);

    let (status, _, body) = call(placements, uri).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
}

#[rstest]
#[actix_web::test]
async fn several_surfaces_are_deduplicated_in_request_order() {
    let mut placements = MockPlacementQuery::new();
    placements
        .expect_scheduled_surfaces()
        .withf(|surfaces, company, count| {
            surfaces == &vec![Surface::top_banner(), Surface::hero()]
                && company.is_none()
                && *count == 6
        })
        .times(1)
        .returning(|surfaces, _, _| {
            surfaces
                .into_iter()
                .map(|surface| placement(surface, &[1]))
                .collect()
        });

    let (status, _, body) = call(
        placements,
        "/api/v1/placements?surfaces=top-banner,%20hero,,top-banner",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["surface"], "top-banner");
    assert_eq!(body[1]["surface"], "hero");
}

#[rstest]
#[case::missing("/api/v1/placements")]
#[case::only_commas("/api/v1/placements?surfaces=,,")]
#[actix_web::test]
async fn empty_surface_list_is_rejected(#[case] uri: &str) {
    let mut placements = MockPlacementQuery::new();
    placements.expect_scheduled_surfaces().times(0);

    let (status, _, body) = call(placements, uri).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "surfaces");
}

#[rstest]
#[case(None, 10, Ok(10))]
#[case(Some(" 7 "), 10, Ok(7))]
#[case(Some(""), 4, Ok(4))]
#[case(Some("100"), 10, Ok(100))]
#[case(Some("0"), 10, Err(()))]
fn count_parsing(
    #[case] raw: Option<&str>,
    #[case] default: usize,
    #[case] expected: Result<usize, ()>,
) {
    assert_eq!(parse_count(raw, default).map_err(|_| ()), expected);
}
