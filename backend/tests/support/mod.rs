//! Shared harness for the HTTP integration suites.
//!
//! [`InMemoryCatalogue`] implements every driven port over a small Japanese
//! and Korean catalogue, so requests exercise the real services and
//! handlers without a database.

use std::sync::Arc;

use actix_web::dev::ServiceResponse;
use actix_web::{App, test, web};
use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use serde_json::Value;

use backend::Trace;
use backend::domain::ports::{
    BrandRepository, BrandRepositoryError, HotelQuery, HotelRepository, HotelRepositoryError,
    MediaRepository, MediaRepositoryError, PlacementRepository, PlacementRepositoryError,
    RegionRepository, RegionRepositoryError,
};
use backend::domain::{
    Brand, BrandId, BrandRefs, CatalogPorts, CatalogService, Chain, ChainId, EntityStatus,
    FeatureSlot, Hotel, MediaAsset, MediaOwnerKey, PublishState, Region, RegionKind, SabreId,
    SegmentPolicy, SlotScheduler, SlotWindow, Surface,
};
use backend::inbound::http::catalogue::{get_destination, get_facets, list_hotels, list_promotion};
use backend::inbound::http::placements::{get_placement, list_placements};
use backend::inbound::http::state::HttpState;

/// Content store rows served by the in-memory ports.
#[derive(Clone, Default)]
pub struct InMemoryCatalogue {
    pub hotels: Vec<Hotel>,
    pub brands: Vec<Brand>,
    pub chains: Vec<Chain>,
    pub media: Vec<MediaAsset>,
    pub slots: Vec<FeatureSlot>,
    pub promotion_pool: Vec<SabreId>,
    pub regions: Vec<Region>,
}

#[async_trait]
impl HotelRepository for InMemoryCatalogue {
    async fn hotels(&self, query: HotelQuery) -> Result<Vec<Hotel>, HotelRepositoryError> {
        let mut rows: Vec<Hotel> = self
            .hotels
            .iter()
            .filter(|hotel| query.policy.admits(hotel))
            .filter(|hotel| {
                query
                    .ids
                    .as_ref()
                    .is_none_or(|ids| ids.contains(&hotel.sabre_id))
            })
            .cloned()
            .collect();
        rows.sort_by_key(|hotel| hotel.sabre_id);
        Ok(rows)
    }
}

#[async_trait]
impl BrandRepository for InMemoryCatalogue {
    async fn brands(&self, ids: &[BrandId]) -> Result<Vec<Brand>, BrandRepositoryError> {
        Ok(self
            .brands
            .iter()
            .filter(|brand| ids.contains(&brand.brand_id))
            .cloned()
            .collect())
    }

    async fn chains(&self, ids: &[ChainId]) -> Result<Vec<Chain>, BrandRepositoryError> {
        Ok(self
            .chains
            .iter()
            .filter(|chain| ids.contains(&chain.chain_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl MediaRepository for InMemoryCatalogue {
    async fn media(
        &self,
        owner_keys: &[MediaOwnerKey],
    ) -> Result<Vec<MediaAsset>, MediaRepositoryError> {
        Ok(self
            .media
            .iter()
            .filter(|asset| owner_keys.contains(&asset.owner_key))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl PlacementRepository for InMemoryCatalogue {
    async fn feature_slots(
        &self,
        surface: &Surface,
    ) -> Result<Vec<FeatureSlot>, PlacementRepositoryError> {
        Ok(self
            .slots
            .iter()
            .filter(|slot| &slot.surface == surface)
            .cloned()
            .collect())
    }

    async fn promotion_pool(&self) -> Result<Vec<SabreId>, PlacementRepositoryError> {
        Ok(self.promotion_pool.clone())
    }
}

#[async_trait]
impl RegionRepository for InMemoryCatalogue {
    async fn regions(&self, kind: RegionKind) -> Result<Vec<Region>, RegionRepositoryError> {
        Ok(self
            .regions
            .iter()
            .filter(|region| region.kind == kind)
            .cloned()
            .collect())
    }
}

/// Clock pinned to one instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// 2025-01-15 03:00 UTC, which is midday on the 15th in UTC+9.
pub fn mid_january() -> FixedClock {
    FixedClock(
        Utc.with_ymd_and_hms(2025, 1, 15, 3, 0, 0)
            .single()
            .expect("valid fixture timestamp"),
    )
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

struct HotelSeed<'a> {
    id: SabreId,
    country: (&'a str, &'a str),
    city: (&'a str, &'a str),
    brands: &'a [BrandId],
    publish: PublishState,
    vcc: bool,
}

fn hotel(seed: HotelSeed<'_>) -> Hotel {
    let mut hotel = Hotel::new(seed.id);
    hotel.slug = Some(format!("hotel-{}", seed.id));
    hotel.name_en = Some(format!("Hotel {}", seed.id));
    hotel.country_code = Some(seed.country.0.to_owned());
    hotel.country_label = Some(seed.country.1.to_owned());
    hotel.city_code = Some(seed.city.0.to_owned());
    hotel.city_label = Some(seed.city.1.to_owned());
    hotel.brands = BrandRefs::new(seed.brands.iter().copied());
    hotel.publish = seed.publish;
    hotel.vcc = seed.vcc;
    hotel
}

fn brand(brand_id: BrandId, chain_id: ChainId, name: &str, status: EntityStatus) -> Brand {
    Brand {
        brand_id,
        chain_id,
        name_en: Some(name.to_owned()),
        name_local: None,
        status,
        sort_order: None,
    }
}

fn chain(chain_id: ChainId, name: &str) -> Chain {
    Chain {
        chain_id,
        slug: name.to_lowercase(),
        name_en: Some(name.to_owned()),
        name_local: None,
        status: EntityStatus::Active,
    }
}

fn image(owner: SabreId, seq: i32) -> MediaAsset {
    MediaAsset {
        owner_key: MediaOwnerKey::from(owner),
        image_seq: seq,
        url: format!("https://cdn.example.test/{owner}/{seq}.jpg"),
        alt: None,
    }
}

fn slot(surface: Surface, sabre_id: SabreId, slot_key: i32, window: SlotWindow) -> FeatureSlot {
    FeatureSlot {
        surface,
        sabre_id,
        slot_key,
        window,
    }
}

fn city(code: &str, slug: &str, label: &str, country: (&str, &str, &str)) -> Region {
    let mut region = Region::new(code, RegionKind::City);
    region.city_slug = Some(slug.to_owned());
    region.city_label = Some(label.to_owned());
    region.country_code = Some(country.0.to_owned());
    region.country_slug = Some(country.1.to_owned());
    region.country_label = Some(country.2.to_owned());
    region
}

const JAPAN: (&str, &str) = ("JP", "일본");
const KOREA: (&str, &str) = ("KR", "대한민국");

/// The shared sample catalogue.
///
/// | id  | city  | brands | publish   | vcc   |
/// |-----|-------|--------|-----------|-------|
/// | 101 | TYO   | 5, 7   | published | no    |
/// | 102 | TYO   | 5      | unset     | yes   |
/// | 103 | OSA   | 7      | published | yes   |
/// | 104 | SEL   | 9      | hidden    | yes   |
/// | 105 | SEL   | none   | unset     | no    |
pub fn sample_catalogue() -> InMemoryCatalogue {
    let hotels = vec![
        hotel(HotelSeed {
            id: 101,
            country: JAPAN,
            city: ("TYO", "도쿄"),
            brands: &[5, 7],
            publish: PublishState::Published,
            vcc: false,
        }),
        hotel(HotelSeed {
            id: 102,
            country: JAPAN,
            city: ("TYO", "도쿄"),
            brands: &[5],
            publish: PublishState::Unset,
            vcc: true,
        }),
        hotel(HotelSeed {
            id: 103,
            country: JAPAN,
            city: ("OSA", "오사카"),
            brands: &[7],
            publish: PublishState::Published,
            vcc: true,
        }),
        hotel(HotelSeed {
            id: 104,
            country: KOREA,
            city: ("SEL", "서울"),
            brands: &[9],
            publish: PublishState::Hidden,
            vcc: true,
        }),
        hotel(HotelSeed {
            id: 105,
            country: KOREA,
            city: ("SEL", "서울"),
            brands: &[],
            publish: PublishState::Unset,
            vcc: false,
        }),
    ];
    let open = SlotWindow::default();
    let expired = SlotWindow::new(None, Some(date(2025, 1, 10)));

    InMemoryCatalogue {
        hotels,
        brands: vec![
            brand(5, 50, "Park Hyatt", EntityStatus::Active),
            brand(7, 70, "Edition", EntityStatus::Active),
            brand(9, 50, "Retired Brand", EntityStatus::Inactive),
        ],
        chains: vec![chain(50, "Hyatt"), chain(70, "Marriott")],
        media: vec![image(101, 2), image(101, 1), image(103, 1)],
        slots: vec![
            slot(Surface::hero(), 104, 0, open),
            slot(Surface::hero(), 103, 1, open),
            slot(Surface::hero(), 101, 2, expired),
            slot(Surface::hero(), 102, 3, open),
            slot(Surface::top_banner(), 105, 1, open),
        ],
        promotion_pool: vec![103, 102, 101, 103],
        regions: vec![
            city("TYO", "tokyo", "도쿄", ("JP", "japan", "일본")),
            city("OSA", "osaka", "오사카", ("JP", "japan", "일본")),
            city("SEL", "seoul", "서울", ("KR", "korea", "대한민국")),
        ],
    }
}

/// HTTP state wiring the real services over `catalogue`.
pub fn http_state(catalogue: InMemoryCatalogue, clock: FixedClock) -> HttpState {
    let store = Arc::new(catalogue);
    let ports = CatalogPorts {
        hotels: store.clone(),
        brands: store.clone(),
        media: store.clone(),
        placements: store.clone(),
        regions: store,
    };
    let policy = SegmentPolicy::default();
    let catalog = CatalogService::new(ports.clone(), policy.clone());
    let scheduler = SlotScheduler::new(ports, policy, Arc::new(clock));
    HttpState::new(Arc::new(catalog), Arc::new(scheduler))
}

/// Build the traced `/api/v1` app and issue one GET.
pub async fn get(state: HttpState, uri: &str) -> ServiceResponse {
    let app = test::init_service(
        App::new().app_data(web::Data::new(state)).wrap(Trace).service(
            web::scope("/api/v1")
                .service(get_facets)
                .service(list_hotels)
                .service(list_promotion)
                .service(get_destination)
                .service(list_placements)
                .service(get_placement),
        ),
    )
    .await;
    test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await
}

/// Card ids of a JSON array of hotel cards.
pub fn card_ids(cards: &Value) -> Vec<i64> {
    cards
        .as_array()
        .expect("card array")
        .iter()
        .filter_map(|card| card["id"].as_i64())
        .collect()
}
