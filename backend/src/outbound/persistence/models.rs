//! Internal Diesel row structs for content-store reads.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Each repository converts them into
//! domain types before returning.

use chrono::NaiveDate;
use diesel::prelude::*;

use super::schema::{feature_slots, hotel_brands, hotel_chains, hotel_media, hotels, regions};

/// Row struct for reading from the hotels table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = hotels)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct HotelRow {
    pub sabre_id: i64,
    pub slug: Option<String>,
    pub name_ko: Option<String>,
    pub name_en: Option<String>,
    pub city_code: Option<String>,
    pub city_ko: Option<String>,
    pub country_code: Option<String>,
    pub country_ko: Option<String>,
    pub address: Option<String>,
    pub brand_id: Option<String>,
    pub brand_id_2: Option<String>,
    pub brand_id_3: Option<String>,
    pub chain_id: Option<i64>,
    pub publish: Option<bool>,
    pub vcc: bool,
}

/// Row struct for reading from the hotel_brands table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = hotel_brands)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BrandRow {
    pub brand_id: i64,
    pub chain_id: i64,
    pub name_en: Option<String>,
    pub name_ko: Option<String>,
    pub status: String,
    pub sort_order: Option<i32>,
}

/// Row struct for reading from the hotel_chains table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = hotel_chains)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ChainRow {
    pub chain_id: i64,
    pub slug: String,
    pub name_en: Option<String>,
    pub name_ko: Option<String>,
    pub status: String,
}

/// Row struct for reading from the regions table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = regions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RegionRow {
    pub city_code: String,
    pub region_type: String,
    pub status: String,
    pub city_ko: Option<String>,
    pub city_en: Option<String>,
    pub city_slug: Option<String>,
    pub country_code: Option<String>,
    pub country_ko: Option<String>,
    pub country_en: Option<String>,
    pub country_slug: Option<String>,
    pub area_slug: Option<String>,
    pub area_ko: Option<String>,
    pub city_sort_order: Option<i32>,
    pub country_sort_order: Option<i32>,
}

/// Row struct for reading from the hotel_media table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = hotel_media)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MediaRow {
    pub owner_key: String,
    pub image_seq: i32,
    pub public_url: String,
    pub alt_text: Option<String>,
}

/// Row struct for reading from the feature_slots table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = feature_slots)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FeatureSlotRow {
    pub surface: String,
    pub sabre_id: i64,
    pub slot_key: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
