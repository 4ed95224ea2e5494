//! Diesel table definitions for the content store.
//!
//! The store is owned by the content management side; this service only
//! reads it. Definitions must match the live tables exactly. Several
//! columns were added over time and are therefore nullable even where the
//! domain would prefer otherwise.
//!
//! # Maintenance
//!
//! When the store changes, regenerate with `diesel print-schema` against a
//! read replica and re-apply the doc comments by hand.

diesel::table! {
    /// Hotel master rows.
    ///
    /// `brand_id`, `brand_id_2` and `brand_id_3` are free text: they may hold
    /// a single id, a comma list or a JSON-style array.
    hotels (sabre_id) {
        /// Primary key: supplier hotel identifier.
        sabre_id -> Int8,
        slug -> Nullable<Text>,
        /// Local-language display name.
        name_ko -> Nullable<Text>,
        name_en -> Nullable<Text>,
        city_code -> Nullable<Text>,
        /// Local-language city label.
        city_ko -> Nullable<Text>,
        country_code -> Nullable<Text>,
        /// Local-language country label.
        country_ko -> Nullable<Text>,
        address -> Nullable<Text>,
        brand_id -> Nullable<Text>,
        brand_id_2 -> Nullable<Text>,
        brand_id_3 -> Nullable<Text>,
        chain_id -> Nullable<Int8>,
        /// `false` hides the hotel; `NULL` counts as published.
        publish -> Nullable<Bool>,
        /// Participates in the virtual-card programme.
        vcc -> Bool,
    }
}

diesel::table! {
    /// Hotel brands. Every brand belongs to one chain.
    hotel_brands (brand_id) {
        brand_id -> Int8,
        chain_id -> Int8,
        name_en -> Nullable<Text>,
        name_ko -> Nullable<Text>,
        /// `active` or `inactive`.
        status -> Text,
        sort_order -> Nullable<Int4>,
    }
}

diesel::table! {
    /// Hotel chains.
    hotel_chains (chain_id) {
        chain_id -> Int8,
        slug -> Text,
        name_en -> Nullable<Text>,
        name_ko -> Nullable<Text>,
        /// `active` or `inactive`.
        status -> Text,
    }
}

diesel::table! {
    /// City and country rows used to resolve destination slugs.
    regions (city_code) {
        city_code -> Text,
        /// `city` or `country`.
        region_type -> Text,
        /// `active` or `inactive`.
        status -> Text,
        city_ko -> Nullable<Text>,
        city_en -> Nullable<Text>,
        city_slug -> Nullable<Text>,
        country_code -> Nullable<Text>,
        country_ko -> Nullable<Text>,
        country_en -> Nullable<Text>,
        country_slug -> Nullable<Text>,
        area_slug -> Nullable<Text>,
        area_ko -> Nullable<Text>,
        city_sort_order -> Nullable<Int4>,
        country_sort_order -> Nullable<Int4>,
    }
}

diesel::table! {
    /// Images attached to hotels and other entities.
    hotel_media (id) {
        id -> Int8,
        /// Owner entity key; hotel ids stored as text.
        owner_key -> Text,
        /// Display order within one owner; lowest is the representative image.
        image_seq -> Int4,
        public_url -> Text,
        alt_text -> Nullable<Text>,
    }
}

diesel::table! {
    /// Editorially scheduled hotels per display surface.
    feature_slots (id) {
        id -> Int8,
        /// Surface slug, for example `hero` or `top-banner`.
        surface -> Text,
        sabre_id -> Int8,
        /// Rank on the surface; lower shows first.
        slot_key -> Int4,
        /// Inclusive first day, evaluated in UTC+9.
        start_date -> Nullable<Date>,
        /// Inclusive last day, evaluated in UTC+9.
        end_date -> Nullable<Date>,
    }
}

diesel::table! {
    /// General promotion pool.
    promotion_hotels (id) {
        id -> Int8,
        sabre_id -> Int8,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    hotels,
    hotel_brands,
    hotel_chains,
    regions,
    hotel_media,
    feature_slots,
    promotion_hotels,
);
