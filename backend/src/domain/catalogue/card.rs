//! Render-ready hotel card projection.

use serde::Serialize;

use super::hotel::SabreId;

/// Hotel card consumed by listing pages and promotional surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelCard {
    pub id: SabreId,
    pub slug: Option<String>,
    pub name_local: Option<String>,
    pub name_en: Option<String>,
    pub city_label: Option<String>,
    pub address: Option<String>,
    pub image_url: Option<String>,
    /// Resolved brand labels, display label first. Never blank entries.
    pub brand_labels: Vec<String>,
    pub chain_label: Option<String>,
}
