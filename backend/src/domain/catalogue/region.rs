//! Region rows used for destination resolution.

use std::fmt;
use std::str::FromStr;

use super::CatalogueValidationError;
use super::brand::EntityStatus;

/// Discriminator for region rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    City,
    Country,
}

impl RegionKind {
    /// Stored `region_type` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::City => "city",
            Self::Country => "country",
        }
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegionKind {
    type Err = CatalogueValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "city" => Ok(Self::City),
            "country" => Ok(Self::Country),
            other => Err(CatalogueValidationError::UnknownValue {
                field: "region_type",
                value: other.to_owned(),
            }),
        }
    }
}

/// Region row keyed by city code.
///
/// Slug and label columns were added to the store over time, so every one
/// of them is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub city_code: String,
    pub kind: RegionKind,
    pub status: EntityStatus,
    pub city_label: Option<String>,
    pub city_label_en: Option<String>,
    pub city_slug: Option<String>,
    pub country_code: Option<String>,
    pub country_label: Option<String>,
    pub country_label_en: Option<String>,
    pub country_slug: Option<String>,
    pub area_slug: Option<String>,
    pub area_label: Option<String>,
    pub city_sort_order: Option<i32>,
    pub country_sort_order: Option<i32>,
}

impl Region {
    /// Minimal active region used as a starting point by adapters and tests.
    pub fn new(city_code: impl Into<String>, kind: RegionKind) -> Self {
        Self {
            city_code: city_code.into(),
            kind,
            status: EntityStatus::Active,
            city_label: None,
            city_label_en: None,
            city_slug: None,
            country_code: None,
            country_label: None,
            country_label_en: None,
            country_slug: None,
            area_slug: None,
            area_label: None,
            city_sort_order: None,
            country_sort_order: None,
        }
    }
}
