//! Feature slots: scheduled placements of a hotel on a display surface.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use super::CatalogueValidationError;
use super::hotel::SabreId;
use crate::domain::slug::is_valid_slug;

/// Named display surface such as `hero` or `top-banner`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Surface(String);

impl Surface {
    pub const HERO: &'static str = "hero";
    pub const TOP_BANNER: &'static str = "top-banner";

    /// Validate a surface name.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::Surface;
    ///
    /// assert!(Surface::new("top-banner").is_ok());
    /// assert!(Surface::new("Top Banner").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, CatalogueValidationError> {
        let value = value.into();
        if !is_valid_slug(&value) {
            return Err(CatalogueValidationError::InvalidSlug { field: "surface" });
        }
        Ok(Self(value))
    }

    /// Main carousel on the landing page.
    pub fn hero() -> Self {
        Self(Self::HERO.to_owned())
    }

    /// Banner strip above the listing.
    pub fn top_banner() -> Self {
        Self(Self::TOP_BANNER.to_owned())
    }

    /// Surface name as stored in `feature_slots`.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Inclusive, date-only activation window. Missing bounds are open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlotWindow {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl SlotWindow {
    pub const fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// A window with no bounds is always active.
    pub fn is_active_on(&self, day: NaiveDate) -> bool {
        let started = self.start.is_none_or(|start| start <= day);
        let not_ended = self.end.is_none_or(|end| end >= day);
        started && not_ended
    }
}

/// One scheduled (hotel, surface, order, window) assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSlot {
    pub surface: Surface,
    pub sabre_id: SabreId,
    /// Display order within the surface, ascending.
    pub slot_key: i32,
    pub window: SlotWindow,
}
