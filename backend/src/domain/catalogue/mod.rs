//! Hotel catalogue domain types.
//!
//! These types model the read-only rows owned by the content store (hotels,
//! brands, chains, regions, media, feature slots) and the transient card
//! projections derived from them. Nothing in this module is persisted by the
//! backend.

use std::fmt;

mod brand;
mod card;
mod hotel;
mod media;
mod placement;
mod region;


pub use brand::{Brand, Chain, EntityStatus};
pub use card::HotelCard;
pub use hotel::{BrandId, BrandRefs, ChainId, Hotel, PublishState, SabreId};
pub use media::{MediaAsset, MediaOwnerKey, first_image_per_entity};
pub use placement::{FeatureSlot, SlotWindow, Surface};
pub use region::{Region, RegionKind};

/// Validation errors returned by catalogue constructors and parsers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueValidationError {
    InvalidSlug { field: &'static str },
    EmptyField { field: &'static str },
    UnknownValue { field: &'static str, value: String },
}

impl fmt::Display for CatalogueValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSlug { field } => write!(
                f,
                "{field} must contain lowercase ASCII letters, digits, and hyphens"
            ),
            Self::EmptyField { field } => write!(f, "{field} must not be empty"),
            Self::UnknownValue { field, value } => {
                write!(f, "{field} has unsupported value '{value}'")
            }
        }
    }
}

impl std::error::Error for CatalogueValidationError {}

/// Return the trimmed value when it carries any text.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}
