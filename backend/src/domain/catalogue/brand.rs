//! Brand and chain rows.

use std::str::FromStr;

use super::hotel::{BrandId, ChainId};
use super::{CatalogueValidationError, non_blank};

/// Activation status shared by brands, chains and regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityStatus {
    Active,
    Inactive,
}

impl EntityStatus {
    /// Whether the row may be shown or counted.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl FromStr for EntityStatus {
    type Err = CatalogueValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(CatalogueValidationError::UnknownValue {
                field: "status",
                value: other.to_owned(),
            }),
        }
    }
}

/// Brand row. Every brand belongs to exactly one chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brand {
    pub brand_id: BrandId,
    pub chain_id: ChainId,
    pub name_en: Option<String>,
    pub name_local: Option<String>,
    pub status: EntityStatus,
    pub sort_order: Option<i32>,
}

impl Brand {
    /// Display label, preferring the English marketing name.
    pub fn label(&self) -> Option<&str> {
        non_blank(self.name_en.as_deref()).or_else(|| non_blank(self.name_local.as_deref()))
    }

    /// Facet label, preferring the local name like country and city facets.
    pub fn localized_label(&self) -> Option<&str> {
        non_blank(self.name_local.as_deref()).or_else(|| non_blank(self.name_en.as_deref()))
    }
}

/// Chain row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub chain_id: ChainId,
    pub slug: String,
    pub name_en: Option<String>,
    pub name_local: Option<String>,
    pub status: EntityStatus,
}

impl Chain {
    /// Display label, preferring the English marketing name.
    pub fn label(&self) -> Option<&str> {
        non_blank(self.name_en.as_deref()).or_else(|| non_blank(self.name_local.as_deref()))
    }

    /// Facet label, preferring the local name like country and city facets.
    pub fn localized_label(&self) -> Option<&str> {
        non_blank(self.name_local.as_deref()).or_else(|| non_blank(self.name_en.as_deref()))
    }
}
