//! Hotel rows and their brand references.

use std::collections::BTreeSet;

use super::media::MediaOwnerKey;
use crate::domain::identifiers::parse_multi_id_ordered;

/// External hotel key (the inventory provider's property id).
pub type SabreId = i64;
/// Brand key.
pub type BrandId = i64;
/// Chain key.
pub type ChainId = i64;

/// Tri-state publication flag; an absent value counts as published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublishState {
    Published,
    Hidden,
    #[default]
    Unset,
}

impl PublishState {
    /// Only an explicit `false` hides a hotel.
    pub fn is_visible(self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

impl From<Option<bool>> for PublishState {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Published,
            Some(false) => Self::Hidden,
            None => Self::Unset,
        }
    }
}

/// Ordered list of up to three distinct brand references, primary first.
///
/// # Examples
/// ```
/// use backend::domain::BrandRefs;
///
/// let refs = BrandRefs::from_columns([Some("5"), Some("[7, 5]"), None]);
/// assert_eq!(refs.as_slice(), &[5, 7]);
/// assert_eq!(refs.primary(), Some(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BrandRefs(Vec<BrandId>);

impl BrandRefs {
    /// Maximum number of brands a hotel can be listed under.
    pub const MAX: usize = 3;

    /// Build references from already-parsed ids.
    pub fn new(ids: impl IntoIterator<Item = BrandId>) -> Self {
        let mut refs = Vec::with_capacity(Self::MAX);
        for id in ids {
            if refs.len() == Self::MAX {
                break;
            }
            if !refs.contains(&id) {
                refs.push(id);
            }
        }
        Self(refs)
    }

    /// Build references from the raw `brand_id`, `brand_id_2`, `brand_id_3`
    /// columns, each of which may hold a multi-value encoding.
    pub fn from_columns<'a>(columns: impl IntoIterator<Item = Option<&'a str>>) -> Self {
        Self::new(columns.into_iter().flat_map(parse_multi_id_ordered))
    }

    /// The primary brand, if any.
    pub fn primary(&self) -> Option<BrandId> {
        self.0.first().copied()
    }

    /// Ids in reference order, primary first.
    pub fn as_slice(&self) -> &[BrandId] {
        self.0.as_slice()
    }

    /// True when the hotel references no brand.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ids as a set, for intersection checks.
    pub fn to_set(&self) -> BTreeSet<BrandId> {
        self.0.iter().copied().collect()
    }
}

/// Hotel row as read from the content store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotel {
    pub sabre_id: SabreId,
    pub slug: Option<String>,
    pub name_local: Option<String>,
    pub name_en: Option<String>,
    pub city_code: Option<String>,
    pub city_label: Option<String>,
    pub country_code: Option<String>,
    pub country_label: Option<String>,
    pub address: Option<String>,
    pub brands: BrandRefs,
    pub chain_id: Option<ChainId>,
    pub publish: PublishState,
    pub vcc: bool,
}

impl Hotel {
    /// Minimal hotel used as a starting point by adapters and tests.
    pub fn new(sabre_id: SabreId) -> Self {
        Self {
            sabre_id,
            slug: None,
            name_local: None,
            name_en: None,
            city_code: None,
            city_label: None,
            country_code: None,
            country_label: None,
            address: None,
            brands: BrandRefs::default(),
            chain_id: None,
            publish: PublishState::Unset,
            vcc: false,
        }
    }

    /// Key under which this hotel's images are stored.
    pub fn media_key(&self) -> MediaOwnerKey {
        MediaOwnerKey::from(self.sabre_id)
    }
}
