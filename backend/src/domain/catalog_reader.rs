//! Shared read plumbing for the catalogue services.
//!
//! [`CatalogPorts`] bundles the driven ports. [`CardEnricher`] performs the
//! media and brand lookups that turn hotel rows into cards: media and brands
//! are fetched concurrently, chains only once the brand rows say which chain
//! ids are needed.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use thiserror::Error;

use super::brand_index::BrandIndex;
use super::catalogue::{
    Hotel, HotelCard, MediaAsset, MediaOwnerKey, SabreId, first_image_per_entity, non_blank,
};
use super::ports::{
    BrandRepository, BrandRepositoryError, FixtureBrandRepository, FixtureHotelRepository,
    FixtureMediaRepository, FixturePlacementRepository, FixtureRegionRepository,
    HotelRepository, HotelRepositoryError, MediaRepository, MediaRepositoryError,
    PlacementRepository, PlacementRepositoryError, RegionRepository, RegionRepositoryError,
};

/// Driven ports consumed by the catalogue services.
#[derive(Clone)]
pub struct CatalogPorts {
    pub hotels: Arc<dyn HotelRepository>,
    pub brands: Arc<dyn BrandRepository>,
    pub media: Arc<dyn MediaRepository>,
    pub placements: Arc<dyn PlacementRepository>,
    pub regions: Arc<dyn RegionRepository>,
}

impl CatalogPorts {
    /// Ports backed by the empty fixture implementations.
    pub fn fixtures() -> Self {
        Self {
            hotels: Arc::new(FixtureHotelRepository),
            brands: Arc::new(FixtureBrandRepository),
            media: Arc::new(FixtureMediaRepository),
            placements: Arc::new(FixturePlacementRepository),
            regions: Arc::new(FixtureRegionRepository),
        }
    }
}

/// Any driven-port failure met while assembling a read model.
///
/// Never leaves the domain: services log it and degrade to an empty result.
#[derive(Debug, Error)]
pub(crate) enum CatalogueReadError {
    #[error(transparent)]
    Hotels(#[from] HotelRepositoryError),
    #[error(transparent)]
    Brands(#[from] BrandRepositoryError),
    #[error(transparent)]
    Media(#[from] MediaRepositoryError),
    #[error(transparent)]
    Placements(#[from] PlacementRepositoryError),
    #[error(transparent)]
    Regions(#[from] RegionRepositoryError),
}

/// Brand index and representative images for a set of hotels.
pub(crate) struct CardEnricher {
    index: BrandIndex,
    images: HashMap<MediaOwnerKey, MediaAsset>,
}

impl CardEnricher {
    /// Fetch media and brand data for `hotels`.
    pub(crate) async fn load(
        ports: &CatalogPorts,
        hotels: &[Hotel],
    ) -> Result<Self, CatalogueReadError> {
        let (images, index) = tokio::join!(
            load_first_images(ports, hotels),
            load_brand_index(ports, hotels)
        );
        Ok(Self {
            index: index?,
            images: images?,
        })
    }

    pub(crate) fn index(&self) -> &BrandIndex {
        &self.index
    }

    pub(crate) fn card(&self, hotel: &Hotel) -> HotelCard {
        HotelCard {
            id: hotel.sabre_id,
            slug: owned(hotel.slug.as_deref()),
            name_local: owned(hotel.name_local.as_deref()),
            name_en: owned(hotel.name_en.as_deref()),
            city_label: owned(hotel.city_label.as_deref()),
            address: owned(hotel.address.as_deref()),
            image_url: self
                .images
                .get(&hotel.media_key())
                .map(|asset| asset.url.clone()),
            brand_labels: self.index.brand_labels(hotel),
            chain_label: self.index.chain_label(hotel),
        }
    }

    pub(crate) fn cards<'a>(&self, hotels: impl IntoIterator<Item = &'a Hotel>) -> Vec<HotelCard> {
        hotels.into_iter().map(|hotel| self.card(hotel)).collect()
    }
}

/// Brands for every referenced id, then chains for every chain those brands
/// or the hotels themselves point at.
pub(crate) async fn load_brand_index(
    ports: &CatalogPorts,
    hotels: &[Hotel],
) -> Result<BrandIndex, CatalogueReadError> {
    let brand_ids: Vec<_> = hotels
        .iter()
        .flat_map(|hotel| hotel.brands.as_slice().iter().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let brands = if brand_ids.is_empty() {
        Vec::new()
    } else {
        ports.brands.brands(&brand_ids).await?
    };
    let index = BrandIndex::new(brands, Vec::new());

    let mut chain_ids = index.brand_chain_ids();
    chain_ids.extend(hotels.iter().filter_map(|hotel| hotel.chain_id));
    if chain_ids.is_empty() {
        return Ok(index);
    }
    let chain_ids: Vec<_> = chain_ids.into_iter().collect();
    let chains = ports.brands.chains(&chain_ids).await?;
    Ok(index.with_chains(chains))
}

async fn load_first_images(
    ports: &CatalogPorts,
    hotels: &[Hotel],
) -> Result<HashMap<MediaOwnerKey, MediaAsset>, CatalogueReadError> {
    if hotels.is_empty() {
        return Ok(HashMap::new());
    }
    let keys: Vec<MediaOwnerKey> = hotels.iter().map(Hotel::media_key).collect();
    let rows = ports.media.media(&keys).await?;
    Ok(first_image_per_entity(rows))
}

/// Drop repeated ids, keeping first occurrences in order.
pub(crate) fn distinct_in_order(ids: Vec<SabreId>) -> Vec<SabreId> {
    let mut seen = BTreeSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

fn owned(value: Option<&str>) -> Option<String> {
    non_blank(value).map(str::to_owned)
}
