//! Catalogue listing service.
//!
//! Produces render-ready hotel cards and the four facet groups for listing
//! pages, the promotion page and destination pages. All reads are scoped by
//! the visibility policy resolved from the caller's company code. Any
//! driven-port failure degrades the whole aggregation to an empty result.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::catalog_reader::{
    CardEnricher, CatalogPorts, CatalogueReadError, distinct_in_order, load_brand_index,
};
use super::catalogue::{Hotel, HotelCard, Region, RegionKind, SabreId};
use super::destination::resolve_destination;
use super::facets::{CatalogFacets, compute_facets};
use super::filter::HotelListFilter;
use super::ports::{CatalogQuery, DestinationListing, HotelListing, HotelQuery};
use super::visibility::{CompanyCode, SegmentPolicy, VisibilityPolicy};

/// Domain service implementing [`CatalogQuery`].
#[derive(Clone)]
pub struct CatalogService {
    ports: CatalogPorts,
    segments: SegmentPolicy,
}

impl CatalogService {
    /// Build the service over its driven ports and segment policy.
    pub fn new(ports: CatalogPorts, segments: SegmentPolicy) -> Self {
        Self { ports, segments }
    }

    async fn visible_hotels(
        &self,
        policy: VisibilityPolicy,
    ) -> Result<Vec<Hotel>, CatalogueReadError> {
        let mut hotels = self.ports.hotels.hotels(HotelQuery::all(policy)).await?;
        hotels.retain(|hotel| policy.admits(hotel));
        Ok(hotels)
    }

    async fn try_listing(
        &self,
        policy: VisibilityPolicy,
        filter: &HotelListFilter,
    ) -> Result<HotelListing, CatalogueReadError> {
        let hotels = self.visible_hotels(policy).await?;
        let enricher = CardEnricher::load(&self.ports, &hotels).await?;
        let facets = compute_facets(&hotels, enricher.index());
        let hotels = enricher.cards(
            hotels
                .iter()
                .filter(|hotel| filter.matches(hotel, enricher.index())),
        );
        Ok(HotelListing { hotels, facets })
    }

    async fn try_facets(&self, policy: VisibilityPolicy) -> Result<CatalogFacets, CatalogueReadError> {
        let hotels = self.visible_hotels(policy).await?;
        let index = load_brand_index(&self.ports, &hotels).await?;
        Ok(compute_facets(&hotels, &index))
    }

    async fn try_promotion_listing(
        &self,
        policy: VisibilityPolicy,
    ) -> Result<Vec<HotelCard>, CatalogueReadError> {
        let pool = distinct_in_order(self.ports.placements.promotion_pool().await?);
        if pool.is_empty() {
            return Ok(Vec::new());
        }
        let mut hotels = self
            .ports
            .hotels
            .hotels(HotelQuery::for_ids(policy, pool.clone()))
            .await?;
        hotels.retain(|hotel| policy.admits(hotel));

        let position: HashMap<SabreId, usize> = pool
            .iter()
            .enumerate()
            .map(|(index, id)| (*id, index))
            .collect();
        hotels.retain(|hotel| position.contains_key(&hotel.sabre_id));
        hotels.sort_by_key(|hotel| position.get(&hotel.sabre_id).copied());

        let enricher = CardEnricher::load(&self.ports, &hotels).await?;
        Ok(enricher.cards(&hotels))
    }

    async fn all_regions(&self) -> Result<Vec<Region>, CatalogueReadError> {
        let (cities, countries) = tokio::join!(
            self.ports.regions.regions(RegionKind::City),
            self.ports.regions.regions(RegionKind::Country)
        );
        let mut regions = cities?;
        regions.extend(countries?);
        Ok(regions)
    }
}

#[async_trait]
impl CatalogQuery for CatalogService {
    async fn listing(&self, company: Option<CompanyCode>, filter: HotelListFilter) -> HotelListing {
        let policy = self.segments.resolve(company.as_ref());
        match self.try_listing(policy, &filter).await {
            Ok(listing) => listing,
            Err(error) => {
                warn!(%error, vcc_only = policy.requires_vcc(), "hotel listing degraded to empty");
                HotelListing::default()
            }
        }
    }

    async fn facets(&self, company: Option<CompanyCode>) -> CatalogFacets {
        let policy = self.segments.resolve(company.as_ref());
        match self.try_facets(policy).await {
            Ok(facets) => facets,
            Err(error) => {
                warn!(%error, vcc_only = policy.requires_vcc(), "facets degraded to empty");
                CatalogFacets::default()
            }
        }
    }

    async fn promotion_listing(&self, company: Option<CompanyCode>) -> Vec<HotelCard> {
        let policy = self.segments.resolve(company.as_ref());
        match self.try_promotion_listing(policy).await {
            Ok(cards) => cards,
            Err(error) => {
                warn!(%error, vcc_only = policy.requires_vcc(), "promotion listing degraded to empty");
                Vec::new()
            }
        }
    }

    async fn destination_listing(
        &self,
        slug: &str,
        company: Option<CompanyCode>,
    ) -> Option<DestinationListing> {
        let regions = match self.all_regions().await {
            Ok(regions) => regions,
            Err(error) => {
                warn!(%error, slug, "destination regions unavailable");
                return None;
            }
        };
        let Some(destination) = resolve_destination(slug, &regions) else {
            debug!(slug, "destination slug did not resolve");
            return None;
        };
        let listing = self
            .listing(company, destination.listing_filter())
            .await;
        Some(DestinationListing {
            destination,
            listing,
        })
    }
}

#[cfg(test)]
#[path = "catalog_aggregator_tests.rs"]
mod tests;
