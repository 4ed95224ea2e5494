//! Driving port for catalogue listings.
//!
//! Every operation degrades instead of failing: a store outage yields an
//! empty listing, never an error page. Inbound adapters therefore receive
//! plain values rather than `Result`s.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{CatalogFacets, CompanyCode, Destination, HotelCard, HotelListFilter};

/// Render-ready hotel list plus the facets of the unfiltered set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelListing {
    pub hotels: Vec<HotelCard>,
    pub facets: CatalogFacets,
}

/// Listing for a resolved destination page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationListing {
    pub destination: Destination,
    #[serde(flatten)]
    pub listing: HotelListing,
}

/// Domain use-case port for catalogue pages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogQuery: Send + Sync {
    /// Hotel cards matching `filter`, with facets over every visible hotel.
    async fn listing(&self, company: Option<CompanyCode>, filter: HotelListFilter)
    -> HotelListing;

    /// Facets only.
    async fn facets(&self, company: Option<CompanyCode>) -> CatalogFacets;

    /// Cards for the promotion pool, in pool order.
    async fn promotion_listing(&self, company: Option<CompanyCode>) -> Vec<HotelCard>;

    /// Listing narrowed to a destination, or `None` when the slug does not
    /// resolve.
    async fn destination_listing(
        &self,
        slug: &str,
        company: Option<CompanyCode>,
    ) -> Option<DestinationListing>;
}
