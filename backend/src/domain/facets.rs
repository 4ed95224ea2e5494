//! Filter-option summaries (facets) over a visibility-scoped hotel set.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use super::brand_index::BrandIndex;
use super::catalogue::{Brand, Chain, Hotel, non_blank};

/// One selectable filter value with the number of hotels carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetOption {
    pub id: String,
    pub label: String,
    pub count: usize,
}

/// The four facet groups shown next to a hotel listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFacets {
    pub countries: Vec<FacetOption>,
    pub cities: Vec<FacetOption>,
    pub brands: Vec<FacetOption>,
    pub chains: Vec<FacetOption>,
}

impl CatalogFacets {
    /// True when all four groups are empty.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
            && self.cities.is_empty()
            && self.brands.is_empty()
            && self.chains.is_empty()
    }
}

/// Running tally for one facet dimension. The first label seen for an id
/// is kept.
#[derive(Default)]
struct Tally {
    entries: HashMap<String, FacetOption>,
}

impl Tally {
    fn bump(&mut self, id: String, label: &str) {
        self.entries
            .entry(id.clone())
            .or_insert_with(|| FacetOption {
                id,
                label: label.to_owned(),
                count: 0,
            })
            .count += 1;
    }

    fn by_count(self) -> Vec<FacetOption> {
        let mut options: Vec<_> = self.entries.into_values().collect();
        options.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| by_label(a, b))
        });
        options
    }

    fn by_label(self) -> Vec<FacetOption> {
        let mut options: Vec<_> = self.entries.into_values().collect();
        options.sort_by(by_label);
        options
    }
}

fn by_label(a: &FacetOption, b: &FacetOption) -> Ordering {
    a.label.cmp(&b.label).then_with(|| a.id.cmp(&b.id))
}

/// Count every dimension in a single pass over `hotels`.
///
/// Brand and chain options carry the local name, falling back to the
/// English one. Each hotel counts once per distinct brand it references and once per
/// distinct chain it reaches. A hotel lacking the code or the localized
/// label for a dimension is left out of that dimension only.
pub fn compute_facets(hotels: &[Hotel], index: &BrandIndex) -> CatalogFacets {
    let mut countries = Tally::default();
    let mut cities = Tally::default();
    let mut brands = Tally::default();
    let mut chains = Tally::default();

    for hotel in hotels {
        if let (Some(code), Some(label)) = (
            non_blank(hotel.country_code.as_deref()),
            non_blank(hotel.country_label.as_deref()),
        ) {
            countries.bump(code.to_owned(), label);
        }
        if let (Some(code), Some(label)) = (
            non_blank(hotel.city_code.as_deref()),
            non_blank(hotel.city_label.as_deref()),
        ) {
            cities.bump(code.to_owned(), label);
        }
        for brand_id in hotel.brands.as_slice() {
            if let Some(label) = index.brand(*brand_id).and_then(Brand::localized_label) {
                brands.bump(brand_id.to_string(), label);
            }
        }
        for chain_id in index.chain_ids_for(hotel) {
            if let Some(label) = index.chain(chain_id).and_then(Chain::localized_label) {
                chains.bump(chain_id.to_string(), label);
            }
        }
    }

    CatalogFacets {
        countries: countries.by_count(),
        cities: cities.by_count(),
        brands: brands.by_label(),
        chains: chains.by_label(),
    }
}
