//! Brand and chain lookups used to label hotels.
//!
//! Inactive brands and chains are indexed as absent: they contribute no
//! label, no facet entry, and no chain reach.

use std::collections::{BTreeSet, HashMap};

use super::catalogue::{Brand, BrandId, Chain, ChainId, Hotel};

/// Last-resort labels derived from the hotel's own name, checked in order.
///
/// Patterns are matched against the lowercased English and local names.
const KEYWORD_LABELS: &[(&str, &str)] = &[
    ("four seasons", "Four Seasons"),
    ("포시즌스", "Four Seasons"),
    ("ritz-carlton", "The Ritz-Carlton"),
    ("ritz carlton", "The Ritz-Carlton"),
    ("리츠칼튼", "The Ritz-Carlton"),
    ("mandarin oriental", "Mandarin Oriental"),
    ("peninsula", "The Peninsula"),
    ("rosewood", "Rosewood"),
    ("park hyatt", "Park Hyatt"),
    ("st. regis", "St. Regis"),
    ("st regis", "St. Regis"),
    ("conrad", "Conrad"),
    ("waldorf astoria", "Waldorf Astoria"),
    ("six senses", "Six Senses"),
    ("banyan tree", "Banyan Tree"),
    ("shangri-la", "Shangri-La"),
];

/// Derive a brand label from the hotel's name when no brand or chain row
/// supplies one.
///
/// # Examples
/// ```
/// use backend::domain::{Hotel, keyword_brand_label};
///
/// let mut hotel = Hotel::new(1);
/// hotel.name_en = Some("Park Hyatt Tokyo".into());
/// assert_eq!(keyword_brand_label(&hotel), Some("Park Hyatt"));
/// ```
pub fn keyword_brand_label(hotel: &Hotel) -> Option<&'static str> {
    let names: Vec<String> = [hotel.name_en.as_deref(), hotel.name_local.as_deref()]
        .into_iter()
        .flatten()
        .map(str::to_lowercase)
        .collect();
    KEYWORD_LABELS
        .iter()
        .find(|(pattern, _)| names.iter().any(|name| name.contains(pattern)))
        .map(|(_, label)| *label)
}

/// Active brands and chains keyed by id.
#[derive(Debug, Clone, Default)]
pub struct BrandIndex {
    brands: HashMap<BrandId, Brand>,
    chains: HashMap<ChainId, Chain>,
}

impl BrandIndex {
    /// Index the active rows; inactive ones are dropped.
    pub fn new(brands: Vec<Brand>, chains: Vec<Chain>) -> Self {
        Self {
            brands: brands
                .into_iter()
                .filter(|brand| brand.status.is_active())
                .map(|brand| (brand.brand_id, brand))
                .collect(),
            chains: chains
                .into_iter()
                .filter(|chain| chain.status.is_active())
                .map(|chain| (chain.chain_id, chain))
                .collect(),
        }
    }

    /// Replace the chain table once the dependent chain fetch completes.
    pub fn with_chains(mut self, chains: Vec<Chain>) -> Self {
        self.chains = Self::new(Vec::new(), chains).chains;
        self
    }

    /// Active brand by id.
    pub fn brand(&self, id: BrandId) -> Option<&Brand> {
        self.brands.get(&id)
    }

    /// Active chain by id.
    pub fn chain(&self, id: ChainId) -> Option<&Chain> {
        self.chains.get(&id)
    }

    /// Chain ids owned by the indexed brands, ascending.
    pub fn brand_chain_ids(&self) -> BTreeSet<ChainId> {
        self.brands.values().map(|brand| brand.chain_id).collect()
    }

    /// Every chain a hotel reaches: its own chain, then each indexed brand's
    /// chain in reference order. Distinct, first occurrence kept.
    pub fn chain_ids_for(&self, hotel: &Hotel) -> Vec<ChainId> {
        let mut reached = Vec::new();
        let brand_chains = hotel
            .brands
            .as_slice()
            .iter()
            .filter_map(|id| self.brand(*id))
            .map(|brand| brand.chain_id);
        for chain_id in hotel.chain_id.into_iter().chain(brand_chains) {
            if !reached.contains(&chain_id) {
                reached.push(chain_id);
            }
        }
        reached
    }

    /// Chain label for a hotel: its own chain first, then the chain of the
    /// first labelled brand.
    pub fn chain_label(&self, hotel: &Hotel) -> Option<String> {
        self.chain_ids_for(hotel)
            .into_iter()
            .filter_map(|id| self.chain(id))
            .find_map(Chain::label)
            .map(str::to_owned)
    }

    /// Display label for a hotel: the primary brand's name, else the chain
    /// label, else the keyword fallback.
    pub fn display_label(&self, hotel: &Hotel) -> Option<String> {
        hotel
            .brands
            .primary()
            .and_then(|id| self.brand(id))
            .and_then(Brand::label)
            .map(str::to_owned)
            .or_else(|| self.chain_label(hotel))
            .or_else(|| keyword_brand_label(hotel).map(str::to_owned))
    }

    /// Brand labels for a hotel: the display label first, then the labels
    /// of the secondary brands that resolve. Duplicates are dropped.
    pub fn brand_labels(&self, hotel: &Hotel) -> Vec<String> {
        let mut labels: Vec<String> = self.display_label(hotel).into_iter().collect();
        let secondary = hotel
            .brands
            .as_slice()
            .iter()
            .skip(1)
            .filter_map(|id| self.brand(*id))
            .filter_map(Brand::label);
        for label in secondary {
            if !labels.iter().any(|existing| existing == label) {
                labels.push(label.to_owned());
            }
        }
        labels
    }
}
