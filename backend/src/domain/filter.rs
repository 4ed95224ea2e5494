//! Listing filters narrowing the hotel list (never the facets).

use std::collections::BTreeSet;

use super::brand_index::BrandIndex;
use super::catalogue::{BrandId, ChainId, Hotel};
use super::identifiers::{has_intersection, parse_multi_id};

/// Caller-supplied listing filter.
///
/// Brand and chain targets arrive as raw multi-value strings and are parsed
/// leniently; an unparsable target is treated as "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotelListFilter {
    pub country_code: Option<String>,
    pub city_codes: BTreeSet<String>,
    pub brand_ids: BTreeSet<BrandId>,
    pub chain_ids: BTreeSet<ChainId>,
}

impl HotelListFilter {
    /// Build a filter from raw query parameters.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::HotelListFilter;
    ///
    /// let filter = HotelListFilter::from_raw(Some("JP"), Some("TYO"), Some("[5,7]"), None);
    /// assert_eq!(filter.country_code.as_deref(), Some("JP"));
    /// assert!(filter.brand_ids.contains(&7));
    /// assert!(filter.chain_ids.is_empty());
    /// ```
    pub fn from_raw(
        country: Option<&str>,
        city: Option<&str>,
        brands: Option<&str>,
        chains: Option<&str>,
    ) -> Self {
        Self {
            country_code: non_blank_owned(country),
            city_codes: non_blank_owned(city).into_iter().collect(),
            brand_ids: parse_multi_id(brands),
            chain_ids: parse_multi_id(chains),
        }
    }

    /// Filter for an explicit set of city codes.
    pub fn for_cities(city_codes: impl IntoIterator<Item = String>) -> Self {
        Self {
            city_codes: city_codes.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Filter for a single country.
    pub fn for_country(country_code: impl Into<String>) -> Self {
        Self {
            country_code: Some(country_code.into()),
            ..Self::default()
        }
    }

    /// True when the filter constrains nothing.
    pub fn is_empty(&self) -> bool {
        self.country_code.is_none()
            && self.city_codes.is_empty()
            && self.brand_ids.is_empty()
            && self.chain_ids.is_empty()
    }

    /// Whether `hotel` passes every populated constraint.
    ///
    /// Brand matching uses every referenced brand id; chain matching uses
    /// every chain the hotel reaches through `index`.
    pub fn matches(&self, hotel: &Hotel, index: &BrandIndex) -> bool {
        if self
            .country_code
            .as_ref()
            .is_some_and(|country| hotel.country_code.as_ref() != Some(country))
        {
            return false;
        }
        if !self.city_codes.is_empty()
            && !hotel
                .city_code
                .as_ref()
                .is_some_and(|city| self.city_codes.contains(city))
        {
            return false;
        }
        if !self.brand_ids.is_empty() && !has_intersection(&hotel.brands.to_set(), &self.brand_ids)
        {
            return false;
        }
        if !self.chain_ids.is_empty() {
            let reached: BTreeSet<ChainId> = index.chain_ids_for(hotel).into_iter().collect();
            if !has_intersection(&reached, &self.chain_ids) {
                return false;
            }
        }
        true
    }
}

fn non_blank_owned(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::catalogue::{Brand, BrandRefs, EntityStatus};

    #[fixture]
    fn hotel() -> Hotel {
        let mut hotel = Hotel::new(101);
        hotel.country_code = Some("JP".into());
        hotel.city_code = Some("TYO".into());
        hotel.brands = BrandRefs::new([5, 7]);
        hotel
    }

    #[fixture]
    fn index() -> BrandIndex {
        let brand = |brand_id, chain_id| Brand {
            brand_id,
            chain_id,
            name_en: Some(format!("Brand {brand_id}")),
            name_local: None,
            status: EntityStatus::Active,
            sort_order: None,
        };
        BrandIndex::new(vec![brand(5, 50), brand(7, 70)], Vec::new())
    }

    #[rstest]
    fn empty_filter_matches_everything(hotel: Hotel, index: BrandIndex) {
        let filter = HotelListFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&hotel, &index));
    }

    #[rstest]
    #[case::secondary_brand(None, None, Some("7"), None, true)]
    #[case::unrelated_brand(None, None, Some("9"), None, false)]
    #[case::brand_chain(None, None, None, Some("70"), true)]
    #[case::unrelated_chain(None, None, None, Some("99"), false)]
    #[case::country(Some("JP"), None, None, None, true)]
    #[case::other_country(Some("KR"), None, None, None, false)]
    #[case::city(None, Some("TYO"), None, None, true)]
    #[case::other_city(Some("JP"), Some("OSA"), None, None, false)]
    #[case::garbage_brands(None, None, Some("n/a"), None, true)]
    fn matches_populated_constraints(
        hotel: Hotel,
        index: BrandIndex,
        #[case] country: Option<&str>,
        #[case] city: Option<&str>,
        #[case] brands: Option<&str>,
        #[case] chains: Option<&str>,
        #[case] expected: bool,
    ) {
        let filter = HotelListFilter::from_raw(country, city, brands, chains);
        assert_eq!(filter.matches(&hotel, &index), expected);
    }

    #[rstest]
    fn hotel_without_city_fails_city_filter(index: BrandIndex) {
        let filter = HotelListFilter::for_cities(["TYO".to_owned()]);
        assert!(!filter.matches(&Hotel::new(1), &index));
    }
}
