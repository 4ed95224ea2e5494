//! Destination slug resolution.
//!
//! A destination slug may name a city, a country, or an area grouping
//! several cities, and older regions only carry localized names. The
//! resolver tries an explicit, ordered list of strategies against the
//! active regions and stops at the first match. A region lacking the
//! column a strategy reads is never matched by that strategy.

use serde::Serialize;

use super::catalogue::{Region, RegionKind, non_blank};
use super::filter::HotelListFilter;
use super::slug::{normalize_slug, slugify_name};

/// What a resolved destination refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationKind {
    City,
    Country,
    Area,
}

/// A canonical destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub kind: DestinationKind,
    /// City code, country code, or area slug depending on `kind`.
    pub code: String,
    pub label: Option<String>,
    /// City codes covered by the destination. Empty for countries, which
    /// filter on the country code instead.
    pub city_codes: Vec<String>,
    pub strategy: ResolutionStrategy,
}

impl Destination {
    /// Listing filter selecting the destination's hotels.
    pub fn listing_filter(&self) -> HotelListFilter {
        match self.kind {
            DestinationKind::Country => HotelListFilter::for_country(self.code.clone()),
            DestinationKind::City | DestinationKind::Area => {
                HotelListFilter::for_cities(self.city_codes.iter().cloned())
            }
        }
    }
}

/// One way of matching a slug against region rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStrategy {
    ByCitySlug,
    ByCountrySlug,
    ByAreaSlug,
    ByLocalizedName,
}

impl ResolutionStrategy {
    /// Strategies in the order they are attempted.
    pub const ORDER: [Self; 4] = [
        Self::ByCitySlug,
        Self::ByCountrySlug,
        Self::ByAreaSlug,
        Self::ByLocalizedName,
    ];

    /// Apply this strategy to an already normalised slug.
    pub fn resolve(self, slug: &str, regions: &[Region]) -> Option<Destination> {
        let active: Vec<&Region> = regions
            .iter()
            .filter(|region| region.status.is_active())
            .collect();
        match self {
            Self::ByCitySlug => active
                .iter()
                .find(|region| {
                    region.kind == RegionKind::City && column_matches(&region.city_slug, slug)
                })
                .map(|region| city_destination(region, self)),
            Self::ByCountrySlug => active
                .iter()
                .find(|region| column_matches(&region.country_slug, slug))
                .and_then(|region| country_destination(region, self)),
            Self::ByAreaSlug => area_destination(&active, slug),
            Self::ByLocalizedName => {
                let city = active.iter().find(|region| {
                    region.kind == RegionKind::City
                        && (name_matches(&region.city_label, slug)
                            || name_matches(&region.city_label_en, slug))
                });
                if let Some(region) = city {
                    return Some(city_destination(region, self));
                }
                active
                    .iter()
                    .find(|region| {
                        name_matches(&region.country_label, slug)
                            || name_matches(&region.country_label_en, slug)
                    })
                    .and_then(|region| country_destination(region, self))
            }
        }
    }
}

/// Resolve `slug` by trying every strategy in [`ResolutionStrategy::ORDER`].
///
/// # Examples
/// ```
/// use backend::domain::{DestinationKind, Region, RegionKind, resolve_destination};
///
/// let mut tokyo = Region::new("TYO", RegionKind::City);
/// tokyo.city_slug = Some("tokyo".into());
///
/// let destination = resolve_destination("Tokyo", &[tokyo]).expect("resolves");
/// assert_eq!(destination.kind, DestinationKind::City);
/// assert_eq!(destination.code, "TYO");
/// ```
pub fn resolve_destination(slug: &str, regions: &[Region]) -> Option<Destination> {
    let slug = normalize_slug(slug)?;
    ResolutionStrategy::ORDER
        .into_iter()
        .find_map(|strategy| strategy.resolve(&slug, regions))
}

fn column_matches(column: &Option<String>, slug: &str) -> bool {
    non_blank(column.as_deref()).is_some_and(|value| value.to_lowercase() == slug)
}

/// Names match in slug form on both sides, so `new-york` and `New York`
/// reach a region labelled "New York".
fn name_matches(column: &Option<String>, slug: &str) -> bool {
    non_blank(column.as_deref()).is_some_and(|value| slugify_name(value) == slugify_name(slug))
}

fn city_destination(region: &Region, strategy: ResolutionStrategy) -> Destination {
    Destination {
        kind: DestinationKind::City,
        code: region.city_code.clone(),
        label: label_of(&region.city_label, &region.city_label_en),
        city_codes: vec![region.city_code.clone()],
        strategy,
    }
}

fn country_destination(region: &Region, strategy: ResolutionStrategy) -> Option<Destination> {
    let code = non_blank(region.country_code.as_deref())?;
    Some(Destination {
        kind: DestinationKind::Country,
        code: code.to_owned(),
        label: label_of(&region.country_label, &region.country_label_en),
        city_codes: Vec::new(),
        strategy,
    })
}

fn area_destination(active: &[&Region], slug: &str) -> Option<Destination> {
    let members: Vec<&Region> = active
        .iter()
        .copied()
        .filter(|region| column_matches(&region.area_slug, slug))
        .collect();
    let first = members.first()?;
    let city_codes = members
        .iter()
        .filter(|region| region.kind == RegionKind::City)
        .map(|region| region.city_code.clone())
        .collect();
    Some(Destination {
        kind: DestinationKind::Area,
        code: slug.to_owned(),
        label: non_blank(first.area_label.as_deref()).map(str::to_owned),
        city_codes,
        strategy: ResolutionStrategy::ByAreaSlug,
    })
}

fn label_of(local: &Option<String>, english: &Option<String>) -> Option<String> {
    non_blank(local.as_deref())
        .or_else(|| non_blank(english.as_deref()))
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::catalogue::EntityStatus;

    fn city(code: &str, country: &str) -> Region {
        let mut region = Region::new(code, RegionKind::City);
        region.country_code = Some(country.to_owned());
        region
    }

    #[fixture]
    fn regions() -> Vec<Region> {
        let mut tokyo = city("TYO", "JP");
        tokyo.city_slug = Some("tokyo".into());
        tokyo.city_label = Some("도쿄".into());
        tokyo.area_slug = Some("kanto".into());
        tokyo.area_label = Some("간토".into());

        let mut yokohama = city("YOK", "JP");
        yokohama.area_slug = Some("kanto".into());
        yokohama.city_label_en = Some("Yokohama".into());

        let mut japan = Region::new("JP", RegionKind::Country);
        japan.country_code = Some("JP".into());
        japan.country_slug = Some("japan".into());
        japan.country_label = Some("일본".into());

        let mut closed = city("OSA", "JP");
        closed.city_slug = Some("osaka".into());
        closed.status = EntityStatus::Inactive;

        vec![tokyo, yokohama, japan, closed]
    }

    #[rstest]
    #[case("tokyo", DestinationKind::City, "TYO", ResolutionStrategy::ByCitySlug)]
    #[case("JAPAN", DestinationKind::Country, "JP", ResolutionStrategy::ByCountrySlug)]
    #[case("kanto", DestinationKind::Area, "kanto", ResolutionStrategy::ByAreaSlug)]
    #[case("yokohama", DestinationKind::City, "YOK", ResolutionStrategy::ByLocalizedName)]
    #[case("일본", DestinationKind::Country, "JP", ResolutionStrategy::ByLocalizedName)]
    fn strategies_are_tried_in_order(
        regions: Vec<Region>,
        #[case] slug: &str,
        #[case] kind: DestinationKind,
        #[case] code: &str,
        #[case] strategy: ResolutionStrategy,
    ) {
        let destination = resolve_destination(slug, &regions).expect("slug resolves");
        assert_eq!(destination.kind, kind);
        assert_eq!(destination.code, code);
        assert_eq!(destination.strategy, strategy);
    }

    #[rstest]
    fn area_collects_every_member_city(regions: Vec<Region>) {
        let destination = resolve_destination("kanto", &regions).expect("area resolves");
        assert_eq!(destination.city_codes, vec!["TYO", "YOK"]);
        assert_eq!(destination.label.as_deref(), Some("간토"));
        assert_eq!(
            destination.listing_filter(),
            HotelListFilter::for_cities(["TYO".to_owned(), "YOK".to_owned()])
        );
    }

    #[rstest]
    fn country_destination_filters_by_country(regions: Vec<Region>) {
        let destination = resolve_destination("japan", &regions).expect("country resolves");
        assert_eq!(destination.listing_filter(), HotelListFilter::for_country("JP"));
    }

    #[rstest]
    #[case("osaka")]
    #[case("atlantis")]
    #[case("  ")]
    fn inactive_or_unknown_slugs_do_not_resolve(regions: Vec<Region>, #[case] slug: &str) {
        assert!(resolve_destination(slug, &regions).is_none());
    }

    #[rstest]
    #[case("new-york")]
    #[case("New York")]
    #[case("new  york")]
    fn multi_word_names_match_their_hyphenated_slug(#[case] slug: &str) {
        let mut new_york = Region::new("NYC", RegionKind::City);
        new_york.city_label_en = Some("New York".into());

        let destination = resolve_destination(slug, &[new_york]).expect("resolves by name");

        assert_eq!(destination.code, "NYC");
        assert_eq!(destination.strategy, ResolutionStrategy::ByLocalizedName);
    }

    #[rstest]
    fn regions_missing_slug_columns_fall_through_to_names() {
        let mut seoul = Region::new("SEL", RegionKind::City);
        seoul.city_label_en = Some("Seoul".into());
        let destination = resolve_destination("seoul", &[seoul]).expect("resolves by name");
        assert_eq!(destination.strategy, ResolutionStrategy::ByLocalizedName);
        assert_eq!(destination.label.as_deref(), Some("Seoul"));
    }
}
