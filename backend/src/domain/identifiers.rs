//! Lenient parsing for multi-value identifier columns.
//!
//! Legacy catalogue rows store brand references as free text: a single id,
//! a comma-delimited list (`"71,72"`), or a JSON array literal (`"[71,72]"`).
//! Parsing never fails; tokens that are not non-negative integers are
//! dropped.

use std::collections::BTreeSet;

use serde_json::Value;

/// Parse a raw identifier field into its set of integer ids.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
///
/// use backend::domain::parse_multi_id;
///
/// assert_eq!(parse_multi_id(Some("[71, 72]")), BTreeSet::from([71, 72]));
/// assert_eq!(parse_multi_id(Some("71,72,73")), BTreeSet::from([71, 72, 73]));
/// assert!(parse_multi_id(Some("abc")).is_empty());
/// assert!(parse_multi_id(None).is_empty());
/// ```
pub fn parse_multi_id(raw: Option<&str>) -> BTreeSet<i64> {
    parse_multi_id_ordered(raw).into_iter().collect()
}

/// Parse a raw identifier field, keeping the distinct ids in first-seen order.
pub fn parse_multi_id_ordered(raw: Option<&str>) -> Vec<i64> {
    let Some(trimmed) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Vec::new();
    };

    let ids = if trimmed.starts_with('[') {
        parse_json_array(trimmed).unwrap_or_else(|| split_delimited(trimmed))
    } else {
        split_delimited(trimmed)
    };

    let mut seen = BTreeSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

/// Report whether two identifier sets share at least one element.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
///
/// use backend::domain::has_intersection;
///
/// let brands = BTreeSet::from([5, 7]);
/// assert!(has_intersection(&brands, &BTreeSet::from([7, 9])));
/// assert!(!has_intersection(&brands, &BTreeSet::from([9])));
/// ```
pub fn has_intersection<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> bool {
    !a.is_disjoint(b)
}

fn parse_json_array(raw: &str) -> Option<Vec<i64>> {
    let values: Vec<Value> = serde_json::from_str(raw).ok()?;
    Some(values.iter().filter_map(json_value_to_id).collect())
}

fn json_value_to_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().filter(|id| *id >= 0),
        Value::String(text) => parse_token(text),
        _ => None,
    }
}

fn split_delimited(raw: &str) -> Vec<i64> {
    raw.split([',', ';', '|'])
        .filter_map(|token| parse_token(token.trim_matches(|ch: char| ch == '[' || ch == ']')))
        .collect()
}

fn parse_token(token: &str) -> Option<i64> {
    let token = token.trim().trim_matches('"').trim();
    if token.is_empty() || !token.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

#[cfg(test)]
mod tests {
    //! Unit tests for identifier parsing.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::single("71", &[71])]
    #[case::delimited("71,72,73", &[71, 72, 73])]
    #[case::json("[1, 2, 3]", &[1, 2, 3])]
    #[case::json_strings(r#"["4","5"]"#, &[4, 5])]
    #[case::padded(" 8 , 9 ", &[8, 9])]
    #[case::broken_json("[71,72", &[71, 72])]
    #[case::mixed_tokens("71,abc,,72", &[71, 72])]
    #[case::negative("-3,4", &[4])]
    fn parses_supported_encodings(#[case] raw: &str, #[case] expected: &[i64]) {
        let parsed = parse_multi_id(Some(raw));
        assert_eq!(parsed, expected.iter().copied().collect::<BTreeSet<_>>());
    }

    #[rstest]
    #[case::empty(Some(""))]
    #[case::blank(Some("   "))]
    #[case::word(Some("abc"))]
    #[case::null(None)]
    #[case::json_objects(Some(r#"[{"id": 1}]"#))]
    fn yields_empty_set_for_unusable_input(#[case] raw: Option<&str>) {
        assert!(parse_multi_id(raw).is_empty());
    }

    #[rstest]
    fn ordered_variant_keeps_first_occurrence() {
        assert_eq!(parse_multi_id_ordered(Some("9,3,9,1,3")), vec![9, 3, 1]);
    }

    #[rstest]
    fn overflowing_tokens_are_dropped() {
        assert_eq!(
            parse_multi_id(Some("99999999999999999999999,5")),
            BTreeSet::from([5])
        );
    }

    #[rstest]
    fn intersection_detects_shared_members() {
        let left = BTreeSet::from([1, 2, 3]);
        assert!(has_intersection(&left, &BTreeSet::from([3, 4])));
        assert!(!has_intersection(&left, &BTreeSet::from([4, 5])));
        assert!(!has_intersection(&left, &BTreeSet::new()));
    }
}
