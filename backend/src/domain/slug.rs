//! Shared slug predicates for catalogue identifiers.
//!
//! Slugs are trimmed, non-empty identifiers composed of lowercase ASCII
//! letters, digits, and hyphens. Inbound slugs are normalised before
//! comparison so `/destinations/Tokyo` and `/destinations/tokyo` resolve to
//! the same region.

/// Return `true` when `value` is a valid slug.
pub(crate) fn is_valid_slug(value: &str) -> bool {
    is_trimmed_non_empty(value) && has_allowed_slug_chars(value)
}

/// Trim and lowercase a caller-supplied slug; `None` when nothing remains.
///
/// Non-ASCII characters are kept so localized names can still be matched.
pub(crate) fn normalize_slug(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Slug form of a display name: lowercased, whitespace runs joined by a
/// single hyphen. `"Ho Chi Minh"` becomes `"ho-chi-minh"`.
pub(crate) fn slugify_name(value: &str) -> String {
    value
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

fn is_trimmed_non_empty(value: &str) -> bool {
    !value.is_empty() && value.trim() == value
}

fn has_allowed_slug_chars(value: &str) -> bool {
    value
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}
