//! Shared cache-control policies for HTTP handlers.

/// Catalogue reads are identical for every caller in a segment and change
/// only when editors publish, so shared caches may hold them briefly.
pub const PUBLIC_SHORT_LIVED: &str = "public, max-age=60";

/// Restricted placements are sampled per request and must not be reused.
pub const PRIVATE_NO_STORE: &str = "private, no-store";

pub const fn public_short_lived_header() -> (&'static str, &'static str) {
    ("Cache-Control", PUBLIC_SHORT_LIVED)
}

pub const fn private_no_store_header() -> (&'static str, &'static str) {
    ("Cache-Control", PRIVATE_NO_STORE)
}
