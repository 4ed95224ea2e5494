//! Segment-aware visibility rules for hotel reads.
//!
//! Every hotel read is scoped by a [`VisibilityPolicy`]. The policy always
//! hides hotels whose `publish` flag is explicitly `false`; for the single
//! restricted partner segment it additionally requires `vcc = true`. The
//! policy is resolved once per request from the caller's company code and
//! then passed by value into every repository call so hotel lists and facet
//! counts can never disagree.

use std::fmt;

use super::catalogue::Hotel;

/// Partner code that switches on the restricted segment by default.
pub const DEFAULT_RESTRICTED_COMPANY_CODE: &str = "sk";

/// Normalised caller segment token.
///
/// # Examples
/// ```
/// use backend::domain::CompanyCode;
///
/// assert_eq!(CompanyCode::parse(Some(" SK ")).map(|c| c.to_string()), Some("sk".into()));
/// assert!(CompanyCode::parse(Some("  ")).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompanyCode(String);

impl CompanyCode {
    /// Trim and lowercase the raw token. Blank input yields `None`.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let trimmed = raw?.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_lowercase()))
    }

    /// The code as received.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CompanyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Query-level predicate applied to every hotel read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityPolicy {
    vcc_only: bool,
}

impl VisibilityPolicy {
    /// Standing rule only: hide explicitly unpublished hotels.
    pub const fn standard() -> Self {
        Self { vcc_only: false }
    }

    /// Standing rule plus `vcc = true`.
    pub const fn restricted() -> Self {
        Self { vcc_only: true }
    }

    /// Whether adapters must add the `vcc = true` constraint.
    pub const fn requires_vcc(self) -> bool {
        self.vcc_only
    }

    /// In-memory form of the predicate, used to re-check adapter output.
    pub fn admits(self, hotel: &Hotel) -> bool {
        hotel.publish.is_visible() && (!self.vcc_only || hotel.vcc)
    }
}

/// Decides which callers belong to the restricted segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentPolicy {
    restricted_code: CompanyCode,
}

impl SegmentPolicy {
    /// Build a policy for the given partner code. A blank code falls back to
    /// [`DEFAULT_RESTRICTED_COMPANY_CODE`].
    pub fn new(restricted_code: &str) -> Self {
        let restricted_code = CompanyCode::parse(Some(restricted_code))
            .unwrap_or_else(|| CompanyCode(DEFAULT_RESTRICTED_COMPANY_CODE.to_owned()));
        Self { restricted_code }
    }

    /// True only for the designated partner code.
    pub fn is_restricted_segment(&self, company: Option<&CompanyCode>) -> bool {
        company.is_some_and(|code| *code == self.restricted_code)
    }

    /// Resolve the policy for one request.
    pub fn resolve(&self, company: Option<&CompanyCode>) -> VisibilityPolicy {
        if self.is_restricted_segment(company) {
            VisibilityPolicy::restricted()
        } else {
            VisibilityPolicy::standard()
        }
    }
}

impl Default for SegmentPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_RESTRICTED_COMPANY_CODE)
    }
}
