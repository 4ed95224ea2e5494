//! Driven port for hotel reads.
//!
//! Every call carries an explicit [`VisibilityPolicy`] so adapters apply the
//! same `publish`/`vcc` predicate to listings, facet counts and placement
//! pools.

use async_trait::async_trait;

use crate::domain::{Hotel, SabreId, VisibilityPolicy};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading hotels.
    pub enum HotelRepositoryError: "hotel read";
}

/// Hotel read request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelQuery {
    pub policy: VisibilityPolicy,
    /// Restrict to these ids. `None` reads every visible hotel.
    pub ids: Option<Vec<SabreId>>,
}

impl HotelQuery {
    /// Every hotel the policy admits.
    pub fn all(policy: VisibilityPolicy) -> Self {
        Self { policy, ids: None }
    }

    /// Only the given hotels, still under the policy.
    pub fn for_ids(policy: VisibilityPolicy, ids: Vec<SabreId>) -> Self {
        Self {
            policy,
            ids: Some(ids),
        }
    }
}

/// Port for reading hotel rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// Return the hotels admitted by `query.policy`, ordered by `sabre_id`.
    ///
    /// An empty `ids` list yields an empty result without touching the
    /// store.
    async fn hotels(&self, query: HotelQuery) -> Result<Vec<Hotel>, HotelRepositoryError>;
}

/// Fixture implementation with an empty catalogue.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureHotelRepository;

#[async_trait]
impl HotelRepository for FixtureHotelRepository {
    async fn hotels(&self, _query: HotelQuery) -> Result<Vec<Hotel>, HotelRepositoryError> {
        Ok(Vec::new())
    }
}
