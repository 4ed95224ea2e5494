//! Driven port for region reads.

use async_trait::async_trait;

use crate::domain::{Region, RegionKind};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading regions.
    pub enum RegionRepositoryError: "region read";
}

/// Port for reading region rows of one kind.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegionRepository: Send + Sync {
    /// Regions of `kind`, every status, ordered by the kind's sort order
    /// with unsorted rows last.
    async fn regions(&self, kind: RegionKind) -> Result<Vec<Region>, RegionRepositoryError>;
}

/// Fixture implementation with no regions.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRegionRepository;

#[async_trait]
impl RegionRepository for FixtureRegionRepository {
    async fn regions(&self, _kind: RegionKind) -> Result<Vec<Region>, RegionRepositoryError> {
        Ok(Vec::new())
    }
}
