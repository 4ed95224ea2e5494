//! Driven port for feature slots and the promotion pool.

use async_trait::async_trait;

use crate::domain::{FeatureSlot, SabreId, Surface};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading placements.
    pub enum PlacementRepositoryError: "placement read";
}

/// Port for reading scheduled placements.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlacementRepository: Send + Sync {
    /// Every slot scheduled on `surface`, active or not, ordered by ascending
    /// `slot_key`.
    async fn feature_slots(
        &self,
        surface: &Surface,
    ) -> Result<Vec<FeatureSlot>, PlacementRepositoryError>;

    /// Every hotel id in the general promotion pool, in stored order.
    async fn promotion_pool(&self) -> Result<Vec<SabreId>, PlacementRepositoryError>;
}

/// Fixture implementation with no slots and an empty pool.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePlacementRepository;

#[async_trait]
impl PlacementRepository for FixturePlacementRepository {
    async fn feature_slots(
        &self,
        _surface: &Surface,
    ) -> Result<Vec<FeatureSlot>, PlacementRepositoryError> {
        Ok(Vec::new())
    }

    async fn promotion_pool(&self) -> Result<Vec<SabreId>, PlacementRepositoryError> {
        Ok(Vec::new())
    }
}
