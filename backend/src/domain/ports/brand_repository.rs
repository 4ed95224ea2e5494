//! Driven port for brand and chain reads.

use async_trait::async_trait;

use crate::domain::{Brand, BrandId, Chain, ChainId};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading brands or chains.
    pub enum BrandRepositoryError: "brand read";
}

/// Port for reading brand and chain rows by id.
///
/// Both methods return rows of every status; callers decide what an
/// inactive row means.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BrandRepository: Send + Sync {
    async fn brands(&self, ids: &[BrandId]) -> Result<Vec<Brand>, BrandRepositoryError>;

    async fn chains(&self, ids: &[ChainId]) -> Result<Vec<Chain>, BrandRepositoryError>;
}

/// Fixture implementation with no brands or chains.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureBrandRepository;

#[async_trait]
impl BrandRepository for FixtureBrandRepository {
    async fn brands(&self, _ids: &[BrandId]) -> Result<Vec<Brand>, BrandRepositoryError> {
        Ok(Vec::new())
    }

    async fn chains(&self, _ids: &[ChainId]) -> Result<Vec<Chain>, BrandRepositoryError> {
        Ok(Vec::new())
    }
}
