//! Driven port for media reads.

use async_trait::async_trait;

use crate::domain::{MediaAsset, MediaOwnerKey};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading media rows.
    pub enum MediaRepositoryError: "media read";
}

/// Port for reading media rows for a set of owning entities.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaRepository: Send + Sync {
    /// Return every media row owned by `owner_keys`.
    ///
    /// Adapters usually order rows by `image_seq`, but callers must not rely
    /// on it.
    async fn media(
        &self,
        owner_keys: &[MediaOwnerKey],
    ) -> Result<Vec<MediaAsset>, MediaRepositoryError>;
}

/// Fixture implementation without media.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureMediaRepository;

#[async_trait]
impl MediaRepository for FixtureMediaRepository {
    async fn media(
        &self,
        _owner_keys: &[MediaOwnerKey],
    ) -> Result<Vec<MediaAsset>, MediaRepositoryError> {
        Ok(Vec::new())
    }
}
