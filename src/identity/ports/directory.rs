//! Identity resolver port used for actor hydration.

use crate::identity::domain::{UserId, UserProfile};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for directory lookups.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Batched user lookup contract.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Resolves display profiles for a set of user identifiers.
    ///
    /// Identifiers with no matching user are omitted from the result; the
    /// order of the returned profiles is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::StoreUnavailable`] when the lookup fails.
    async fn find_many(&self, ids: &[UserId]) -> DirectoryResult<Vec<UserProfile>>;
}

/// Errors returned by user directory implementations.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// Persistence-layer failure.
    #[error("user directory unavailable: {0}")]
    StoreUnavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryError {
    /// Wraps a persistence error.
    pub fn store_unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::StoreUnavailable(Arc::new(err))
    }
}
