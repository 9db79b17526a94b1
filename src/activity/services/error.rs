//! Service-level errors for the activity log.

use crate::activity::{domain::ActivityDomainError, ports::ActivityRepositoryError};
use crate::error::{ClassifiedError, FailureKind};
use crate::identity::ports::DirectoryError;
use thiserror::Error;

/// Service-level errors for activity operations.
#[derive(Debug, Error)]
pub enum ActivityLogError {
    /// Caller input (cursor) was malformed.
    #[error(transparent)]
    Domain(#[from] ActivityDomainError),
    /// Activity storage failed.
    #[error(transparent)]
    Repository(#[from] ActivityRepositoryError),
    /// Actor hydration lookup failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

/// Result type for activity service operations.
pub type ActivityLogResult<T> = Result<T, ActivityLogError>;

impl ClassifiedError for ActivityLogError {
    fn failure_kind(&self) -> FailureKind {
        match self {
            Self::Domain(_) => FailureKind::InvalidInput,
            Self::Repository(_) | Self::Directory(_) => FailureKind::Internal,
        }
    }
}
