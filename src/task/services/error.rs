//! Service-level errors for task operations.

use crate::calendar::CalendarError;
use crate::error::{ClassifiedError, FailureKind};
use crate::task::{
    domain::{TaskDomainError, TaskId},
    ports::TaskRepositoryError,
};
use thiserror::Error;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Due-date or day input was malformed.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The task does not exist in the workspace.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

impl ClassifiedError for TaskServiceError {
    fn failure_kind(&self) -> FailureKind {
        match self {
            Self::Calendar(_) | Self::Domain(_) => FailureKind::InvalidInput,
            Self::NotFound(_) => FailureKind::NotFound,
            Self::Repository(_) => FailureKind::Internal,
        }
    }
}
