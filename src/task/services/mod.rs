//! Application services for workspace-scoped task operations.

mod error;
mod requests;
mod service;

pub use error::{TaskServiceError, TaskServiceResult};
pub use requests::{CreateTaskRequest, DueDatePatch, TaskPatch};
pub use service::TaskService;
