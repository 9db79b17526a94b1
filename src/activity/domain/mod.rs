//! Domain model for activity events and pagination.

mod cursor;
mod error;
mod event;
mod ids;
mod kind;

pub use cursor::{ActivityCursor, PageLimit};
pub use error::ActivityDomainError;
pub use event::{ActivityEvent, ActivityMeta, NewActivity, PersistedActivityData};
pub use ids::ActivityId;
pub use kind::{ActivityEntity, ActivityType};
