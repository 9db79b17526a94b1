//! Domain model for workspace and user identity.

mod error;
mod ids;
mod profile;

pub use error::IdentityParseError;
pub use ids::{UserId, WorkspaceId};
pub use profile::UserProfile;
