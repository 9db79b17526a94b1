//! Activity log writer and reader services.

mod error;
mod reader;
mod writer;

pub use error::{ActivityLogError, ActivityLogResult};
pub use reader::{ActivityItem, ActivityPage, ActivityReader, ActorSummary};
pub use writer::ActivityWriter;
