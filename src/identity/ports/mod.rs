//! Port contracts for identity resolution.

pub mod directory;

pub use directory::{DirectoryError, DirectoryResult, UserDirectory};
