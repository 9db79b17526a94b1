//! Tenancy and identity primitives shared by the task and activity contexts.
//!
//! Workspaces are the isolation boundary for every operation in the crate.
//! Users are referenced by identifier only; display attributes are resolved
//! on demand through the [`ports::UserDirectory`] port.

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
