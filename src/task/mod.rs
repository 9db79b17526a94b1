//! Workspace-scoped tasks bucketed by calendar day.
//!
//! Tasks are created, partially updated and deleted within one workspace and
//! listed per calendar day in the caller's timezone. A task's day comes from
//! its due date, or from its creation instant when it has none. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
