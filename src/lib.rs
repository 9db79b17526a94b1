//! Taskspace: multi-tenant task tracking core.
//!
//! This crate provides the timezone-correct core of a collaborative task
//! tracker: bucketing tasks into calendar days, normalizing due dates,
//! workspace-scoped task mutations, and an append-only activity log with
//! cursor pagination.
//!
//! # Architecture
//!
//! Taskspace follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`calendar`]: Day buckets and due-date normalization in IANA timezones
//! - [`task`]: Task queries and mutations scoped to a workspace
//! - [`activity`]: Append-only activity log writer and paginated reader
//! - [`identity`]: Workspace and user identities plus the user directory
//! - [`config`]: Environment-driven settings
//! - [`clock`]: Settable clock for deterministic replays and tests
//! - [`error`]: Failure classification shared by service errors
//! - [`storage`]: Connection pooling for the `PostgreSQL` adapters

pub mod activity;
pub mod calendar;
pub mod clock;
pub mod config;
pub mod error;
pub mod identity;
pub mod storage;
pub mod task;

#[cfg(test)]
mod test_support;
