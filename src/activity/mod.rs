//! Append-only workspace activity log.
//!
//! Every notable mutation appends one immutable event. Events are read back
//! newest first through instant-based cursor pagination, with actor
//! identities hydrated in a single batched directory lookup per page.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Writer and reader services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
