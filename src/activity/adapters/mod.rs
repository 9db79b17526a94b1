//! Adapter implementations for activity ports.

pub mod memory;
pub mod postgres;
