//! Step definitions for due-date bucketing scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
