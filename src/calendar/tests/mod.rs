//! Unit tests for calendar arithmetic.
