//! Unit tests for the activity log.

mod domain_tests;
