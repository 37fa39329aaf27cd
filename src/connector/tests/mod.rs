//! Unit tests for the connector registry.

mod domain_tests;
