//! Cross-crate property and scenario tests for Fleetwise.
//!
//! The tests live under `tests/`: `property_tests.rs` for proptest
//! properties and `e2e_tests.rs` for end-to-end scenarios.
