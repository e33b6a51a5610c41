//! # fleetwise-profiles
//!
//! Reference Profile Store: static per-component-type specifications used
//! as the baseline for health inference.
//!
//! ## Key Types
//!
//! - [`ComponentProfile`] — wear curve, failure-mode catalog, maintenance tasks
//! - [`ProfileRegistry`] — immutable lookup by [`ComponentType`], built once
//!   and shared by reference
//! - [`FailureModeEstimate`] / [`MaintenanceDue`] — results of the pure lookups
//!
//! ## Invariants
//!
//! - Wear curves are ordered by age and never gain health with age.
//! - `wear_percentage` clamps outside the curve; it never extrapolates.
//! - Adjusted failure probabilities never exceed [`MAX_FAILURE_PROBABILITY`].

#![deny(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod registry;
pub mod types;

pub use catalog::builtin_profiles;
pub use error::{ProfileError, ProfileResult};
pub use registry::ProfileRegistry;
pub use types::{
    ComponentProfile, ComponentType, FailureMode, FailureModeEstimate, MaintenanceDue,
    MaintenanceTask, WearPoint, MAX_FAILURE_PROBABILITY, MOISTURE_AMPLIFIER, STRESS_RATIO,
    TEMPERATURE_AMPLIFIER,
};
