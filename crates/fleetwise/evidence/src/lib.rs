//! # fleetwise-evidence
//!
//! Evidence Synthesizers: reproducible historical records (work orders,
//! inspections, oil analyses, fleet-wide patterns) for an asset+component.
//!
//! ## Key Types
//!
//! - [`EvidenceSource`] — the trait the health engine reads history through
//! - [`SyntheticEvidenceSource`] — deterministic generator seeded from a
//!   BLAKE3 hash of the identifiers
//! - [`DeterministicRng`] / [`Lcg`] — injectable seeded generator
//! - [`IssueCatalog`] / [`PatternCatalog`] — phrasing and pattern tables
//! - [`EvidenceBundle`] — all records for one asset+component
//!
//! Identical queries always produce identical record sets.

#![deny(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod rng;
pub mod source;
pub mod synth;
pub mod types;

pub use catalog::{oil_sampled, IssueCatalog, IssuePhrasings, PatternCatalog, PatternTemplate};
pub use error::{EvidenceError, EvidenceResult};
pub use rng::{seed_for, DeterministicRng, Lcg};
pub use source::{EmptyEvidenceSource, EvidenceSource};
pub use synth::{SyntheticEvidenceSource, PREVENTIVE_WEIGHT};
pub use types::{
    Condition, EvidenceBundle, EvidenceQuery, EvidenceRecord, FleetPattern, InspectionRecord,
    OilAnalysisRecord, OilParameter, ParameterStatus, RecordKind, Trend, WorkOrder, WorkOrderType,
};
