//! # fleetwise-impact
//!
//! Impact Propagation Engine: given a proposed operational change and a
//! fleet snapshot, computes the upstream causes, downstream consequences
//! and lateral side effects, links them into a dependency forest and rolls
//! them up into financial, ESG and operational summaries.
//!
//! ## Key Types
//!
//! - [`ImpactEngine`] — pure, synchronous analysis entry point
//! - [`ProposedChange`] / [`ChangeType`] — the change under evaluation
//! - [`FleetState`] — read-only snapshot of vessels, projects, crew,
//!   supply chain, compliance and financials
//! - [`ImpactItem`] — one typed consequence with severity, delta and
//!   dependencies
//! - [`ImpactChainNode`] — dependency tree over the emitted impacts
//! - [`ImpactAnalysisResult`] — the full report
//!
//! ## Invariants
//!
//! - Generators emit only when their trigger holds; no placeholder records.
//! - An impact only depends on impacts emitted before it, so the chain is
//!   always acyclic. Hand-built impact lists are validated and rejected on
//!   dangling ids, duplicates or cycles.
//! - Lateral impacts reach at most `lateral_fan_out` vessels.
//! - Identical inputs produce identical results, analysis id included.

#![deny(unsafe_code)]

pub mod chain;
pub mod change;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod fleet;
pub mod generators;
pub mod impact;
pub mod recommend;
pub mod summary;

pub use chain::{build_chain, ImpactChainNode};
pub use change::{ChangeType, ImpactRequest, ProposedChange};
pub use config::ImpactConfig;
pub use dispatch::{dispatch_table, DispatchPlan};
pub use engine::{ImpactAnalysisResult, ImpactEngine};
pub use error::{ImpactError, ImpactResult};
pub use fleet::{
    fuel_properties, Certificate, CompliancePosture, CrewMember, CrewStatus, FleetState,
    Financials, FuelContract, FuelProperties, MaintenanceItem, Port, Project, ProjectStatus,
    SparePart, SupplyChain, Vessel, VesselStatus,
};
pub use generators::{Generator, GeneratorContext, ImpactCollector};
pub use impact::{
    AffectedEntities, Direction, ImpactCategory, ImpactItem, QuantDelta, Severity, Timeframe,
};
pub use recommend::{AlternativeScenario, Recommendation, RecommendationPriority};
pub use summary::{
    overall_confidence, overall_risk, DirectionCounts, EsgSummary, FinancialSummary,
    ImpactSummary, OperationalSummary, RiskLevel, SeverityCounts,
};
